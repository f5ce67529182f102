use models::{Card, CardId};

pub const CARD_SOURCE: &str = include_str!("../res/cards.txt");

lazy_static::lazy_static! {
    static ref CARD_DATABASE: Result<Vec<Card>, String> =
        parser::parse_cards(CARD_SOURCE).map_err(|error| format!("{error}"));
}

/// Every card of the built-in deck, in file order.
pub fn cards() -> anyhow::Result<&'static [Card]> {
    CARD_DATABASE
        .as_deref()
        .map_err(|error| anyhow::anyhow!("built-in card database is invalid: {error}"))
}

pub fn card_by_id(id: CardId) -> anyhow::Result<Card> {
    cards()?
        .iter()
        .find(|card| card.id == id)
        .cloned()
        .ok_or(anyhow::anyhow!("unknown card {id}"))
}

#[cfg(test)]
mod tests {
    use models::{CardId, CardKind, CardType, Element};

    use super::{card_by_id, cards};

    #[test]
    fn built_in_database_parses() {
        let cards = cards().expect("built-in database should parse");
        assert_eq!(cards.len(), 94);
        let count = |kind: CardKind| cards.iter().filter(|c| c.kind == kind).count();
        assert_eq!(count(CardKind::DarkExtinction), 4);
        assert_eq!(count(CardKind::HolyLight), 6);
        assert_eq!(count(CardKind::MagicBullet), 6);
        assert_eq!(
            cards.iter().filter(|c| c.card_type == CardType::Attack).count(),
            64
        );
    }

    #[test]
    fn lookup_by_id() {
        let card = card_by_id(CardId(37)).expect("card 37 exists");
        assert_eq!(card.element, Element::Fire);
        assert!(card_by_id(CardId(9999)).is_err());
    }
}
