use std::sync::Arc;

use models::{Card, CardId, CardKind, CardType, Element, UniqueSkill};
use regex::Regex;

lazy_static::lazy_static! {
    static ref CARD_LINE: Regex = Regex::new(r"^(\d+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)(?:\s+(\S+))?(?:\s+(\S+))?\s*$").unwrap();
}

/// Parses one `id type element property name [skill] [skill]` line.
pub fn parse_card_line(line: &str) -> anyhow::Result<Card> {
    let captures = CARD_LINE
        .captures(line.trim())
        .ok_or(anyhow::anyhow!("malformed card line {line:?}"))?;
    let field = |index: usize| captures.get(index).map(|m| m.as_str());

    let id = CardId::try_from(field(1).unwrap_or_default())?;
    let card_type = CardType::try_from(field(2).unwrap_or_default())?;
    let element = Element::try_from(field(3).unwrap_or_default())?;
    let property: Arc<str> = Arc::from(field(4).unwrap_or_default());
    let name = field(5).unwrap_or_default();
    let kind = CardKind::from_name(name);
    let skills: Arc<[UniqueSkill]> = [field(6), field(7)]
        .into_iter()
        .flatten()
        .map(UniqueSkill::from)
        .collect();

    match (kind, card_type) {
        (CardKind::DarkExtinction, CardType::Magic) => {
            anyhow::bail!("card {id} is named {name} but is not an attack card")
        }
        (
            CardKind::Poison
            | CardKind::Weakness
            | CardKind::HolyShield
            | CardKind::MagicBullet
            | CardKind::HolyLight,
            CardType::Attack,
        ) => anyhow::bail!("card {id} is named {name} but is not a magic card"),
        _ => {}
    }

    Ok(Card {
        id,
        card_type,
        element,
        property,
        name: Arc::from(name),
        kind,
        skills,
    })
}

/// Parses a whole card file; blank lines and `#` comments are skipped.
pub fn parse_cards(source: &str) -> anyhow::Result<Vec<Card>> {
    let mut cards: Vec<Card> = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let card = parse_card_line(line)
            .map_err(|error| anyhow::anyhow!("line {}: {error}", index + 1))?;
        if cards.iter().any(|c| c.id == card.id) {
            anyhow::bail!("line {}: duplicate card id {}", index + 1, card.id);
        }
        cards.push(card);
    }
    Ok(cards)
}
