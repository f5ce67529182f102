use std::collections::HashMap;

use heck::ToSnakeCase;

/// Behavior a card carries beyond its type and element, keyed off its name once at load time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CardKind {
    Plain,
    Poison,
    Weakness,
    HolyShield,
    MagicBullet,
    DarkExtinction,
    HolyLight,
}

lazy_static::lazy_static! {
    static ref KIND_BY_NAME: HashMap<&'static str, CardKind> = HashMap::from([
        ("poison", CardKind::Poison),
        ("weakness", CardKind::Weakness),
        ("holy_shield", CardKind::HolyShield),
        ("magic_bullet", CardKind::MagicBullet),
        ("dark_extinction", CardKind::DarkExtinction),
        ("holy_light", CardKind::HolyLight),
    ]);
}

impl CardKind {
    pub fn from_name(name: &str) -> CardKind {
        KIND_BY_NAME
            .get(name.to_snake_case().as_str())
            .copied()
            .unwrap_or(CardKind::Plain)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardKind::Plain => "plain",
            CardKind::Poison => "poison",
            CardKind::Weakness => "weakness",
            CardKind::HolyShield => "holy shield",
            CardKind::MagicBullet => "magic bullet",
            CardKind::DarkExtinction => "dark extinction",
            CardKind::HolyLight => "holy light",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::CardKind;

    #[rstest]
    #[case("poison", CardKind::Poison)]
    #[case("HolyShield", CardKind::HolyShield)]
    #[case("magic-bullet", CardKind::MagicBullet)]
    #[case("Dark Extinction", CardKind::DarkExtinction)]
    #[case("holy_light", CardKind::HolyLight)]
    #[case("fire_slash", CardKind::Plain)]
    fn name_vocabulary_maps_to_kind(#[case] name: &str, #[case] expected: CardKind) {
        assert_eq!(CardKind::from_name(name), expected);
    }
}
