use std::sync::Arc;

use super::{CardId, CardKind, CardType, Element, UniqueSkill};

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub card_type: CardType,
    pub element: Element,
    pub property: Arc<str>,
    pub name: Arc<str>,
    pub kind: CardKind,
    pub skills: Arc<[UniqueSkill]>,
}

impl Card {
    pub fn is_attack(&self) -> bool {
        self.card_type == CardType::Attack
    }

    pub fn is_magic(&self) -> bool {
        self.card_type == CardType::Magic
    }

    pub fn has_skill(&self, skill: &UniqueSkill) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({} {})",
            self.id, self.name, self.card_type, self.element
        )
    }
}
