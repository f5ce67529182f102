use models::Card;

use crate::CombatantId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Poison,
    Weakness,
    HolyShield,
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EffectKind::Poison => write!(f, "poison"),
            EffectKind::Weakness => write!(f, "weakness"),
            EffectKind::HolyShield => write!(f, "holy shield"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Poison { source: CombatantId, amount: u8 },
    Weakness { source: CombatantId },
    HolyShield { source: CombatantId },
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        match self {
            Effect::Poison { .. } => EffectKind::Poison,
            Effect::Weakness { .. } => EffectKind::Weakness,
            Effect::HolyShield { .. } => EffectKind::HolyShield,
        }
    }

    pub fn source(&self) -> CombatantId {
        match self {
            Effect::Poison { source, .. }
            | Effect::Weakness { source }
            | Effect::HolyShield { source } => *source,
        }
    }
}

/// An effect attached to its target. The card that created it is held here until the
/// effect is consumed, then goes back to the discard pile.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveEffect {
    pub effect: Effect,
    pub target: CombatantId,
    pub card: Option<Card>,
}

impl ActiveEffect {
    pub fn kind(&self) -> EffectKind {
        self.effect.kind()
    }
}
