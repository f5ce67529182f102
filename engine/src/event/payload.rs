use models::{Card, CardKind};

use crate::{Action, CombatantId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Attack,
    Counter,
    MagicBullet,
    Magic,
    DrawPenalty,
}

impl ActionKind {
    pub fn is_attack_or_counter(&self) -> bool {
        matches!(self, ActionKind::Attack | ActionKind::Counter)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Attack => write!(f, "attack"),
            ActionKind::Counter => write!(f, "counter"),
            ActionKind::MagicBullet => write!(f, "magic-bullet"),
            ActionKind::Magic => write!(f, "magic"),
            ActionKind::DrawPenalty => write!(f, "draw-penalty"),
        }
    }
}

/// How hit determination ended for one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttackOutcome {
    Hit,
    Forced,
    Shielded,
    Cancelled,
    Countered,
    Passed,
}

impl std::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttackOutcome::Hit => write!(f, "hit"),
            AttackOutcome::Forced => write!(f, "forced hit"),
            AttackOutcome::Shielded => write!(f, "shielded"),
            AttackOutcome::Cancelled => write!(f, "cancelled"),
            AttackOutcome::Countered => write!(f, "countered"),
            AttackOutcome::Passed => write!(f, "passed on"),
        }
    }
}

/// Payload threaded through the damage timeline. `damage_amount` is set at damage
/// calculation, `final_damage` at final damage application.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackEvent {
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub kind: ActionKind,
    pub card: Option<Card>,
    pub base_damage: u8,
    pub forced_hit: bool,
    pub can_not_counter: bool,
    pub shieldable: bool,
    pub hit: Option<bool>,
    pub outcome: Option<AttackOutcome>,
    pub damage_amount: Option<u8>,
    pub healing_used: u8,
    pub final_damage: Option<u8>,
    pub depth: usize,
}

impl AttackEvent {
    fn new(
        attacker: CombatantId,
        defender: CombatantId,
        kind: ActionKind,
        card: Option<Card>,
        base_damage: u8,
        depth: usize,
    ) -> Self {
        Self {
            attacker,
            defender,
            kind,
            card,
            base_damage,
            forced_hit: false,
            can_not_counter: false,
            shieldable: true,
            hit: None,
            outcome: None,
            damage_amount: None,
            healing_used: 0,
            final_damage: None,
            depth,
        }
    }

    pub fn attack(attacker: CombatantId, defender: CombatantId, card: Card, base_damage: u8) -> Self {
        let uncounterable = card.kind == CardKind::DarkExtinction;
        let mut event = Self::new(attacker, defender, ActionKind::Attack, Some(card), base_damage, 0);
        event.can_not_counter = uncounterable;
        event
    }

    pub fn counter(
        attacker: CombatantId,
        defender: CombatantId,
        card: Card,
        base_damage: u8,
        depth: usize,
    ) -> Self {
        let uncounterable = card.kind == CardKind::DarkExtinction;
        let mut event = Self::new(attacker, defender, ActionKind::Counter, Some(card), base_damage, depth);
        event.can_not_counter = uncounterable;
        event
    }

    pub fn magic_bullet(
        attacker: CombatantId,
        defender: CombatantId,
        card: Card,
        damage: u8,
        depth: usize,
    ) -> Self {
        Self::new(attacker, defender, ActionKind::MagicBullet, Some(card), damage, depth)
    }

    /// Direct magic damage that skips the hit roll; enters at damage calculation.
    pub fn magic(attacker: CombatantId, defender: CombatantId, amount: u8) -> Self {
        let mut event = Self::new(attacker, defender, ActionKind::Magic, None, amount, 0);
        event.hit = Some(true);
        event
    }

    /// Cards drawn as a cost or penalty; enters at damage reception.
    pub fn draw_penalty(combatant: CombatantId, amount: u8) -> Self {
        let mut event = Self::new(combatant, combatant, ActionKind::DrawPenalty, None, amount, 0);
        event.hit = Some(true);
        event.damage_amount = Some(amount);
        event.final_damage = Some(amount);
        event
    }

    pub fn is_hit(&self) -> bool {
        self.hit == Some(true)
    }
}

impl std::fmt::Display for AttackEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} -> {} (base {}",
            self.kind, self.attacker, self.defender, self.base_damage
        )?;
        if let Some(card) = &self.card {
            write!(f, ", card {card}")?;
        }
        write!(f, ")")
    }
}

/// Payload of the game timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnEvent {
    pub actor: CombatantId,
    pub action: Option<Action>,
    pub skip_action_phase: bool,
}

impl TurnEvent {
    pub fn new(actor: CombatantId) -> Self {
        Self {
            actor,
            action: None,
            skip_action_phase: false,
        }
    }
}
