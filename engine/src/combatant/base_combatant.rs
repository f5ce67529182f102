use std::rc::Rc;

use models::TeamColor;

use crate::{
    Ability, ActionPoints, ActiveEffect, Character, CombatantId, EffectKind, EffectStore, Hand,
    HealPool, JewelLedger, Targetability,
};

#[derive(Clone, Debug)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub team: TeamColor,
    pub character: Character,
    pub hand: Hand,
    pub jewels: JewelLedger,
    pub heal: HealPool,
    pub effects: EffectStore,
    pub action_points: ActionPoints,
    pub flags: Targetability,
    pub attacks_this_turn: u8,
    pub abilities: Vec<Rc<dyn Ability>>,
}

impl Combatant {
    fn flag_for(kind: EffectKind) -> Option<Targetability> {
        match kind {
            EffectKind::Weakness => Some(Targetability::CAN_BE_WEAKENED),
            EffectKind::HolyShield => Some(Targetability::CAN_BE_SHIELDED),
            EffectKind::Poison => None,
        }
    }

    pub fn add_effect(&mut self, effect: ActiveEffect) {
        if let Some(flag) = Self::flag_for(effect.kind()) {
            self.flags.remove(flag);
        }
        self.effects.add(effect);
    }

    pub fn take_effect(&mut self, kind: EffectKind) -> Option<ActiveEffect> {
        let taken = self.effects.take(kind)?;
        self.restore_flag(kind);
        Some(taken)
    }

    pub fn take_effects(&mut self, kind: EffectKind) -> Vec<ActiveEffect> {
        let taken = self.effects.take_all(kind);
        self.restore_flag(kind);
        taken
    }

    fn restore_flag(&mut self, kind: EffectKind) {
        if let Some(flag) = Self::flag_for(kind) {
            if !self.effects.has(kind) {
                self.flags.insert(flag);
            }
        }
    }

    pub fn has_shield(&self) -> bool {
        self.effects.has(EffectKind::HolyShield)
    }

    pub fn can_be(&self, flag: Targetability) -> bool {
        self.flags.contains(flag)
    }

    /// Restores the per-turn allowance for the next time this combatant acts.
    pub fn end_turn(&mut self) {
        self.action_points.reset();
        self.attacks_this_turn = 0;
    }
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}) hand={} jewels={} heal={} effects={}",
            self.name,
            self.id,
            self.team,
            self.hand.len(),
            self.jewels,
            self.heal.amount(),
            self.effects.len()
        )
    }
}
