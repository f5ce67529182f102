use models::UniqueSkill;

use crate::{
    Ability, AttackEvent, CombatantId, EngineResult, EventType, Flow, HandlerSlot, JewelCount,
    MatchContext, card_has, confirm, own_attack, own_attack_or_counter,
};

/// Against a defender holding 2 or 3 cards, the attack deals `4 - hand size` extra damage.
#[derive(Debug)]
pub struct BloodBlade;

impl Ability for BloodBlade {
    fn name(&self) -> &'static str {
        "blood blade"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::Activation, HandlerSlot::ActivationAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if !own_attack(owner, event) || !card_has(event, &UniqueSkill::BloodBlade) {
            return Ok(Flow::Continue);
        }
        let held = context.combatant(event.defender)?.hand.len();
        if matches!(held, 2 | 3) && confirm(context, owner, self.name())? {
            event.base_damage = event.base_damage.saturating_add((4 - held) as u8);
            tracing::debug!(%owner, held, damage = event.base_damage, "blood blade");
        }
        Ok(Flow::Continue)
    }
}

/// Against a defender whose heal pool is full, the attack cannot be answered.
#[derive(Debug)]
pub struct BloodRoar;

impl Ability for BloodRoar {
    fn name(&self) -> &'static str {
        "blood roar"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::Activation, HandlerSlot::ActivationAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if !own_attack(owner, event) || !card_has(event, &UniqueSkill::BloodRoar) {
            return Ok(Flow::Continue);
        }
        if context.combatant(event.defender)?.heal.amount() == 2 && confirm(context, owner, self.name())? {
            event.forced_hit = true;
        }
        Ok(Flow::Continue)
    }
}

/// After a hit, one personal gem buys 2 extra damage.
#[derive(Debug)]
pub struct Tear;

impl Ability for Tear {
    fn name(&self) -> &'static str {
        "tear"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::HitResolvedHit, HandlerSlot::HitAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if !own_attack_or_counter(owner, event) || !event.is_hit() {
            return Ok(Flow::Continue);
        }
        let gem = JewelCount::new(1, 0);
        if context.combatant(owner)?.jewels.can_remove(gem) && confirm(context, owner, self.name())? {
            context.combatant_mut(owner)?.jewels.remove(gem)?;
            event.base_damage = event.base_damage.saturating_add(2);
            context.dispatch_log(format!("{owner} tears for +2 damage"));
        }
        Ok(Flow::Continue)
    }
}
