use models::UniqueSkill;

use crate::{
    Ability, ActionCategory, AttackEvent, CombatantId, EngineResult, EventType, Flow, HandlerSlot,
    MatchContext, card_has, confirm, own_attack,
};

/// Attacking with a FastWind card grants one more attack action this turn.
#[derive(Debug)]
pub struct FastWind;

impl Ability for FastWind {
    fn name(&self) -> &'static str {
        "fast wind"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::Activation, HandlerSlot::ActivationAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if own_attack(owner, event)
            && card_has(event, &UniqueSkill::FastWind)
            && confirm(context, owner, self.name())?
        {
            context
                .combatant_mut(owner)?
                .action_points
                .grant(ActionCategory::Attack, 1);
        }
        Ok(Flow::Continue)
    }
}

/// Against a shielded defender, a HardWind card goes through both the shield and counters.
#[derive(Debug)]
pub struct HardWind;

impl Ability for HardWind {
    fn name(&self) -> &'static str {
        "hard wind"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::Activation, HandlerSlot::ActivationAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if own_attack(owner, event)
            && card_has(event, &UniqueSkill::HardWind)
            && context.combatant(event.defender)?.has_shield()
            && confirm(context, owner, self.name())?
        {
            event.can_not_counter = true;
            event.shieldable = false;
        }
        Ok(Flow::Continue)
    }
}

/// The third attack of a turn always hits.
#[derive(Debug)]
pub struct HolySword;

impl Ability for HolySword {
    fn name(&self) -> &'static str {
        "holy sword"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::Activation, HandlerSlot::ActivationAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if own_attack(owner, event)
            && context.combatant(owner)?.attacks_this_turn == 2
            && confirm(context, owner, self.name())?
        {
            event.forced_hit = true;
        }
        Ok(Flow::Continue)
    }
}
