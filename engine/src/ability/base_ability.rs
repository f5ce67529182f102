use std::rc::Rc;

use models::UniqueSkill;

use crate::{
    ActionKind, AttackEvent, Combatant, CombatantId, DamageBus, EngineResult, EventType, Flow,
    HandlerSlot, MatchContext,
};

/// Innate character ability. Each one is bound to a single slot of the damage timeline and
/// only reacts to events involving its owner.
pub trait Ability: std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn hook(&self) -> (EventType, HandlerSlot);

    fn on(
        &self,
        owner: CombatantId,
        context: &mut MatchContext,
        event: &mut AttackEvent,
    ) -> EngineResult<Flow>;
}

/// Subscribes the abilities of every combatant, in seat order.
pub fn register_abilities<'a>(
    bus: &mut DamageBus,
    combatants: impl IntoIterator<Item = &'a Combatant>,
) -> EngineResult<()> {
    for combatant in combatants {
        let owner = combatant.id;
        for ability in &combatant.abilities {
            let (event, slot) = ability.hook();
            let handler = Rc::clone(ability);
            bus.subscribe(
                event,
                slot,
                format!("{} {owner}", ability.name()),
                move |context: &mut MatchContext, payload: &mut AttackEvent| {
                    handler.on(owner, context, payload)
                },
            )?;
        }
    }
    Ok(())
}

pub(crate) fn own_attack(owner: CombatantId, event: &AttackEvent) -> bool {
    event.attacker == owner && event.kind == ActionKind::Attack
}

pub(crate) fn own_attack_or_counter(owner: CombatantId, event: &AttackEvent) -> bool {
    event.attacker == owner && event.kind.is_attack_or_counter()
}

pub(crate) fn card_has(event: &AttackEvent, skill: &UniqueSkill) -> bool {
    event.card.as_ref().is_some_and(|card| card.has_skill(skill))
}

/// Optional abilities ask their owner before firing.
pub(crate) fn confirm(context: &mut MatchContext, owner: CombatantId, name: &str) -> EngineResult<bool> {
    context.ask_yes_no(owner, &format!("use {name}?"))
}
