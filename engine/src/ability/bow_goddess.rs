use models::{Card, Element, UniqueSkill};

use crate::{
    Ability, AttackEvent, CombatantId, DamagePipeline, DamageStep, EngineResult, EventType, Flow,
    HandlerSlot, MatchContext, card_has, confirm, own_attack,
};

#[derive(Debug)]
pub struct ThunderBolt;

impl Ability for ThunderBolt {
    fn name(&self) -> &'static str {
        "thunder bolt"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::Activation, HandlerSlot::ActivationAbility)
    }

    fn on(&self, owner: CombatantId, _context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        let thunder = event
            .card
            .as_ref()
            .is_some_and(|card| card.element == Element::Thunder);
        if own_attack(owner, event) && thunder && !event.forced_hit {
            event.can_not_counter = true;
        }
        Ok(Flow::Continue)
    }
}

/// Trades one point of damage for a hit that cannot be answered.
#[derive(Debug)]
pub struct AccurateShot;

impl Ability for AccurateShot {
    fn name(&self) -> &'static str {
        "accurate shot"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::Activation, HandlerSlot::ActivationAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if own_attack(owner, event)
            && card_has(event, &UniqueSkill::AccurateShot)
            && confirm(context, owner, self.name())?
        {
            event.base_damage = event.base_damage.saturating_sub(1);
            event.forced_hit = true;
        }
        Ok(Flow::Continue)
    }
}

/// A missed attack may be followed up by discarding a magic card for 2 magic damage.
#[derive(Debug)]
pub struct PenetrateShot;

impl PenetrateShot {
    const DAMAGE: u8 = 2;
}

impl Ability for PenetrateShot {
    fn name(&self) -> &'static str {
        "penetrate shot"
    }

    fn hook(&self) -> (EventType, HandlerSlot) {
        (EventType::HitResolvedMiss, HandlerSlot::MissAbility)
    }

    fn on(&self, owner: CombatantId, context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
        if !own_attack(owner, event) || event.hit != Some(false) {
            return Ok(Flow::Continue);
        }
        let magic: Vec<Card> = context
            .combatant(owner)?
            .hand
            .cards()
            .iter()
            .filter(|card| card.is_magic())
            .cloned()
            .collect();
        if magic.is_empty() {
            return Ok(Flow::Continue);
        }
        let chosen = context.ask_discard(owner, "discard a magic card for penetrate shot?", &magic, 0, 1)?;
        let Some(card) = chosen.first() else {
            return Ok(Flow::Continue);
        };
        context.play_card(owner, card.id)?;
        let mut follow_up = AttackEvent::magic(owner, event.defender, Self::DAMAGE);
        follow_up.depth = event.depth + 1;
        DamagePipeline::resolve(context, follow_up, DamageStep::DamageCalculation)?;
        Ok(Flow::Continue)
    }
}
