use std::rc::Rc;

use tracing::Level;

use crate::{
    ActionKind, AttackEvent, AttackOutcome, DamageBus, EffectKind, EngineError, EngineResult,
    EventType, Flow, HandlerSlot, JewelCount, MatchContext, MatchEvent, Response, consume_effect,
    legal_responses,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DamageStep {
    Activation,
    HitDetermination,
    DamageCalculation,
    HealingResponse,
    FinalDamageApplication,
    DamageReception,
}

impl DamageStep {
    pub const ALL: [DamageStep; 6] = [
        DamageStep::Activation,
        DamageStep::HitDetermination,
        DamageStep::DamageCalculation,
        DamageStep::HealingResponse,
        DamageStep::FinalDamageApplication,
        DamageStep::DamageReception,
    ];

    pub fn event_type(&self) -> EventType {
        match self {
            DamageStep::Activation => EventType::Activation,
            DamageStep::HitDetermination => EventType::HitDetermination,
            DamageStep::DamageCalculation => EventType::DamageCalculation,
            DamageStep::HealingResponse => EventType::HealingResponse,
            DamageStep::FinalDamageApplication => EventType::FinalDamageApplication,
            DamageStep::DamageReception => EventType::DamageReception,
        }
    }
}

/// Resolves one attack, counter, magic bullet or direct damage event through the damage
/// timeline.
pub struct DamagePipeline;

impl DamagePipeline {
    pub fn install(bus: &mut DamageBus) -> EngineResult<()> {
        bus.subscribe(EventType::Activation, HandlerSlot::Announce, "announce", announce)?;
        bus.subscribe(
            EventType::HitDetermination,
            HandlerSlot::HitDetermination,
            "determine hit",
            determine_hit,
        )?;
        bus.subscribe(
            EventType::DamageCalculation,
            HandlerSlot::DamageCalculation,
            "calculate damage",
            calculate_damage,
        )?;
        bus.subscribe(
            EventType::HealingResponse,
            HandlerSlot::HealingResponse,
            "healing response",
            respond_with_healing,
        )?;
        bus.subscribe(
            EventType::FinalDamageApplication,
            HandlerSlot::FinalDamageApplication,
            "apply final damage",
            apply_final_damage,
        )?;
        bus.subscribe(
            EventType::DamageReception,
            HandlerSlot::DamageReception,
            "receive damage",
            receive_damage,
        )?;
        Ok(())
    }

    /// Runs `event` from step `from` onwards. Nested counters resolve completely inside
    /// hit determination before this call moves on.
    pub fn resolve(
        context: &mut MatchContext,
        mut event: AttackEvent,
        from: DamageStep,
    ) -> EngineResult<AttackEvent> {
        if event.depth > context.rules.max_resolution_depth {
            return Err(EngineError::ResolutionDepthExceeded(event.depth));
        }
        context.resolutions += 1;
        let bus = Rc::clone(&context.damage_bus);
        let span = tracing::info_span!(
            "resolve",
            kind = %event.kind,
            attacker = %event.attacker,
            defender = %event.defender,
            depth = event.depth,
            ?from
        );
        let _guard = span.enter();

        for step in DamageStep::ALL.into_iter().filter(|s| *s >= from) {
            if context.is_over() {
                break;
            }
            let proceed = bus.emit(context, step.event_type(), &mut event)?;
            if step == DamageStep::HitDetermination && !context.is_over() {
                let branch = if event.is_hit() {
                    EventType::HitResolvedHit
                } else {
                    EventType::HitResolvedMiss
                };
                bus.emit(context, branch, &mut event)?;
            }
            if !proceed {
                tracing::event!(name: "resolution stopped", Level::DEBUG, ?step, outcome = ?event.outcome);
                if event.hit == Some(false) {
                    event.damage_amount = Some(0);
                    event.final_damage = Some(0);
                }
                break;
            }
        }

        if event.kind != ActionKind::DrawPenalty {
            context.dispatch(MatchEvent::AttackResolved {
                attacker: event.attacker,
                defender: event.defender,
                kind: event.kind,
                outcome: event.outcome,
                final_damage: event.final_damage.unwrap_or(0),
            });
        }
        Ok(event)
    }
}

fn announce(context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
    tracing::debug!(%event, "activation");
    context.notify(event.defender, &format!("incoming {event}"));
    Ok(Flow::Continue)
}

fn determine_hit(context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
    if event.forced_hit {
        event.hit = Some(true);
        event.outcome = Some(AttackOutcome::Forced);
        return Ok(Flow::Continue);
    }

    let responses = legal_responses(context, event)?;
    let response = context.ask_response(event.defender, &responses)?;
    tracing::debug!(defender = %event.defender, %response, "response chosen");
    match response {
        Response::TakeHit => {
            if event.shieldable && context.combatant(event.defender)?.has_shield() {
                consume_shield(context, event)?;
                event.hit = Some(false);
                event.outcome = Some(AttackOutcome::Shielded);
                return Ok(Flow::Stop);
            }
            event.hit = Some(true);
            event.outcome = Some(AttackOutcome::Hit);
            Ok(Flow::Continue)
        }
        Response::HolyLight { card } => {
            context.play_card(event.defender, card.id)?;
            event.hit = Some(false);
            event.outcome = Some(AttackOutcome::Cancelled);
            Ok(Flow::Stop)
        }
        Response::Counter { card } => {
            let card = context.play_card(event.defender, card.id)?;
            event.hit = Some(false);
            event.outcome = Some(AttackOutcome::Countered);
            let counter = AttackEvent::counter(
                event.defender,
                event.attacker,
                card,
                context.rules.base_damage,
                event.depth + 1,
            );
            DamagePipeline::resolve(context, counter, DamageStep::HitDetermination)?;
            Ok(Flow::Continue)
        }
        Response::PassMagicBullet { card } => {
            let card = context.play_card(event.defender, card.id)?;
            event.hit = Some(false);
            event.outcome = Some(AttackOutcome::Passed);
            let target = context.next_opponent_seat(event.defender)?.ok_or_else(|| {
                EngineError::Invariant(format!("{} has no opponent to pass to", event.defender))
            })?;
            let passed = AttackEvent::magic_bullet(
                event.defender,
                target,
                card,
                event.base_damage.saturating_add(1),
                event.depth + 1,
            );
            DamagePipeline::resolve(context, passed, DamageStep::Activation)?;
            Ok(Flow::Continue)
        }
    }
}

fn consume_shield(context: &mut MatchContext, event: &AttackEvent) -> EngineResult<()> {
    let shield = context
        .combatant_mut(event.defender)?
        .take_effect(EffectKind::HolyShield)
        .ok_or_else(|| EngineError::Invariant(format!("{} has no shield", event.defender)))?;
    consume_effect(context, shield);
    Ok(())
}

fn calculate_damage(_context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
    event.damage_amount = match event.hit {
        Some(true) => Some(event.base_damage),
        Some(false) => Some(0),
        None => {
            return Err(EngineError::Invariant(format!(
                "hit undecided at damage calculation for {event}"
            )));
        }
    };
    Ok(Flow::Continue)
}

fn respond_with_healing(context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
    let damage = event.damage_amount.ok_or_else(|| {
        EngineError::Invariant(format!("damage undecided at healing for {event}"))
    })?;
    let pool = context.combatant(event.defender)?.heal.amount();
    let most = pool.min(damage);
    if most == 0 {
        return Ok(Flow::Continue);
    }
    let options: Vec<u8> = (0..=most).collect();
    let used = context.ask_amount(event.defender, "heal to absorb damage", &options)?;
    context.combatant_mut(event.defender)?.heal.spend(used)?;
    event.healing_used = used;
    Ok(Flow::Continue)
}

fn apply_final_damage(_context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
    let damage = event.damage_amount.ok_or_else(|| {
        EngineError::Invariant(format!("damage undecided at final application for {event}"))
    })?;
    let final_damage = damage
        .checked_sub(event.healing_used)
        .ok_or(EngineError::NegativeDamage {
            defender: event.defender,
            damage,
            healing: event.healing_used,
        })?;
    event.final_damage = Some(final_damage);
    Ok(Flow::Continue)
}

fn receive_damage(context: &mut MatchContext, event: &mut AttackEvent) -> EngineResult<Flow> {
    let final_damage = event.final_damage.ok_or_else(|| {
        EngineError::Invariant(format!("final damage undecided at reception for {event}"))
    })?;
    if final_damage == 0 {
        return Ok(Flow::Continue);
    }

    let overflow = context.draw_cards(event.defender, final_damage as usize)?;
    if overflow > 0 {
        let team = context.team_of(event.defender)?;
        context.adjust_morale(team, -(overflow as i32))?;
        if context.is_over() {
            return Ok(Flow::Stop);
        }
    }

    let gain = match event.kind {
        ActionKind::Attack => JewelCount::new(1, 0),
        ActionKind::Counter => JewelCount::new(0, 1),
        _ => return Ok(Flow::Continue),
    };
    let team = context.team_of(event.attacker)?;
    context.gain_team_jewels(team, gain)?;
    Ok(if context.is_over() {
        Flow::Stop
    } else {
        Flow::Continue
    })
}
