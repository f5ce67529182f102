use std::rc::Rc;

use crate::{
    Action, AttackEvent, CombatantId, CombatantSummary, DamagePipeline, DamageStep, Effect,
    EffectKind, EngineResult, EventType, Flow, GameBus, HandlerSlot, MatchContext, MatchEvent,
    TurnEvent, available_actions, consume_effect, execute_action,
};

/// Drives one combatant's turn through the game timeline and runs the action loop.
pub struct ActionResolver;

impl ActionResolver {
    pub fn install(bus: &mut GameBus, seats: &[CombatantId]) -> EngineResult<()> {
        bus.subscribe(
            EventType::GameInit,
            HandlerSlot::GameInitialization,
            "deal initial hands",
            deal_initial_hands,
        )?;
        bus.subscribe(
            EventType::BeforeRoundStart,
            HandlerSlot::BeforeRoundStart,
            "before round start",
            trace_phase,
        )?;
        bus.subscribe(
            EventType::RoundStart,
            HandlerSlot::RoundStart,
            "announce turn",
            announce_turn,
        )?;
        bus.subscribe(
            EventType::BeforeAction,
            HandlerSlot::BeforeAction,
            "before action",
            trace_phase,
        )?;
        for &owner in seats {
            bus.subscribe(
                EventType::BeforeAction,
                HandlerSlot::PoisonTrigger,
                format!("poison trigger {owner}"),
                move |context: &mut MatchContext, turn: &mut TurnEvent| {
                    poison_trigger(context, owner, turn)
                },
            )?;
        }
        for &owner in seats {
            bus.subscribe(
                EventType::BeforeAction,
                HandlerSlot::WeaknessTrigger,
                format!("weakness trigger {owner}"),
                move |context: &mut MatchContext, turn: &mut TurnEvent| {
                    weakness_trigger(context, owner, turn)
                },
            )?;
        }
        bus.subscribe(
            EventType::ActionPhaseStart,
            HandlerSlot::ActionPhaseStart,
            "action phase start",
            trace_phase,
        )?;
        bus.subscribe(
            EventType::DuringActionPhase,
            HandlerSlot::DuringActionPhase,
            "during action phase",
            trace_phase,
        )?;
        bus.subscribe(
            EventType::AfterActionPhase,
            HandlerSlot::AfterActionPhase,
            "after action",
            trace_phase,
        )?;
        bus.subscribe(
            EventType::TurnEnd,
            HandlerSlot::TurnEnd,
            "reset action points",
            reset_action_points,
        )?;
        Ok(())
    }

    pub fn start(context: &mut MatchContext, first: CombatantId) -> EngineResult<()> {
        let bus = Rc::clone(&context.game_bus);
        bus.emit(context, EventType::GameInit, &mut TurnEvent::new(first))?;
        Ok(())
    }

    pub fn run_turn(context: &mut MatchContext, actor: CombatantId) -> EngineResult<()> {
        let bus = Rc::clone(&context.game_bus);
        let span = tracing::info_span!("turn", %actor, turn = context.turn);
        let _guard = span.enter();

        let mut turn = TurnEvent::new(actor);
        bus.emit(context, EventType::BeforeRoundStart, &mut turn)?;
        bus.emit(context, EventType::RoundStart, &mut turn)?;
        let proceed = bus.emit(context, EventType::BeforeAction, &mut turn)?;
        if context.is_over() {
            return Ok(());
        }
        if proceed && !turn.skip_action_phase {
            bus.emit(context, EventType::ActionPhaseStart, &mut turn)?;
            Self::action_phase(context, &bus, &mut turn)?;
            if context.is_over() {
                return Ok(());
            }
        } else {
            tracing::info!(%actor, "action phase skipped");
        }
        bus.emit(context, EventType::TurnEnd, &mut turn)?;
        Ok(())
    }

    fn action_phase(context: &mut MatchContext, bus: &GameBus, turn: &mut TurnEvent) -> EngineResult<()> {
        let actor = turn.actor;
        let mut taken = 0usize;
        while !context.is_over() {
            bus.emit(context, EventType::DuringActionPhase, turn)?;
            let mut candidates = available_actions(context, actor)?;
            if candidates.is_empty() {
                break;
            }
            if taken > 0 {
                candidates.push(Action::EndTurn);
            }
            let action = context.ask_action(actor, &candidates)?;
            if action == Action::EndTurn {
                break;
            }
            execute_action(context, actor, &action)?;
            taken += 1;
            turn.action = Some(action);
            if context.is_over() {
                break;
            }
            bus.emit(context, EventType::AfterActionPhase, turn)?;
        }
        tracing::debug!(%actor, taken, "action phase over");
        Ok(())
    }
}

fn trace_phase(_context: &mut MatchContext, turn: &mut TurnEvent) -> EngineResult<Flow> {
    tracing::trace!(actor = %turn.actor, action = ?turn.action, "phase");
    Ok(Flow::Continue)
}

fn deal_initial_hands(context: &mut MatchContext, _turn: &mut TurnEvent) -> EngineResult<Flow> {
    let count = context.rules.initial_hand;
    for id in context.initial_deal.clone() {
        context.deal(id, count)?;
    }
    Ok(Flow::Continue)
}

fn announce_turn(context: &mut MatchContext, turn: &mut TurnEvent) -> EngineResult<Flow> {
    let summary = CombatantSummary::from(context.combatant(turn.actor)?);
    context.dispatch(MatchEvent::TurnStarted(summary, context.turn));
    Ok(Flow::Continue)
}

/// Fires every poison on the acting combatant, ordered by the seat of whoever cast it,
/// starting from the actor.
fn poison_trigger(context: &mut MatchContext, owner: CombatantId, turn: &mut TurnEvent) -> EngineResult<Flow> {
    if turn.actor != owner {
        return Ok(Flow::Continue);
    }
    let mut poisons = context
        .combatant_mut(owner)?
        .take_effects(EffectKind::Poison);
    if poisons.is_empty() {
        return Ok(Flow::Continue);
    }
    let order = context.seat_order_from(owner);
    poisons.sort_by_key(|poison| {
        order
            .iter()
            .position(|seat| *seat == poison.effect.source())
            .unwrap_or(usize::MAX)
    });

    for poison in poisons {
        let source = poison.effect.source();
        let amount = match poison.effect {
            Effect::Poison { amount, .. } => amount,
            _ => context.rules.poison_damage,
        };
        consume_effect(context, poison);
        if context.is_over() {
            continue;
        }
        let event = AttackEvent::magic(source, owner, amount);
        DamagePipeline::resolve(context, event, DamageStep::DamageCalculation)?;
    }
    Ok(if context.is_over() {
        Flow::Stop
    } else {
        Flow::Continue
    })
}

/// A weakened actor either gives up the action phase or draws cards to keep it.
fn weakness_trigger(context: &mut MatchContext, owner: CombatantId, turn: &mut TurnEvent) -> EngineResult<Flow> {
    if turn.actor != owner {
        return Ok(Flow::Continue);
    }
    let Some(weakness) = context.combatant_mut(owner)?.take_effect(EffectKind::Weakness) else {
        return Ok(Flow::Continue);
    };
    consume_effect(context, weakness);

    let draw = context.rules.weakness_draw;
    let skip = context.ask_yes_no(
        owner,
        &format!("weakened: skip the action phase? (otherwise draw {draw} cards)"),
    )?;
    if skip {
        turn.skip_action_phase = true;
        return Ok(Flow::Stop);
    }
    DamagePipeline::resolve(context, AttackEvent::draw_penalty(owner, draw), DamageStep::DamageReception)?;
    Ok(if context.is_over() {
        Flow::Stop
    } else {
        Flow::Continue
    })
}

fn reset_action_points(context: &mut MatchContext, turn: &mut TurnEvent) -> EngineResult<Flow> {
    context.combatant_mut(turn.actor)?.end_turn();
    Ok(Flow::Continue)
}
