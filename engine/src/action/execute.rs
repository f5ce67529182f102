use models::{Card, CardKind};

use crate::{
    Action, ActiveEffect, AttackEvent, CombatantId, DamagePipeline, DamageStep, Effect,
    EffectKind, EngineError, EngineResult, JewelCount, MatchContext, MatchEvent, attack_targets,
    is_available, magic_targets, refine_options,
};

/// Validates, pays for and carries out one action. Ending the turn is handled by the resolver.
pub fn execute_action(context: &mut MatchContext, actor: CombatantId, action: &Action) -> EngineResult<()> {
    let Some(category) = action.category() else {
        return Ok(());
    };
    if !is_available(context, actor, action)? {
        return Err(EngineError::UnavailableAction {
            actor,
            action: action.to_string(),
        });
    }
    let spent = context
        .combatant_mut(actor)?
        .action_points
        .spend(category)
        .ok_or(EngineError::NoActionPoints {
            actor,
            category: category.name(),
        })?;
    tracing::debug!(%actor, %action, %spent, "action point spent");
    context.dispatch(MatchEvent::ActionTaken(actor, action.to_string()));

    match action {
        Action::EndTurn => Ok(()),
        Action::Attack { card } => attack(context, actor, card),
        Action::Magic { card } => cast(context, actor, card),
        Action::Synthesize => synthesize(context, actor),
        Action::Purchase => purchase(context, actor),
        Action::Refine => refine(context, actor),
    }
}

fn attack(context: &mut MatchContext, actor: CombatantId, card: &Card) -> EngineResult<()> {
    let targets = attack_targets(context, actor)?;
    let target = context.ask_target(actor, "attack whom?", &targets)?;
    let card = context.play_card(actor, card.id)?;
    let event = AttackEvent::attack(actor, target, card, context.rules.base_damage);
    DamagePipeline::resolve(context, event, DamageStep::Activation)?;
    let combatant = context.combatant_mut(actor)?;
    combatant.attacks_this_turn = combatant.attacks_this_turn.saturating_add(1);
    Ok(())
}

fn cast(context: &mut MatchContext, actor: CombatantId, card: &Card) -> EngineResult<()> {
    let effect = match card.kind {
        CardKind::Poison => Effect::Poison {
            source: actor,
            amount: context.rules.poison_damage,
        },
        CardKind::Weakness => Effect::Weakness { source: actor },
        CardKind::HolyShield => Effect::HolyShield { source: actor },
        CardKind::MagicBullet => return magic_bullet(context, actor, card),
        _ => {
            return Err(EngineError::UnavailableAction {
                actor,
                action: format!("cast {card}"),
            });
        }
    };
    let targets = magic_targets(context, actor, card.kind)?;
    let target = context.ask_target(actor, &format!("cast {} on whom?", card.kind), &targets)?;
    let card = context.take_card(actor, card.id)?;
    let kind = effect.kind();
    context.combatant_mut(target)?.add_effect(ActiveEffect {
        effect,
        target,
        card: Some(card),
    });
    tracing::info!(%actor, %target, %kind, "effect applied");
    context.dispatch(MatchEvent::EffectApplied(target, kind));
    Ok(())
}

fn magic_bullet(context: &mut MatchContext, actor: CombatantId, card: &Card) -> EngineResult<()> {
    let target = context.next_opponent_seat(actor)?.ok_or_else(|| {
        EngineError::Invariant(format!("{actor} has no opponent for a magic bullet"))
    })?;
    let card = context.play_card(actor, card.id)?;
    let event = AttackEvent::magic_bullet(actor, target, card, context.rules.magic_bullet_damage, 0);
    DamagePipeline::resolve(context, event, DamageStep::Activation)?;
    Ok(())
}

/// Pays `synthesis_cost` jewels from the team pool for a grail; the opposing team loses morale.
fn synthesize(context: &mut MatchContext, actor: CombatantId) -> EngineResult<()> {
    let color = context.team_of(actor)?;
    let cost = context.rules.synthesis_cost;
    let options = context
        .team(color)?
        .jewels
        .enumerate_combinations(cost, cost, 0, 0);
    let payment = context.ask_jewels(actor, "pay for the grail", &options)?;
    context.team_mut(color)?.jewels.remove(payment)?;

    let draw = AttackEvent::draw_penalty(actor, context.rules.special_action_draw);
    DamagePipeline::resolve(context, draw, DamageStep::DamageReception)?;
    if context.is_over() {
        return Ok(());
    }
    context.add_grail(color, 1)?;
    if context.is_over() {
        return Ok(());
    }
    context.adjust_morale(color.inverse(), -1)
}

fn purchase(context: &mut MatchContext, actor: CombatantId) -> EngineResult<()> {
    let color = context.team_of(actor)?;
    let draw = AttackEvent::draw_penalty(actor, context.rules.special_action_draw);
    DamagePipeline::resolve(context, draw, DamageStep::DamageReception)?;
    if context.is_over() {
        return Ok(());
    }

    let gain = match context.team(color)?.jewels.room() {
        0 => return Ok(()),
        1 => {
            let options = [JewelCount::new(1, 0), JewelCount::new(0, 1)];
            context.ask_jewels(actor, "gain which jewel?", &options)?
        }
        _ => JewelCount::new(1, 1),
    };
    context.gain_team_jewels(color, gain)?;
    Ok(())
}

fn refine(context: &mut MatchContext, actor: CombatantId) -> EngineResult<()> {
    let color = context.team_of(actor)?;
    let options = refine_options(context, actor)?;
    let moved = context.ask_jewels(actor, "move which jewels to yourself?", &options)?;
    context.team_mut(color)?.jewels.remove(moved)?;
    context.combatant_mut(actor)?.jewels.add(moved)?;
    context.dispatch_log(format!("{actor} refines {moved}"));
    Ok(())
}

/// Removes a consumed effect and sends its card to the discard pile.
pub fn consume_effect(context: &mut MatchContext, effect: ActiveEffect) {
    let kind: EffectKind = effect.kind();
    if let Some(card) = effect.card {
        context.deck.recycle(card);
    }
    context.dispatch(MatchEvent::EffectConsumed(effect.target, kind));
}
