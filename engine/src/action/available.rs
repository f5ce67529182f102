use models::CardKind;

use crate::{Action, CombatantId, EngineResult, JewelCount, MatchContext, Targetability};

pub fn attack_targets(context: &MatchContext, actor: CombatantId) -> EngineResult<Vec<CombatantId>> {
    let mut targets = Vec::new();
    for id in context.opponents_of(actor)? {
        if context.combatant(id)?.can_be(Targetability::CAN_BE_ATTACKED) {
            targets.push(id);
        }
    }
    Ok(targets)
}

/// Legal targets for a magic card of `kind`. A magic bullet has exactly one: the next
/// opposing seat.
pub fn magic_targets(
    context: &MatchContext,
    actor: CombatantId,
    kind: CardKind,
) -> EngineResult<Vec<CombatantId>> {
    let flag = match kind {
        CardKind::Poison => Targetability::CAN_BE_POISONED,
        CardKind::Weakness => Targetability::CAN_BE_WEAKENED,
        CardKind::HolyShield => Targetability::CAN_BE_SHIELDED,
        CardKind::MagicBullet => {
            return Ok(context.next_opponent_seat(actor)?.into_iter().collect());
        }
        _ => return Ok(Vec::new()),
    };
    Ok(context
        .combatants
        .values()
        .filter(|c| c.can_be(flag))
        .map(|c| c.id)
        .collect())
}

/// Ways to move 1 or 2 jewels from the team pool that still fit the personal pool.
pub fn refine_options(context: &MatchContext, actor: CombatantId) -> EngineResult<Vec<JewelCount>> {
    let combatant = context.combatant(actor)?;
    let team = context.team(combatant.team)?;
    Ok(team
        .jewels
        .enumerate_combinations(1, 2, 0, 0)
        .into_iter()
        .filter(|amount| combatant.jewels.can_add(*amount))
        .collect())
}

pub fn is_available(context: &MatchContext, actor: CombatantId, action: &Action) -> EngineResult<bool> {
    let combatant = context.combatant(actor)?;
    let Some(category) = action.category() else {
        return Ok(true);
    };
    if !combatant.action_points.can_spend(category) {
        return Ok(false);
    }
    let draw = context.rules.special_action_draw as usize;
    let available = match action {
        Action::EndTurn => true,
        Action::Attack { card } => {
            combatant.hand.contains(card.id)
                && card.is_attack()
                && !attack_targets(context, actor)?.is_empty()
        }
        Action::Magic { card } => {
            combatant.hand.contains(card.id)
                && card.is_magic()
                && matches!(
                    card.kind,
                    CardKind::Poison | CardKind::Weakness | CardKind::HolyShield | CardKind::MagicBullet
                )
                && !magic_targets(context, actor, card.kind)?.is_empty()
        }
        Action::Synthesize => {
            let team = context.team(combatant.team)?;
            team.jewels.total() >= context.rules.synthesis_cost && combatant.hand.can_draw(draw)
        }
        Action::Purchase => combatant.hand.can_draw(draw),
        Action::Refine => !refine_options(context, actor)?.is_empty(),
    };
    Ok(available)
}

/// Every action the actor could take right now, card actions in hand order, then the
/// special actions. Ending the turn is not included.
pub fn available_actions(context: &MatchContext, actor: CombatantId) -> EngineResult<Vec<Action>> {
    let combatant = context.combatant(actor)?;
    let mut candidates: Vec<Action> = Vec::new();
    for card in combatant.hand.cards() {
        if card.is_attack() {
            candidates.push(Action::Attack { card: card.clone() });
        } else {
            candidates.push(Action::Magic { card: card.clone() });
        }
    }
    candidates.extend([Action::Synthesize, Action::Purchase, Action::Refine]);

    let mut available = Vec::with_capacity(candidates.len());
    for action in candidates {
        if is_available(context, actor, &action)? {
            available.push(action);
        }
    }
    Ok(available)
}
