use models::{Card, CardKind};

use crate::{ActionKind, AttackEvent, EngineResult, MatchContext, Targetability};

/// What a defender may do when hit determination asks. An active shield is not listed:
/// it turns `TakeHit` into a miss.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    TakeHit,
    Counter { card: Card },
    HolyLight { card: Card },
    PassMagicBullet { card: Card },
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::TakeHit => write!(f, "take the hit"),
            Response::Counter { card } => write!(f, "counter with {card}"),
            Response::HolyLight { card } => write!(f, "cancel with {card}"),
            Response::PassMagicBullet { card } => write!(f, "pass the bullet with {card}"),
        }
    }
}

/// The single authority on which card answers an incoming event, and how.
pub fn response_for(incoming: &AttackEvent, card: &Card) -> Option<Response> {
    let counterable = incoming.kind.is_attack_or_counter() && !incoming.can_not_counter;
    let same_element = incoming
        .card
        .as_ref()
        .is_some_and(|attack| attack.element == card.element);
    match card.kind {
        CardKind::HolyLight
            if matches!(
                incoming.kind,
                ActionKind::Attack | ActionKind::Counter | ActionKind::MagicBullet
            ) =>
        {
            Some(Response::HolyLight { card: card.clone() })
        }
        CardKind::MagicBullet if incoming.kind == ActionKind::MagicBullet => {
            Some(Response::PassMagicBullet { card: card.clone() })
        }
        CardKind::DarkExtinction if counterable => Some(Response::Counter { card: card.clone() }),
        CardKind::Plain if counterable && card.is_attack() && same_element => {
            Some(Response::Counter { card: card.clone() })
        }
        _ => None,
    }
}

/// Take-the-hit first, then one entry per answering card in hand order.
pub fn legal_responses(context: &MatchContext, incoming: &AttackEvent) -> EngineResult<Vec<Response>> {
    let defender = context.combatant(incoming.defender)?;
    let attacker_targetable = context
        .combatant(incoming.attacker)?
        .can_be(Targetability::CAN_BE_ATTACKED);
    let mut responses = vec![Response::TakeHit];
    for card in defender.hand.cards() {
        match response_for(incoming, card) {
            Some(Response::Counter { .. }) if !attacker_targetable => {}
            Some(Response::PassMagicBullet { .. })
                if context.next_opponent_seat(incoming.defender)?.is_none() => {}
            Some(response) => responses.push(response),
            None => {}
        }
    }
    Ok(responses)
}
