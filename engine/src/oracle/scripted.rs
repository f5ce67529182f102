use std::collections::VecDeque;

use models::{Card, CardId};

use crate::{Action, CombatantId, DecisionOracle, JewelCount, OracleError, Response};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionPick {
    EndTurn,
    Attack(CardId),
    Magic(CardId),
    Synthesize,
    Purchase,
    Refine,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponsePick {
    TakeHit,
    Counter(CardId),
    HolyLight(CardId),
    PassMagicBullet(CardId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scripted {
    Action(ActionPick),
    Response(ResponsePick),
    Target(CombatantId),
    Jewels(JewelCount),
    Amount(u8),
    YesNo(bool),
    Discard(Vec<CardId>),
}

/// Replays queued decisions in order. When the next queued entry is for a different kind of
/// decision, or the queue is empty, a fixed fallback answers instead: end the turn when
/// allowed, take the hit, first target, no healing, "no", and the first cards offered.
#[derive(Clone, Debug, Default)]
pub struct ScriptedOracle {
    script: VecDeque<Scripted>,
    pub messages: Vec<String>,
}

impl ScriptedOracle {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: script.into_iter().collect(),
            messages: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next_if(&mut self, matches: impl Fn(&Scripted) -> bool) -> Option<Scripted> {
        if self.script.front().is_some_and(matches) {
            self.script.pop_front()
        } else {
            None
        }
    }

    fn first<T: Clone>(actor: CombatantId, candidates: &[T]) -> Result<T, OracleError> {
        candidates
            .first()
            .cloned()
            .ok_or(OracleError::Script(format!("no candidates offered to {actor}")))
    }
}

impl DecisionOracle for ScriptedOracle {
    fn choose_action(
        &mut self,
        actor: CombatantId,
        candidates: &[Action],
    ) -> Result<Action, OracleError> {
        let Some(Scripted::Action(pick)) = self.next_if(|s| matches!(s, Scripted::Action(..)))
        else {
            return match candidates.iter().find(|a| **a == Action::EndTurn) {
                Some(end) => Ok(end.clone()),
                None => Self::first(actor, candidates),
            };
        };
        candidates
            .iter()
            .find(|candidate| match (&pick, candidate) {
                (ActionPick::EndTurn, Action::EndTurn)
                | (ActionPick::Synthesize, Action::Synthesize)
                | (ActionPick::Purchase, Action::Purchase)
                | (ActionPick::Refine, Action::Refine) => true,
                (ActionPick::Attack(id), Action::Attack { card })
                | (ActionPick::Magic(id), Action::Magic { card }) => card.id == *id,
                _ => false,
            })
            .cloned()
            .ok_or(OracleError::Script(format!(
                "{pick:?} is not available to {actor}: {candidates:?}"
            )))
    }

    fn choose_response(
        &mut self,
        defender: CombatantId,
        candidates: &[Response],
    ) -> Result<Response, OracleError> {
        let Some(Scripted::Response(pick)) =
            self.next_if(|s| matches!(s, Scripted::Response(..)))
        else {
            return Ok(Response::TakeHit);
        };
        candidates
            .iter()
            .find(|candidate| match (&pick, candidate) {
                (ResponsePick::TakeHit, Response::TakeHit) => true,
                (ResponsePick::Counter(id), Response::Counter { card })
                | (ResponsePick::HolyLight(id), Response::HolyLight { card })
                | (ResponsePick::PassMagicBullet(id), Response::PassMagicBullet { card }) => {
                    card.id == *id
                }
                _ => false,
            })
            .cloned()
            .ok_or(OracleError::Script(format!(
                "{pick:?} is not a legal response for {defender}: {candidates:?}"
            )))
    }

    fn choose_target(
        &mut self,
        actor: CombatantId,
        _prompt: &str,
        candidates: &[CombatantId],
    ) -> Result<CombatantId, OracleError> {
        match self.next_if(|s| matches!(s, Scripted::Target(..))) {
            Some(Scripted::Target(target)) => Ok(target),
            _ => Self::first(actor, candidates),
        }
    }

    fn choose_jewels(
        &mut self,
        actor: CombatantId,
        _prompt: &str,
        candidates: &[JewelCount],
    ) -> Result<JewelCount, OracleError> {
        match self.next_if(|s| matches!(s, Scripted::Jewels(..))) {
            Some(Scripted::Jewels(jewels)) => Ok(jewels),
            _ => Self::first(actor, candidates),
        }
    }

    fn choose_amount(
        &mut self,
        actor: CombatantId,
        _prompt: &str,
        candidates: &[u8],
    ) -> Result<u8, OracleError> {
        match self.next_if(|s| matches!(s, Scripted::Amount(..))) {
            Some(Scripted::Amount(amount)) => Ok(amount),
            _ if candidates.contains(&0) => Ok(0),
            _ => Self::first(actor, candidates),
        }
    }

    fn choose_yes_no(&mut self, _actor: CombatantId, _prompt: &str) -> Result<bool, OracleError> {
        match self.next_if(|s| matches!(s, Scripted::YesNo(..))) {
            Some(Scripted::YesNo(answer)) => Ok(answer),
            _ => Ok(false),
        }
    }

    fn choose_multiple(
        &mut self,
        actor: CombatantId,
        _prompt: &str,
        candidates: &[Card],
        min: usize,
        _max: usize,
    ) -> Result<Vec<Card>, OracleError> {
        let Some(Scripted::Discard(ids)) = self.next_if(|s| matches!(s, Scripted::Discard(..)))
        else {
            return Ok(candidates.iter().take(min).cloned().collect());
        };
        ids.iter()
            .map(|id| {
                candidates
                    .iter()
                    .find(|c| c.id == *id)
                    .cloned()
                    .ok_or(OracleError::Script(format!("{id} was not offered to {actor}")))
            })
            .collect()
    }

    fn broadcast(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
