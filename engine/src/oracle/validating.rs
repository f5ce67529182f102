use models::Card;

use crate::{
    Action, CombatantId, DecisionOracle, JewelCount, MAX_REPROMPTS, OracleError, Response,
    check_member, check_multiple,
};

/// Adapter that rejects answers outside the offered candidates and asks again, up to
/// `attempts` times per decision.
pub struct ValidatingOracle<O> {
    inner: O,
    attempts: usize,
}

impl<O: DecisionOracle> ValidatingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            attempts: *MAX_REPROMPTS,
        }
    }

    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts.max(1);
        self
    }

    pub fn into_inner(self) -> O {
        self.inner
    }

    fn retry<T>(
        &mut self,
        actor: CombatantId,
        mut ask: impl FnMut(&mut O) -> Result<T, OracleError>,
        check: impl Fn(&T) -> Result<(), String>,
    ) -> Result<T, OracleError> {
        for _ in 0..self.attempts {
            let answer = ask(&mut self.inner)?;
            match check(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => {
                    tracing::warn!(%actor, %reason, "rejected oracle answer");
                    self.inner.notify(actor, &format!("invalid choice: {reason}"));
                }
            }
        }
        Err(OracleError::RetriesExhausted {
            actor,
            attempts: self.attempts,
        })
    }
}

impl<O: DecisionOracle> DecisionOracle for ValidatingOracle<O> {
    fn choose_action(
        &mut self,
        actor: CombatantId,
        candidates: &[Action],
    ) -> Result<Action, OracleError> {
        self.retry(
            actor,
            |inner| inner.choose_action(actor, candidates),
            |answer| check_member(answer, candidates),
        )
    }

    fn choose_response(
        &mut self,
        defender: CombatantId,
        candidates: &[Response],
    ) -> Result<Response, OracleError> {
        self.retry(
            defender,
            |inner| inner.choose_response(defender, candidates),
            |answer| check_member(answer, candidates),
        )
    }

    fn choose_target(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[CombatantId],
    ) -> Result<CombatantId, OracleError> {
        self.retry(
            actor,
            |inner| inner.choose_target(actor, prompt, candidates),
            |answer| check_member(answer, candidates),
        )
    }

    fn choose_jewels(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[JewelCount],
    ) -> Result<JewelCount, OracleError> {
        self.retry(
            actor,
            |inner| inner.choose_jewels(actor, prompt, candidates),
            |answer| check_member(answer, candidates),
        )
    }

    fn choose_amount(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[u8],
    ) -> Result<u8, OracleError> {
        self.retry(
            actor,
            |inner| inner.choose_amount(actor, prompt, candidates),
            |answer| check_member(answer, candidates),
        )
    }

    fn choose_yes_no(&mut self, actor: CombatantId, prompt: &str) -> Result<bool, OracleError> {
        self.inner.choose_yes_no(actor, prompt)
    }

    fn choose_multiple(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[Card],
        min: usize,
        max: usize,
    ) -> Result<Vec<Card>, OracleError> {
        self.retry(
            actor,
            |inner| inner.choose_multiple(actor, prompt, candidates, min, max),
            |answer| check_multiple(answer, candidates, min, max),
        )
    }

    fn broadcast(&mut self, message: &str) {
        self.inner.broadcast(message)
    }

    fn notify(&mut self, actor: CombatantId, message: &str) {
        self.inner.notify(actor, message)
    }
}
