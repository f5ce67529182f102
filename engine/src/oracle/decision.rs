use models::Card;

use crate::{Action, CombatantId, JewelCount, OracleError, Response};

/// Source of every choice the engine cannot make on its own. Each call offers a finite
/// candidate set and expects one of its members back; blocking is allowed, reordering is not.
pub trait DecisionOracle {
    fn choose_action(
        &mut self,
        actor: CombatantId,
        candidates: &[Action],
    ) -> Result<Action, OracleError>;

    fn choose_response(
        &mut self,
        defender: CombatantId,
        candidates: &[Response],
    ) -> Result<Response, OracleError>;

    fn choose_target(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[CombatantId],
    ) -> Result<CombatantId, OracleError>;

    fn choose_jewels(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[JewelCount],
    ) -> Result<JewelCount, OracleError>;

    fn choose_amount(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[u8],
    ) -> Result<u8, OracleError>;

    fn choose_yes_no(&mut self, actor: CombatantId, prompt: &str) -> Result<bool, OracleError>;

    fn choose_multiple(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[Card],
        min: usize,
        max: usize,
    ) -> Result<Vec<Card>, OracleError>;

    fn broadcast(&mut self, _message: &str) {}

    fn notify(&mut self, _actor: CombatantId, _message: &str) {}
}
