use models::Card;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{Action, CombatantId, DecisionOracle, JewelCount, OracleError, Response};

/// Picks uniformly among the offered candidates. Used for simulations and benches.
#[derive(Clone, Debug)]
pub struct RandomOracle {
    rng: StdRng,
}

impl RandomOracle {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    fn pick<T: Clone>(&mut self, actor: CombatantId, candidates: &[T]) -> Result<T, OracleError> {
        if candidates.is_empty() {
            return Err(OracleError::Disconnected(format!(
                "no candidates offered to {actor}"
            )));
        }
        let index = self.rng.random_range(0..candidates.len());
        Ok(candidates[index].clone())
    }
}

impl DecisionOracle for RandomOracle {
    fn choose_action(
        &mut self,
        actor: CombatantId,
        candidates: &[Action],
    ) -> Result<Action, OracleError> {
        self.pick(actor, candidates)
    }

    fn choose_response(
        &mut self,
        defender: CombatantId,
        candidates: &[Response],
    ) -> Result<Response, OracleError> {
        self.pick(defender, candidates)
    }

    fn choose_target(
        &mut self,
        actor: CombatantId,
        _prompt: &str,
        candidates: &[CombatantId],
    ) -> Result<CombatantId, OracleError> {
        self.pick(actor, candidates)
    }

    fn choose_jewels(
        &mut self,
        actor: CombatantId,
        _prompt: &str,
        candidates: &[JewelCount],
    ) -> Result<JewelCount, OracleError> {
        self.pick(actor, candidates)
    }

    fn choose_amount(
        &mut self,
        actor: CombatantId,
        _prompt: &str,
        candidates: &[u8],
    ) -> Result<u8, OracleError> {
        self.pick(actor, candidates)
    }

    fn choose_yes_no(&mut self, _actor: CombatantId, _prompt: &str) -> Result<bool, OracleError> {
        Ok(self.rng.random_bool(0.5))
    }

    fn choose_multiple(
        &mut self,
        _actor: CombatantId,
        _prompt: &str,
        candidates: &[Card],
        min: usize,
        max: usize,
    ) -> Result<Vec<Card>, OracleError> {
        let count = self.rng.random_range(min..=max.min(candidates.len()).max(min));
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.shuffle(&mut self.rng);
        Ok(indices
            .into_iter()
            .take(count)
            .map(|index| candidates[index].clone())
            .collect())
    }
}
