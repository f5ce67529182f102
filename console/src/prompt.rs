use std::io::{BufRead, Write};

use engine::{Action, CombatantId, DecisionOracle, JewelCount, OracleError, Response};
use models::Card;

/// Asks a human at the terminal. Answers are picked by index from the printed list.
pub struct ConsoleOracle<R, W> {
    input: R,
    output: W,
    names: Vec<String>,
}

impl<R: BufRead, W: Write> ConsoleOracle<R, W> {
    pub fn new(input: R, output: W, names: Vec<String>) -> Self {
        Self {
            input,
            output,
            names,
        }
    }

    fn name(&self, actor: CombatantId) -> String {
        self.names
            .get(actor.seat())
            .cloned()
            .unwrap_or_else(|| actor.to_string())
    }

    fn write(&mut self, text: &str) -> Result<(), OracleError> {
        writeln!(self.output, "{text}").map_err(|e| OracleError::Disconnected(e.to_string()))
    }

    fn read_line(&mut self) -> Result<String, OracleError> {
        self.output
            .flush()
            .map_err(|e| OracleError::Disconnected(e.to_string()))?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| OracleError::Disconnected(e.to_string()))?;
        if read == 0 {
            return Err(OracleError::Disconnected("end of input".to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn pick<T: Clone + std::fmt::Display>(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[T],
    ) -> Result<T, OracleError> {
        self.write(&format!("[{}] {prompt}", self.name(actor)))?;
        for (i, candidate) in candidates.iter().enumerate() {
            self.write(&format!("  {i}) {candidate}"))?;
        }
        loop {
            let line = self.read_line()?;
            match line.parse::<usize>().ok().and_then(|i| candidates.get(i)) {
                Some(choice) => return Ok(choice.clone()),
                None => self.write(&format!("pick 0..{}", candidates.len().saturating_sub(1)))?,
            }
        }
    }
}

impl<R: BufRead, W: Write> DecisionOracle for ConsoleOracle<R, W> {
    fn choose_action(
        &mut self,
        actor: CombatantId,
        candidates: &[Action],
    ) -> Result<Action, OracleError> {
        self.pick(actor, "choose an action", candidates)
    }

    fn choose_response(
        &mut self,
        defender: CombatantId,
        candidates: &[Response],
    ) -> Result<Response, OracleError> {
        self.pick(defender, "respond to the attack", candidates)
    }

    fn choose_target(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[CombatantId],
    ) -> Result<CombatantId, OracleError> {
        let labels: Vec<String> = candidates.iter().map(|id| self.name(*id)).collect();
        let label = self.pick(actor, prompt, &labels)?;
        labels
            .iter()
            .position(|l| *l == label)
            .and_then(|i| candidates.get(i).copied())
            .ok_or_else(|| OracleError::Disconnected("target vanished".to_string()))
    }

    fn choose_jewels(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[JewelCount],
    ) -> Result<JewelCount, OracleError> {
        self.pick(actor, prompt, candidates)
    }

    fn choose_amount(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[u8],
    ) -> Result<u8, OracleError> {
        self.pick(actor, prompt, candidates)
    }

    fn choose_yes_no(&mut self, actor: CombatantId, prompt: &str) -> Result<bool, OracleError> {
        self.write(&format!("[{}] {prompt} (y/n)", self.name(actor)))?;
        loop {
            match self.read_line()?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.write("answer y or n")?,
            }
        }
    }

    /// Reads space separated indices. Counts outside `min..=max` are left for the caller to reject.
    fn choose_multiple(
        &mut self,
        actor: CombatantId,
        prompt: &str,
        candidates: &[Card],
        min: usize,
        max: usize,
    ) -> Result<Vec<Card>, OracleError> {
        self.write(&format!("[{}] {prompt} (pick {min} to {max})", self.name(actor)))?;
        for (i, card) in candidates.iter().enumerate() {
            self.write(&format!("  {i}) {card}"))?;
        }
        loop {
            let line = self.read_line()?;
            let picked: Option<Vec<Card>> = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<usize>()
                        .ok()
                        .and_then(|i| candidates.get(i).cloned())
                })
                .collect();
            match picked {
                Some(cards) => return Ok(cards),
                None => self.write("unknown index")?,
            }
        }
    }

    fn broadcast(&mut self, message: &str) {
        let _ = writeln!(self.output, "* {message}");
    }

    fn notify(&mut self, actor: CombatantId, message: &str) {
        let name = self.name(actor);
        let _ = writeln!(self.output, "({name}) {message}");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use engine::{CombatantId, DecisionOracle, OracleError};

    use super::ConsoleOracle;

    fn oracle(input: &str) -> ConsoleOracle<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleOracle::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            vec!["ardent".to_string(), "brine".to_string()],
        )
    }

    #[test]
    fn test_reprompts_until_index_is_valid() -> Result<(), Box<dyn std::error::Error>> {
        let mut oracle = oracle("7\nx\n1\n");
        let amount = oracle.choose_amount(CombatantId(0), "heal", &[0, 1, 2])?;
        assert_eq!(amount, 1);
        Ok(())
    }

    #[test]
    fn test_targets_are_listed_by_name() -> Result<(), Box<dyn std::error::Error>> {
        let mut oracle = oracle("0\n");
        let target = oracle.choose_target(CombatantId(0), "attack whom?", &[CombatantId(1)])?;
        assert_eq!(target, CombatantId(1));
        assert!(String::from_utf8(oracle.output.clone())?.contains("0) brine"));
        Ok(())
    }

    #[test]
    fn test_end_of_input_disconnects() {
        let mut oracle = oracle("maybe\n");
        let answer = oracle.choose_yes_no(CombatantId(1), "use tear?");
        assert!(matches!(answer, Err(OracleError::Disconnected(_))));
    }
}
