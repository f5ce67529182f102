use std::time::Duration;

use models::TeamColor;

use crate::{MatchEvent, Team};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinReason {
    MoraleDepleted,
    GrailCompleted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: TeamColor,
    pub reason: WinReason,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            WinReason::MoraleDepleted => write!(
                f,
                "{} wins: {} morale depleted",
                self.winner,
                self.winner.inverse()
            ),
            WinReason::GrailCompleted => write!(f, "{} wins by grail", self.winner),
        }
    }
}

#[derive(Debug)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub turns: usize,
    pub events: Vec<MatchEvent>,
    pub duration: Duration,
    pub teams: Vec<Team>,
}

impl MatchResult {
    pub fn winner(&self) -> TeamColor {
        self.outcome.winner
    }

    pub fn short_str(&self) -> String {
        match self.outcome.reason {
            WinReason::MoraleDepleted => format!("{} (morale)", self.outcome.winner),
            WinReason::GrailCompleted => format!("{} (grail)", self.outcome.winner),
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "[{:?}] {} after {} turns",
            self.duration, self.outcome, self.turns
        )?;
        for team in &self.teams {
            writeln!(f, "  {team}")?;
        }
        for event in &self.events {
            if let MatchEvent::TurnStarted(..) = event {
                writeln!(f, "{event}")?;
            } else {
                writeln!(f, "  {event}")?;
            }
        }
        Ok(())
    }
}
