use models::{CardId, TeamColor};

use crate::{CombatantId, EventType, HandlerSlot};

/// Failures of the decision oracle itself. All of them abort the match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("decision oracle disconnected: {0}")]
    Disconnected(String),
    #[error("no valid answer from {actor} after {attempts} attempts")]
    RetriesExhausted { actor: CombatantId, attempts: usize },
    #[error("scripted decision mismatch: {0}")]
    Script(String),
}

/// Protocol and programmer errors. The pipeline and resolver never catch these.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("event {0} is not declared in the {1} timeline")]
    UndeclaredEvent(EventType, &'static str),
    #[error("slot {slot:?} is not declared for event {event}")]
    UndeclaredSlot { event: EventType, slot: HandlerSlot },
    #[error("action {action} is not available to {actor}")]
    UnavailableAction { actor: CombatantId, action: String },
    #[error("{actor} has no {category} or general action point left")]
    NoActionPoints {
        actor: CombatantId,
        category: &'static str,
    },
    #[error("ledger violation: {0}")]
    Ledger(String),
    #[error("negative final damage ({damage} - {healing}) for {defender}")]
    NegativeDamage {
        defender: CombatantId,
        damage: u8,
        healing: u8,
    },
    #[error("resolution depth {0} exceeds the bound")]
    ResolutionDepthExceeded(usize),
    #[error("unknown combatant {0}")]
    UnknownCombatant(CombatantId),
    #[error("unknown team {0}")]
    UnknownTeam(TeamColor),
    #[error("card {card} is not in the hand of {owner}")]
    CardNotInHand { owner: CombatantId, card: CardId },
    #[error("invariant violated: {0}")]
    Invariant(String),
    #[error("oracle answer outside the offered candidates: {0}")]
    OracleContract(String),
    #[error(transparent)]
    Oracle(#[from] OracleError),
    #[error("match did not finish within {0} turns")]
    TurnLimitExceeded(usize),
}

pub type EngineResult<T> = Result<T, EngineError>;
