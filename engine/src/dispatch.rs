use models::TeamColor;

use crate::{
    ActionKind, AttackOutcome, Combatant, CombatantId, EffectKind, JewelCount, MatchOutcome,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantSummary {
    pub id: CombatantId,
    pub name: String,
    pub team: TeamColor,
}

impl std::fmt::Display for CombatantSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Combatant<id={}, name={}, team={}>",
            self.id, self.name, self.team
        )
    }
}

impl From<&Combatant> for CombatantSummary {
    fn from(value: &Combatant) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            team: value.team,
        }
    }
}

impl From<&mut Combatant> for CombatantSummary {
    fn from(value: &mut Combatant) -> Self {
        CombatantSummary::from(&*value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchEvent {
    Log(String),
    Warning(String),
    TurnStarted(CombatantSummary, usize),
    ActionTaken(CombatantId, String),
    AttackResolved {
        attacker: CombatantId,
        defender: CombatantId,
        kind: ActionKind,
        outcome: Option<AttackOutcome>,
        final_damage: u8,
    },
    EffectApplied(CombatantId, EffectKind),
    EffectConsumed(CombatantId, EffectKind),
    CardsDrawn(CombatantId, usize),
    CardsDiscarded(CombatantId, usize),
    MoraleChanged(TeamColor, i32),
    GrailChanged(TeamColor, u8),
    JewelsGained(TeamColor, JewelCount),
    MatchOver(MatchOutcome),
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchEvent::Log(s) => write!(f, "{s}"),
            MatchEvent::Warning(s) => write!(f, "warning: {s}"),
            MatchEvent::TurnStarted(actor, turn) => write!(f, "turn {turn}: {actor}"),
            MatchEvent::ActionTaken(actor, action) => write!(f, "{actor} plays {action}"),
            MatchEvent::AttackResolved {
                attacker,
                defender,
                kind,
                outcome,
                final_damage,
            } => {
                let outcome = outcome.map(|o| o.to_string()).unwrap_or("direct".to_string());
                write!(
                    f,
                    "{kind} {attacker} -> {defender}: {outcome}, {final_damage} damage"
                )
            }
            MatchEvent::EffectApplied(target, kind) => write!(f, "{kind} applied to {target}"),
            MatchEvent::EffectConsumed(target, kind) => write!(f, "{kind} on {target} consumed"),
            MatchEvent::CardsDrawn(who, n) => write!(f, "{who} draws {n}"),
            MatchEvent::CardsDiscarded(who, n) => write!(f, "{who} discards {n}"),
            MatchEvent::MoraleChanged(team, morale) => write!(f, "{team} morale is now {morale}"),
            MatchEvent::GrailChanged(team, grail) => write!(f, "{team} grail is now {grail}"),
            MatchEvent::JewelsGained(team, jewels) => write!(f, "{team} gains {jewels}"),
            MatchEvent::MatchOver(outcome) => write!(f, "{outcome}"),
        }
    }
}
