use models::Card;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    General,
    Attack,
    Magic,
    Special,
}

impl ActionCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ActionCategory::General => "general",
            ActionCategory::Attack => "attack",
            ActionCategory::Magic => "magic",
            ActionCategory::Special => "special",
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    EndTurn,
    Attack { card: Card },
    Magic { card: Card },
    Synthesize,
    Purchase,
    Refine,
}

impl Action {
    /// Point category the action prefers to spend; `None` for ending the turn.
    pub fn category(&self) -> Option<ActionCategory> {
        match self {
            Action::EndTurn => None,
            Action::Attack { .. } => Some(ActionCategory::Attack),
            Action::Magic { .. } => Some(ActionCategory::Magic),
            Action::Synthesize | Action::Purchase | Action::Refine => Some(ActionCategory::Special),
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            Action::Attack { card } | Action::Magic { card } => Some(card),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::EndTurn => write!(f, "end turn"),
            Action::Attack { card } => write!(f, "attack with {card}"),
            Action::Magic { card } => write!(f, "cast {card}"),
            Action::Synthesize => write!(f, "synthesize"),
            Action::Purchase => write!(f, "purchase"),
            Action::Refine => write!(f, "refine"),
        }
    }
}
