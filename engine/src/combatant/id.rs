/// Seat index of a combatant; seat order is roster order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CombatantId(pub usize);

impl CombatantId {
    pub fn seat(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "seat{}", self.0)
    }
}

impl std::fmt::Debug for CombatantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CombatantId({})", self.0)
    }
}
