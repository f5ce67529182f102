use models::TeamColor;

use crate::{CombatantId, JewelLedger};

#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    pub color: TeamColor,
    pub morale: i32,
    pub grail: u8,
    pub jewels: JewelLedger,
    pub roster: Vec<CombatantId>,
}

impl Team {
    pub fn is_defeated(&self) -> bool {
        self.morale <= 0
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Team<{}, morale={}, grail={}, jewels={}>",
            self.color, self.morale, self.grail, self.jewels
        )
    }
}
