use bitflags::bitflags;

bitflags! {
    /// Which actions may currently target a combatant. Effects clear and restore these.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Targetability: u8 {
        const CAN_BE_ATTACKED = 1 << 0;
        const CAN_BE_POISONED = 1 << 1;
        const CAN_BE_WEAKENED = 1 << 2;
        const CAN_BE_SHIELDED = 1 << 3;
    }
}

impl Default for Targetability {
    fn default() -> Self {
        Targetability::all()
    }
}
