lazy_static::lazy_static! {
    pub static ref STARTING_MORALE: i32 = 15;
    pub static ref GRAIL_TO_WIN: u8 = 5;
    pub static ref TEAM_JEWEL_CAPACITY: u8 = 5;
    pub static ref COMBATANT_JEWEL_CAPACITY: u8 = 3;
    pub static ref HEAL_CAPACITY: u8 = 2;
    pub static ref HAND_LIMIT: usize = 6;
    pub static ref INITIAL_HAND: usize = 4;
    pub static ref BASE_DAMAGE: u8 = 2;
    pub static ref MAGIC_BULLET_DAMAGE: u8 = 2;
    pub static ref POISON_DAMAGE: u8 = 1;
    pub static ref WEAKNESS_DRAW: u8 = 3;
    pub static ref SYNTHESIS_COST: u8 = 3;
    pub static ref SPECIAL_ACTION_DRAW: u8 = 3;
    pub static ref MAX_RESOLUTION_DEPTH: usize = 32;
    pub static ref MAX_TURNS: usize = 10_000;
    pub static ref MAX_REPROMPTS: usize = 3;
}
