pub mod base_ability;
pub mod berserker;
pub mod bow_goddess;
pub mod character;
pub mod sword_master;

pub use base_ability::*;
pub use berserker::*;
pub use bow_goddess::*;
pub use character::*;
pub use sword_master::*;
