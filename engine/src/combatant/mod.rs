pub mod action_points;
pub mod base_combatant;
pub mod flags;
pub mod hand;
pub mod heal;
pub mod id;
pub mod template;

pub use action_points::*;
pub use base_combatant::*;
pub use flags::*;
pub use hand::*;
pub use heal::*;
pub use id::*;
pub use template::*;
