pub mod card;
pub mod card_type;
pub mod element;
pub mod id;
pub mod kind;
pub mod skill;
pub mod team;

pub use card::*;
pub use card_type::*;
pub use element::*;
pub use id::*;
pub use kind::*;
pub use skill::*;
pub use team::*;
