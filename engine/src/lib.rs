pub mod ability;
pub mod action;
pub mod combatant;
pub mod context;
pub mod controller;
pub mod deck;
pub mod dispatch;
pub mod effect;
pub mod error;
pub mod event;
pub mod ledger;
pub mod oracle;
pub mod pipeline;
pub mod resolver;
pub mod result;
pub mod statics;
pub mod team;
pub mod template;

pub use ability::*;
pub use action::*;
pub use combatant::*;
pub use context::*;
pub use controller::*;
pub use deck::*;
pub use dispatch::*;
pub use effect::*;
pub use error::*;
pub use event::*;
pub use ledger::*;
pub use oracle::*;
pub use pipeline::*;
pub use resolver::*;
pub use result::*;
pub use statics::*;
pub use team::*;
pub use template::*;
