pub mod contract;
pub mod decision;
pub mod random;
pub mod scripted;
pub mod validating;

pub use contract::*;
pub use decision::*;
pub use random::*;
pub use scripted::*;
pub use validating::*;
