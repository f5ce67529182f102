pub mod active;
pub mod store;

pub use active::*;
pub use store::*;
