pub mod matches;

#[allow(unused_imports)]
pub use matches::*;
