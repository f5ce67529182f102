pub mod available;
pub mod execute;
pub mod kind;
pub mod response;

pub use available::*;
pub use execute::*;
pub use kind::*;
pub use response::*;
