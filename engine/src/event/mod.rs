pub mod bus;
pub mod payload;
pub mod timeline;

pub use bus::*;
pub use payload::*;
pub use timeline::*;
