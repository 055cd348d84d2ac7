pub mod broadcast;
pub mod store;

pub use broadcast::*;
pub use store::*;
