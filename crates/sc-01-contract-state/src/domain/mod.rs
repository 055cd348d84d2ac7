pub mod actions;
pub mod entities;
pub mod errors;
pub mod reducer;

pub use actions::*;
pub use entities::*;
pub use errors::*;
pub use reducer::*;
