pub mod entities;
pub mod errors;
pub mod form;
pub mod profile;

pub use entities::*;
pub use errors::*;
pub use form::*;
pub use profile::*;
