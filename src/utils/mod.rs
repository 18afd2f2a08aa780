pub mod errors;
mod constants;
mod constants_config;

pub use errors::PhysicsError;
pub use constants::*;
pub use constants_config::*;
