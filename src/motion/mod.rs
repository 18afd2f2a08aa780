mod kinematic_state;
mod particle;

pub use kinematic_state::*;
pub use particle::*;
