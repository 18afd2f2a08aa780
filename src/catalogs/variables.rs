//! Variable names shared by the catalogs and their callers.

pub const RADIUS: &str = "radius";
pub const ANGULAR_VELOCITY: &str = "angular_velocity";
pub const LINEAR_VELOCITY: &str = "linear_velocity";
pub const PERIOD: &str = "period";
pub const FREQUENCY: &str = "frequency";
pub const CENTRIPETAL_ACCELERATION: &str = "centripetal_acceleration";
pub const ARC_LENGTH: &str = "arc_length";
pub const ANGULAR_DISPLACEMENT: &str = "angular_displacement";
pub const TIME: &str = "time";

pub const INITIAL_ANGULAR_VELOCITY: &str = "initial_angular_velocity";
pub const FINAL_ANGULAR_VELOCITY: &str = "final_angular_velocity";
pub const ANGULAR_ACCELERATION: &str = "angular_acceleration";
pub const TANGENTIAL_ACCELERATION: &str = "tangential_acceleration";
pub const TOTAL_ACCELERATION: &str = "total_acceleration";

pub const FORCE: &str = "force";
pub const MASS: &str = "mass";
pub const ACCELERATION: &str = "acceleration";
pub const WEIGHT: &str = "weight";
pub const GRAVITY: &str = "gravity";
