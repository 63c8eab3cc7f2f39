pub mod constant;
pub mod math;
pub mod schedule;
pub mod utils;

pub use constant::*;
pub use math::*;
pub use schedule::*;
pub use utils::*;
