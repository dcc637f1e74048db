//! Testing utilities and harness for Folio

pub mod headless;
pub mod robot;
pub mod robot_assertions;
pub mod scheduler;

pub use headless::{ElementRecord, HeadlessSurface};
pub use robot::FrameRobot;
pub use robot_assertions::{assert_approx_eq, assert_point_approx_eq};
pub use scheduler::{ManualClock, ManualScheduler};

pub mod prelude {
    pub use crate::headless::*;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
    pub use crate::scheduler::*;
}
