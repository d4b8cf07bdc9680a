//! CLI library components for the robot catalog guide.

pub mod logging;
pub mod output;
pub mod tables;
