//! Systems - pure physics shared by every entity kind

pub mod ballistics;

pub use ballistics::{launch_speed, Trajectory};
