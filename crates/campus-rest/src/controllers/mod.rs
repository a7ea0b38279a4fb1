//! REST API controllers.

pub mod course_controller;
pub mod health_controller;
pub mod professor_controller;
pub mod student_controller;
pub mod subject_controller;

pub use health_controller::*;
