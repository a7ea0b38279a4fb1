//! Domain entities.

mod course;
mod professor;
mod student;
mod subject;

pub use course::*;
pub use professor::*;
pub use student::*;
pub use subject::*;
