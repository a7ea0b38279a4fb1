//! Data Transfer Objects.
//!
//! Request bodies use the Portuguese wire names (`nome`, `descricao`,
//! `cargaHoraria`, `sexo`) and validation messages; representations carry
//! `_links` built from the caller's base URI.

mod course_dto;
mod professor_dto;
mod student_dto;
mod subject_dto;

pub use course_dto::*;
pub use professor_dto::*;
pub use student_dto::*;
pub use subject_dto::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

/// Reference to a professor inside a course or subject body.
///
/// Only `id` is read; any other professor fields sent along are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfessorRef {
    pub id: i64,
}

/// Checks a workload against inclusive bounds, with a distinct message for
/// each side.
fn workload_within(hours: i32, min: i32, max: i32) -> Result<(), ValidationError> {
    let message = if hours < min {
        format!("A quantidade mínima de carga horária é {} horas", min)
    } else if hours > max {
        format!("A quantidade máxima de carga horária é {} horas", max)
    } else {
        return Ok(());
    };

    let mut error = ValidationError::new("range");
    error.message = Some(message.into());
    Err(error)
}
