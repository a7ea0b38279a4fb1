//! # Campus Service
//!
//! Business logic for the campus records API: request validation,
//! the generic search engine, the enrollment manager and one service per
//! resource. Services are traits so the REST layer can hold them as
//! `Arc<dyn ...>`; the implementations in [`r#impl`] are generic over the
//! storage backend.

pub mod course_service;
pub mod dto;
pub mod enrollment;
pub mod mappers;
pub mod professor_service;
pub mod search;
pub mod student_service;
pub mod subject_service;
pub mod r#impl;

pub use course_service::*;
pub use dto::*;
pub use mappers::Render;
pub use professor_service::*;
pub use search::*;
pub use student_service::*;
pub use subject_service::*;
pub use r#impl::{CourseServiceImpl, ProfessorServiceImpl, StudentServiceImpl, SubjectServiceImpl};
