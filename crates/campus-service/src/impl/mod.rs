//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `student_service.rs`).
//! Each implementation is generic over the [`Store`] so the same code
//! runs on the in-memory and MySQL backends.

pub mod course_service_impl;
pub mod professor_service_impl;
pub mod student_service_impl;
pub mod subject_service_impl;

pub use course_service_impl::CourseServiceImpl;
pub use professor_service_impl::ProfessorServiceImpl;
pub use student_service_impl::StudentServiceImpl;
pub use subject_service_impl::SubjectServiceImpl;

use crate::mappers::{render_all, Render};
use crate::search::{search, SearchResult};
use campus_core::{CampusError, CampusResult, LinkBase, ProfessorId, SearchParams, SortSpec};
use campus_domain::Professor;
use campus_repository::{Session, Store, Stored};

/// Loads a resource inside the session or fails with `NotFound`.
pub(crate) async fn find_existing<T: Stored, X: Session>(
    session: &mut X,
    id: T::Id,
) -> CampusResult<T> {
    session
        .find::<T>(id)
        .await?
        .ok_or_else(|| CampusError::not_found(T::NAME, id))
}

/// Renders one resource from a read-only session.
pub(crate) async fn fetch<T: Render, S: Store>(
    store: &S,
    id: T::Id,
    base: &LinkBase,
) -> CampusResult<T::Output> {
    let mut session = store.begin().await?;
    let item = find_existing::<T, _>(&mut session, id).await?;
    item.render(&mut session, base).await
}

/// Renders the whole collection by ascending ID.
pub(crate) async fn fetch_all<T: Render, S: Store>(
    store: &S,
    base: &LinkBase,
) -> CampusResult<Vec<T::Output>> {
    let mut session = store.begin().await?;
    let items = session.list_all::<T>(SortSpec::by_id()).await?;
    render_all(items, &mut session, base).await
}

/// Runs a search from a read-only session.
pub(crate) async fn fetch_page<T: Render, S: Store>(
    store: &S,
    params: &SearchParams,
    default_size: u64,
    base: &LinkBase,
) -> CampusResult<SearchResult<T::Output>> {
    let mut session = store.begin().await?;
    search::<T, _>(&mut session, params, default_size, base).await
}

/// Fails with `NotFound` when a referenced professor does not exist.
pub(crate) async fn require_professor<X: Session>(
    session: &mut X,
    professor: Option<ProfessorId>,
) -> CampusResult<()> {
    if let Some(id) = professor {
        find_existing::<Professor, _>(session, id).await?;
    }
    Ok(())
}
