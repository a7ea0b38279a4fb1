//! # Campus Repository
//!
//! Storage layer behind the services:
//!
//! ```text
//! Service
//!   ↓  S: Store                 (opens sessions)
//! S::Session                    (one unit of work, commit or roll back)
//!   ↓
//! InMemoryStore | MySqlStore
//! ```
//!
//! Every session operation is generic over [`Stored`], so the four
//! resources share one find/search/insert/update/delete path per backend.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod stored;
pub mod traits;

pub use memory::{InMemoryStore, MemorySession, Table, Tables};
pub use mysql::{MySqlSession, MySqlStore};
pub use pool::*;
pub use stored::Stored;
pub use traits::*;
