//! Value objects.

mod email;
mod sex;

pub use email::*;
pub use sex::*;
