//! Infrastructure layer.

pub mod catalog;

#[cfg(feature = "json")]
pub use self::catalog::Json;
pub use self::catalog::{Catalog, Memory};
