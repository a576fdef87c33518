//! [`Catalog`]-related implementations.

#[cfg(feature = "json")]
pub mod json;

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::domain::{promotion::Category, Promotion};

#[cfg(feature = "json")]
pub use self::json::Json;

/// Source of [`Promotion`]s.
///
/// Selecting by a [`Category`] returns the [`Promotion`]s tagged to be shown
/// for it, in their original order, whether active or not.
pub use common::Handler as Catalog;

/// In-memory [`Catalog`] of [`Promotion`]s.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// [`Promotion`]s of this [`Catalog`], in their original order.
    promotions: Vec<Promotion>,
}

impl Memory {
    /// Creates a new [`Memory`] [`Catalog`] of the provided [`Promotion`]s.
    #[must_use]
    pub fn new(promotions: Vec<Promotion>) -> Self {
        Self { promotions }
    }
}

impl Catalog<Select<By<Vec<Promotion>, Category>>> for Memory {
    type Ok = Vec<Promotion>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Promotion>, Category>>,
    ) -> Result<Self::Ok, Self::Err> {
        let requested = by.into_inner();
        Ok(self
            .promotions
            .iter()
            .filter(|p| p.category.matches(&requested))
            .cloned()
            .collect())
    }
}

/// [`Catalog`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Failed to read [`Json`] catalog file.
    #[cfg(feature = "json")]
    #[display("cannot read promotions file: {_0}")]
    Io(std::io::Error),

    /// [`Json`] catalog file is malformed.
    #[cfg(feature = "json")]
    #[display("malformed promotions file: {_0}")]
    Json(serde_json::Error),
}
