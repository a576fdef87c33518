//! [`NewBuilding`] definitions.

use common::Money;
use derive_more::{Display, From, FromStr, Into};

use super::{define_text, property};

/// Building under construction (or recently completed), which apartments are
/// sold directly by its developer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NewBuilding {
    /// ID of this [`NewBuilding`].
    pub id: Id,

    /// [`Name`] of this [`NewBuilding`] (residential complex).
    pub name: Name,

    /// [`property::Address`] this [`NewBuilding`] is located at.
    pub address: property::Address,

    /// [`Developer`] of this [`NewBuilding`], if known.
    pub developer: Option<Developer>,

    /// Lowest apartment price in this [`NewBuilding`], if published.
    pub price_from: Option<Money>,

    /// Year this [`NewBuilding`] is (or was) completed, if known.
    pub completion_year: Option<u16>,
}

/// ID of a [`NewBuilding`].
///
/// Numerically may coincide with a [`property::Id`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u32);

define_text! {
    #[doc = "Name of a [`NewBuilding`]."]
    struct Name(max = 256);
}

define_text! {
    #[doc = "Developer company of a [`NewBuilding`]."]
    struct Developer(max = 256);
}
