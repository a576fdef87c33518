//! [`Property`] definitions.

use std::fmt;

use common::{define_kind, Money};
use derive_more::{Display, From, FromStr, Into};
use rust_decimal::Decimal;

use super::define_text;

/// Property listed for sale or rent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Title`] of this [`Property`] listing.
    pub title: Title,

    /// [`Address`] this [`Property`] is located at.
    pub address: Address,

    /// [`Deal`] this [`Property`] is listed for.
    pub deal: Deal,

    /// Price of this [`Property`].
    ///
    /// Monthly price, if this [`Property`] is listed for [`Deal::Rent`].
    pub price: Money,

    /// Living [`Area`] of this [`Property`], if known.
    pub area: Option<Area>,

    /// Number of rooms in this [`Property`], if known.
    pub rooms: Option<Rooms>,
}

/// ID of a [`Property`].
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
    #[doc = "Title of a [`Property`] listing."]
    struct Title(max = 256);
}

define_text! {
    #[doc = "Full address of a [`Property`] or a [`NewBuilding`].\n\n\
             [`NewBuilding`]: crate::domain::NewBuilding"]
    struct Address(max = 512);
}

define_kind! {
    #[doc = "Kind of a deal a [`Property`] is listed for."]
    #[serialize_all = "PascalCase"]
    enum Deal {
        #[doc = "Property is sold."]
        Sale = 1,

        #[doc = "Property is rented out."]
        Rent = 2,
    }
}

/// Area of a [`Property`] in square meters.
#[derive(Clone, Copy, Debug, Eq, Hash, Into, Ord, PartialEq, PartialOrd)]
pub struct Area(Decimal);

impl Area {
    /// Creates a new [`Area`] if the given `sq_meters` value is positive.
    #[must_use]
    pub fn new(sq_meters: Decimal) -> Option<Self> {
        (sq_meters > Decimal::ZERO).then_some(Self(sq_meters))
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m²", self.0.normalize())
    }
}

/// Number of rooms in a [`Property`].
pub type Rooms = u8;
