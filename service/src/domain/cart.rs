//! [`Item`] of a [`Cart`] definitions.
//!
//! [`Cart`]: crate::Cart

use std::{fmt, str::FromStr};

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::From;

use super::{new_building, property, NewBuilding, Property};

/// Listing selected into a [`Cart`].
///
/// [`Cart`]: crate::Cart
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Item {
    /// [`ItemId`] of this [`Item`].
    pub id: ItemId,

    /// [`Entity`] this [`Item`] refers to.
    pub entity: Entity,

    /// [`DateTime`] when this [`Item`] was added.
    pub added_at: AdditionDateTime,
}

impl Item {
    /// Creates a new [`Item`] for the provided [`Entity`] added at the
    /// provided [`DateTime`].
    #[must_use]
    pub fn new(entity: impl Into<Entity>, added_at: AdditionDateTime) -> Self {
        let entity = entity.into();
        Self {
            id: entity.item_id(),
            entity,
            added_at,
        }
    }

    /// Returns [`Kind`] of this [`Item`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.id.kind
    }
}

/// Entity which can be selected into a [`Cart`].
///
/// [`Cart`]: crate::Cart
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum Entity {
    /// [`Property`] listing.
    Property(Property),

    /// [`NewBuilding`] listing.
    NewBuilding(NewBuilding),
}

impl Entity {
    /// Returns [`Kind`] of this [`Entity`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Property(_) => Kind::Property,
            Self::NewBuilding(_) => Kind::NewBuilding,
        }
    }

    /// Returns the numeric ID of this [`Entity`] inside its [`Kind`].
    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        match self {
            Self::Property(p) => p.id.into(),
            Self::NewBuilding(b) => b.id.into(),
        }
    }

    /// Returns the composite [`ItemId`] of this [`Entity`].
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        ItemId {
            kind: self.kind(),
            entity_id: self.entity_id(),
        }
    }
}

define_kind! {
    #[doc = "Kind of an [`Entity`]."]
    #[serialize_all = "PascalCase"]
    enum Kind {
        #[doc = "[`Property`] listing."]
        Property = 1,

        #[doc = "[`NewBuilding`] listing."]
        NewBuilding = 2,
    }
}

/// Numeric ID of an [`Entity`], unique inside its [`Kind`] only.
pub type EntityId = u32;

/// Composite identity of an [`Item`], unique across all [`Kind`]s.
///
/// Represented as `{Kind}-{EntityId}` string, e.g. `Property-5`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ItemId {
    /// [`Kind`] of the [`Entity`].
    pub kind: Kind,

    /// [`EntityId`] of the [`Entity`].
    pub entity_id: EntityId,
}

impl ItemId {
    /// Creates a new [`ItemId`] of the provided [`Kind`] and [`EntityId`].
    #[must_use]
    pub const fn new(kind: Kind, entity_id: EntityId) -> Self {
        Self { kind, entity_id }
    }
}

impl From<property::Id> for ItemId {
    fn from(id: property::Id) -> Self {
        Self::new(Kind::Property, id.into())
    }
}

impl From<new_building::Id> for ItemId {
    fn from(id: new_building::Id) -> Self {
        Self::new(Kind::NewBuilding, id.into())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.entity_id)
    }
}

impl FromStr for ItemId {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s.split_once('-').ok_or("invalid `ItemId`")?;
        Ok(Self {
            kind: Kind::from_str(kind).map_err(|_| "invalid `ItemId` kind")?,
            entity_id: id.parse().map_err(|_| "invalid `ItemId` entity ID")?,
        })
    }
}

/// [`DateTime`] when an [`Item`] was added into a [`Cart`].
///
/// [`Cart`]: crate::Cart
pub type AdditionDateTime = DateTimeOf<(Item, unit::Addition)>;
