//! [`Query`] definition.

pub mod select_promotions;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::select_promotions::SelectPromotions;
