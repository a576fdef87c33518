//! Marker types.

/// Marker type describing an entity being added to a collection.
#[derive(Clone, Copy, Debug)]
pub struct Addition;

/// Marker type describing an entity expiration.
#[derive(Clone, Copy, Debug)]
pub struct Expiration;
