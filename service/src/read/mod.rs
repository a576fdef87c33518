//! Read entities definitions.

pub mod promotion;

pub use self::promotion::Selection;
