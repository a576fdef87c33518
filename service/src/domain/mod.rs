//! Domain definitions.

pub mod cart;
pub mod new_building;
pub mod promotion;
pub mod property;

pub use self::{
    cart::Entity, new_building::NewBuilding, promotion::Promotion,
    property::Property,
};

/// Defines a free-text newtype, which must not be empty, must not start or
/// end with whitespace and must fit into the provided number of bytes.
macro_rules! define_text {
    (
        #[doc = $doc:literal]
        struct $name:ident(max = $max:literal);
    ) => {
        #[doc = $doc]
        #[derive(
            ::derive_more::AsRef,
            Clone,
            Debug,
            ::derive_more::Display,
            Eq,
            Hash,
            PartialEq,
        )]
        #[as_ref(forward)]
        pub struct $name(String);

        impl $name {
            #[doc = ::core::concat!(
                "Creates a new [`", ::core::stringify!($name),
                "`] if the given `text` is valid.",
            )]
            #[must_use]
            pub fn new(text: impl Into<String>) -> Option<Self> {
                let text = text.into();
                Self::check(&text).then_some(Self(text))
            }

            #[doc = ::core::concat!(
                "Checks whether the given `text` is a valid [`",
                ::core::stringify!($name), "`].",
            )]
            fn check(text: impl AsRef<str>) -> bool {
                let text = text.as_ref();
                text.trim() == text && !text.is_empty() && text.len() <= $max
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = &'static str;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s).ok_or(::core::concat!(
                    "invalid `", ::core::stringify!($name), "`",
                ))
            }
        }
    };
}

use define_text;
