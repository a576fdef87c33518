//! [`Promotion`] definitions.

use std::{fmt, str::FromStr, sync::LazyLock};

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, money::Currency, unit, DateTimeOf, Money, Percent};
use derive_more::{AsRef, Display, From, Into};
use regex::Regex;
use rust_decimal::Decimal;

use super::define_text;

/// Promotional campaign of the agency.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Promotion {
    /// ID of this [`Promotion`].
    pub id: Id,

    /// [`Title`] of this [`Promotion`].
    pub title: Title,

    /// [`Description`] of this [`Promotion`].
    pub description: Description,

    /// [`Category`] this [`Promotion`] is shown for.
    pub category: Category,

    /// Indicator whether this [`Promotion`] is running.
    pub is_active: bool,

    /// [`Priority`] of this [`Promotion`] among others.
    pub priority: Priority,

    /// [`Discount`] offered by this [`Promotion`].
    pub discount: Discount,

    /// [`DateTime`] this [`Promotion`] is valid until, if limited.
    pub valid_until: Option<ExpirationDateTime>,

    /// [`Palette`] this [`Promotion`] is displayed with.
    pub palette: Palette,

    /// Text of a call-to-action button of this [`Promotion`].
    pub button_text: ButtonText,
}

impl Promotion {
    /// Indicates whether this [`Promotion`] may be displayed for the
    /// requested [`Category`].
    ///
    /// Only active [`Promotion`]s are eligible, and only when their
    /// [`Category`] [`matches`] the requested one.
    ///
    /// [`matches`]: Category::matches
    #[must_use]
    pub fn is_eligible(&self, requested: &Category) -> bool {
        self.is_active && self.category.matches(requested)
    }
}

/// ID of a [`Promotion`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u32);

define_text! {
    #[doc = "Title of a [`Promotion`]."]
    struct Title(max = 256);
}

define_text! {
    #[doc = "Description of a [`Promotion`]."]
    struct Description(max = 2048);
}

define_text! {
    #[doc = "Text of a [`Promotion`] call-to-action button."]
    struct ButtonText(max = 64);
}

/// Category of listings a [`Promotion`] is shown for (`buy`, `rent`,
/// `new-buildings`, etc.), or the [`Category::WILDCARD`] one.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Category(String);

impl Category {
    /// Tag of the [`Category`] matching any requested [`Category`].
    pub const WILDCARD: &'static str = "all";

    /// Creates a new [`Category`] if the given `tag` is valid.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Option<Self> {
        let tag = tag.into();
        Self::check(&tag).then_some(Self(tag))
    }

    /// Creates the wildcard [`Category`].
    #[must_use]
    pub fn all() -> Self {
        Self(Self::WILDCARD.to_owned())
    }

    /// Indicates whether this [`Category`] is the wildcard one.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.0 == Self::WILDCARD
    }

    /// Indicates whether a [`Promotion`] of this [`Category`] may be shown
    /// for the `requested` one.
    ///
    /// The wildcard applies to this side only: a wildcard [`Promotion`]
    /// matches any request, while a wildcard request matches wildcard
    /// [`Promotion`]s only.
    #[must_use]
    pub fn matches(&self, requested: &Self) -> bool {
        self == requested || self.is_wildcard()
    }

    /// Checks whether the given `tag` is a valid [`Category`].
    fn check(tag: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Category`] invariants:
        /// - Must not be empty;
        /// - Must consist of letters, digits, `-` and `_` only;
        /// - Must be no longer than 64 characters.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[\p{L}\p{N}_-]{1,64}$").expect("valid regex")
        });

        REGEX.is_match(tag.as_ref())
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Category`")
    }
}

/// Priority of a [`Promotion`]: the higher, the more prominently it's shown.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Display,
    Eq,
    From,
    derive_more::FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Priority(i32);

/// Discount offered by a [`Promotion`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Discount {
    /// [`Percent`] off a price.
    Percentage(Percent),

    /// Fixed [`Money`] amount off a price.
    Fixed(Money),

    /// Special offer described in text (a gift, free services, etc.).
    Special(SpecialOffer),
}

impl Discount {
    /// [`Currency`] of [`Discount::Fixed`] amounts specified without one.
    pub const DEFAULT_CURRENCY: Currency = Currency::Rub;

    /// Parses a [`Discount`] of the provided [`DiscountKind`] from its
    /// `value`.
    ///
    /// [`Discount::Fixed`] `value` may omit its [`Currency`], then the
    /// [`Discount::DEFAULT_CURRENCY`] is assumed.
    ///
    /// # Errors
    ///
    /// If the `value` doesn't represent a [`Discount`] of the provided
    /// [`DiscountKind`].
    pub fn parse(kind: DiscountKind, value: &str) -> Result<Self, &'static str> {
        match kind {
            DiscountKind::Percentage => {
                Percent::from_str(value).map(Self::Percentage)
            }
            DiscountKind::Fixed => Money::from_str(value)
                .or_else(|_| {
                    Decimal::from_str(value.trim())
                        .ok()
                        .filter(|d| !d.is_sign_negative())
                        .map(|amount| Money {
                            amount,
                            currency: Self::DEFAULT_CURRENCY,
                        })
                        .ok_or("invalid fixed discount amount")
                })
                .map(Self::Fixed),
            DiscountKind::Special => SpecialOffer::from_str(value)
                .map(Self::Special),
        }
    }

    /// Returns [`DiscountKind`] of this [`Discount`].
    #[must_use]
    pub fn kind(&self) -> DiscountKind {
        match self {
            Self::Percentage(_) => DiscountKind::Percentage,
            Self::Fixed(_) => DiscountKind::Fixed,
            Self::Special(_) => DiscountKind::Special,
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage(p) => write!(f, "-{p}"),
            Self::Fixed(m) => write!(f, "-{m}"),
            Self::Special(s) => write!(f, "{s}"),
        }
    }
}

define_kind! {
    #[doc = "Kind of a [`Discount`]."]
    #[serialize_all = "lowercase"]
    enum DiscountKind {
        #[doc = "[`Discount::Percentage`]."]
        Percentage = 1,

        #[doc = "[`Discount::Fixed`]."]
        Fixed = 2,

        #[doc = "[`Discount::Special`]."]
        Special = 3,
    }
}

define_text! {
    #[doc = "Text of a [`Discount::Special`] offer."]
    struct SpecialOffer(max = 256);
}

/// Colors a [`Promotion`] is displayed with.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    /// Background [`Color`].
    pub background: Color,

    /// Text [`Color`].
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color("#1f2937".to_owned()),
            text: Color("#ffffff".to_owned()),
        }
    }
}

/// CSS hex color (`#rgb` or `#rrggbb`).
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Color(String);

impl Color {
    /// Creates a new [`Color`] if the given `hex` is valid.
    #[must_use]
    pub fn new(hex: impl Into<String>) -> Option<Self> {
        let hex = hex.into();
        Self::check(&hex).then_some(Self(hex))
    }

    /// Checks whether the given `hex` is a valid [`Color`].
    fn check(hex: impl AsRef<str>) -> bool {
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
                .expect("valid regex")
        });

        REGEX.is_match(hex.as_ref())
    }
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Color`")
    }
}

/// [`DateTime`] until which a [`Promotion`] is valid.
pub type ExpirationDateTime = DateTimeOf<(Promotion, unit::Expiration)>;

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::money::Currency;
    use rust_decimal::Decimal;

    use super::{Category, Color, Discount, DiscountKind};

    fn category(tag: &str) -> Category {
        Category::from_str(tag).unwrap()
    }

    #[test]
    fn category_validates_tag() {
        assert!(Category::new("buy").is_some());
        assert!(Category::new("new-buildings").is_some());
        assert!(Category::new("").is_none());
        assert!(Category::new("buy rent").is_none());
        assert!(Category::new(" buy").is_none());
        assert!(Category::new("x".repeat(65)).is_none());
        assert!(Category::all().is_wildcard());
        assert!(!category("buy").is_wildcard());
    }

    #[test]
    fn wildcard_promotion_matches_any_request() {
        let all = Category::all();

        assert!(all.matches(&category("buy")));
        assert!(all.matches(&category("rent")));
        assert!(all.matches(&all));
    }

    #[test]
    fn wildcard_request_matches_wildcard_promotions_only() {
        assert!(!category("buy").matches(&Category::all()));
        assert!(!category("rent").matches(&Category::all()));
    }

    #[test]
    fn concrete_category_matches_itself_only() {
        assert!(category("buy").matches(&category("buy")));
        assert!(!category("buy").matches(&category("rent")));
        assert!(!category("buy").matches(&category("Buy")));
    }

    #[test]
    fn color_accepts_short_and_long_hex() {
        assert!(Color::new("#fff").is_some());
        assert!(Color::new("#1A2b3C").is_some());
        assert!(Color::new("fff").is_none());
        assert!(Color::new("#ffff").is_none());
        assert!(Color::new("#ggg").is_none());
        assert_eq!(Color::from_str("red"), Err("invalid `Color`"));
    }

    #[test]
    fn parses_percentage_discount() {
        let discount = Discount::parse(DiscountKind::Percentage, "15").unwrap();

        assert_eq!(discount.kind(), DiscountKind::Percentage);
        assert_eq!(discount.to_string(), "-15%");
        assert!(Discount::parse(DiscountKind::Percentage, "120").is_err());
    }

    #[test]
    fn parses_fixed_discount_with_default_currency() {
        assert_eq!(
            Discount::parse(DiscountKind::Fixed, "500000"),
            Ok(Discount::Fixed(common::Money {
                amount: Decimal::from(500_000),
                currency: Currency::Rub,
            })),
        );
        assert_eq!(
            Discount::parse(DiscountKind::Fixed, "1000 USD")
                .unwrap()
                .to_string(),
            "-1000 USD",
        );
        assert_eq!(
            Discount::parse(DiscountKind::Fixed, "-1"),
            Err("invalid fixed discount amount"),
        );
    }

    #[test]
    fn parses_special_discount() {
        let discount =
            Discount::parse(DiscountKind::Special, "Free legal support")
                .unwrap();

        assert_eq!(discount.kind(), DiscountKind::Special);
        assert_eq!(discount.to_string(), "Free legal support");
        assert!(Discount::parse(DiscountKind::Special, "").is_err());
    }

    #[test]
    fn discount_kind_uses_lowercase_tags() {
        assert_eq!(
            DiscountKind::from_str("percentage"),
            Ok(DiscountKind::Percentage),
        );
        assert_eq!(DiscountKind::Fixed.to_string(), "fixed");
        assert!(DiscountKind::from_str("Special").is_err());
    }
}
