//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        write!(f, "{} {currency}", amount.normalize())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    /// Parses [`Money`] in `{amount}{currency}` or `{amount} {currency}`
    /// format, where `currency` is a three-letter currency code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .char_indices()
            .rev()
            .nth(2)
            .map(|(at, _)| at)
            .filter(|at| *at > 0)
            .ok_or("too short")?;

        let (amount, currency) = s.split_at(split);
        let amount = Decimal::from_str(amount.trim_end())
            .map_err(|_| "invalid amount")?;
        if amount.is_sign_negative() {
            return Err("negative amount");
        }
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    #[serialize_all = "UPPERCASE"]
    enum Currency {
        #[doc = "Russian Ruble."]
        Rub = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}
