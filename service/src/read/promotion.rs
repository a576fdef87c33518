//! [`Promotion`]-related read definitions.

use std::fmt;

use common::DateTime;
use time::macros::format_description;

use crate::domain::{promotion::ExpirationDateTime, Promotion};

/// [`Promotion`]s chosen to be displayed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selection<P = Promotion> {
    /// Top-ranked [`Promotion`], if there is any eligible.
    pub primary: Option<Highlight<P>>,

    /// Next-ranked [`Promotion`]s shown as alternatives to the
    /// [`Selection::primary`] one.
    pub secondary: Vec<Highlight<P>>,
}

impl<P> Selection<P> {
    /// Creates a new empty [`Selection`], meaning nothing is to be displayed.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            primary: None,
            secondary: Vec::new(),
        }
    }

    /// Indicates whether this [`Selection`] has nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
    }

    /// Iterates over all the [`Highlight`]s of this [`Selection`], starting
    /// from the [`Selection::primary`] one.
    pub fn iter(&self) -> impl Iterator<Item = &Highlight<P>> {
        self.primary.iter().chain(&self.secondary)
    }
}

impl<P> Default for Selection<P> {
    fn default() -> Self {
        Self::empty()
    }
}

/// [`Promotion`] prepared for display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Highlight<P = Promotion> {
    /// Displayed [`Promotion`].
    pub promotion: P,

    /// [`TimeLeft`] until the [`Promotion`] ends, if it's limited in time.
    pub time_left: Option<TimeLeft>,
}

/// Time left until a [`Promotion`] ends, rounded to calendar days.
///
/// [`TimeLeft::FewDays`] and [`TimeLeft::Days`] are kept apart, because
/// localizations pluralize them differently.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeLeft {
    /// [`Promotion`] ends today (or has ended already).
    EndsToday,

    /// [`Promotion`] ends tomorrow.
    OneDay,

    /// [`Promotion`] ends in 2 or 3 days.
    FewDays(u8),

    /// [`Promotion`] ends in 4 to 7 days.
    Days(u8),

    /// [`Promotion`] ends after more than a week, on the provided date.
    Until(time::Date),
}

impl TimeLeft {
    /// Calculates the [`TimeLeft`] from `now` until `valid_until`.
    ///
    /// Any started day counts as a whole one.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "matched to be in `2..=7` range"
    )]
    #[must_use]
    pub fn new(valid_until: &ExpirationDateTime, now: &DateTime) -> Self {
        match now.days_until(valid_until) {
            ..=0 => Self::EndsToday,
            1 => Self::OneDay,
            days @ 2..=3 => Self::FewDays(days as u8),
            days @ 4..=7 => Self::Days(days as u8),
            _ => Self::Until(valid_until.date()),
        }
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndsToday => write!(f, "ends today"),
            Self::OneDay => write!(f, "1 day left"),
            Self::FewDays(days) | Self::Days(days) => {
                write!(f, "{days} days left")
            }
            Self::Until(date) => {
                let date = date
                    .format(format_description!("[day].[month].[year]"))
                    .map_err(|_| fmt::Error)?;
                write!(f, "until {date}")
            }
        }
    }
}
