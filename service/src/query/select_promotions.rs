//! [`Query`] for selecting [`Promotion`]s to display.

use std::{borrow::Borrow, cmp::Reverse};

use common::{
    operations::{By, Select},
    DateTime,
};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{promotion::Category, Promotion},
    infra::{catalog, Catalog},
    read::promotion::{Highlight, Selection, TimeLeft},
    Service,
};

use super::Query;

/// [`Query`] for selecting [`Promotion`]s to display for a [`Category`].
#[derive(Clone, Debug)]
pub struct SelectPromotions {
    /// Requested [`Category`].
    pub category: Category,

    /// [`DateTime`] to calculate the [`TimeLeft`] of [`Promotion`]s from.
    pub now: DateTime,
}

impl<C> Query<SelectPromotions> for Service<C>
where
    C: Catalog<
        Select<By<Vec<Promotion>, Category>>,
        Ok = Vec<Promotion>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Selection;
    type Err = Traced<ExecutionError>;

    fn execute(&self, query: SelectPromotions) -> Result<Self::Ok, Self::Err> {
        let SelectPromotions { category, now } = query;

        let promotions = self
            .catalog()
            .execute(Select(By::new(category.clone())))
            .map_err(tracerr::wrap!())?;
        let total = promotions.len();

        let selection =
            select(promotions, &category, &now, self.config().secondary_limit);
        log::debug!(
            "selected {} of {total} candidate promotions for `{category}` \
             category",
            selection.iter().count(),
        );

        Ok(selection)
    }
}

/// Default number of [`Selection::secondary`] [`Promotion`]s.
pub const DEFAULT_SECONDARY_LIMIT: usize = 3;

/// Error of [`SelectPromotions`] [`Query`] execution.
pub type ExecutionError = catalog::Error;

/// Selects [`Promotion`]s to display for the `requested` [`Category`].
///
/// Only [eligible] [`Promotion`]s are selected, ranked by their priority
/// descending. [`Promotion`]s of equal priority keep their relative order.
/// The top-ranked one becomes the [`Selection::primary`], and up to
/// `secondary_limit` next ones become the [`Selection::secondary`].
///
/// [eligible]: Promotion::is_eligible
pub fn select<P>(
    promotions: impl IntoIterator<Item = P>,
    requested: &Category,
    now: &DateTime,
    secondary_limit: usize,
) -> Selection<P>
where
    P: Borrow<Promotion>,
{
    let mut eligible = promotions
        .into_iter()
        .filter(|p| promotion(p).is_eligible(requested))
        .collect::<Vec<_>>();
    // `sort_by_key()` is stable.
    eligible.sort_by_key(|p| Reverse(promotion(p).priority));
    eligible.truncate(secondary_limit.saturating_add(1));

    let mut highlights = eligible.into_iter().map(|p| Highlight {
        time_left: promotion(&p)
            .valid_until
            .as_ref()
            .map(|until| TimeLeft::new(until, now)),
        promotion: p,
    });
    let Some(primary) = highlights.next() else {
        return Selection::empty();
    };

    Selection {
        primary: Some(primary),
        secondary: highlights.collect(),
    }
}

/// Borrows a [`Promotion`] out of `P`.
fn promotion<P: Borrow<Promotion>>(p: &P) -> &Promotion {
    <P as Borrow<Promotion>>::borrow(p)
}

#[cfg(test)]
mod spec {
    use std::{borrow::Borrow, str::FromStr as _, time::Duration};

    use common::DateTime;

    use crate::{
        domain::{
            promotion::{
                Category, Color, Description, Discount, DiscountKind, Id,
                Palette, Priority, Title,
            },
            Promotion,
        },
        infra::Memory,
        query::Query as _,
        read::{promotion::TimeLeft, Selection},
        Config, Service,
    };

    use super::{select, SelectPromotions, DEFAULT_SECONDARY_LIMIT};

    fn now() -> DateTime {
        DateTime::from_rfc3339("2026-10-19T12:00:00Z").unwrap()
    }

    fn promotion(id: u32, active: bool, category: &str, prio: i32) -> Promotion {
        Promotion {
            id: id.into(),
            title: Title::new(format!("Promotion #{id}")).unwrap(),
            description: Description::new("Mortgage at 6% for new buildings")
                .unwrap(),
            category: Category::from_str(category).unwrap(),
            is_active: active,
            priority: Priority::from(prio),
            discount: Discount::parse(DiscountKind::Percentage, "5").unwrap(),
            valid_until: None,
            palette: Palette {
                background: Color::new("#1e3a8a").unwrap(),
                text: Color::new("#fff").unwrap(),
            },
            button_text: "Learn more".parse().unwrap(),
        }
    }

    fn ids<P: Borrow<Promotion>>(selection: &Selection<P>) -> Vec<u32> {
        selection
            .iter()
            .map(|h| u32::from(<P as Borrow<Promotion>>::borrow(&h.promotion).id))
            .collect()
    }

    fn buy() -> Category {
        Category::from_str("buy").unwrap()
    }

    #[test]
    fn filters_inactive_and_foreign_categories() {
        let promotions = [
            promotion(1, true, "buy", 1),
            promotion(2, false, "buy", 9),
            promotion(3, true, "all", 5),
            promotion(4, true, "rent", 7),
        ];

        let selection =
            select(&promotions, &buy(), &now(), DEFAULT_SECONDARY_LIMIT);

        assert_eq!(ids(&selection), [3, 1]);
        assert_eq!(
            selection.primary.map(|h| h.promotion.id),
            Some(Id::from(3)),
        );
    }

    #[test]
    fn keeps_input_order_on_equal_priority() {
        let promotions = [
            promotion(1, true, "buy", 2),
            promotion(2, true, "all", 5),
            promotion(3, true, "buy", 2),
            promotion(4, true, "all", 2),
            promotion(5, true, "buy", 5),
        ];

        let selection = select(&promotions, &buy(), &now(), 10);

        assert_eq!(ids(&selection), [2, 5, 1, 3, 4]);
    }

    #[test]
    fn limits_secondary_promotions() {
        let promotions = [
            promotion(1, true, "buy", 60),
            promotion(2, true, "buy", 50),
            promotion(3, true, "buy", 40),
            promotion(4, true, "buy", 30),
            promotion(5, true, "buy", 20),
            promotion(6, true, "buy", 10),
        ];

        let selection =
            select(&promotions, &buy(), &now(), DEFAULT_SECONDARY_LIMIT);

        assert_eq!(ids(&selection), [1, 2, 3, 4]);
        assert_eq!(selection.secondary.len(), 3);

        let fewer = select(&promotions[..2], &buy(), &now(), 3);
        assert_eq!(ids(&fewer), [1, 2]);
        assert_eq!(fewer.secondary.len(), 1);

        let single = select(&promotions, &buy(), &now(), 0);
        assert_eq!(ids(&single), [1]);
    }

    #[test]
    fn nothing_to_display_without_eligible() {
        let promotions = [
            promotion(1, false, "buy", 1),
            promotion(2, false, "all", 5),
        ];

        let selection =
            select(&promotions, &buy(), &now(), DEFAULT_SECONDARY_LIMIT);

        assert!(selection.is_empty());
        assert!(selection.primary.is_none());
        assert!(selection.secondary.is_empty());
        assert!(select(Vec::<Promotion>::new(), &buy(), &now(), 3).is_empty());
    }

    #[test]
    fn all_request_matches_only_wildcard_promotions() {
        let promotions = [
            promotion(1, true, "buy", 9),
            promotion(2, true, "all", 1),
            promotion(3, true, "rent", 8),
        ];

        let selection = select(&promotions, &Category::all(), &now(), 3);

        assert_eq!(ids(&selection), [2]);
    }

    #[test]
    fn labels_time_left_when_limited() {
        let mut ending = promotion(1, true, "buy", 3);
        ending.valid_until =
            Some((now() + Duration::from_secs(24 * 60 * 60)).coerce());
        let mut later = promotion(2, true, "buy", 2);
        later.valid_until =
            Some((now() + Duration::from_secs(10 * 24 * 60 * 60)).coerce());
        let unlimited = promotion(3, true, "buy", 1);

        let selection = select([ending, later, unlimited], &buy(), &now(), 3);

        let labels = selection
            .iter()
            .map(|h| h.time_left.map(|l| l.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                Some("1 day left".to_owned()),
                Some("until 29.10.2026".to_owned()),
                None,
            ],
        );
        assert_eq!(
            selection.primary.and_then(|h| h.time_left),
            Some(TimeLeft::OneDay),
        );
    }

    #[test]
    fn service_selects_from_catalog() {
        let catalog = Memory::new(vec![
            promotion(1, true, "buy", 1),
            promotion(2, false, "buy", 9),
            promotion(3, true, "all", 5),
        ]);
        let service = Service::new(Config::default(), catalog);

        let selection = service
            .execute(SelectPromotions {
                category: buy(),
                now: now(),
            })
            .unwrap();

        assert_eq!(ids(&selection), [3, 1]);
    }

    #[test]
    fn service_respects_configured_limit() {
        let catalog = Memory::new(
            (1..=5).map(|id| promotion(id, true, "all", 0)).collect(),
        );
        let service = Service::new(Config { secondary_limit: 1 }, catalog);

        let selection = service
            .execute(SelectPromotions {
                category: buy(),
                now: now(),
            })
            .unwrap();

        assert_eq!(ids(&selection), [1, 2]);
    }
}
