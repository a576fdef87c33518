//! [`Cart`] of favorite listings.

use std::slice;

use derive_more::Debug;
use tracing as log;

#[cfg(doc)]
use crate::domain::{NewBuilding, Property};
use crate::domain::{
    cart::{AdditionDateTime, EntityId, Item, ItemId, Kind},
    Entity,
};

/// Session-local selection of [`Property`] and [`NewBuilding`] listings.
///
/// Keeps at most one [`Item`] per [`ItemId`], in the order they were added.
/// Nothing is evicted implicitly: [`Item`]s leave a [`Cart`] only via
/// [`Cart::remove()`] or [`Cart::clear()`].
///
/// Every change of the [`Cart`] is reported synchronously to all the
/// subscribed [`Observer`]s, right after the change is applied.
#[derive(Debug, Default)]
pub struct Cart {
    /// [`Item`]s of this [`Cart`] in the order they were added.
    items: Vec<Item>,

    /// [`Observer`]s subscribed to changes of this [`Cart`].
    #[debug(skip)]
    observers: Vec<(Subscription, Box<dyn Observer>)>,

    /// [`Subscription`] to be issued next.
    next_subscription: Subscription,
}

impl Cart {
    /// Creates a new empty [`Cart`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the provided [`Entity`] to this [`Cart`], stamping it with the
    /// current [`AdditionDateTime`].
    ///
    /// Does nothing if this [`Cart`] contains the [`Entity`] already.
    pub fn add(&mut self, entity: impl Into<Entity>) {
        self.add_at(entity, AdditionDateTime::now());
    }

    /// Adds the provided [`Entity`] to this [`Cart`] with the provided
    /// [`AdditionDateTime`].
    ///
    /// Does nothing if this [`Cart`] contains the [`Entity`] already, leaving
    /// the existing [`Item`] (and its [`AdditionDateTime`]) untouched.
    pub fn add_at(&mut self, entity: impl Into<Entity>, at: AdditionDateTime) {
        let entity = entity.into();
        let id = entity.item_id();
        if self.get(&id).is_some() {
            log::trace!("`{id}` is in cart already");
            return;
        }

        self.items.push(Item::new(entity, at));
        log::debug!("added `{id}` to cart");
        self.notify(Change::Added(id));
    }

    /// Removes an [`Item`] with the provided [`ItemId`] from this [`Cart`].
    ///
    /// Does nothing if there is no such [`Item`].
    pub fn remove(&mut self, id: &ItemId) {
        let Some(pos) = self.items.iter().position(|i| i.id == *id) else {
            log::trace!("`{id}` is not in cart");
            return;
        };

        drop(self.items.remove(pos));
        log::debug!("removed `{id}` from cart");
        self.notify(Change::Removed(*id));
    }

    /// Removes all [`Item`]s from this [`Cart`].
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }

        let count = self.items.len();
        self.items.clear();
        log::debug!("cleared {count} items from cart");
        self.notify(Change::Cleared);
    }

    /// Returns number of [`Item`]s in this [`Cart`].
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Indicates whether this [`Cart`] has no [`Item`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Indicates whether this [`Cart`] contains an [`Entity`] of the provided
    /// [`Kind`] with the provided [`EntityId`].
    #[must_use]
    pub fn contains(&self, entity_id: EntityId, kind: Kind) -> bool {
        self.get(&ItemId::new(kind, entity_id)).is_some()
    }

    /// Returns an [`Item`] with the provided [`ItemId`], if any.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == *id)
    }

    /// Returns [`Item`]s of this [`Cart`] in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterates over [`Item`]s of this [`Cart`] in the order they were added.
    pub fn iter(&self) -> slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Subscribes the provided [`Observer`] to changes of this [`Cart`].
    ///
    /// Returned [`Subscription`] may be used to [`Cart::unsubscribe()`].
    pub fn subscribe(
        &mut self,
        observer: impl Observer + 'static,
    ) -> Subscription {
        let subscription = self.next_subscription;
        self.next_subscription = Subscription(subscription.0 + 1);
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Unsubscribes an [`Observer`] identified by the provided
    /// [`Subscription`].
    ///
    /// Does nothing if the [`Subscription`] is not active.
    pub fn unsubscribe(&mut self, subscription: Subscription) {
        self.observers.retain(|(s, _)| *s != subscription);
    }

    /// Notifies all the subscribed [`Observer`]s about the provided
    /// [`Change`].
    fn notify(&mut self, change: Change) {
        for (_, observer) in &mut self.observers {
            observer.on_change(change, &self.items);
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Change applied to a [`Cart`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Change {
    /// [`Item`] with the [`ItemId`] was added.
    Added(ItemId),

    /// [`Item`] with the [`ItemId`] was removed.
    Removed(ItemId),

    /// All [`Item`]s were removed.
    Cleared,
}

/// Observer of [`Cart`] changes (usually, a UI component to be re-rendered).
///
/// Notified only when the [`Item`]s of a [`Cart`] actually change: adding an
/// already present [`Entity`], removing an absent [`Item`] or clearing an
/// empty [`Cart`] reports nothing.
pub trait Observer {
    /// Reacts on the provided [`Change`] of a [`Cart`], which now has the
    /// provided [`Item`]s.
    fn on_change(&mut self, change: Change, items: &[Item]);
}

impl<F> Observer for F
where
    F: FnMut(Change, &[Item]),
{
    fn on_change(&mut self, change: Change, items: &[Item]) {
        self(change, items);
    }
}

/// Handle of an [`Observer`] subscribed to a [`Cart`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Subscription(u64);

#[cfg(test)]
mod spec {
    use std::{cell::RefCell, rc::Rc, str::FromStr as _, time::Duration};

    use common::Money;

    use crate::domain::{
        cart::{AdditionDateTime, Item, ItemId, Kind},
        new_building, property, Entity, NewBuilding, Property,
    };

    use super::{Cart, Change};

    fn property(id: u32) -> Property {
        Property {
            id: id.into(),
            title: property::Title::new(format!("Flat #{id}")).unwrap(),
            address: property::Address::new("Moscow, Tverskaya st., 7")
                .unwrap(),
            deal: property::Deal::Sale,
            price: Money::from_str("12500000 RUB").unwrap(),
            area: None,
            rooms: Some(2),
        }
    }

    fn new_building(id: u32) -> NewBuilding {
        NewBuilding {
            id: id.into(),
            name: new_building::Name::new(format!("Complex #{id}")).unwrap(),
            address: property::Address::new("Moscow, Leninsky pr., 100")
                .unwrap(),
            developer: None,
            price_from: None,
            completion_year: Some(2027),
        }
    }

    fn ids(cart: &Cart) -> Vec<String> {
        cart.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn walks_through_mixed_kinds_scenario() {
        let mut cart = Cart::new();
        assert_eq!(cart.count(), 0);

        cart.add(property(5));
        assert_eq!(cart.count(), 1);
        assert!(cart.contains(5, Kind::Property));
        assert!(!cart.contains(5, Kind::NewBuilding));

        cart.add(new_building(5));
        assert_eq!(cart.count(), 2);
        assert!(cart.contains(5, Kind::NewBuilding));

        cart.remove(&ItemId::from_str("Property-5").unwrap());
        assert_eq!(cart.count(), 1);
        assert!(!cart.contains(5, Kind::Property));
        assert!(cart.contains(5, Kind::NewBuilding));

        cart.clear();
        assert_eq!(cart.count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn adding_twice_keeps_first_item() {
        let first = AdditionDateTime::from_unix_timestamp(1_000).unwrap();
        let mut cart = Cart::new();

        cart.add_at(property(1), first);
        let before = cart.items().to_vec();
        cart.add_at(property(1), first + Duration::from_secs(60));

        assert_eq!(cart.items(), before.as_slice());
        assert_eq!(
            cart.get(&ItemId::new(Kind::Property, 1)).unwrap().added_at,
            first,
        );
    }

    #[test]
    fn removing_absent_item_changes_nothing() {
        let mut cart = Cart::new();
        cart.add(property(1));
        cart.add(new_building(2));
        let before = cart.items().to_vec();

        cart.remove(&ItemId::new(Kind::Property, 2));
        cart.remove(&ItemId::new(Kind::NewBuilding, 1));

        assert_eq!(cart.items(), before.as_slice());
    }

    #[test]
    fn preserves_insertion_order_across_removals() {
        let mut cart = Cart::new();
        cart.add(property(3));
        cart.add(new_building(1));
        cart.add(property(1));
        cart.add(new_building(7));

        cart.remove(&ItemId::new(Kind::NewBuilding, 1));
        assert_eq!(ids(&cart), ["Property-3", "Property-1", "NewBuilding-7"]);

        cart.add(new_building(1));
        assert_eq!(
            ids(&cart),
            ["Property-3", "Property-1", "NewBuilding-7", "NewBuilding-1"],
        );
    }

    #[test]
    fn item_keeps_its_entity() {
        let mut cart = Cart::new();
        cart.add(new_building(9));

        let item: &Item = cart.items().first().unwrap();
        assert_eq!(item.kind(), Kind::NewBuilding);
        assert_eq!(item.entity, Entity::from(new_building(9)));
    }

    #[test]
    fn notifies_observers_on_effective_changes() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut cart = Cart::new();
        _ = cart.subscribe({
            let log = Rc::clone(&log);
            move |change: Change, items: &[Item]| {
                log.borrow_mut().push((change, items.len()));
            }
        });

        cart.add(property(5));
        cart.add(property(5));
        cart.add(new_building(5));
        cart.remove(&ItemId::new(Kind::Property, 7));
        cart.remove(&ItemId::new(Kind::Property, 5));
        cart.clear();
        cart.clear();

        assert_eq!(
            *log.borrow(),
            [
                (Change::Added(ItemId::new(Kind::Property, 5)), 1),
                (Change::Added(ItemId::new(Kind::NewBuilding, 5)), 2),
                (Change::Removed(ItemId::new(Kind::Property, 5)), 1),
                (Change::Cleared, 0),
            ],
        );
    }

    #[test]
    fn unsubscribed_observer_is_not_notified() {
        let calls = Rc::new(RefCell::new(0));
        let mut cart = Cart::new();
        let first = cart.subscribe({
            let calls = Rc::clone(&calls);
            move |_: Change, _: &[Item]| *calls.borrow_mut() += 1
        });
        let second = cart.subscribe({
            let calls = Rc::clone(&calls);
            move |_: Change, _: &[Item]| *calls.borrow_mut() += 10
        });
        assert_ne!(first, second);

        cart.add(property(1));
        cart.unsubscribe(first);
        cart.add(property(2));

        assert_eq!(*calls.borrow(), 1 + 10 + 10);
    }
}
