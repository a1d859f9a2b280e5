//! Single-asset order book with price-time priority.
//!
//! The id map is the ground truth for live orders; the two
//! [`PriceIndex`]es (one per side) only order candidates. Removal is
//! lazy: [`OrderBook::remove`] deletes from the map and leaves the
//! index entry stale, to be discarded the next time it surfaces at the
//! top of the heap. That keeps cancellation O(1) amortized instead of
//! O(N) heap surgery.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::order::Order;
use crate::price_index::PriceIndex;
use crate::side::Side;

/// Authoritative store of live orders plus the per-side priority
/// indexes.
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Order id -> live order. Every order in here has quantity > 0.
    orders: HashMap<u64, Order>,

    /// Candidates for the buy side.
    bids: PriceIndex,

    /// Candidates for the sell side.
    asks: PriceIndex,
}

impl OrderBook {
    /// Create a new, empty order book.
    pub fn new() -> Self {
        OrderBook::default()
    }

    /// Insert a live order and register it with its side's index.
    ///
    /// Fails with [`EngineError::DuplicateOrder`] if the id is already
    /// a live key. O(log N).
    pub fn add(&mut self, order: Order) -> Result<(), EngineError> {
        if self.orders.contains_key(&order.id) {
            return Err(EngineError::DuplicateOrder(order.id));
        }

        self.index_mut(order.side).push(order.signed_price(), order.id);
        self.orders.insert(order.id, order);
        Ok(())
    }

    /// Remove an order from the id map if present, returning it.
    ///
    /// The index is left untouched; the stale entry is discarded lazily
    /// when it next surfaces. O(1) amortized.
    pub fn remove(&mut self, id: u64) -> Option<Order> {
        self.orders.remove(&id)
    }

    /// Look up a live order.
    pub fn get(&self, id: u64) -> Option<&Order> {
        self.orders.get(&id)
    }

    /// Mutable lookup, for fills during matching.
    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    /// The priority index for one side.
    pub fn index(&self, side: Side) -> &PriceIndex {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn index_mut(&mut self, side: Side) -> &mut PriceIndex {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Number of live orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn order(id: u64, side: Side, quantity: u64, price: &str) -> Order {
        Order {
            id,
            side,
            quantity,
            price: price.parse::<Decimal>().unwrap(),
        }
    }

    #[test]
    fn add_registers_with_side_index() {
        let mut book = OrderBook::new();
        book.add(order(1, Side::Buy, 5, "100")).unwrap();
        book.add(order(2, Side::Sell, 5, "101")).unwrap();

        // Buy signed price is negated.
        assert_eq!(book.index(Side::Buy).peek_min(), Some(("-100".parse().unwrap(), 1)));
        assert_eq!(book.index(Side::Sell).peek_min(), Some(("101".parse().unwrap(), 2)));
    }

    #[test]
    fn duplicate_live_id_is_rejected() {
        let mut book = OrderBook::new();
        book.add(order(1, Side::Buy, 5, "100")).unwrap();

        let err = book.add(order(1, Side::Sell, 3, "101")).unwrap_err();
        assert_eq!(err, EngineError::DuplicateOrder(1));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn remove_leaves_index_entry_stale() {
        let mut book = OrderBook::new();
        book.add(order(1, Side::Sell, 5, "100")).unwrap();

        assert!(book.remove(1).is_some());
        assert!(book.get(1).is_none());
        // Stale entry still present until a match loop discards it.
        assert_eq!(book.index(Side::Sell).len(), 1);

        // Removing again is a no-op.
        assert!(book.remove(1).is_none());
    }
}
