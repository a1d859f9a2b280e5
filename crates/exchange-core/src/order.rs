//! Internal order representation used inside the order book.
//!
//! This type is **not** exposed over the wire; it's purely internal
//! to the exchange-core crate. The `quantity` field is the live
//! remaining amount and is decremented as the order fills.

use rust_decimal::Decimal;

use crate::messages::NewOrder;
use crate::side::Side;

/// A single order in the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u64,
    pub side: Side,

    /// Remaining unfilled quantity. While the order is in the book
    /// this is always > 0.
    pub quantity: u64,

    /// Limit price.
    pub price: Decimal,
}

impl Order {
    /// Construct an `Order` from a [`NewOrder`] message.
    pub fn from_new_order(msg: &NewOrder) -> Self {
        Order {
            id: msg.id,
            side: msg.side,
            quantity: msg.quantity,
            price: msg.price,
        }
    }

    /// Price keyed so the most competitive order sorts lowest on either
    /// side: `price` for Sell, `-price` for Buy. Two orders cross exactly
    /// when the sum of their signed prices is <= 0.
    pub fn signed_price(&self) -> Decimal {
        match self.side {
            Side::Sell => self.price,
            Side::Buy => -self.price,
        }
    }

    /// Returns `true` if the order is fully filled.
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }

    /// Fill the order by up to `qty` units.
    ///
    /// Returns the quantity that was actually filled (which will be
    /// `<= qty` and `<= quantity`).
    pub fn fill(&mut self, qty: u64) -> u64 {
        let filled = qty.min(self.quantity);
        self.quantity -= filled;
        filled
    }
}
