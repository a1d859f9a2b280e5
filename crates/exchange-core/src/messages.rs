//! Message types used by the core matching engine.
//!
//! These are **transport-agnostic** logical messages:
//! - [`InputMessage`]: what the engine consumes.
//! - [`OutputMessage`]: what the engine produces.
//!
//! Note: the line-oriented encoder/decoder lives in the
//! `exchange-protocol` crate; this module is purely logical.

use rust_decimal::Decimal;

use crate::side::Side;

/// A request into the matching engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// New limit order.
    Submit(NewOrder),

    /// Cancel a resting order by id.
    Cancel(CancelOrder),
}

/// A record emitted by the matching engine.
///
/// Records are append-only: once emitted they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMessage {
    /// Completed match between two orders.
    Deal(Deal),

    /// Confirmation that a resting order was cancelled.
    Cancelled(Cancellation),
}

/// New order message (input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    /// Caller-assigned identifier; must be unique among live orders.
    pub id: u64,

    /// Buy or Sell.
    pub side: Side,

    /// Original quantity, > 0.
    pub quantity: u64,

    /// Limit price (exact decimal).
    pub price: Decimal,
}

/// Cancel message (input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrder {
    pub order_id: u64,
}

/// Deal record (output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Monotonic sequence number, starting at 0 for each engine instance.
    pub id: u64,

    /// Side of the order that triggered the match (the incoming,
    /// chronologically later one).
    pub side: Side,

    /// The order that was already resting in the book.
    pub resting_order_id: u64,

    /// The incoming order.
    pub incoming_order_id: u64,

    /// Traded amount, > 0.
    pub quantity: u64,

    /// Execution price: always the resting order's price.
    pub price: Decimal,
}

/// Cancel confirmation record (output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    pub order_id: u64,
}

// -----------------------------------------------------------------------------
// Convenience constructors
// -----------------------------------------------------------------------------

impl OutputMessage {
    /// Convenience constructor for a cancellation record.
    pub fn cancelled(order_id: u64) -> Self {
        OutputMessage::Cancelled(Cancellation { order_id })
    }
}
