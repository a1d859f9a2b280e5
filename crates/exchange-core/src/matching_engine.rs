//! Single-asset matching engine.
//!
//! Owns one [`OrderBook`] and the deal sequence counter. The engine
//! performs no I/O: callers drive it with [`MatchingEngine::submit`] /
//! [`MatchingEngine::cancel`] and pass a record collector that deals
//! and cancel confirmations are appended to, in the order they are
//! produced.
//!
//! Events are processed one at a time to quiescence; there is no
//! suspension point and no shared state, so the whole engine is plain
//! single-threaded code.

use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::messages::{Deal, InputMessage, NewOrder, OutputMessage};
use crate::order::Order;
use crate::order_book::OrderBook;

/// Single-asset matching engine with price-time priority.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    book: OrderBook,

    /// Next deal id. Starts at 0 and increases by one per deal for the
    /// lifetime of the engine instance.
    deal_sequence: u64,
}

impl MatchingEngine {
    /// Create a new, empty matching engine.
    pub fn new() -> Self {
        MatchingEngine::default()
    }

    /// Process a single input event, appending any produced records to
    /// `out`.
    pub fn process_event(
        &mut self,
        msg: InputMessage,
        out: &mut Vec<OutputMessage>,
    ) -> Result<(), EngineError> {
        match msg {
            InputMessage::Submit(new) => self.submit(new, out),
            InputMessage::Cancel(cancel) => {
                self.cancel(cancel.order_id, out);
                Ok(())
            }
        }
    }

    /// Submit a new order.
    ///
    /// The order is first matched against the opposing side; every
    /// match appends a [`Deal`] to `out`. A non-zero remainder then
    /// rests in the book. A fully-filled incoming order leaves no
    /// footprint.
    ///
    /// Fails with [`EngineError::DuplicateOrder`] only if the remainder
    /// would rest under an id that is already live. Deals emitted
    /// before the failure stay in `out`: they happened.
    pub fn submit(
        &mut self,
        msg: NewOrder,
        out: &mut Vec<OutputMessage>,
    ) -> Result<(), EngineError> {
        let mut incoming = Order::from_new_order(&msg);

        self.match_incoming(&mut incoming, out);

        if !incoming.is_filled() {
            self.book.add(incoming)?;
        }
        Ok(())
    }

    /// Cancel a resting order by id.
    ///
    /// If the order is live it is removed (lazily, see
    /// [`OrderBook::remove`]) and a confirmation record is appended.
    /// Cancelling an order that is already filled, already cancelled or
    /// never existed is a silent no-op: a late cancel racing a fill is
    /// not an error.
    pub fn cancel(&mut self, order_id: u64, out: &mut Vec<OutputMessage>) {
        if self.book.remove(order_id).is_some() {
            out.push(OutputMessage::cancelled(order_id));
        }
    }

    /// Immutable access to the book, for tests and admin queries.
    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    // -------------------------------------------------------------------------
    // Internal helpers
    // -------------------------------------------------------------------------

    /// Match an incoming order against the opposing side's index.
    ///
    /// Loop invariant: the index is price-ordered, so the first live
    /// candidate that fails to cross ends the loop; nothing behind it
    /// can cross either.
    fn match_incoming(&mut self, incoming: &mut Order, out: &mut Vec<OutputMessage>) {
        let opposing = incoming.side.opposite();

        while let Some((_, resting_id)) = self.book.index(opposing).peek_min() {
            let Some(resting) = self.book.get_mut(resting_id) else {
                // Stale entry: the candidate was filled or cancelled.
                self.book.index_mut(opposing).pop_min();
                continue;
            };

            // Crossing test: signed prices of two crossing orders sum
            // to <= 0.
            if incoming.signed_price() + resting.signed_price() > Decimal::ZERO {
                break;
            }

            let traded = incoming.quantity.min(resting.quantity);
            let price = resting.price;
            resting.fill(traded);
            let resting_filled = resting.is_filled();
            incoming.fill(traded);

            out.push(OutputMessage::Deal(Deal {
                id: self.next_deal_id(),
                side: incoming.side,
                resting_order_id: resting_id,
                incoming_order_id: incoming.id,
                quantity: traded,
                price,
            }));

            if resting_filled {
                self.book.remove(resting_id);
                self.book.index_mut(opposing).pop_min();
            }
            if incoming.is_filled() {
                break;
            }
        }
    }

    fn next_deal_id(&mut self) -> u64 {
        let id = self.deal_sequence;
        self.deal_sequence += 1;
        id
    }
}
