//! exchange-core
//!
//! Pure matching engine logic:
//! - messages (input/output types)
//! - order representation
//! - price-priority index (one per book side)
//! - order book
//! - matching engine

pub mod side;
pub mod messages;
pub mod order;
pub mod price_index;
pub mod order_book;
pub mod matching_engine;
pub mod error;

pub use side::Side;

pub use messages::{
    CancelOrder,
    Cancellation,
    Deal,
    InputMessage,
    NewOrder,
    OutputMessage,
};

pub use order::Order;
pub use price_index::PriceIndex;
pub use order_book::OrderBook;
pub use matching_engine::MatchingEngine;
pub use error::EngineError;
