//! Error types for the core matching engine.
//!
//! The engine API is infallible for everything except one case: a
//! submitted order whose remainder would rest in the book under an id
//! that is already live. Invalid input is filtered out at the
//! parsing / protocol layer and never reaches the core.

use thiserror::Error;

/// Engine-level failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An order with this id is already live in the book.
    #[error("order {0} is already live in the book")]
    DuplicateOrder(u64),
}
