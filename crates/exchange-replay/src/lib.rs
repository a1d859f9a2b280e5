//! exchange-replay
//!
//! Event driver for the matching engine: reads an event file, feeds
//! the engine, writes the produced records back out.

pub mod cli;
pub mod replay;
