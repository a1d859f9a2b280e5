//! exchange-protocol
//!
//! Wire-level encoding/decoding for the matching engine.
//!
//! This crate is responsible for turning logical engine messages
//! (`exchange_core::InputMessage` / `OutputMessage`) into text lines
//! and back again.
//!
//! - [`csv_codec`] : comma-separated line format (for files / replay)

pub mod csv_codec;

pub use csv_codec::{format_output_line, parse_input_line};
