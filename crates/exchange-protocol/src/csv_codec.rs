//! Comma-separated line codec.
//!
//! Input format (lines -> `InputMessage`):
//!
//! - New order:
//!   `O, id(int), side(char B or S), qty(positive int), price(decimal)`
//!
//! - Cancel:
//!   `C, id(int)`
//!
//! Output format (`OutputMessage` -> line):
//!
//! - Deal:
//!   `T, dealId, side(B/S), restingOrderId, incomingOrderId, qty, price`
//!
//! - Cancellation:
//!   `X, orderId`
//!
//! Blank lines and lines starting with `#` are skipped. Malformed
//! lines parse to `None`; rejecting them here is what keeps the core
//! free of input validation.

use rust_decimal::Decimal;

use exchange_core::{CancelOrder, InputMessage, NewOrder, OutputMessage, Side};

/// Parse a single line into an `InputMessage`.
///
/// Returns `None` for blank lines, comments (starting with `#`) and
/// anything malformed.
pub fn parse_input_line(line: &str) -> Option<InputMessage> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let tokens = split_and_trim(trimmed, ',');
    if tokens.is_empty() {
        return None;
    }

    let msg_type = tokens[0].chars().next().unwrap_or('\0');

    match msg_type {
        'O' => parse_new_order(&tokens),
        'C' => parse_cancel(&tokens),
        _ => None,
    }
}

fn parse_new_order(tokens: &[String]) -> Option<InputMessage> {
    // O, id, side, qty, price
    if tokens.len() != 5 {
        return None;
    }

    let id = parse_u64(&tokens[1])?;

    let side_char = tokens[2].chars().next()?;
    let side = Side::from_char(side_char)?;

    let quantity = parse_u64(&tokens[3])?;
    if quantity == 0 {
        return None;
    }

    let price = tokens[4].parse::<Decimal>().ok()?;

    Some(InputMessage::Submit(NewOrder {
        id,
        side,
        quantity,
        price,
    }))
}

fn parse_cancel(tokens: &[String]) -> Option<InputMessage> {
    // C, id
    if tokens.len() != 2 {
        return None;
    }

    let order_id = parse_u64(&tokens[1])?;

    Some(InputMessage::Cancel(CancelOrder { order_id }))
}

/// Format an `OutputMessage` as a single line.
pub fn format_output_line(msg: &OutputMessage) -> String {
    match msg {
        OutputMessage::Deal(d) => format!(
            "T, {}, {}, {}, {}, {}, {}",
            d.id,
            d.side.as_char(),
            d.resting_order_id,
            d.incoming_order_id,
            d.quantity,
            d.price
        ),
        OutputMessage::Cancelled(c) => format!("X, {}", c.order_id),
    }
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn split_and_trim(s: &str, delimiter: char) -> Vec<String> {
    s.split(delimiter)
        .map(|tok| tok.trim().to_string())
        .collect()
}

fn parse_u64(s: &str) -> Option<u64> {
    s.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exchange_core::{Cancellation, Deal};

    #[test]
    fn parses_new_order_line() {
        let msg = parse_input_line("O, 7, B, 12, 99.5").unwrap();
        assert_eq!(
            msg,
            InputMessage::Submit(NewOrder {
                id: 7,
                side: Side::Buy,
                quantity: 12,
                price: "99.5".parse().unwrap(),
            })
        );
    }

    #[test]
    fn parses_cancel_line() {
        let msg = parse_input_line("C, 7").unwrap();
        assert_eq!(msg, InputMessage::Cancel(CancelOrder { order_id: 7 }));
    }

    #[test]
    fn skips_blanks_and_comments() {
        assert_eq!(parse_input_line(""), None);
        assert_eq!(parse_input_line("   "), None);
        assert_eq!(parse_input_line("# trades below"), None);
    }

    #[test]
    fn rejects_malformed_lines() {
        // Wrong token counts.
        assert_eq!(parse_input_line("O, 7, B, 12"), None);
        assert_eq!(parse_input_line("C"), None);
        // Unknown side and record type.
        assert_eq!(parse_input_line("O, 7, X, 12, 99.5"), None);
        assert_eq!(parse_input_line("Z, 7"), None);
        // Zero or negative quantity.
        assert_eq!(parse_input_line("O, 7, B, 0, 99.5"), None);
        assert_eq!(parse_input_line("O, 7, B, -3, 99.5"), None);
        // Non-numeric id, non-decimal price.
        assert_eq!(parse_input_line("C, seven"), None);
        assert_eq!(parse_input_line("O, 7, B, 12, abc"), None);
    }

    #[test]
    fn formats_deal_line() {
        let deal = OutputMessage::Deal(Deal {
            id: 0,
            side: Side::Buy,
            resting_order_id: 2,
            incoming_order_id: 3,
            quantity: 5,
            price: "99".parse().unwrap(),
        });
        assert_eq!(format_output_line(&deal), "T, 0, B, 2, 3, 5, 99");
    }

    #[test]
    fn formats_deal_line_with_decimal_price() {
        let deal = OutputMessage::Deal(Deal {
            id: 3,
            side: Side::Sell,
            resting_order_id: 4,
            incoming_order_id: 5,
            quantity: 1,
            price: "101.25".parse().unwrap(),
        });
        assert_eq!(format_output_line(&deal), "T, 3, S, 4, 5, 1, 101.25");
    }

    #[test]
    fn formats_cancellation_line() {
        let cancelled = OutputMessage::Cancelled(Cancellation { order_id: 5 });
        assert_eq!(format_output_line(&cancelled), "X, 5");
    }
}
