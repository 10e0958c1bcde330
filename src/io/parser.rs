//! Parses one market-log line into a typed [`Event`].
//!
//! Two grammars are accepted:
//!
//! ```text
//! <timestamp> A <order_id> <side> <price> <size>
//! <timestamp> R <order_id> <size>
//! ```
//!
//! Structural violations (wrong token count, non-numeric timestamp, an order
//! id outside `[A-Za-z0-9]+`, a malformed price) are reported as
//! [`AnalyzerError::MalformedLine`]. Fields that parse but fail a semantic
//! check (zero size, an unrecognized side tag) get their own error kinds per
//! spec §7, since those two are flagged as the core's concern in §4.A rather
//! than the line grammar's.

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::event::{Event, Side};

pub fn parse_line(line: &str) -> AnalyzerResult<Event> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [timestamp, "A", order_id, side, price, size] => {
            parse_add_order(line, timestamp, order_id, side, price, size)
        }
        [timestamp, "R", order_id, size] => parse_reduce_order(line, timestamp, order_id, size),
        _ => Err(AnalyzerError::MalformedLine(line.to_string())),
    }
}

fn parse_add_order(
    line: &str,
    timestamp: &str,
    order_id: &str,
    side: &str,
    price: &str,
    size: &str,
) -> AnalyzerResult<Event> {
    let timestamp = parse_timestamp(line, timestamp)?;
    let order_id = parse_order_id(line, order_id)?;
    let price_cents = parse_price_cents(line, price)?;
    let size = parse_positive_size(line, size)?;

    let side = if side.len() == 1 {
        Side::from_tag(side).ok_or_else(|| AnalyzerError::UnknownSide(side.to_string()))?
    } else {
        return Err(AnalyzerError::MalformedLine(line.to_string()));
    };

    Ok(Event::AddOrder {
        timestamp,
        order_id,
        side,
        price_cents,
        size,
    })
}

fn parse_reduce_order(
    line: &str,
    timestamp: &str,
    order_id: &str,
    size: &str,
) -> AnalyzerResult<Event> {
    let timestamp = parse_timestamp(line, timestamp)?;
    let order_id = parse_order_id(line, order_id)?;
    let size_reduction = parse_positive_size(line, size)?;

    Ok(Event::ReduceOrder {
        timestamp,
        order_id,
        size_reduction,
    })
}

fn parse_timestamp(line: &str, token: &str) -> AnalyzerResult<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalyzerError::MalformedLine(line.to_string()));
    }
    token
        .parse()
        .map_err(|_| AnalyzerError::MalformedLine(line.to_string()))
}

fn parse_order_id(line: &str, token: &str) -> AnalyzerResult<String> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_alphanumeric()) {
        Ok(token.to_string())
    } else {
        Err(AnalyzerError::MalformedLine(line.to_string()))
    }
}

/// Parses `<dollars>.<cents>` (exactly two fractional digits) into integer cents.
fn parse_price_cents(line: &str, token: &str) -> AnalyzerResult<u64> {
    let (dollars, cents) = token
        .split_once('.')
        .ok_or_else(|| AnalyzerError::MalformedLine(line.to_string()))?;

    if dollars.is_empty()
        || cents.len() != 2
        || !dollars.bytes().all(|b| b.is_ascii_digit())
        || !cents.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AnalyzerError::MalformedLine(line.to_string()));
    }

    let dollars: u64 = dollars
        .parse()
        .map_err(|_| AnalyzerError::MalformedLine(line.to_string()))?;
    let cents: u64 = cents
        .parse()
        .map_err(|_| AnalyzerError::MalformedLine(line.to_string()))?;

    Ok(dollars * 100 + cents)
}

fn parse_positive_size(line: &str, token: &str) -> AnalyzerResult<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AnalyzerError::MalformedLine(line.to_string()));
    }
    let size: u64 = token
        .parse()
        .map_err(|_| AnalyzerError::MalformedLine(line.to_string()))?;
    if size == 0 {
        return Err(AnalyzerError::BadField(format!(
            "size must be >= 1, got 0 in line: {line}"
        )));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_order() {
        let event = parse_line("28800538 A b B 44.26 100").unwrap();
        assert_eq!(
            event,
            Event::AddOrder {
                timestamp: 28_800_538,
                order_id: "b".to_string(),
                side: Side::Bid,
                price_cents: 4426,
                size: 100,
            }
        );
    }

    #[test]
    fn parses_reduce_order() {
        let event = parse_line("28800744 R b 100").unwrap();
        assert_eq!(
            event,
            Event::ReduceOrder {
                timestamp: 28_800_744,
                order_id: "b".to_string(),
                size_reduction: 100,
            }
        );
    }

    #[test]
    fn rejects_garbage_line() {
        let err = parse_line("11 GARBAGE").unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedLine(_)));
    }

    #[test]
    fn rejects_wrong_token_count() {
        let err = parse_line("1 A b B 44.26").unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedLine(_)));
    }

    #[test]
    fn rejects_unknown_side() {
        let err = parse_line("1 A b X 44.26 100").unwrap_err();
        assert_eq!(err, AnalyzerError::UnknownSide("X".to_string()));
    }

    #[test]
    fn rejects_zero_size_as_bad_field() {
        let err = parse_line("1 A b B 44.26 0").unwrap_err();
        assert!(matches!(err, AnalyzerError::BadField(_)));
    }

    #[test]
    fn rejects_zero_reduction_as_bad_field() {
        let err = parse_line("1 R b 0").unwrap_err();
        assert!(matches!(err, AnalyzerError::BadField(_)));
    }

    #[test]
    fn rejects_malformed_price() {
        let err = parse_line("1 A b B 44.2 100").unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedLine(_)));
    }

    #[test]
    fn rejects_non_alnum_order_id() {
        let err = parse_line("1 A b-c B 44.20 100").unwrap_err();
        assert!(matches!(err, AnalyzerError::MalformedLine(_)));
    }
}
