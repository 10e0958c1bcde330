//! Renders a sweep outcome as the `<timestamp> <action> <value>` output line.

use crate::event::Side;
use crate::sweep::SweepResult;

/// Which action tag an output line carries: `S` when the bid side changed
/// (we would sell into it), `B` when the ask side changed (we would buy
/// from it).
pub fn action_tag(affected_side: Side) -> char {
    match affected_side {
        Side::Bid => 'S',
        Side::Ask => 'B',
    }
}

/// Formats a full output line for a sweep state change.
pub fn format_line(timestamp: u64, affected_side: Side, result: SweepResult) -> String {
    format!(
        "{} {} {}",
        timestamp,
        action_tag(affected_side),
        format_value(result)
    )
}

fn format_value(result: SweepResult) -> String {
    match result {
        SweepResult::Infeasible => "NA".to_string(),
        SweepResult::Feasible { total_cents } => to_dollars_and_cents(total_cents),
    }
}

/// Integer division/modulo, never floating point, so large cent totals never
/// lose precision in the conversion.
fn to_dollars_and_cents(total_cents: u64) -> String {
    let dollars = total_cents / 100;
    let cents = total_cents % 100;
    format!("{dollars}.{cents:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_dollar_amount() {
        assert_eq!(to_dollars_and_cents(883_600), "8836.00");
    }

    #[test]
    fn sub_dollar_amount_keeps_leading_zero() {
        assert_eq!(to_dollars_and_cents(7), "0.07");
    }

    #[test]
    fn zero_is_rendered_plainly() {
        assert_eq!(to_dollars_and_cents(0), "0.00");
    }

    #[test]
    fn infeasible_renders_as_na() {
        assert_eq!(format_value(SweepResult::Infeasible), "NA");
    }

    #[test]
    fn full_line_uses_sell_tag_for_bid_side() {
        let line = format_line(28_800_562, Side::Bid, SweepResult::Feasible { total_cents: 883_600 });
        assert_eq!(line, "28800562 S 8836.00");
    }

    #[test]
    fn full_line_uses_buy_tag_for_ask_side() {
        let line = format_line(28_800_773, Side::Ask, SweepResult::Feasible { total_cents: 883_600 });
        assert_eq!(line, "28800773 B 8836.00");
    }
}
