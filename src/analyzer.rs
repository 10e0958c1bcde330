//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// The analyzer driver: owns both side books, routes each parsed event to the
// side it mutates, and decides when a changed sweep total is worth emitting.
//
// | Component  | Description                                                          |
// |------------|--------------------------------------------------------------------------|
// | Analyzer   | Owns bid/ask books and last-reported sweep state, drives per-line output |
//
//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name      | Description                                | Key Methods                          |
// |-----------|----------------------------------------------|--------------------------------------|
// | Analyzer  | Routes events and emits on sweep-state change | process_line, process_event         |
//
//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name             | Description                                         | Return Type                     |
// |-------------------|------------------------------------------------------|----------------------------------|
// | new               | Creates an analyzer for one target_size               | Analyzer                        |
// | process_line      | Parses and applies one market-log line                | AnalyzerResult<Option<String>>   |
// | process_event     | Applies one already-parsed event                       | AnalyzerResult<Option<String>>   |
// | reconcile_sweep   | Recomputes the affected side's sweep and compares      | AnalyzerResult<Option<String>>   |
//--------------------------------------------------------------------------------------------------

use tracing::{debug, warn};

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::event::{Event, Side};
use crate::io::formatter::format_line;
use crate::io::parser::parse_line;
use crate::side_book::{Ask, Bid, SideBook};
use crate::sweep::{compute_sweep, SweepResult};

/// Owns the bid and ask books and the last-reported sweep state for each,
/// for one `target_size`.
pub struct Analyzer {
    target_size: u64,
    bid_book: SideBook<Bid>,
    ask_book: SideBook<Ask>,
    last_bid_sweep: SweepResult,
    last_ask_sweep: SweepResult,
}

impl Analyzer {
    pub fn new(target_size: u64) -> Self {
        Self {
            target_size,
            bid_book: SideBook::new(),
            ask_book: SideBook::new(),
            last_bid_sweep: SweepResult::Infeasible,
            last_ask_sweep: SweepResult::Infeasible,
        }
    }

    /// Parses and applies one market-log line, returning the output line to
    /// print if the affected side's sweep total changed. Per-event errors
    /// (malformed input, duplicate/unknown order ids) are logged to stderr
    /// via `tracing::warn!` and otherwise swallowed — they never terminate
    /// the run. Only [`AnalyzerError::SweepOverflow`] propagates, since the
    /// aggregator invariant it signals means the book state can no longer be
    /// trusted.
    pub fn process_line(&mut self, line: &str) -> AnalyzerResult<Option<String>> {
        let event = match parse_line(line) {
            Ok(event) => event,
            Err(err) => {
                warn!(%err, "rejected line");
                return Ok(None);
            }
        };

        match self.process_event(event) {
            Ok(outcome) => Ok(outcome),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                warn!(%err, "rejected event");
                Ok(None)
            }
        }
    }

    /// Applies one already-parsed event to the books and returns the output
    /// line to print, if the affected side's sweep state changed.
    pub fn process_event(&mut self, event: Event) -> AnalyzerResult<Option<String>> {
        let timestamp = event.timestamp();
        let logged_event = event.clone();

        let affected_side = match event {
            Event::AddOrder {
                order_id,
                side,
                price_cents,
                size,
                ..
            } => {
                if self.bid_book.contains(&order_id) || self.ask_book.contains(&order_id) {
                    return Err(AnalyzerError::DuplicateOrderId(order_id));
                }
                match side {
                    Side::Bid => self.bid_book.add_order(order_id, price_cents, size)?,
                    Side::Ask => self.ask_book.add_order(order_id, price_cents, size)?,
                }
                side
            }
            Event::ReduceOrder {
                order_id,
                size_reduction,
                ..
            } => {
                if self.bid_book.find_order(&order_id).is_some() {
                    self.bid_book.reduce_order(&order_id, size_reduction)?;
                    Side::Bid
                } else if self.ask_book.find_order(&order_id).is_some() {
                    self.ask_book.reduce_order(&order_id, size_reduction)?;
                    Side::Ask
                } else {
                    return Err(AnalyzerError::UnknownOrderId(order_id));
                }
            }
        };

        self.reconcile_sweep(timestamp, affected_side, &logged_event)
    }

    fn reconcile_sweep(
        &mut self,
        timestamp: u64,
        affected_side: Side,
        event: &Event,
    ) -> AnalyzerResult<Option<String>> {
        let (new_sweep, last_sweep) = match affected_side {
            Side::Bid => (
                compute_sweep(&self.bid_book, self.target_size)?,
                &mut self.last_bid_sweep,
            ),
            Side::Ask => (
                compute_sweep(&self.ask_book, self.target_size)?,
                &mut self.last_ask_sweep,
            ),
        };

        debug!(
            ?event,
            ?affected_side,
            ?new_sweep,
            prev_sweep = ?*last_sweep,
            "sweep recomputed"
        );

        if new_sweep == *last_sweep {
            return Ok(None);
        }
        *last_sweep = new_sweep;
        Ok(Some(format_line(timestamp, affected_side, new_sweep)))
    }
}
