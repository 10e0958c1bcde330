//! Typed representation of parsed market-log events.

/// The side of the book an order rests on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// A resting buy order.
    Bid,
    /// A resting sell order.
    Ask,
}

impl Side {
    /// Parses the single-character side tag used on the wire (`B` or `S`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "B" => Some(Side::Bid),
            "S" => Some(Side::Ask),
            _ => None,
        }
    }
}

/// One parsed line of the market log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new resting limit order.
    AddOrder {
        timestamp: u64,
        order_id: String,
        side: Side,
        price_cents: u64,
        size: u64,
    },
    /// A reduction (partial or full) of a resting order's size.
    ReduceOrder {
        timestamp: u64,
        order_id: String,
        size_reduction: u64,
    },
}

impl Event {
    /// The originating timestamp, used verbatim on any output line the event triggers.
    pub fn timestamp(&self) -> u64 {
        match self {
            Event::AddOrder { timestamp, .. } => *timestamp,
            Event::ReduceOrder { timestamp, .. } => *timestamp,
        }
    }
}
