//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// One side (bid or ask) of the order book: a price-ordered map of levels plus an
// order-id index, generalized over which direction counts as "best" so bid and
// ask share one implementation instead of two near-duplicate types.
//
// | Component      | Description                                                            |
// |----------------|--------------------------------------------------------------------------|
// | SideBook<C>    | Price-ordered levels plus an order-id index, for one side of the book   |
// | PriceOrdering  | Selects sweep direction: highest-first for Bid, lowest-first for Ask    |
// | Bid / Ask      | Zero-sized markers implementing PriceOrdering                          |
//
//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name         | Description                                       | Key Methods                |
// |--------------|-----------------------------------------------------|---------------------------|
// | SideBook<C>  | One side of the dual order book                     | add_order, reduce_order   |
// |              |                                                       | find_order, contains      |
// |              |                                                       | iterate_levels_in_sweep_order |
// | OrderEntry   | Internal per-order index record                     | (private)                 |
//
//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name                            | Description                                | Return Type            |
// |----------------------------------|---------------------------------------------|------------------------|
// | new                              | Creates an empty side book                   | SideBook<C>            |
// | total_size                       | Cached sum of every live level's total_size  | u64                    |
// | contains                         | Whether an order id is live on this side     | bool                   |
// | find_order                       | Price and residual size for a live order     | Option<(u64, u64)>     |
// | add_order                        | Inserts a new resting order                  | AnalyzerResult<()>     |
// | reduce_order                     | Reduces an order's residual size, clamped    | AnalyzerResult<u64>    |
// | iterate_levels_in_sweep_order    | Walks live levels from the best price outward | impl Iterator<Item=(u64, u64)> |
//--------------------------------------------------------------------------------------------------

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::price_level::PriceLevel;

/// Selects the direction levels are walked in for sweep purposes. A
/// zero-sized marker type rather than a runtime tag, so the two sides share
/// one `SideBook` implementation and cannot drift (see DESIGN.md).
pub trait PriceOrdering {
    /// Yields `(price_cents, level_total_size)` pairs from the best price
    /// outward: descending for bids, ascending for asks.
    fn iter_sweep_order(
        levels: &BTreeMap<u64, PriceLevel>,
    ) -> Box<dyn Iterator<Item = (u64, u64)> + '_>;
}

/// Marker for the bid side: best price is the *highest*.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bid;

impl PriceOrdering for Bid {
    fn iter_sweep_order(
        levels: &BTreeMap<u64, PriceLevel>,
    ) -> Box<dyn Iterator<Item = (u64, u64)> + '_> {
        Box::new(levels.iter().rev().map(|(&p, l)| (p, l.total_size())))
    }
}

/// Marker for the ask side: best price is the *lowest*.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ask;

impl PriceOrdering for Ask {
    fn iter_sweep_order(
        levels: &BTreeMap<u64, PriceLevel>,
    ) -> Box<dyn Iterator<Item = (u64, u64)> + '_> {
        Box::new(levels.iter().map(|(&p, l)| (p, l.total_size())))
    }
}

#[derive(Debug, Clone, Copy)]
struct OrderEntry {
    price_cents: u64,
    residual_size: u64,
}

/// One side of the dual order book, keyed by price and indexed by order id.
///
/// Invariants (hold after every public method returns `Ok`):
/// 1. an order id appears in `orders` iff it appears in exactly one level's
///    id set, at the price recorded in `orders`;
/// 2. `total_size` equals the sum of every live level's `total_size`;
/// 3. every level in `levels` has `total_size > 0`;
/// 4. `levels` iterated via `iterate_levels_in_sweep_order` yields strictly
///    monotonic prices in the direction `C` selects.
#[derive(Debug)]
pub struct SideBook<C> {
    orders: HashMap<String, OrderEntry>,
    levels: BTreeMap<u64, PriceLevel>,
    total_size: u64,
    _ordering: PhantomData<C>,
}

impl<C> Default for SideBook<C> {
    fn default() -> Self {
        Self {
            orders: HashMap::new(),
            levels: BTreeMap::new(),
            total_size: 0,
            _ordering: PhantomData,
        }
    }
}

impl<C: PriceOrdering> SideBook<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total resting size across every live level on this side.
    #[inline]
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Whether `order_id` is live on this side.
    pub fn contains(&self, order_id: &str) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Returns `(price_cents, residual_size)` for a live order, if present.
    pub fn find_order(&self, order_id: &str) -> Option<(u64, u64)> {
        self.orders
            .get(order_id)
            .map(|e| (e.price_cents, e.residual_size))
    }

    /// Inserts a new resting order.
    ///
    /// Fails with `DuplicateOrderId` if `order_id` is already live on this side.
    pub fn add_order(&mut self, order_id: String, price_cents: u64, size: u64) -> AnalyzerResult<()> {
        if self.orders.contains_key(&order_id) {
            return Err(AnalyzerError::DuplicateOrderId(order_id));
        }

        self.levels
            .entry(price_cents)
            .or_default()
            .add(order_id.clone(), size);
        self.orders.insert(
            order_id,
            OrderEntry {
                price_cents,
                residual_size: size,
            },
        );
        self.total_size += size;
        Ok(())
    }

    /// Reduces a live order's residual size by up to `size_reduction`,
    /// clamped to the order's current residual. Returns the size actually
    /// applied.
    ///
    /// Fails with `UnknownOrderId` if `order_id` is not live on this side.
    pub fn reduce_order(&mut self, order_id: &str, size_reduction: u64) -> AnalyzerResult<u64> {
        let entry = self
            .orders
            .get_mut(order_id)
            .ok_or_else(|| AnalyzerError::UnknownOrderId(order_id.to_string()))?;

        let applied = size_reduction.min(entry.residual_size);
        entry.residual_size -= applied;
        let price_cents = entry.price_cents;
        let residual_is_zero = entry.residual_size == 0;

        if let Some(level) = self.levels.get_mut(&price_cents) {
            level.reduce(applied);
            if residual_is_zero {
                level.remove(order_id);
            }
            if level.is_empty() {
                self.levels.remove(&price_cents);
            }
        }

        if residual_is_zero {
            self.orders.remove(order_id);
        }

        self.total_size -= applied;
        Ok(applied)
    }

    /// Walks live levels from the best price outward, yielding
    /// `(price_cents, level_total_size)` pairs.
    pub fn iterate_levels_in_sweep_order(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        C::iter_sweep_order(&self.levels)
    }
}
