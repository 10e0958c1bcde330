//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// Best-N sweep aggregation over one side of the book: walks price levels from
// the best price outward, accumulating cost until the target size is filled
// or the side is shown to hold too little size to ever fill it.
//
// | Component    | Description                                                     |
// |--------------|--------------------------------------------------------------------|
// | SweepResult  | Outcome of sweeping target_size shares: Infeasible or Feasible     |
// | compute_sweep | Walks a side book best-price-first and accumulates sweep cost     |
//
//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name           | Description                                         | Return Type                   |
// |-----------------|------------------------------------------------------|-------------------------------|
// | compute_sweep   | Sweeps target_size shares against one side of the book | AnalyzerResult<SweepResult> |
//--------------------------------------------------------------------------------------------------

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::side_book::{PriceOrdering, SideBook};

/// The outcome of sweeping `target_size` shares against one side of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepResult {
    /// Fewer than `target_size` shares are resting on this side.
    Infeasible,
    /// `target_size` shares could be swept for `total_cents` total.
    Feasible { total_cents: u64 },
}

/// Walks `side` from the best price outward, accumulating cost until
/// `target_size` shares have been accounted for.
///
/// Returns `Infeasible` up front if the side does not hold enough total size;
/// this is cheap since `total_size` is cached rather than summed here.
pub fn compute_sweep<C: PriceOrdering>(
    side: &SideBook<C>,
    target_size: u64,
) -> AnalyzerResult<SweepResult> {
    if side.total_size() < target_size {
        return Ok(SweepResult::Infeasible);
    }

    let mut remaining = target_size;
    let mut cost: u64 = 0;
    let mut levels_visited = 0usize;

    for (price_cents, level_size) in side.iterate_levels_in_sweep_order() {
        levels_visited += 1;
        let take = remaining.min(level_size);

        let level_cost = price_cents
            .checked_mul(take)
            .ok_or(AnalyzerError::SweepOverflow(target_size, levels_visited))?;
        cost = cost
            .checked_add(level_cost)
            .ok_or(AnalyzerError::SweepOverflow(target_size, levels_visited))?;

        remaining -= take;
        if remaining == 0 {
            return Ok(SweepResult::Feasible { total_cents: cost });
        }
    }

    // side.total_size() >= target_size guaranteed we would have zeroed out
    // remaining above; reaching here means the cached total_size and the
    // level sum disagree, which is an internal invariant violation.
    Err(AnalyzerError::SweepOverflow(target_size, levels_visited))
}
