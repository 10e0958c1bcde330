//! End-to-end tests driving the parser, analyzer, and formatter together
//! over full input scripts, matching spec §8's worked scenarios.

use market_depth_analyzer::analyzer::Analyzer;

fn run(target_size: u64, input: &[&str]) -> Vec<String> {
    let mut analyzer = Analyzer::new(target_size);
    input
        .iter()
        .filter_map(|line| analyzer.process_line(line).expect("no fatal errors expected"))
        .collect()
}

#[test]
fn sell_sweep_across_two_price_levels() {
    let out = run(
        200,
        &["28800538 A b B 44.26 100", "28800562 A c B 44.10 100"],
    );
    assert_eq!(out, vec!["28800562 S 8836.00"]);
}

#[test]
fn reduction_drops_side_below_feasibility() {
    let out = run(
        200,
        &[
            "28800538 A b B 44.26 100",
            "28800562 A c B 44.10 100",
            "28800744 R b 100",
        ],
    );
    assert_eq!(out, vec!["28800562 S 8836.00", "28800744 S NA"]);
}

#[test]
fn buy_sweep_across_two_orders_same_price() {
    let out = run(
        200,
        &["28800758 A d S 44.18 157", "28800773 A e S 44.18 100"],
    );
    assert_eq!(out, vec!["28800773 B 8836.00"]);
}

#[test]
fn target_size_one_emits_on_every_top_of_book_change() {
    let out = run(1, &["1 A x B 10.00 1", "2 A y B 11.00 1", "3 R y 1"]);
    assert_eq!(out, vec!["1 S 10.00", "2 S 11.00", "3 S 10.00"]);
}

#[test]
fn malformed_line_is_skipped_and_later_lines_still_processed() {
    let out = run(
        3,
        &[
            "10 A a B 5.00 2",
            "11 GARBAGE",
            "12 A b B 4.00 1",
            "13 R a 2",
        ],
    );
    assert_eq!(out, vec!["12 S 14.00", "13 S NA"]);
}

#[test]
fn duplicate_order_id_rejected_original_order_untouched() {
    let out = run(5, &["1 A z B 2.00 5", "2 A z B 3.00 5"]);
    assert_eq!(out, vec!["1 S 10.00"]);
}

#[test]
fn duplicate_order_id_for_larger_target_never_emits() {
    let out = run(6, &["1 A z B 2.00 5", "2 A z B 3.00 5"]);
    assert!(out.is_empty());
}

#[test]
fn empty_stream_produces_no_output() {
    let out = run(200, &[]);
    assert!(out.is_empty());
}

#[test]
fn full_teardown_returns_both_sides_to_infeasible() {
    let out = run(
        10,
        &[
            "1 A a B 10.00 10",
            "2 A b S 20.00 10",
            "3 R a 10",
            "4 R b 10",
        ],
    );
    assert_eq!(out, vec!["1 S 100.00", "2 B 200.00", "3 S NA", "4 B NA"]);
}

#[test]
fn level_collapse_advances_top_of_book() {
    let out = run(
        1,
        &["1 A a B 10.05 1", "2 A b B 9.99 1", "3 R a 1"],
    );
    // Best bid starts at 10.05; removing it exposes 9.99 underneath.
    assert_eq!(out, vec!["1 S 10.05", "3 S 9.99"]);
}

#[test]
fn unknown_side_tag_is_rejected_without_mutating_book() {
    let out = run(1, &["1 A a X 10.00 1", "2 A a B 10.00 1"]);
    // The rejected line never creates order "a", so the second line (valid,
    // reusing the same id) succeeds rather than hitting DuplicateOrderId.
    assert_eq!(out, vec!["2 S 10.00"]);
}
