//! Property-based tests for the derived-metrics calculator.
//!
//! These verify the universal contracts of the pure operations across
//! random inputs, using the `proptest` crate for case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tandem_core::goals::Goal;
use tandem_core::portfolio::{
    delta_series, filter_range, liquid_subtotal, ownership_breakdown, NetWorthSample,
    PortfolioLineItem,
};
use tandem_core::Period;

// =============================================================================
// Generators
// =============================================================================

/// Generates a currency amount, positive or negative.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(Decimal::from)
}

/// Generates a non-negative holding amount.
fn arb_holding_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(Decimal::from)
}

/// Generates a calendar-month period.
fn arb_period() -> impl Strategy<Value = Period> {
    (2000i32..2100, 1u32..=12).prop_map(|(y, m)| Period::new(y, m).expect("valid month"))
}

/// Generates a portfolio with owners drawn from a small fixed set.
fn arb_portfolio(max_items: usize) -> impl Strategy<Value = Vec<PortfolioLineItem>> {
    proptest::collection::vec(
        (0usize..4, "[a-z]{3,10}", arb_holding_amount(), any::<bool>()).prop_map(
            |(owner_idx, category, amount, is_liquid)| PortfolioLineItem {
                owner: ["A", "B", "C", "D"][owner_idx].to_string(),
                category,
                amount,
                is_liquid,
                color: None,
            },
        ),
        0..=max_items,
    )
}

/// Generates a consecutive monthly net-worth series.
fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<NetWorthSample>> {
    (arb_period(), proptest::collection::vec(arb_amount(), 0..=max_len)).prop_map(
        |(start, values)| {
            let mut period = start;
            values
                .into_iter()
                .map(|net_worth| {
                    let sample = NetWorthSample { period, net_worth };
                    period = period.next();
                    sample
                })
                .collect()
        },
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Goal progress is a displayable fraction for any sign or magnitude
    /// of growth.
    #[test]
    fn prop_goal_progress_is_always_in_unit_interval(
        net_worth in arb_amount(),
        baseline in arb_amount(),
        target in arb_amount(),
    ) {
        let goal = Goal {
            id: "g".to_string(),
            title: "t".to_string(),
            target_amount: target,
            is_achieved: false,
        };

        let progress = goal.progress(net_worth, baseline);

        prop_assert!(progress >= Decimal::ZERO && progress <= Decimal::ONE,
            "progress {} outside [0, 1]", progress);
    }

    /// Per-owner sums reconcile with the grand total exactly; the
    /// synthetic total row's share is the literal 100.
    #[test]
    fn prop_ownership_sums_reconcile_exactly(items in arb_portfolio(30)) {
        let breakdown = ownership_breakdown(&items);

        let owner_sum: Decimal = breakdown.owners.iter().map(|o| o.value).sum();
        let item_sum: Decimal = items.iter().map(|i| i.amount).sum();

        prop_assert_eq!(owner_sum, breakdown.total.value);
        prop_assert_eq!(breakdown.total.value, item_sum);
        prop_assert_eq!(breakdown.total.percentage, dec!(100));
    }

    /// The liquid subtotal never exceeds the grand total and equals the
    /// sum of the per-owner subtotals.
    #[test]
    fn prop_liquid_subtotal_decomposes_by_owner(items in arb_portfolio(30)) {
        let all = liquid_subtotal(&items, None);
        let by_owner: Decimal = ["A", "B", "C", "D"]
            .into_iter()
            .map(|owner| liquid_subtotal(&items, Some(owner)))
            .sum();

        prop_assert_eq!(all, by_owner);

        let total: Decimal = items.iter().map(|i| i.amount).sum();
        prop_assert!(all <= total);
    }

    /// The first delta is always zero and every later delta is the exact
    /// difference of adjacent values.
    #[test]
    fn prop_delta_series_is_exact(series in arb_series(40)) {
        let points = delta_series(&series);

        prop_assert_eq!(points.len(), series.len());
        if let Some(first) = points.first() {
            prop_assert_eq!(first.delta, Decimal::ZERO);
        }
        for window in points.windows(2) {
            prop_assert_eq!(window[1].delta, window[1].net_worth - window[0].net_worth);
        }
    }

    /// An inverted range never yields results and never panics.
    #[test]
    fn prop_inverted_range_is_empty(
        series in arb_series(40),
        a in arb_period(),
        b in arb_period(),
    ) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        prop_assume!(earlier != later);

        prop_assert!(filter_range(&series, later, earlier).is_empty());
    }

    /// Range filtering keeps exactly the in-range samples, in order.
    #[test]
    fn prop_range_filter_is_inclusive_and_order_preserving(
        series in arb_series(40),
        a in arb_period(),
        b in arb_period(),
    ) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        let filtered = filter_range(&series, start, end);

        let expected: Vec<&NetWorthSample> = series
            .iter()
            .filter(|s| s.period >= start && s.period <= end)
            .collect();

        prop_assert_eq!(filtered.len(), expected.len());
        for (got, want) in filtered.iter().zip(expected) {
            prop_assert_eq!(got, want);
        }
    }
}
