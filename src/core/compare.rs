//! Plan comparison: filtering and sorting the sample plans
//!
//! [`compute_visible_plans`] is a pure function of the record list and the
//! current [`FilterState`]; the comparison table re-runs it whenever any
//! filter input changes.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::plans::{PlanRecord, UseCase};

/// Lower speed slider range (Mbps)
pub const SPEED_LOW_MIN: u32 = 0;
pub const SPEED_LOW_MAX: u32 = 500;

/// Upper speed slider range (Mbps)
pub const SPEED_HIGH_MIN: u32 = 100;
pub const SPEED_HIGH_MAX: u32 = 1000;

/// Sort order for the comparison table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortMode {
    PriceLow,
    PriceHigh,
    #[default]
    SpeedHigh,
    SpeedLow,
}

impl SortMode {
    /// All modes in select-box order
    pub const ALL: [SortMode; 4] = [
        SortMode::PriceLow,
        SortMode::PriceHigh,
        SortMode::SpeedHigh,
        SortMode::SpeedLow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::PriceLow => "price-low",
            SortMode::PriceHigh => "price-high",
            SortMode::SpeedHigh => "speed-high",
            SortMode::SpeedLow => "speed-low",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::PriceLow => "Price: Low to High",
            SortMode::PriceHigh => "Price: High to Low",
            SortMode::SpeedHigh => "Speed: Fastest First",
            SortMode::SpeedLow => "Speed: Lowest First",
        }
    }
}

/// Price label that does not contain a number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("No numeric price in label {label:?}")]
pub struct PriceParseError {
    pub label: String,
}

/// Extract the numeric amount from a price label such as `$49.99/mo`.
///
/// Every character that is not an ASCII digit or `.` is dropped, then the
/// longest leading decimal number is read. A range like `$49.99–$89.99/mo`
/// therefore yields `49.9989`.
pub fn parse_price_label(label: &str) -> Result<f64, PriceParseError> {
    let cleaned: String = label
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, c) in cleaned.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return Err(PriceParseError {
            label: label.to_string(),
        });
    }

    cleaned[..end].parse::<f64>().map_err(|_| PriceParseError {
        label: label.to_string(),
    })
}

/// User-selected filter and sort criteria for the comparison table
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Selected use cases; a plan matches if it is best for any of them
    pub use_cases: BTreeSet<UseCase>,
    /// Inclusive lower speed bound (Mbps)
    pub speed_low: u32,
    /// Inclusive upper speed bound (Mbps)
    pub speed_high: u32,
    pub sort: SortMode,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            use_cases: BTreeSet::new(),
            speed_low: SPEED_LOW_MIN,
            speed_high: SPEED_HIGH_MAX,
            sort: SortMode::default(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the use case if unselected, otherwise deselect it
    pub fn toggle_use_case(&mut self, use_case: UseCase) {
        if !self.use_cases.remove(&use_case) {
            self.use_cases.insert(use_case);
        }
    }

    pub fn is_selected(&self, use_case: UseCase) -> bool {
        self.use_cases.contains(&use_case)
    }

    /// Set the lower bound, clamped to the lower slider's range.
    /// The bounds may cross; an inverted interval matches nothing.
    pub fn set_speed_low(&mut self, value: u32) {
        self.speed_low = value.clamp(SPEED_LOW_MIN, SPEED_LOW_MAX);
    }

    /// Set the upper bound, clamped to the upper slider's range
    pub fn set_speed_high(&mut self, value: u32) {
        self.speed_high = value.clamp(SPEED_HIGH_MIN, SPEED_HIGH_MAX);
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
    }

    /// Whether a single record passes the speed and use-case filters
    pub fn matches(&self, plan: &PlanRecord) -> bool {
        if plan.speed_value < self.speed_low || plan.speed_value > self.speed_high {
            return false;
        }
        self.use_cases.is_empty() || self.use_cases.iter().any(|u| plan.is_best_for(*u))
    }
}

/// Price ordering; labels without a number go last in either direction
fn compare_prices(a: &PlanRecord, b: &PlanRecord, descending: bool) -> Ordering {
    match (parse_price_label(a.price), parse_price_label(b.price)) {
        (Ok(x), Ok(y)) => {
            if descending {
                y.total_cmp(&x)
            } else {
                x.total_cmp(&y)
            }
        }
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => Ordering::Equal,
    }
}

fn compare_plans(a: &PlanRecord, b: &PlanRecord, sort: SortMode) -> Ordering {
    match sort {
        SortMode::PriceLow => compare_prices(a, b, false),
        SortMode::PriceHigh => compare_prices(a, b, true),
        SortMode::SpeedHigh => b.speed_value.cmp(&a.speed_value),
        SortMode::SpeedLow => a.speed_value.cmp(&b.speed_value),
    }
}

/// Filter and order `records` for display.
///
/// Ties keep their original relative order. `records` is not modified.
pub fn compute_visible_plans(records: &[PlanRecord], state: &FilterState) -> Vec<PlanRecord> {
    let mut visible: Vec<PlanRecord> = records
        .iter()
        .filter(|plan| state.matches(plan))
        .cloned()
        .collect();

    visible.sort_by(|a, b| compare_plans(a, b, state.sort));
    visible
}

/// Result count line shown above the table
pub fn showing_summary(visible: usize, total: usize) -> String {
    format!("Showing {} of {} sample plans", visible, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plans::sample_plans;

    fn ids(plans: &[PlanRecord]) -> Vec<&'static str> {
        plans.iter().map(|p| p.id).collect()
    }

    fn with_price(id: &'static str, price: &'static str) -> PlanRecord {
        PlanRecord {
            id,
            price,
            ..sample_plans()[0].clone()
        }
    }

    // ========================================================================
    // Price parsing
    // ========================================================================

    #[test]
    fn test_parse_price_label() {
        assert_eq!(parse_price_label("$49.99/mo").unwrap(), 49.99);
        assert_eq!(parse_price_label("$55/mo").unwrap(), 55.0);
        assert_eq!(parse_price_label("Starting at $40/mo").unwrap(), 40.0);
        assert_eq!(parse_price_label(".5").unwrap(), 0.5);
    }

    #[test]
    fn test_parse_price_label_range_reads_leading_number() {
        assert_eq!(parse_price_label("$49.99–$89.99/mo").unwrap(), 49.9989);
    }

    #[test]
    fn test_parse_price_label_without_digits() {
        let err = parse_price_label("Call for pricing").unwrap_err();
        assert_eq!(err.label, "Call for pricing");
        assert!(parse_price_label("").is_err());
        assert!(parse_price_label("...").is_err());
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    #[test]
    fn test_default_state_shows_every_plan() {
        let plans = sample_plans();
        let visible = compute_visible_plans(&plans, &FilterState::new());

        assert_eq!(visible.len(), plans.len());
    }

    #[test]
    fn test_speed_interval_is_inclusive() {
        let plans = sample_plans();
        let state = FilterState {
            speed_low: 500,
            speed_high: 940,
            ..FilterState::default()
        };

        let visible = compute_visible_plans(&plans, &state);
        assert_eq!(ids(&visible), vec!["v2", "o2", "s2"]);
    }

    #[test]
    fn test_every_result_within_speed_interval() {
        let plans = sample_plans();
        let bounds = [0, 100, 299, 300, 301, 500, 940, 999, 1000];

        for &low in &bounds {
            for &high in bounds.iter().filter(|h| **h >= low) {
                let state = FilterState {
                    speed_low: low,
                    speed_high: high,
                    ..FilterState::default()
                };
                for plan in compute_visible_plans(&plans, &state) {
                    assert!(
                        low <= plan.speed_value && plan.speed_value <= high,
                        "{} outside [{}, {}]",
                        plan.id,
                        low,
                        high
                    );
                }
            }
        }
    }

    #[test]
    fn test_inverted_interval_matches_nothing() {
        let plans = sample_plans();
        let state = FilterState {
            speed_low: 500,
            speed_high: 400,
            ..FilterState::default()
        };

        assert!(compute_visible_plans(&plans, &state).is_empty());
    }

    #[test]
    fn test_use_case_filter_is_logical_or() {
        let plans = sample_plans();
        let mut state = FilterState::new();
        state.toggle_use_case(UseCase::Gaming);

        let gaming = compute_visible_plans(&plans, &state);
        assert_eq!(gaming.len(), 4);

        state.toggle_use_case(UseCase::Streaming);
        let either = compute_visible_plans(&plans, &state);
        assert_eq!(either.len(), 8);
    }

    #[test]
    fn test_every_result_shares_a_selected_use_case() {
        let plans = sample_plans();

        for selected in [
            vec![UseCase::Gaming],
            vec![UseCase::LargeHousehold],
            vec![UseCase::Gaming, UseCase::LargeHousehold],
            vec![UseCase::WorkFromHome, UseCase::Streaming],
        ] {
            let mut state = FilterState::new();
            for use_case in &selected {
                state.toggle_use_case(*use_case);
            }
            for plan in compute_visible_plans(&plans, &state) {
                assert!(selected.iter().any(|u| plan.is_best_for(*u)), "{}", plan.id);
            }
        }
    }

    #[test]
    fn test_toggle_use_case_twice_deselects() {
        let mut state = FilterState::new();

        state.toggle_use_case(UseCase::Gaming);
        assert!(state.is_selected(UseCase::Gaming));

        state.toggle_use_case(UseCase::Gaming);
        assert!(!state.is_selected(UseCase::Gaming));
        assert!(state.use_cases.is_empty());
    }

    #[test]
    fn test_speed_setters_clamp_to_slider_ranges() {
        let mut state = FilterState::new();

        state.set_speed_low(800);
        state.set_speed_high(50);
        assert_eq!(state.speed_low, SPEED_LOW_MAX);
        assert_eq!(state.speed_high, SPEED_HIGH_MIN);

        state.set_speed_low(250);
        state.set_speed_high(2000);
        assert_eq!(state.speed_low, 250);
        assert_eq!(state.speed_high, SPEED_HIGH_MAX);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let plans = sample_plans();
        let mut state = FilterState::new();
        state.toggle_use_case(UseCase::LargeHousehold);
        state.set_speed_high(600);

        assert!(compute_visible_plans(&plans, &state).is_empty());
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    #[test]
    fn test_speed_high_is_stable() {
        let plans = sample_plans();
        let speeds: Vec<u32> = plans.iter().map(|p| p.speed_value).collect();
        assert_eq!(speeds, vec![300, 940, 300, 500, 300, 1000, 940, 300]);

        let visible = compute_visible_plans(&plans, &FilterState::new());
        assert_eq!(
            ids(&visible),
            vec!["a2", "v2", "o2", "s2", "v1", "s1", "a1", "o1"]
        );
    }

    #[test]
    fn test_speed_low_order() {
        let plans = sample_plans();
        let mut state = FilterState::new();
        state.set_sort(SortMode::SpeedLow);

        let visible = compute_visible_plans(&plans, &state);
        assert_eq!(
            ids(&visible),
            vec!["v1", "s1", "a1", "o1", "s2", "v2", "o2", "a2"]
        );
    }

    #[test]
    fn test_price_sorts() {
        let plans = sample_plans();
        let mut state = FilterState::new();

        state.set_sort(SortMode::PriceLow);
        let low = compute_visible_plans(&plans, &state);
        assert_eq!(
            ids(&low),
            vec!["o1", "v1", "s1", "a1", "s2", "a2", "o2", "v2"]
        );

        state.set_sort(SortMode::PriceHigh);
        let high = compute_visible_plans(&plans, &state);
        assert_eq!(
            ids(&high),
            vec!["v2", "a2", "o2", "s2", "a1", "v1", "s1", "o1"]
        );
    }

    #[test]
    fn test_every_sort_mode_is_monotone() {
        let plans = sample_plans();

        for mode in SortMode::ALL {
            let state = FilterState {
                sort: mode,
                ..FilterState::default()
            };
            let visible = compute_visible_plans(&plans, &state);
            for pair in visible.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let price = |p: &PlanRecord| parse_price_label(p.price).unwrap();
                match mode {
                    SortMode::PriceLow => assert!(price(a) <= price(b)),
                    SortMode::PriceHigh => assert!(price(a) >= price(b)),
                    SortMode::SpeedHigh => assert!(a.speed_value >= b.speed_value),
                    SortMode::SpeedLow => assert!(a.speed_value <= b.speed_value),
                }
            }
        }
    }

    #[test]
    fn test_unparseable_prices_sort_last_both_directions() {
        let records = vec![
            with_price("call", "Call for pricing"),
            with_price("cheap", "$20/mo"),
            with_price("blank", ""),
            with_price("pricey", "$90/mo"),
        ];

        let mut state = FilterState::new();
        state.set_sort(SortMode::PriceLow);
        assert_eq!(
            ids(&compute_visible_plans(&records, &state)),
            vec!["cheap", "pricey", "call", "blank"]
        );

        state.set_sort(SortMode::PriceHigh);
        assert_eq!(
            ids(&compute_visible_plans(&records, &state)),
            vec!["pricey", "cheap", "call", "blank"]
        );
    }

    #[test]
    fn test_compute_is_pure_and_repeatable() {
        let plans = sample_plans();
        let snapshot = plans.clone();
        let mut state = FilterState::new();
        state.toggle_use_case(UseCase::Streaming);
        state.set_sort(SortMode::PriceHigh);

        let first = compute_visible_plans(&plans, &state);
        let second = compute_visible_plans(&plans, &state);

        assert_eq!(first, second);
        assert_eq!(plans, snapshot);
    }

    #[test]
    fn test_sort_mode_ids() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::parse(mode.as_str()), Some(mode));
        }
        assert_eq!(SortMode::parse("name"), None);
        assert_eq!(SortMode::default(), SortMode::SpeedHigh);
    }

    #[test]
    fn test_showing_summary() {
        assert_eq!(showing_summary(3, 8), "Showing 3 of 8 sample plans");
    }
}
