//! Property tests for RSI engine invariants.
//!
//! Uses proptest to verify:
//! 1. Length: output length equals input length for every input
//! 2. Warmup prefix: exactly `period` leading values are undefined
//! 3. Range: every defined value lies in [0, 100]
//! 4. Extremes: monotone rising → 100, monotone falling → 0, flat → 100
//! 5. Classification: one signal per RSI value, undefined stays undefined

use proptest::prelude::*;
use rsilab_core::indicators::wilder_rsi;
use rsilab_core::signals::{classify_series, Signal, Thresholds};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = f64> {
    (1.0..1000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_closes() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_price(), 0..120)
}

fn arb_period() -> impl Strategy<Value = usize> {
    1..30usize
}

/// Strictly positive steps, so a cumulative sum is strictly monotone.
fn arb_steps(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01..5.0_f64, min_len..min_len + 60)
}

// ── 1-3. Shape and range ─────────────────────────────────────────────

proptest! {
    #[test]
    fn output_length_matches_input(closes in arb_closes(), period in arb_period()) {
        prop_assert_eq!(wilder_rsi(&closes, period).len(), closes.len());
    }

    #[test]
    fn warmup_prefix_is_exactly_period(closes in arb_closes(), period in arb_period()) {
        let rsi = wilder_rsi(&closes, period);
        if closes.len() < period + 1 {
            prop_assert!(rsi.iter().all(Option::is_none));
        } else {
            prop_assert!(rsi[..period].iter().all(Option::is_none));
            prop_assert!(rsi[period..].iter().all(Option::is_some));
        }
    }

    #[test]
    fn defined_values_are_in_range(closes in arb_closes(), period in arb_period()) {
        for (i, v) in wilder_rsi(&closes, period).into_iter().enumerate() {
            if let Some(v) = v {
                prop_assert!((0.0..=100.0).contains(&v), "RSI out of range at {}: {}", i, v);
            }
        }
    }
}

// ── 4. Extremes ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn strictly_rising_series_is_100(start in arb_price(), steps in arb_steps(15)) {
        let closes: Vec<f64> = steps
            .iter()
            .scan(start, |p, s| { *p += s; Some(*p) })
            .collect();
        for v in wilder_rsi(&closes, 14).into_iter().flatten() {
            prop_assert!((v - 100.0).abs() < 1e-9, "expected 100, got {}", v);
        }
    }

    #[test]
    fn strictly_falling_series_is_0(start in 5_000.0..10_000.0_f64, steps in arb_steps(15)) {
        let closes: Vec<f64> = steps
            .iter()
            .scan(start, |p, s| { *p -= s; Some(*p) })
            .collect();
        for v in wilder_rsi(&closes, 14).into_iter().flatten() {
            prop_assert!(v.abs() < 1e-9, "expected 0, got {}", v);
        }
    }

    #[test]
    fn flat_series_is_100(price in arb_price(), len in 15..80usize) {
        let closes = vec![price; len];
        let rsi = wilder_rsi(&closes, 14);
        prop_assert!(rsi[14..].iter().all(|v| *v == Some(100.0)));
    }
}

// ── 5. Classification ────────────────────────────────────────────────

proptest! {
    #[test]
    fn classification_mirrors_rsi(closes in arb_closes(), period in arb_period()) {
        let rsi = wilder_rsi(&closes, period);
        let signals = classify_series(&rsi, &Thresholds::default());
        prop_assert_eq!(signals.len(), rsi.len());
        for (r, s) in rsi.iter().zip(&signals) {
            match (r, s) {
                (None, None) => {}
                (Some(v), Some(Signal::Buy)) => prop_assert!(*v < 30.0),
                (Some(v), Some(Signal::Sell)) => prop_assert!(*v > 70.0),
                (Some(v), Some(Signal::Hold)) => prop_assert!((30.0..=70.0).contains(v)),
                _ => prop_assert!(false, "definedness mismatch: {:?} vs {:?}", r, s),
            }
        }
    }
}
