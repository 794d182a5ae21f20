//! Integration tests for CSV ingestion feeding the RSI engine.

use std::path::PathBuf;

use rsilab_core::data::{load_bars, read_bars, EmptyKind, LoadError};
use rsilab_core::domain::closes;
use rsilab_core::indicators::wilder_rsi;
use rsilab_core::signals::{classify_series, SignalCounts, Thresholds};

fn sample_csv() -> PathBuf {
    // The bundled sample lives at the workspace root
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("data/sample.csv")
}

#[test]
fn bundled_sample_loads_in_date_order() {
    let bars = load_bars(&sample_csv()).unwrap();
    assert_eq!(bars.len(), 60);
    assert_eq!(bars[0].date, "2024-01-02");
    assert_eq!(bars.last().unwrap().date, "2024-03-25");

    // ISO dates sort lexically
    for window in bars.windows(2) {
        assert!(window[0].date < window[1].date);
    }
    assert!(bars.iter().all(|b| b.is_sane()));
}

#[test]
fn bundled_sample_produces_every_signal_kind() {
    let bars = load_bars(&sample_csv()).unwrap();
    let rsi = wilder_rsi(&closes(&bars), 14);
    let signals = classify_series(&rsi, &Thresholds::default());
    let counts = SignalCounts::tally(&signals);

    assert_eq!(counts.pending, 14);
    assert_eq!(counts.buy, 7);
    assert_eq!(counts.sell, 15);
    assert_eq!(counts.hold, 24);
}

#[test]
fn wilder_reference_series_from_csv() {
    let closes_text = [
        "44", "44.34", "44.09", "43.61", "44.33", "44.83", "45.10", "45.42", "45.84", "46.08",
        "45.89", "46.03", "45.61", "46.28", "46.28", "46.00", "46.03", "46.41", "46.22", "45.64",
    ];
    let mut csv = String::from("date,open,high,low,close,volume\n");
    for (i, c) in closes_text.iter().enumerate() {
        csv.push_str(&format!("day{i:02},{c},{c},{c},{c},100\n"));
    }

    let bars = read_bars(csv.as_bytes(), "inline").unwrap();
    let rsi = wilder_rsi(&closes(&bars), 14);
    let first = rsi[14].unwrap();
    assert!((first - 72.98).abs() < 0.1, "RSI[14] = {first}");
}

#[test]
fn schema_rejection_lists_missing_columns() {
    let err = read_bars("name,value\na,1\n".as_bytes(), "inline").unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, LoadError::Schema(_)));
    for col in ["date", "open", "high", "low", "close", "volume"] {
        assert!(msg.contains(col), "missing {col} in: {msg}");
    }
}

#[test]
fn header_only_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header_only.csv");
    std::fs::write(&path, "date,open,high,low,close,volume\n").unwrap();

    let err = load_bars(&path).unwrap_err();
    assert!(matches!(
        err,
        LoadError::EmptyInput {
            kind: EmptyKind::NoRows,
            ..
        }
    ));
}

#[test]
fn zero_byte_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let err = load_bars(&path).unwrap_err();
    assert!(matches!(
        err,
        LoadError::EmptyInput {
            kind: EmptyKind::NoHeader,
            ..
        }
    ));
}
