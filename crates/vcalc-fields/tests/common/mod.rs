//! Shared helpers for the operator integration tests

#![allow(dead_code)]

use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output to the test harness, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Relative comparison that falls back to absolute near zero
pub fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance * expected.abs().max(1.0)
}

/// Assert every component of `actual` is close to `expected`
pub fn assert_vec_close(actual: [f64; 3], expected: [f64; 3], tolerance: f64) {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            close(*a, *e, tolerance),
            "component {i}: expected {e}, got {a} (full: {actual:?})"
        );
    }
}
