//! Environment configuration loading from .env files
//!
//! Loads simulator limits from `.env` or environment variables.
//! Used by the quantum context to build its default configuration.

use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

use crate::math::TOLERANCE;

/// Default: 20 qubits (2^20 amplitudes ≈ 16 MiB)
pub const DEFAULT_MAX_QUBITS: usize = 20;

/// Default: 1e-9
pub const DEFAULT_UNITARITY_TOLERANCE: f64 = 1e-9;

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn read_var<T: FromStr>(name: &str, default: T) -> T {
    ensure_loaded();
    match env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(var = name, value = %raw, "ignoring unparsable config override");
                default
            }
        },
        Err(_) => default,
    }
}

/// Probability tolerance from `SCOTTY_TOLERANCE`
/// Default: 1e-6
pub fn tolerance() -> f64 {
    read_var("SCOTTY_TOLERANCE", TOLERANCE)
}

/// Maximum qubit count from `SCOTTY_MAX_QUBITS`
/// Default: 20
pub fn max_qubits() -> usize {
    read_var("SCOTTY_MAX_QUBITS", DEFAULT_MAX_QUBITS)
}

/// Unitarity tolerance from `SCOTTY_UNITARITY_TOLERANCE`
/// Default: 1e-9
pub fn unitarity_tolerance() -> f64 {
    read_var("SCOTTY_UNITARITY_TOLERANCE", DEFAULT_UNITARITY_TOLERANCE)
}

/// Cached values
pub static TOLERANCE_ENV: Lazy<f64> = Lazy::new(tolerance);
pub static MAX_QUBITS_ENV: Lazy<usize> = Lazy::new(max_qubits);
pub static UNITARITY_TOLERANCE_ENV: Lazy<f64> = Lazy::new(unitarity_tolerance);
