//! In-place initialisation of parameter values.
//!
//! Randomness always comes from a caller-supplied generator, so a seeded
//! `StdRng` gives reproducible models.

use crate::error::GradRustError;
use crate::value::Value;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rand_distr::Normal;

/// Fills `param` with a sample from U[low, high).
///
/// # Errors
/// `InvalidInitialization` if the bounds are not finite or `low >= high`.
pub fn uniform_<R: Rng + ?Sized>(
    param: &Value,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<(), GradRustError> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(GradRustError::InvalidInitialization {
            reason: format!("uniform bounds [{}, {}) are empty or not finite", low, high),
        });
    }
    let dist = Uniform::new(low, high);
    param.set_data(dist.sample(rng));
    Ok(())
}

/// Fills `param` with a sample from N(mean, std²).
///
/// # Errors
/// `InvalidInitialization` if `std` is negative or NaN.
pub fn normal_<R: Rng + ?Sized>(
    param: &Value,
    mean: f64,
    std: f64,
    rng: &mut R,
) -> Result<(), GradRustError> {
    if std.is_nan() || std < 0.0 {
        return Err(GradRustError::InvalidInitialization {
            reason: format!("normal std must be non-negative, got {}", std),
        });
    }
    let dist = Normal::new(mean, std).map_err(|e| GradRustError::InvalidInitialization {
        reason: format!("normal({}, {}): {}", mean, std, e),
    })?;
    param.set_data(dist.sample(rng));
    Ok(())
}

/// Fills `param` with `value`.
pub fn constant_(param: &Value, value: f64) {
    param.set_data(value);
}

/// Fills `param` with zero.
pub fn zeros_(param: &Value) {
    constant_(param, 0.0);
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
