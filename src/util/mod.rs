use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod linalg;
pub mod log;

pub mod gr_float {
    use crate::core::config::EPSILON;
    use num_traits::{FromPrimitive, Zero};
    use std::f32::consts::PI;
    use std::time::Duration;

    /// Relative epsilon comparison: `|a - b| <= EPSILON * max(1, |a|, |b|)`.
    ///
    /// Below a magnitude of 1 this is an absolute tolerance of [`EPSILON`]. An infinity only
    /// equals the same infinity; `NaN` never compares equal.
    ///
    /// # Examples
    /// ```
    /// use gronckle::util::gr_float;
    /// assert!(gr_float::float_equals(1.0, 1.0 + 1e-7));
    /// assert!(gr_float::float_equals(1e6, 1e6 + 0.5));
    /// assert!(!gr_float::float_equals(0.0, 1e-5));
    /// ```
    pub fn float_equals(a: f32, b: f32) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        (a - b).abs() <= EPSILON * 1.0_f32.max(a.abs()).max(b.abs())
    }

    pub fn to_radians(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }

    pub fn to_degrees(radians: f32) -> f32 {
        radians * 180.0 / PI
    }

    pub fn millis(duration: Duration) -> f32 {
        from_u128_or_inf(duration.as_micros()) / 1_000.0
    }

    pub fn from_u128_or_inf(x: u128) -> f32 {
        f32::from_u128(x).unwrap_or(f32::INFINITY)
    }

    pub fn force_positive_zero(x: f32) -> f32 {
        if x.is_zero() { 0.0 } else { x }
    }

}

/// Installs the global `tracing` subscriber, writing to [`LOG_FILE`].
///
/// Fails if the log file cannot be created or a subscriber is already installed.
pub fn setup_log() -> Result<()> {
    let logfile = std::fs::OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(LOG_FILE)
        .with_context(|| format!("setup_log(): could not open {LOG_FILE}"))?;
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(logfile)
        .try_init()
        .map_err(|e| anyhow!("setup_log(): {e}"))?;
    Ok(())
}
