//! Pure numeric scaling pairs.
//!
//! Every `x_to_y` has a matching `y_to_x` and the pair round-trips within
//! float tolerance over the documented domain.

/// Linear gain the device reports for 0 dB.
pub const UNITY_GAIN_WIRE: f64 = 32768.0;

/// Converts a fraction in `[0, 1]` to percent.
#[must_use]
pub fn fraction_to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Converts percent to a fraction in `[0, 1]`.
#[must_use]
pub fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// Converts a fraction of a full turn to degrees.
#[must_use]
pub fn fraction_to_degrees(fraction: f64) -> f64 {
    fraction * 360.0
}

/// Converts degrees to a fraction of a full turn.
#[must_use]
pub fn degrees_to_fraction(degrees: f64) -> f64 {
    degrees / 360.0
}

/// Converts decibels to a linear amplitude factor.
#[must_use]
pub fn decibels_to_linear(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Converts a linear amplitude factor to decibels. Zero maps to `-inf`.
#[must_use]
pub fn linear_to_decibels(linear: f64) -> f64 {
    if linear <= 0.0 {
        return f64::NEG_INFINITY;
    }
    20.0 * linear.log10()
}

/// Encodes decibels as the device's linear gain word.
#[must_use]
pub fn decibels_to_wire(db: f64) -> i64 {
    if db == f64::NEG_INFINITY {
        return 0;
    }
    (decibels_to_linear(db) * UNITY_GAIN_WIRE).round() as i64
}

/// Decodes the device's linear gain word into decibels.
#[must_use]
pub fn wire_to_decibels(raw: i64) -> f64 {
    linear_to_decibels(raw as f64 / UNITY_GAIN_WIRE)
}

/// Wraps `value` into `[0, period)`, folding negatives from the top.
#[must_use]
pub fn wrap(value: f64, period: f64) -> f64 {
    let wrapped = value.rem_euclid(period);
    // rem_euclid can round up to exactly `period` for tiny negatives.
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// Quantizes a domain value by `scale` units per 1.0.
#[must_use]
pub fn quantize(value: f64, scale: u32) -> i64 {
    (value * f64::from(scale)).round() as i64
}

/// Inverse of [`quantize`].
#[must_use]
pub fn dequantize(raw: i64, scale: u32) -> f64 {
    raw as f64 / f64::from(scale)
}
