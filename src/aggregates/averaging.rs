//! Aggregation primitives shared by every formula.
//!
//! Two zero-denominator policies exist and are kept apart on purpose:
//! [`nullable_ratio`] yields `None` so the row drops out of a mean, while the
//! derived metrics in `crate::metrics` resolve a single ratio to `0` or
//! `+inf` themselves.

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator`, or `None` when the denominator is zero.
pub fn nullable_ratio(numerator: i64, denominator: i64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Mean of the present values; `None` when nothing contributes.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 { None } else { Some(sum / count as f64) }
}

/// Null-safe mean of per-row ratios, scaled to a percentage.
pub fn mean_ratio_pct<T, F>(rows: &[T], ratio: F) -> Option<f64>
where
    F: Fn(&T) -> Option<f64>,
{
    mean(rows.iter().map(ratio)).map(|m| m * 100.0)
}

/// Share of `true` flags as a rounded percentage; `0` for an empty slice.
pub fn flag_percentage<I>(flags: I) -> f64
where
    I: IntoIterator<Item = bool>,
{
    let (hits, total) = flags
        .into_iter()
        .fold((0usize, 0usize), |(hits, total), f| (hits + usize::from(f), total + 1));

    if total == 0 {
        0.0
    } else {
        round2(hits as f64 / total as f64 * 100.0)
    }
}

pub fn mean_duration<I>(durations: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<i64>>,
{
    mean(durations.into_iter().map(|d| d.map(|m| m as f64)))
}
