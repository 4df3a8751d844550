//! Statistics derived from a generated series.

use crate::generator::BASE_PRICE;
use crate::PricePoint;

/// Price of the newest point, or [`BASE_PRICE`] for an empty series.
pub fn current_price(points: &[PricePoint]) -> i64 {
    points.last().map_or(BASE_PRICE, |point| point.price)
}

/// Percentage move from the first to the last point.
///
/// Returns `0.0` when fewer than two points exist. A [`PricePoint`] is always
/// positive, so the division is well defined.
pub fn percentage_change(points: &[PricePoint]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() >= 2 => {
            (last.price - first.price) as f64 / first.price as f64 * 100.0
        }
        _ => 0.0,
    }
}
