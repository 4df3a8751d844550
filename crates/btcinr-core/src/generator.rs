//! Synthetic BTC/INR series generation.
//!
//! Every series is built from [`BASE_PRICE`] perturbed by a uniform volatility
//! draw per point plus a deterministic drift that grows with the point index.
//! Points are returned oldest first. Randomness comes from the caller's
//! [`fastrand::Rng`], so a seeded generator and a fixed `now` reproduce a
//! series exactly.

use fastrand::Rng;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Month, OffsetDateTime};

use crate::{CoreError, Period, PricePoint, Timestamp};

/// Reference price in whole rupees (₹42,50,000).
pub const BASE_PRICE: i64 = 4_250_000;

const HOUR_MINUTE: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]");
const WEEKDAY: &[BorrowedFormatItem<'_>] = format_description!("[weekday repr:short]");
const MONTH_DAY: &[BorrowedFormatItem<'_>] = format_description!("[month repr:short] [day]");
const MONTH: &[BorrowedFormatItem<'_>] = format_description!("[month repr:short]");

/// Generate the series for `period` ending at `now`.
pub fn generate_price_data(
    period: Period,
    now: OffsetDateTime,
    rng: &mut Rng,
) -> Result<Vec<PricePoint>, CoreError> {
    match period {
        Period::OneDay => stepped_series(now, rng, StepShape {
            count: period.point_count(),
            step: Duration::HOUR,
            width: 0.05,
            drift: |i| (i / 4.0).sin() * 0.02,
            label: |date| Ok(date.format(HOUR_MINUTE)?),
        }),
        Period::OneWeek => stepped_series(now, rng, StepShape {
            count: period.point_count(),
            step: Duration::DAY,
            width: 0.1,
            drift: |i| -0.02 + i * 0.005,
            label: |date| Ok(date.format(WEEKDAY)?),
        }),
        Period::OneMonth => stepped_series(now, rng, StepShape {
            count: period.point_count(),
            step: Duration::DAY,
            width: 0.15,
            drift: |i| -0.05 + i * 0.002,
            label: |date| Ok(date.day().to_string()),
        }),
        Period::SixMonths => stepped_series(now, rng, StepShape {
            count: period.point_count(),
            step: Duration::WEEK,
            width: 0.2,
            drift: |i| -0.15 + i * 0.008,
            label: |date| Ok(date.format(MONTH_DAY)?),
        }),
        Period::OneYear => monthly_series(now, rng),
        Period::Max => yearly_series(now, rng),
    }
}

/// Generate by raw identifier. Unknown identifiers yield an empty series.
pub fn generate_price_data_for_id(
    id: &str,
    now: OffsetDateTime,
    rng: &mut Rng,
) -> Result<Vec<PricePoint>, CoreError> {
    match id.parse::<Period>() {
        Ok(period) => generate_price_data(period, now, rng),
        Err(_) => Ok(Vec::new()),
    }
}

/// Fixed-step series walking back from `now`.
struct StepShape {
    count: usize,
    step: Duration,
    /// Full width of the volatility band, centred on zero.
    width: f64,
    drift: fn(f64) -> f64,
    label: fn(OffsetDateTime) -> Result<String, CoreError>,
}

fn stepped_series(
    now: OffsetDateTime,
    rng: &mut Rng,
    shape: StepShape,
) -> Result<Vec<PricePoint>, CoreError> {
    let mut points = Vec::with_capacity(shape.count);
    for i in 0..shape.count {
        let steps_back = (shape.count - 1 - i) as i32;
        let date = now
            .checked_sub(shape.step * steps_back)
            .ok_or_else(|| CoreError::DateOverflow {
                now: Timestamp::from(now).format_rfc3339(),
            })?;
        let volatility = volatility(rng, shape.width);
        let price = BASE_PRICE as f64 * (1.0 + volatility + (shape.drift)(i as f64));
        points.push(PricePoint::new((shape.label)(date)?, round_price(price), date.into())?);
    }
    Ok(points)
}

fn monthly_series(now: OffsetDateTime, rng: &mut Rng) -> Result<Vec<PricePoint>, CoreError> {
    let count = Period::OneYear.point_count();
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let date = month_start(now, i)?;
        let volatility = volatility(rng, 0.3);
        let trend = -0.3 + i as f64 * 0.03;
        let price = BASE_PRICE as f64 * (1.0 + volatility + trend);
        points.push(PricePoint::new(date.format(MONTH)?, round_price(price), date.into())?);
    }
    Ok(points)
}

/// First day of the `i`-th month in the trailing twelve-month window.
///
/// Month numbers that fall to zero or below wrap into the previous year.
fn month_start(now: OffsetDateTime, i: usize) -> Result<OffsetDateTime, CoreError> {
    let month = i32::from(u8::from(now.month())) - 11 + i as i32;
    let (year, month) = if month > 0 {
        (now.year(), month)
    } else {
        (now.year() - 1, month + 12)
    };
    let month = Month::try_from(month as u8)?;
    Ok(Date::from_calendar_date(year, month, 1)?
        .midnight()
        .assume_offset(now.offset()))
}

fn yearly_series(now: OffsetDateTime, rng: &mut Rng) -> Result<Vec<PricePoint>, CoreError> {
    let count = Period::Max.point_count();
    let start_year = now.year() - 4;
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let date = Date::from_calendar_date(start_year + i as i32, Month::January, 1)?
            .midnight()
            .assume_offset(now.offset());
        let volatility = volatility(rng, 0.4);
        let growth = 2f64.powf(i as f64 * 0.8);
        let price = (BASE_PRICE as f64 / 8.0) * growth * (1.0 + volatility);
        points.push(PricePoint::new(
            date.year().to_string(),
            round_price(price),
            date.into(),
        )?);
    }
    Ok(points)
}

fn volatility(rng: &mut Rng, width: f64) -> f64 {
    (rng.f64() - 0.5) * width
}

fn round_price(price: f64) -> i64 {
    price.round_ties_even() as i64
}
