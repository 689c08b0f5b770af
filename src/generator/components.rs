use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};

use crate::constants::{SEASONAL_AMPLITUDE, SEASONAL_PERIOD_MONTHS, TREND_TOTAL_RISE};

/// First-of-month dates for `count` consecutive months starting at `start`.
pub fn month_starts(start: NaiveDate, count: usize) -> Result<Vec<NaiveDate>> {
    let mut months = Vec::with_capacity(count);
    for offset in 0..count {
        let date = start
            .checked_add_months(Months::new(offset as u32))
            .with_context(|| format!("month offset {offset} from {start} overflows the calendar"))?;
        months.push(date);
    }
    Ok(months)
}

/// Linear ramp from 0 at the first index to the full rise at the last,
/// evenly spaced.
pub fn trend(index: usize, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    TREND_TOTAL_RISE * index as f64 / (count - 1) as f64
}

/// Sinusoidal yearly cycle; repeats every [`SEASONAL_PERIOD_MONTHS`] indices.
pub fn seasonal(index: usize) -> f64 {
    let phase = (index % SEASONAL_PERIOD_MONTHS) as f64 / SEASONAL_PERIOD_MONTHS as f64;
    SEASONAL_AMPLITUDE * (std::f64::consts::TAU * phase).sin()
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MONTH_COUNT;

    #[test]
    fn month_grid_is_consecutive_first_of_month() {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid date");
        let months = month_starts(start, MONTH_COUNT).expect("month grid");

        assert_eq!(months.len(), MONTH_COUNT);
        assert_eq!(months[0], start);
        assert_eq!(
            months[13],
            NaiveDate::from_ymd_opt(2023, 2, 1).expect("valid date")
        );
        for window in months.windows(2) {
            let gap = window[1].signed_duration_since(window[0]).num_days();
            assert!(
                (28..=31).contains(&gap),
                "expected one calendar month between {} and {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn trend_spans_full_rise_and_never_decreases() {
        assert_eq!(trend(0, MONTH_COUNT), 0.0);
        assert!((trend(MONTH_COUNT - 1, MONTH_COUNT) - TREND_TOTAL_RISE).abs() < 1e-12);

        let mut previous = f64::NEG_INFINITY;
        for index in 0..MONTH_COUNT {
            let value = trend(index, MONTH_COUNT);
            assert!(value >= previous, "trend decreased at index {index}");
            previous = value;
        }
    }

    #[test]
    fn seasonal_repeats_after_one_period() {
        for index in 0..MONTH_COUNT {
            let a = seasonal(index);
            let b = seasonal(index + SEASONAL_PERIOD_MONTHS);
            assert!(
                (a - b).abs() < 1e-12,
                "seasonal not periodic at index {index}: {a} vs {b}"
            );
        }
    }

    #[test]
    fn seasonal_stays_within_amplitude() {
        for index in 0..SEASONAL_PERIOD_MONTHS {
            assert!(seasonal(index).abs() <= SEASONAL_AMPLITUDE + 1e-12);
        }
        // Quarter period hits the positive peak.
        assert!((seasonal(3) - SEASONAL_AMPLITUDE).abs() < 1e-9);
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_to_cents(513.4561), 513.46);
        assert_eq!(round_to_cents(299.999), 300.0);
        assert_eq!(round_to_cents(-12.345), -12.35);
        assert_eq!(round_to_cents(42.0), 42.0);
    }
}
