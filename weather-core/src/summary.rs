//! Weekly aggregate over the daily series and the hourly pressure readings.

use crate::{
    model::{DailySeries, Precipitation, WeeklySummary},
    rounding::round2,
};

/// WMO codes from drizzle (51) upwards mean some form of precipitation.
pub const PRECIPITATION_CODE_THRESHOLD: i32 = 51;

/// Days with precipitation at which the week counts as wet.
pub const WET_WEEK_MIN_DAYS: usize = 4;

/// Aggregate a week. Empty inputs yield `NaN` for the affected fields.
///
/// `daily.dates` is not consulted, and the series need not share a length.
pub fn summarize(daily: &DailySeries, surface_pressures: &[f64]) -> WeeklySummary {
    let sunshine_hours: Vec<f64> = daily.sunshine_durations.iter().map(|m| m / 60.0).collect();

    WeeklySummary {
        min_temperature: round2(minimum(&daily.min_temperatures)),
        max_temperature: round2(maximum(&daily.max_temperatures)),
        average_pressure: round2(mean(surface_pressures)),
        average_sunshine_hours: round2(mean(&sunshine_hours)),
        weekly_summary: classify_precipitation(&daily.weather_codes),
    }
}

pub fn precipitation_days(weather_codes: &[i32]) -> usize {
    weather_codes.iter().filter(|&&code| code >= PRECIPITATION_CODE_THRESHOLD).count()
}

pub fn classify_precipitation(weather_codes: &[i32]) -> Precipitation {
    if precipitation_days(weather_codes) >= WET_WEEK_MIN_DAYS {
        Precipitation::With
    } else {
        Precipitation::Without
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn maximum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
}

fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily(weather_codes: Vec<i32>) -> DailySeries {
        DailySeries {
            dates: Vec::new(),
            weather_codes,
            max_temperatures: vec![10.0, 12.5, 18.456, 11.0, 9.0, 14.0, 13.0],
            min_temperatures: vec![1.0, -2.345, 0.5, 3.0, 2.0, 4.0, 1.5],
            sunshine_durations: vec![60.0, 120.0, 180.0, 0.0, 30.0, 90.0, 150.0],
        }
    }

    #[test]
    fn four_wet_days_make_a_wet_week() {
        let summary = summarize(&daily(vec![51, 61, 80, 95, 0, 1, 3]), &[1000.0]);
        assert_eq!(summary.weekly_summary, Precipitation::With);
    }

    #[test]
    fn three_wet_days_do_not() {
        let summary = summarize(&daily(vec![51, 61, 80, 50, 0, 1, 3]), &[1000.0]);
        assert_eq!(summary.weekly_summary, Precipitation::Without);
    }

    #[test]
    fn drizzle_code_is_the_threshold() {
        assert_eq!(precipitation_days(&[50, 51, 52, 0]), 2);
    }

    #[test]
    fn aggregates_temperatures_pressure_and_sunshine() {
        let summary = summarize(&daily(vec![0; 7]), &[1012.0, 1013.5, 1011.25, 1014.0]);

        assert_eq!(summary.max_temperature, 18.46);
        assert_eq!(summary.min_temperature, -2.35);
        assert_eq!(summary.average_pressure, 1012.69);
        // 630 minutes over 7 days is 1.5 hours per day.
        assert_eq!(summary.average_sunshine_hours, 1.5);
        assert_eq!(summary.weekly_summary, Precipitation::Without);
    }

    #[test]
    fn empty_inputs_yield_nan() {
        let summary = summarize(&DailySeries::default(), &[]);

        assert!(summary.average_pressure.is_nan());
        assert!(summary.average_sunshine_hours.is_nan());
        assert!(summary.max_temperature.is_nan());
        assert!(summary.min_temperature.is_nan());
        assert_eq!(summary.weekly_summary, Precipitation::Without);
    }

    #[test]
    fn serializes_in_documented_key_order() {
        let summary = summarize(&daily(vec![61; 7]), &[1000.0]);
        let json = serde_json::to_string(&summary).unwrap();

        assert_eq!(
            json,
            r#"{"minTemperature":-2.35,"maxTemperature":18.46,"averagePressure":1000.0,"averageSunshineHours":1.5,"weeklySummary":"with precipitation"}"#
        );
    }
}
