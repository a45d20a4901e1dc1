//! Per-day forecast enrichment with an estimated solar yield.

use chrono::NaiveDate;

use crate::{
    error::WeatherError,
    model::{DailySeries, ForecastDay},
    rounding::round2,
};

/// Nameplate power of the modelled installation, in kW.
pub const PANEL_POWER_KW: f64 = 2.5;
pub const PANEL_EFFICIENCY: f64 = 0.2;

const UPSTREAM_DATE_FORMAT: &str = "%Y-%m-%d";
const OUTPUT_DATE_FORMAT: &str = "%d/%m/%Y";

/// `2024-03-05` -> `05/03/2024`
pub fn reformat_date(date: &str) -> Result<String, WeatherError> {
    let parsed = NaiveDate::parse_from_str(date, UPSTREAM_DATE_FORMAT).map_err(|source| {
        WeatherError::InvalidDate { value: date.to_string(), source }
    })?;

    Ok(parsed.format(OUTPUT_DATE_FORMAT).to_string())
}

/// Linear yield proxy: panel power times sunshine hours times efficiency.
pub fn generated_energy(sunshine_minutes: f64) -> f64 {
    let hours = sunshine_minutes / 60.0;
    round2(PANEL_POWER_KW * hours * PANEL_EFFICIENCY)
}

/// Build one [`ForecastDay`] per entry in `daily.dates`, preserving order.
///
/// All series must have as many entries as there are dates.
pub fn process_forecast(daily: &DailySeries) -> Result<Vec<ForecastDay>, WeatherError> {
    let days = daily.dates.len();
    ensure_len("weathercode", days, daily.weather_codes.len())?;
    ensure_len("temperature_2m_max", days, daily.max_temperatures.len())?;
    ensure_len("temperature_2m_min", days, daily.min_temperatures.len())?;
    ensure_len("sunshine_duration", days, daily.sunshine_durations.len())?;

    daily
        .dates
        .iter()
        .zip(&daily.weather_codes)
        .zip(&daily.max_temperatures)
        .zip(&daily.min_temperatures)
        .zip(&daily.sunshine_durations)
        .map(|((((date, &weather_code), &max), &min), &sunshine)| {
            Ok(ForecastDay {
                date: reformat_date(date)?,
                weather_code,
                max_temperature: round2(max),
                min_temperature: round2(min),
                generated_energy: generated_energy(sunshine),
            })
        })
        .collect()
}

fn ensure_len(field: &'static str, expected: usize, actual: usize) -> Result<(), WeatherError> {
    if expected == actual {
        Ok(())
    } else {
        Err(WeatherError::MismatchedSeries { field, expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> DailySeries {
        DailySeries {
            dates: (1..=7).map(|d| format!("2024-03-0{d}")).collect(),
            weather_codes: vec![0, 1, 3, 51, 61, 2, 95],
            max_temperatures: vec![12.345, 13.0, 14.999, 10.0, 9.5, 11.25, 8.004],
            min_temperatures: vec![2.005, 3.0, 4.1, 1.0, -0.5, 0.0, -1.234],
            sunshine_durations: vec![120.0, 0.0, 600.0, 30.0, 45.5, 360.0, 720.0],
        }
    }

    #[test]
    fn reformats_iso_date() {
        assert_eq!(reformat_date("2024-03-05").unwrap(), "05/03/2024");
        assert_eq!(reformat_date("1999-12-31").unwrap(), "31/12/1999");
    }

    #[test]
    fn rejects_malformed_date() {
        let err = reformat_date("05/03/2024").unwrap_err();
        assert!(matches!(err, WeatherError::InvalidDate { ref value, .. } if value == "05/03/2024"));
        assert!(reformat_date("2024-02-30").is_err());
    }

    #[test]
    fn two_hours_of_sun_yields_one_kwh() {
        assert_eq!(generated_energy(120.0), 1.00);
        assert_eq!(generated_energy(0.0), 0.0);
        assert_eq!(generated_energy(600.0), 5.0);
    }

    #[test]
    fn processes_a_week_in_order() {
        let days = process_forecast(&week()).unwrap();

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, "01/03/2024");
        assert_eq!(days[6].date, "07/03/2024");
        assert_eq!(days[0].weather_code, 0);
        assert_eq!(days[6].weather_code, 95);
        assert_eq!(days[0].max_temperature, 12.35);
        assert_eq!(days[0].min_temperature, 2.01);
        assert_eq!(days[6].max_temperature, 8.0);
        assert_eq!(days[6].min_temperature, -1.23);
        assert_eq!(days[0].generated_energy, 1.0);
        assert_eq!(days[4].generated_energy, 0.38);
    }

    #[test]
    fn a_bad_date_fails_the_whole_forecast() {
        let mut daily = week();
        daily.dates[3] = "March 4th".into();

        assert!(matches!(process_forecast(&daily), Err(WeatherError::InvalidDate { .. })));
    }

    #[test]
    fn mismatched_series_fail_fast() {
        let mut daily = week();
        daily.max_temperatures.pop();

        let err = process_forecast(&daily).unwrap_err();
        assert!(matches!(
            err,
            WeatherError::MismatchedSeries { field: "temperature_2m_max", expected: 7, actual: 6 }
        ));
    }

    #[test]
    fn empty_series_give_empty_forecast() {
        assert!(process_forecast(&DailySeries::default()).unwrap().is_empty());
    }
}
