//! Weather alert evaluation.
//!
//! A fixed threshold table is compared against live weather readings. Each
//! alert kind carries a cooldown window; the sweep suppresses an alert for a
//! user when a notification containing its message already exists inside the
//! window. High and low temperature are independent thresholds evaluated with
//! independent comparisons.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current weather snapshot for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    /// Coarse condition string from the provider, e.g. "Rain" or "Clear".
    pub condition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Alert category matching one threshold table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    HeavyRain,
    StrongWind,
    HighTemperature,
    LowTemperature,
    HighHumidity,
}

/// One row of the fixed alert threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThreshold {
    pub kind: AlertKind,
    pub message: &'static str,
    pub cooldown_hours: i64,
}

/// The observation that tripped a threshold: the provider's condition string
/// for the rain alert, a numeric reading for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AlertTrigger {
    Condition(String),
    Reading(f64),
}

/// A triggered alert with the observation that tripped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub trigger: AlertTrigger,
}

const HEAVY_RAIN: AlertThreshold = AlertThreshold {
    kind: AlertKind::HeavyRain,
    message: "Heavy rain alert! Consider protecting your plants.",
    cooldown_hours: 24,
};
const STRONG_WIND: AlertThreshold = AlertThreshold {
    kind: AlertKind::StrongWind,
    message: "Strong winds detected! Secure your plants.",
    cooldown_hours: 12,
};
const HIGH_TEMPERATURE: AlertThreshold = AlertThreshold {
    kind: AlertKind::HighTemperature,
    message: "High temperature alert! Ensure proper watering.",
    cooldown_hours: 12,
};
const LOW_TEMPERATURE: AlertThreshold = AlertThreshold {
    kind: AlertKind::LowTemperature,
    message: "Low temperature alert! Protect sensitive plants.",
    cooldown_hours: 12,
};
const HIGH_HUMIDITY: AlertThreshold = AlertThreshold {
    kind: AlertKind::HighHumidity,
    message: "High humidity alert! Watch for fungal diseases.",
    cooldown_hours: 24,
};

/// The full threshold table, in evaluation order.
pub const THRESHOLDS: [AlertThreshold; 5] = [
    HEAVY_RAIN,
    STRONG_WIND,
    HIGH_TEMPERATURE,
    LOW_TEMPERATURE,
    HIGH_HUMIDITY,
];

/// Wind speed at or above which the strong-wind alert fires, in km/h.
pub const STRONG_WIND_KMH: f64 = 50.0;
/// Temperature at or above which the high-temperature alert fires, in °C.
pub const HIGH_TEMPERATURE_C: f64 = 38.0;
/// Temperature at or below which the low-temperature alert fires, in °C.
pub const LOW_TEMPERATURE_C: f64 = 2.0;
/// Relative humidity at or above which the humidity alert fires, in percent.
pub const HIGH_HUMIDITY_PCT: f64 = 90.0;

/// Look up the threshold row for an alert kind.
pub fn threshold_for(kind: AlertKind) -> &'static AlertThreshold {
    match kind {
        AlertKind::HeavyRain => &HEAVY_RAIN,
        AlertKind::StrongWind => &STRONG_WIND,
        AlertKind::HighTemperature => &HIGH_TEMPERATURE,
        AlertKind::LowTemperature => &LOW_TEMPERATURE,
        AlertKind::HighHumidity => &HIGH_HUMIDITY,
    }
}

/// Evaluate a reading against every threshold, ignoring cooldowns.
pub fn triggered_alerts(reading: &WeatherReading) -> Vec<Alert> {
    let mut alerts = Vec::new();
    if reading.condition.eq_ignore_ascii_case("rain") {
        alerts.push(alert(
            &HEAVY_RAIN,
            AlertTrigger::Condition(reading.condition.clone()),
        ));
    }
    if reading.wind_speed_kmh >= STRONG_WIND_KMH {
        alerts.push(alert(&STRONG_WIND, AlertTrigger::Reading(reading.wind_speed_kmh)));
    }
    if reading.temperature_c >= HIGH_TEMPERATURE_C {
        alerts.push(alert(
            &HIGH_TEMPERATURE,
            AlertTrigger::Reading(reading.temperature_c),
        ));
    }
    if reading.temperature_c <= LOW_TEMPERATURE_C {
        alerts.push(alert(
            &LOW_TEMPERATURE,
            AlertTrigger::Reading(reading.temperature_c),
        ));
    }
    if reading.humidity_pct >= HIGH_HUMIDITY_PCT {
        alerts.push(alert(&HIGH_HUMIDITY, AlertTrigger::Reading(reading.humidity_pct)));
    }
    alerts
}

/// True when `last_sent` falls inside the threshold's cooldown window ending
/// at `now`. A missing history entry never suppresses.
pub fn within_cooldown(
    threshold: &AlertThreshold,
    last_sent: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> bool {
    let Some(last) = last_sent else {
        return false;
    };
    now.signed_duration_since(last) < TimeDelta::hours(threshold.cooldown_hours)
}

fn alert(threshold: &AlertThreshold, trigger: AlertTrigger) -> Alert {
    Alert {
        kind: threshold.kind,
        message: threshold.message.to_owned(),
        trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reading(temp: f64, humidity: f64, wind: f64, condition: &str) -> WeatherReading {
        WeatherReading {
            temperature_c: temp,
            humidity_pct: humidity,
            wind_speed_kmh: wind,
            condition: condition.to_owned(),
            icon: None,
        }
    }

    #[test]
    fn calm_weather_triggers_nothing() {
        let alerts = triggered_alerts(&reading(22.0, 55.0, 10.0, "Clear"));
        assert!(alerts.is_empty());
    }

    #[rstest]
    #[case(reading(22.0, 55.0, 10.0, "Rain"), AlertKind::HeavyRain)]
    #[case(reading(22.0, 55.0, 50.0, "Clear"), AlertKind::StrongWind)]
    #[case(reading(38.0, 55.0, 10.0, "Clear"), AlertKind::HighTemperature)]
    #[case(reading(2.0, 55.0, 10.0, "Clear"), AlertKind::LowTemperature)]
    #[case(reading(22.0, 90.0, 10.0, "Clouds"), AlertKind::HighHumidity)]
    fn each_threshold_fires_at_its_boundary(
        #[case] reading: WeatherReading,
        #[case] expected: AlertKind,
    ) {
        let alerts = triggered_alerts(&reading);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, expected);
    }

    #[test]
    fn rain_alert_carries_the_condition_that_tripped_it() {
        let alerts = triggered_alerts(&reading(22.0, 55.0, 10.0, "Rain"));
        assert_eq!(alerts.len(), 1);
        assert_eq!(
            alerts[0].trigger,
            AlertTrigger::Condition("Rain".to_owned())
        );
    }

    #[test]
    fn numeric_alerts_carry_the_offending_reading() {
        let alerts = triggered_alerts(&reading(22.0, 55.0, 65.0, "Clear"));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].trigger, AlertTrigger::Reading(65.0));
    }

    #[test]
    fn high_and_low_temperature_are_independent() {
        // A scorching reading must not also trip the low-temperature branch,
        // and a freezing one must not trip the high branch.
        let hot = triggered_alerts(&reading(45.0, 40.0, 5.0, "Clear"));
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].kind, AlertKind::HighTemperature);

        let cold = triggered_alerts(&reading(-4.0, 40.0, 5.0, "Clear"));
        assert_eq!(cold.len(), 1);
        assert_eq!(cold[0].kind, AlertKind::LowTemperature);
    }

    #[test]
    fn multiple_thresholds_can_fire_from_one_reading() {
        let alerts = triggered_alerts(&reading(39.0, 95.0, 60.0, "Rain"));
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AlertKind::HeavyRain,
                AlertKind::StrongWind,
                AlertKind::HighTemperature,
                AlertKind::HighHumidity,
            ]
        );
    }

    #[test]
    fn cooldown_suppresses_until_the_window_elapses() {
        let sent = chrono::NaiveDate::from_ymd_opt(2026, 8, 27)
            .and_then(|d| d.and_hms_opt(6, 0, 0))
            .expect("valid timestamp");
        let threshold = threshold_for(AlertKind::HeavyRain);

        let before = sent + TimeDelta::hours(23);
        assert!(within_cooldown(threshold, Some(sent), before));

        let at_boundary = sent + TimeDelta::hours(24);
        assert!(!within_cooldown(threshold, Some(sent), at_boundary));
    }

    #[test]
    fn no_history_never_suppresses() {
        let now = chrono::NaiveDate::from_ymd_opt(2026, 8, 27)
            .and_then(|d| d.and_hms_opt(6, 0, 0))
            .expect("valid timestamp");
        assert!(!within_cooldown(threshold_for(AlertKind::StrongWind), None, now));
    }
}
