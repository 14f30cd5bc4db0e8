//! Health and safety tip catalog.
//!
//! Tips are keyed by `(direction, metric)` and resolved from structured
//! [`Alert`] records, never by parsing alert text. The catalog is a
//! process-wide constant, initialised once and never mutated.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::alert::{Alert, AlertDirection};
use crate::metric::Metric;

/// Shown when no alerts are active, or when no alert maps to a tip.
pub const DEFAULT_TIP: &str = "**All Clear:**\n\
    - All readings are within normal ranges. It's a good day to enjoy the outdoors!";

static HEALTH_TIPS: LazyLock<HashMap<(AlertDirection, Metric), &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            (
                (AlertDirection::High, Metric::Temperature),
                "**High Temperature Alert:**\n\
                 - **Stay Hydrated:** Drink plenty of water throughout the day, even if you don't feel thirsty.\n\
                 - **Avoid Peak Sun Hours:** Limit outdoor activities between 10 a.m. and 4 p.m.\n\
                 - **Seek Cool Environments:** Stay in air-conditioned places. If you don't have AC, visit public places like libraries or malls.\n\
                 - **Dress Lightly:** Wear lightweight, loose-fitting, and light-colored clothing.",
            ),
            (
                (AlertDirection::Low, Metric::Temperature),
                "**Low Temperature Alert:**\n\
                 - **Dress in Layers:** Wear multiple layers of warm clothing to trap heat.\n\
                 - **Protect Extremities:** Use hats, gloves, and warm socks to protect your head, hands, and feet from frostbite.\n\
                 - **Limit Exposure:** Spend as little time as possible outdoors in extreme cold.",
            ),
            (
                (AlertDirection::High, Metric::Humidity),
                "**High Humidity Alert:**\n\
                 - **Control Indoor Climate:** Use a dehumidifier to reduce moisture and prevent mold growth.\n\
                 - **Ensure Ventilation:** Keep air circulating with fans or open windows to make the environment feel cooler.",
            ),
            (
                (AlertDirection::Low, Metric::Humidity),
                "**Low Humidity Alert:**\n\
                 - **Moisturize:** Use a humidifier to add moisture to the air, which helps prevent dry skin, itchy eyes, and irritated sinuses.\n\
                 - **Stay Hydrated:** Drink water to keep your body hydrated from the inside out.",
            ),
            (
                (AlertDirection::High, Metric::Co2),
                "**Elevated CO2 Alert:**\n\
                 - **Increase Ventilation:** This is crucial. Open windows and doors to bring in fresh air and dilute indoor CO2 levels.\n\
                 - **Check Your Systems:** Ensure your HVAC system's fresh air intake is open and not blocked.\n\
                 - **Consider an Air Purifier:** Use a purifier with a HEPA filter to help circulate and clean the air.",
            ),
            (
                (AlertDirection::High, Metric::Co),
                "**URGENT: High Carbon Monoxide Detected:**\n\
                 - **Evacuate Immediately:** CO is a colorless, odorless, and highly toxic gas. Leave the building immediately.\n\
                 - **Call for Help:** Once you are in a safe location, call your local emergency services (e.g., 911).\n\
                 - **Do Not Re-enter:** Wait for professionals to declare the area safe.",
            ),
            (
                (AlertDirection::High, Metric::Pm25),
                "**High PM2.5 (Fine Particulate Matter) Alert:**\n\
                 - **Wear a Mask:** When outdoors, wear a high-quality, well-fitting mask (like an N95 or KN95) to filter out fine particles.\n\
                 - **Use Air Purifiers:** Run an air purifier with a HEPA filter indoors to capture fine particles.\n\
                 - **Avoid Strenuous Activity:** Reduce intense physical exertion, especially outdoors, to lower your inhalation rate.",
            ),
            (
                (AlertDirection::High, Metric::Pm10),
                "**High PM10 (Coarse Particulate Matter) Alert:**\n\
                 - **Limit Outdoor Time:** Reduce time spent outdoors, especially near high-traffic areas or industrial zones.\n\
                 - **Keep Windows Closed:** Prevent outdoor dust and particles from entering your home.\n\
                 - **Clean Indoors:** Dust and vacuum regularly to remove particles that have settled.",
            ),
        ])
    });

/// Resolve active alerts to advisory text.
///
/// With no alerts, returns the [`DEFAULT_TIP`] alone. Otherwise each alert
/// is looked up by `(direction, metric)`; unmapped keys are skipped
/// silently. The result is deduplicated by tip content and ordered
/// lexicographically by tip text (not alert order), so repeated or
/// overlapping alerts never produce duplicate guidance. If every key was
/// unmapped, falls back to the default tip.
pub fn tips(alerts: &[Alert]) -> Vec<&'static str> {
    if alerts.is_empty() {
        return vec![DEFAULT_TIP];
    }

    let unique: BTreeSet<&'static str> = alerts
        .iter()
        .filter_map(|alert| {
            HEALTH_TIPS
                .get(&(alert.direction, alert.metric.clone()))
                .copied()
        })
        .collect();

    if unique.is_empty() {
        vec![DEFAULT_TIP]
    } else {
        unique.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(metric: Metric, direction: AlertDirection) -> Alert {
        Alert {
            metric,
            direction,
            observed: 0.0,
            limit: 0.0,
        }
    }

    #[test]
    fn no_alerts_yields_the_default_tip() {
        assert_eq!(tips(&[]), vec![DEFAULT_TIP]);
    }

    #[test]
    fn alerts_resolve_to_their_catalog_entries() {
        let result = tips(&[alert(Metric::Co, AlertDirection::High)]);
        assert_eq!(result.len(), 1);
        assert!(result[0].starts_with("**URGENT: High Carbon Monoxide Detected:**"));
    }

    #[test]
    fn duplicate_alerts_produce_one_tip() {
        let result = tips(&[
            alert(Metric::Temperature, AlertDirection::High),
            alert(Metric::Temperature, AlertDirection::High),
        ]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn unmapped_keys_are_skipped() {
        // There is no low_co2 tip; the co tip still comes through.
        let result = tips(&[
            alert(Metric::Co2, AlertDirection::Low),
            alert(Metric::Co, AlertDirection::High),
        ]);
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("Carbon Monoxide"));
    }

    #[test]
    fn all_keys_unmapped_falls_back_to_default() {
        let result = tips(&[
            alert(Metric::Co2, AlertDirection::Low),
            alert(Metric::Other("ozone".to_string()), AlertDirection::High),
        ]);
        assert_eq!(result, vec![DEFAULT_TIP]);
    }

    #[test]
    fn tips_are_sorted_by_text_not_alert_order() {
        // "**URGENT: ..." sorts after "**High Temperature ..." even though
        // the co alert comes first.
        let result = tips(&[
            alert(Metric::Co, AlertDirection::High),
            alert(Metric::Temperature, AlertDirection::High),
        ]);
        assert_eq!(result.len(), 2);
        assert!(result[0] < result[1]);
        assert!(result[0].starts_with("**High Temperature"));
    }
}
