use serde::Serialize;

use crate::routing::RoutePlan;
use crate::timetable::Timetable;

/// Structured, name-resolved representation of a planned trip that
/// higher-level consumers can render or serialise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    /// Display names of the visited stations, origin first.
    pub stops: Vec<String>,
    pub stop_count: usize,
    pub total_minutes: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved station names.
    pub fn from_plan(timetable: &Timetable, plan: &RoutePlan) -> Self {
        let stops: Vec<String> = plan
            .stops
            .iter()
            .map(|&stop| {
                timetable
                    .network()
                    .station_name(stop)
                    .map(display_name)
                    .unwrap_or_else(|| "<unknown>".to_string())
            })
            .collect();
        let origin = stops
            .first()
            .cloned()
            .unwrap_or_else(|| "<unknown>".to_string());
        let destination = stops
            .last()
            .cloned()
            .unwrap_or_else(|| "<unknown>".to_string());

        Self {
            origin,
            destination,
            stop_count: stops.len(),
            stops,
            total_minutes: plan.total_minutes,
            hours: plan.total_minutes / 60,
            minutes: plan.total_minutes % 60,
        }
    }
}

/// Title-case a normalized station name for display ("new york" -> "New York").
pub fn display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace() || ch == '-';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{plan_trip, Outcome};
    use crate::timetable::parse_timetable;

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(display_name("madrid"), "Madrid");
        assert_eq!(display_name("new york"), "New York");
        assert_eq!(display_name("aix-en-provence"), "Aix-En-Provence");
    }

    #[test]
    fn summary_resolves_names_and_splits_the_total() {
        let timetable = parse_timetable(
            "madrid,barcelona,03:10\nbarcelona,paris,04:54\n".as_bytes(),
            "sample",
        )
        .expect("timetable parses");
        let outcome = plan_trip(&timetable, "madrid", "paris").expect("query succeeds");
        let Outcome::Resolved(plan) = outcome else {
            panic!("expected a resolved route, got {outcome:?}");
        };

        let summary = RouteSummary::from_plan(&timetable, &plan);
        assert_eq!(summary.origin, "Madrid");
        assert_eq!(summary.destination, "Paris");
        assert_eq!(summary.stops, vec!["Madrid", "Barcelona", "Paris"]);
        assert_eq!(summary.stop_count, 3);
        assert_eq!(summary.total_minutes, 484);
        assert_eq!(summary.hours, 8);
        assert_eq!(summary.minutes, 4);
    }
}
