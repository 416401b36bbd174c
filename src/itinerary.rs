use serde::{Deserialize, Serialize};

/// Generated multi-day itinerary, persisted for the itinerary page once
/// generation succeeds. The engine hands this off by value and keeps no
/// mutable reference afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub days: Vec<ItineraryDay>,

    #[serde(default = "default_advisories")]
    pub advisories: Vec<String>,

    #[serde(default = "default_cost")]
    pub estimated_total_cost: String,
}

fn default_advisories() -> Vec<String> {
    vec!["No advisories available.".to_string()]
}

fn default_cost() -> String {
    "Not available.".to_string()
}

impl Itinerary {
    /// Apply boundary defaults the generator may omit
    pub fn normalize(mut self) -> Self {
        if self.advisories.is_empty() {
            self.advisories = default_advisories();
        }
        if self.estimated_total_cost.trim().is_empty() {
            self.estimated_total_cost = default_cost();
        }
        self
    }
}

/// One day of the itinerary. `schedule` is the loosely formatted day text
/// (`>` day title, `--` events) that the timeline parser structures.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDay {
    pub day: u32,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub theme: Option<String>,

    pub schedule: String,
}

impl ItineraryDay {
    pub fn label(&self) -> String {
        match &self.theme {
            Some(theme) => format!("Day {}: {}", self.day, theme),
            None => format!("Day {}: {}", self.day, self.date),
        }
    }
}

/// Cost/date summary persisted alongside the itinerary for the booking pages
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub destination: String,
    pub travel_dates: String,
    pub adults: u32,
    pub kids: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_fills_missing_fields() {
        let itinerary = Itinerary {
            days: Vec::new(),
            advisories: Vec::new(),
            estimated_total_cost: "  ".to_string(),
        }
        .normalize();

        assert_eq!(itinerary.advisories, vec!["No advisories available."]);
        assert_eq!(itinerary.estimated_total_cost, "Not available.");
    }

    #[test]
    fn test_normalize_keeps_provided_fields() {
        let itinerary = Itinerary {
            days: Vec::new(),
            advisories: vec!["Carry water.".to_string()],
            estimated_total_cost: "₹ 20,000".to_string(),
        }
        .normalize();

        assert_eq!(itinerary.advisories.len(), 1);
        assert_eq!(itinerary.estimated_total_cost, "₹ 20,000");
    }

    #[test]
    fn test_day_label_prefers_theme() {
        let day = ItineraryDay {
            day: 1,
            date: "Sep 21, 2025".to_string(),
            theme: Some("Arrival and Exploration".to_string()),
            schedule: String::new(),
        };
        assert_eq!(day.label(), "Day 1: Arrival and Exploration");

        let day = ItineraryDay {
            day: 2,
            date: "Sep 22, 2025".to_string(),
            theme: None,
            schedule: String::new(),
        };
        assert_eq!(day.label(), "Day 2: Sep 22, 2025");
    }
}
