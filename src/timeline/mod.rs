//! Converts one day's worth of loosely formatted itinerary text into an
//! ordered sequence of typed timeline entries. Pure and total: any string
//! input yields a (possibly empty) entry list, never an error.

mod annotations;
mod classify;

pub use annotations::Annotations;

use classify::{Classifier, LineClass};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TimelineEntry {
    DayHeader { label: String },
    Event(TimelineEvent),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TimelineEvent {
    /// Display string like "09:00 AM"; never parsed into a timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    pub title: String,

    /// Continuation lines not consumed by an annotation marker
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accommodations: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restaurants: Vec<String>,
}

/// Parse a single day's text into ordered timeline entries
pub fn parse_day(text: &str) -> Vec<TimelineEntry> {
    let classifier = Classifier::new();
    let mut entries = Vec::new();

    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .peekable();

    if let Some(first) = lines.peek() {
        if let LineClass::DayHeader(label) = classifier.classify_first(first) {
            entries.push(TimelineEntry::DayHeader {
                label: label.to_string(),
            });
            lines.next();
        }
    }

    // Accumulate (time, title, continuation lines) for the open event
    let mut open: Option<(Option<String>, String, Vec<String>)> = None;

    for line in lines {
        match classifier.classify(line) {
            LineClass::EventStart { time, title } => {
                close_event(&mut open, &mut entries);
                open = Some((
                    time.map(str::to_string),
                    title.to_string(),
                    Vec::new(),
                ));
            }
            LineClass::Continuation(text) => {
                // A continuation with no open event is dropped by design
                if let Some((_, _, body)) = open.as_mut() {
                    body.push(text.to_string());
                }
            }
            // classify() never yields a header; keep the match total anyway
            LineClass::DayHeader(label) => {
                if let Some((_, _, body)) = open.as_mut() {
                    body.push(label.to_string());
                }
            }
        }
    }
    close_event(&mut open, &mut entries);

    entries
}

fn close_event(
    open: &mut Option<(Option<String>, String, Vec<String>)>,
    entries: &mut Vec<TimelineEntry>,
) {
    if let Some((time, raw_title, raw_body)) = open.take() {
        let (title, body, ann) = annotations::extract(&raw_title, &raw_body);
        entries.push(TimelineEntry::Event(TimelineEvent {
            time,
            title,
            body,
            cost: ann.cost,
            location: ann.location,
            accommodations: ann.accommodations,
            restaurants: ann.restaurants,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_TEXT: &str = "> Day 1: Arrival and Exploration\n\
        -- 09:00 AM -- Check into Hotel\n\
        Suggested Accommodations:\n\
        - Saptami Hampi Homestay\n\
        - Arjun Homestay\n\
        -- 01:00 PM -- Lunch (Cost: ₹500 for two)\n\
        Suggested Restaurants:\n\
        - Mango Tree Restaurant\n\
        -- 03:00 PM -- Visit Virupaksha Temple\n\
        Location: Hampi, Karnataka 583239, India\n\
        The main center of pilgrimage in Hampi.";

    fn event(entry: &TimelineEntry) -> &TimelineEvent {
        match entry {
            TimelineEntry::Event(ev) => ev,
            other => panic!("expected event, got {:?}", other),
        }
    }

    #[test]
    fn test_full_day() {
        let entries = parse_day(DAY_TEXT);
        assert_eq!(entries.len(), 4);

        assert_eq!(
            entries[0],
            TimelineEntry::DayHeader {
                label: "Day 1: Arrival and Exploration".to_string()
            }
        );

        let hotel = event(&entries[1]);
        assert_eq!(hotel.time.as_deref(), Some("09:00 AM"));
        assert_eq!(hotel.title, "Check into Hotel");
        assert_eq!(
            hotel.accommodations,
            vec!["Saptami Hampi Homestay", "Arjun Homestay"]
        );

        let lunch = event(&entries[2]);
        assert_eq!(lunch.time.as_deref(), Some("01:00 PM"));
        assert_eq!(lunch.title, "Lunch");
        assert_eq!(lunch.cost.as_deref(), Some("₹500 for two"));
        assert_eq!(lunch.restaurants, vec!["Mango Tree Restaurant"]);

        let temple = event(&entries[3]);
        assert_eq!(temple.title, "Visit Virupaksha Temple");
        assert_eq!(
            temple.location.as_deref(),
            Some("Hampi, Karnataka 583239, India")
        );
        assert_eq!(temple.body, vec!["The main center of pilgrimage in Hampi."]);
    }

    #[test]
    fn test_annotation_example() {
        let entries = parse_day("-- 09:00 AM -- Lunch (Cost: ₹500 for two)");
        assert_eq!(entries.len(), 1);
        let ev = event(&entries[0]);
        assert_eq!(ev.time.as_deref(), Some("09:00 AM"));
        assert_eq!(ev.title, "Lunch");
        assert_eq!(ev.cost.as_deref(), Some("₹500 for two"));
    }

    #[test]
    fn test_deterministic() {
        let first = parse_day(DAY_TEXT);
        let second = parse_day(DAY_TEXT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_day("").is_empty());
        assert!(parse_day("\n\n   \n").is_empty());
    }

    #[test]
    fn test_unrecognized_text_is_dropped() {
        // Continuation lines before any event start are a defined no-op
        let entries = parse_day("just some notes\nwith no markers at all");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_header_only() {
        let entries = parse_day("> Day 2: Temples and Sunset");
        assert_eq!(
            entries,
            vec![TimelineEntry::DayHeader {
                label: "Day 2: Temples and Sunset".to_string()
            }]
        );
    }

    #[test]
    fn test_event_without_time_or_annotations() {
        let entries = parse_day("-- Wander the bazaar\nPick up souvenirs.");
        let ev = event(&entries[0]);
        assert_eq!(ev.time, None);
        assert_eq!(ev.title, "Wander the bazaar");
        assert_eq!(ev.body, vec!["Pick up souvenirs."]);
        assert!(ev.cost.is_none());
        assert!(ev.accommodations.is_empty());
    }

    #[test]
    fn test_serde_tags() {
        let entries = parse_day("> Day 1: Arrival\n-- 09:00 AM -- Breakfast");
        let json = serde_json::to_string(&entries).unwrap();
        assert!(json.contains(r#""type":"day-header""#));
        assert!(json.contains(r#""type":"event""#));
    }
}
