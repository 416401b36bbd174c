use regex::Regex;

/// Structured annotations pulled out of an event's accumulated text.
/// Lines consumed here are excluded from the plain-text body so the
/// rendering never shows them twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    pub cost: Option<String>,
    pub location: Option<String>,
    pub accommodations: Vec<String>,
    pub restaurants: Vec<String>,
}

const ACCOMMODATIONS_MARKER: &str = "Suggested Accommodations:";
const RESTAURANTS_MARKER: &str = "Suggested Restaurants:";

/// Extract annotations from the title line and continuation lines of one
/// event. Returns the cleaned title, the remaining plain body lines, and
/// the annotations.
pub fn extract(title: &str, lines: &[String]) -> (String, Vec<String>, Annotations) {
    let cost_re = Regex::new(r"\(Cost:\s*(.*?)\)").expect("static pattern");

    let mut annotations = Annotations::default();
    let mut body = Vec::new();

    let title = strip_cost(title, &cost_re, &mut annotations);

    let mut idx = 0;
    while idx < lines.len() {
        let line = lines[idx].as_str();

        if let Some(rest) = line.strip_prefix("Location:") {
            if annotations.location.is_none() {
                annotations.location = Some(rest.trim().to_string());
            }
            idx += 1;
            continue;
        }

        if line.trim() == ACCOMMODATIONS_MARKER {
            idx = consume_bullets(lines, idx + 1, &mut annotations.accommodations);
            continue;
        }

        if line.trim() == RESTAURANTS_MARKER {
            idx = consume_bullets(lines, idx + 1, &mut annotations.restaurants);
            continue;
        }

        let cleaned = strip_cost(line, &cost_re, &mut annotations);
        if !cleaned.is_empty() {
            body.push(cleaned);
        }
        idx += 1;
    }

    (title, body, annotations)
}

/// Remove the first `(Cost: ...)` span, recording it if none was seen yet
fn strip_cost(line: &str, cost_re: &Regex, annotations: &mut Annotations) -> String {
    match cost_re.captures(line) {
        Some(caps) => {
            if annotations.cost.is_none() {
                if let Some(cost) = caps.get(1) {
                    annotations.cost = Some(cost.as_str().trim().to_string());
                }
            }
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let mut cleaned = String::with_capacity(line.len());
            cleaned.push_str(&line[..whole.start]);
            cleaned.push_str(&line[whole.end..]);
            cleaned.trim().to_string()
        }
        None => line.trim().to_string(),
    }
}

/// Collect `- ` bulleted lines following a suggestions marker; returns the
/// index of the first line past the block
fn consume_bullets(lines: &[String], mut idx: usize, out: &mut Vec<String>) -> usize {
    while idx < lines.len() {
        match lines[idx].trim().strip_prefix("- ") {
            Some(item) => {
                out.push(item.trim().to_string());
                idx += 1;
            }
            None => break,
        }
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cost_in_title() {
        let (title, body, ann) = extract("Lunch (Cost: ₹500 for two)", &[]);
        assert_eq!(title, "Lunch");
        assert!(body.is_empty());
        assert_eq!(ann.cost.as_deref(), Some("₹500 for two"));
    }

    #[test]
    fn test_location_line_consumed() {
        let (title, body, ann) = extract(
            "Visit Virupaksha Temple",
            &lines(&["Location: Hampi, Karnataka 583239, India", "Wear comfortable shoes."]),
        );
        assert_eq!(title, "Visit Virupaksha Temple");
        assert_eq!(body, vec!["Wear comfortable shoes."]);
        assert_eq!(ann.location.as_deref(), Some("Hampi, Karnataka 583239, India"));
    }

    #[test]
    fn test_suggestion_blocks() {
        let (_, body, ann) = extract(
            "Check into Hotel",
            &lines(&[
                "Suggested Accommodations:",
                "- Saptami Hampi Homestay",
                "- Arjun Homestay",
                "Suggested Restaurants:",
                "- Mango Tree Restaurant",
                "Settle in and relax.",
            ]),
        );
        assert!(body == vec!["Settle in and relax."]);
        assert_eq!(
            ann.accommodations,
            vec!["Saptami Hampi Homestay", "Arjun Homestay"]
        );
        assert_eq!(ann.restaurants, vec!["Mango Tree Restaurant"]);
    }

    #[test]
    fn test_cost_on_continuation_line() {
        let (title, body, ann) = extract(
            "Breakfast",
            &lines(&["Local dosa spot (Cost: Rs. 200 for two) near the bazaar"]),
        );
        assert_eq!(title, "Breakfast");
        assert_eq!(body, vec!["Local dosa spot  near the bazaar"]);
        assert_eq!(ann.cost.as_deref(), Some("Rs. 200 for two"));
    }

    #[test]
    fn test_first_cost_wins() {
        let (_, _, ann) = extract(
            "Meals (Cost: ₹800 for two)",
            &lines(&["Dinner upgrade (Cost: ₹1200 for two)"]),
        );
        assert_eq!(ann.cost.as_deref(), Some("₹800 for two"));
    }

    #[test]
    fn test_no_annotations() {
        let (title, body, ann) = extract("Sunset walk", &lines(&["Along the river."]));
        assert_eq!(title, "Sunset walk");
        assert_eq!(body, vec!["Along the river."]);
        assert_eq!(ann, Annotations::default());
    }
}
