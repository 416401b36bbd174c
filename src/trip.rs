use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Trip budget tier. Extraction maps unknown or empty strings to the
/// default so downstream code never re-checks for emptiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Budget {
    #[serde(rename = "Budget-friendly")]
    BudgetFriendly,
    #[default]
    #[serde(rename = "Mid-range")]
    MidRange,
    #[serde(rename = "Luxury")]
    Luxury,
}

impl Budget {
    /// Soft parse: unrecognized input falls back to the default
    pub fn from_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "budget-friendly" | "budget friendly" | "budget" | "cheap" | "low" => {
                Budget::BudgetFriendly
            }
            "luxury" | "premium" | "high" => Budget::Luxury,
            "mid-range" | "mid range" | "moderate" | "medium" => Budget::MidRange,
            _ => Budget::default(),
        }
    }
}

impl std::fmt::Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Budget::BudgetFriendly => write!(f, "Budget-friendly"),
            Budget::MidRange => write!(f, "Mid-range"),
            Budget::Luxury => write!(f, "Luxury"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum TripType {
    #[default]
    Family,
    Friends,
    Couples,
    Solo,
}

impl TripType {
    pub fn from_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "friends" | "friend" => TripType::Friends,
            "couples" | "couple" | "honeymoon" => TripType::Couples,
            "solo" | "single" => TripType::Solo,
            "family" => TripType::Family,
            _ => TripType::default(),
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripType::Family => write!(f, "Family"),
            TripType::Friends => write!(f, "Friends"),
            TripType::Couples => write!(f, "Couples"),
            TripType::Solo => write!(f, "Solo"),
        }
    }
}

/// Structured trip parameters. Built from extracted free text, refined by
/// user clarification, then read-only until itinerary generation.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub trip_description: String,
    pub destination: String,
    /// Comma-joined interest tags
    pub interests: String,
    pub budget: Budget,
    /// Free-form display string, e.g. "Dec 25 to Dec 28"
    pub travel_dates: String,
    pub trip_type: TripType,
    pub adults: u32,
    pub kids: u32,
    /// Comma-joined ages; length is not enforced against `kids`
    pub kid_ages: String,
    pub mode_of_travel: String,
}

impl TripDetails {
    /// All-defaults record carrying only the raw description. Used when
    /// extraction fails so the user can correct everything manually.
    pub fn from_description(description: &str) -> Self {
        Self {
            trip_description: description.to_string(),
            destination: String::new(),
            interests: String::new(),
            budget: Budget::default(),
            travel_dates: String::new(),
            trip_type: TripType::default(),
            adults: 1,
            kids: 0,
            kid_ages: String::new(),
            mode_of_travel: String::new(),
        }
    }

    /// Merge extractor output over defaults
    pub fn from_extracted(description: &str, extracted: ExtractedDetails) -> Self {
        Self {
            trip_description: description.to_string(),
            destination: extracted.destination,
            interests: extracted.interests,
            budget: Budget::from_loose(&extracted.budget),
            travel_dates: extracted.travel_dates,
            trip_type: TripType::from_loose(&extracted.trip_type),
            adults: extracted.adults.max(1),
            kids: extracted.kids,
            kid_ages: extracted.kid_ages,
            mode_of_travel: extracted.mode_of_travel,
        }
    }

    /// Merge clarified fields into the working details
    pub fn apply_clarification(&mut self, clarified: ClarifiedDetails) {
        let declared = clarified
            .kid_ages
            .split(',')
            .filter(|a| !a.trim().is_empty())
            .count();
        if declared != clarified.kids as usize {
            warn!(
                "kid_ages lists {} ages for {} kids; keeping as entered",
                declared, clarified.kids
            );
        }

        self.destination = clarified.destination;
        self.interests = clarified.interests;
        self.budget = clarified.budget;
        self.travel_dates = clarified.travel_dates;
        self.trip_type = clarified.trip_type;
        self.adults = clarified.adults.max(1);
        self.kids = clarified.kids;
        self.kid_ages = clarified.kid_ages;
        self.mode_of_travel = clarified.mode_of_travel;
    }
}

/// Raw extractor output. Budget and trip type arrive as loose strings and
/// are mapped onto the closed enums during merge.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDetails {
    #[serde(default)]
    pub destination: String,

    #[serde(default)]
    pub interests: String,

    #[serde(default)]
    pub budget: String,

    #[serde(default)]
    pub travel_dates: String,

    #[serde(default)]
    pub trip_type: String,

    #[serde(default = "default_adults")]
    pub adults: u32,

    #[serde(default)]
    pub kids: u32,

    #[serde(default)]
    pub kid_ages: String,

    #[serde(default)]
    pub mode_of_travel: String,
}

fn default_adults() -> u32 {
    1
}

/// User-confirmed form fields (everything except the raw description)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClarifiedDetails {
    pub destination: String,
    pub interests: String,
    pub budget: Budget,
    pub travel_dates: String,
    pub trip_type: TripType,
    pub adults: u32,
    pub kids: u32,
    pub kid_ages: String,
    pub mode_of_travel: String,
}

impl From<&TripDetails> for ClarifiedDetails {
    fn from(details: &TripDetails) -> Self {
        Self {
            destination: details.destination.clone(),
            interests: details.interests.clone(),
            budget: details.budget,
            travel_dates: details.travel_dates.clone(),
            trip_type: details.trip_type,
            adults: details.adults,
            kids: details.kids,
            kid_ages: details.kid_ages.clone(),
            mode_of_travel: details.mode_of_travel.clone(),
        }
    }
}

/// A candidate place, normalized from either recommendation path. Lives
/// only for the recommendation/selection step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Category or address string
    #[serde(rename = "type")]
    pub place_type: String,
    pub image_url: String,
    pub google_stars: f64,
    pub image_hint: String,
}

/// Fallback recommender output: already shaped, but carries no id
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedPlace {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "type")]
    pub place_type: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default = "default_stars")]
    pub google_stars: f64,

    #[serde(default)]
    pub image_hint: String,
}

fn default_stars() -> f64 {
    4.0
}

impl Place {
    pub fn from_recommended(rec: RecommendedPlace) -> Self {
        let image_url = if rec.image_url.is_empty() {
            placeholder_image()
        } else {
            rec.image_url
        };
        Self {
            id: Uuid::new_v4().to_string(),
            name: rec.name,
            description: rec.description,
            place_type: rec.place_type,
            image_url,
            google_stars: rec.google_stars,
            image_hint: rec.image_hint,
        }
    }
}

/// Deterministic placeholder keyed by a fresh id
pub fn placeholder_image() -> String {
    format!("https://picsum.photos/seed/{}/600/400", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_loose_parse() {
        assert_eq!(Budget::from_loose("budget-friendly"), Budget::BudgetFriendly);
        assert_eq!(Budget::from_loose("Luxury"), Budget::Luxury);
        assert_eq!(Budget::from_loose(""), Budget::MidRange);
        assert_eq!(Budget::from_loose("whatever"), Budget::MidRange);
    }

    #[test]
    fn test_trip_type_loose_parse() {
        assert_eq!(TripType::from_loose("solo"), TripType::Solo);
        assert_eq!(TripType::from_loose("Couple"), TripType::Couples);
        assert_eq!(TripType::from_loose(""), TripType::Family);
    }

    #[test]
    fn test_extracted_merge_defaults() {
        let extracted = ExtractedDetails {
            destination: "Hampi".to_string(),
            budget: "budget-friendly".to_string(),
            adults: 0,
            ..Default::default()
        };
        let details = TripDetails::from_extracted("trip to Hampi", extracted);
        assert_eq!(details.destination, "Hampi");
        assert_eq!(details.budget, Budget::BudgetFriendly);
        assert_eq!(details.trip_type, TripType::Family);
        // adults clamps to at least one traveler
        assert_eq!(details.adults, 1);
    }

    #[test]
    fn test_clarification_overwrites_fields() {
        let mut details = TripDetails::from_description("somewhere warm");
        let mut clarified = ClarifiedDetails::from(&details);
        clarified.destination = "Goa".to_string();
        clarified.adults = 2;
        clarified.kids = 1;
        clarified.kid_ages = "7".to_string();

        details.apply_clarification(clarified);
        assert_eq!(details.destination, "Goa");
        assert_eq!(details.adults, 2);
        assert_eq!(details.trip_description, "somewhere warm");
    }

    #[test]
    fn test_kid_ages_mismatch_is_permissive() {
        let mut details = TripDetails::from_description("beach trip");
        let mut clarified = ClarifiedDetails::from(&details);
        clarified.kids = 2;
        clarified.kid_ages = "5".to_string();
        // Mismatch is logged, never rejected
        details.apply_clarification(clarified);
        assert_eq!(details.kids, 2);
        assert_eq!(details.kid_ages, "5");
    }

    #[test]
    fn test_place_from_recommended_fills_image() {
        let place = Place::from_recommended(RecommendedPlace {
            name: "Virupaksha Temple".to_string(),
            description: "Ancient temple".to_string(),
            place_type: "tourist spot".to_string(),
            image_url: String::new(),
            google_stars: 4.6,
            image_hint: "temple".to_string(),
        });
        assert!(!place.id.is_empty());
        assert!(place.image_url.starts_with("https://picsum.photos/seed/"));
        assert_eq!(place.google_stars, 4.6);
    }
}
