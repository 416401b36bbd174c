use crate::trip::{placeholder_image, Place};
use serde::Deserialize;
use uuid::Uuid;

/// Loosely shaped place record from the agent backend. Every field is
/// optional on the wire; normalization applies the defined defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub place_name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub place_image_url: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,
}

/// Map a backend payload into the `Place` shape with a fresh id
pub fn normalize(raw: RawPlace) -> Place {
    let address = raw.address.filter(|a| !a.trim().is_empty());
    Place {
        id: Uuid::new_v4().to_string(),
        name: raw
            .place_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| "Unnamed Place".to_string()),
        description: raw
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "No description available.".to_string()),
        place_type: address.clone().unwrap_or_else(|| "Attraction".to_string()),
        image_url: raw
            .place_image_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(placeholder_image),
        google_stars: raw.rating.unwrap_or(4.0),
        image_hint: address.unwrap_or_else(|| "place".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full_record() {
        let place = normalize(RawPlace {
            place_name: Some("Virupaksha Temple".to_string()),
            description: Some("Ancient temple complex".to_string()),
            address: Some("Hampi, Karnataka".to_string()),
            place_image_url: Some("https://example.com/temple.jpg".to_string()),
            rating: Some(4.6),
        });

        assert_eq!(place.name, "Virupaksha Temple");
        assert_eq!(place.place_type, "Hampi, Karnataka");
        assert_eq!(place.image_hint, "Hampi, Karnataka");
        assert_eq!(place.image_url, "https://example.com/temple.jpg");
        assert_eq!(place.google_stars, 4.6);
        assert!(!place.id.is_empty());
    }

    #[test]
    fn test_normalize_empty_record_gets_defaults() {
        let place = normalize(RawPlace::default());

        assert_eq!(place.name, "Unnamed Place");
        assert_eq!(place.description, "No description available.");
        assert_eq!(place.place_type, "Attraction");
        assert_eq!(place.image_hint, "place");
        assert_eq!(place.google_stars, 4.0);
        assert!(place.image_url.starts_with("https://picsum.photos/seed/"));
    }

    #[test]
    fn test_normalize_fresh_ids() {
        let a = normalize(RawPlace::default());
        let b = normalize(RawPlace::default());
        assert_ne!(a.id, b.id);
    }
}
