use crate::error::StoreError;
use crate::itinerary::{Itinerary, TripSummary};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PROFILE_FILE: &str = "profile.json";
const ITINERARY_FILE: &str = "itinerary.json";
const SUMMARY_FILE: &str = "trip_summary.json";

/// Locally stored user identity. The phone number is the identifier the
/// agent backend keys sessions by; the session id is rewritten on every
/// successful session creation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(default)]
    pub user_id: u64,

    #[serde(default)]
    pub user_name: String,

    #[serde(default)]
    pub user_phone_no: String,

    #[serde(default)]
    pub user_interests: String,

    #[serde(default)]
    pub user_favorites: String,

    #[serde(default)]
    pub session_id: Option<String>,
}

/// JSON-file store for the profile and planner output. Passed into the
/// engine explicitly; nothing reaches into ambient global state. Access
/// is sequential within one engine; across processes it is
/// last-write-wins.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.read_json(PROFILE_FILE)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.write_json(PROFILE_FILE, profile)
    }

    pub fn save_itinerary(&self, itinerary: &Itinerary) -> Result<(), StoreError> {
        self.write_json(ITINERARY_FILE, itinerary)
    }

    pub fn load_itinerary(&self) -> Result<Option<Itinerary>, StoreError> {
        self.read_json(ITINERARY_FILE)
    }

    pub fn save_trip_summary(&self, summary: &TripSummary) -> Result<(), StoreError> {
        self.write_json(SUMMARY_FILE, summary)
    }

    pub fn load_trip_summary(&self) -> Result<Option<TripSummary>, StoreError> {
        self.read_json(SUMMARY_FILE)
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_json<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| StoreError::Read {
            path: path.clone(),
            source: e,
        })?;
        let value = serde_json::from_str(&content)
            .map_err(|e| StoreError::Decode { path, source: e })?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        ensure_dir(&self.dir)?;
        let path = self.path(file);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).map_err(|e| StoreError::Write { path, source: e })
    }
}

fn ensure_dir(dir: &Path) -> Result<(), StoreError> {
    fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::ItineraryDay;

    #[test]
    fn test_missing_files_read_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        assert!(store.load_profile().unwrap().is_none());
        assert!(store.load_itinerary().unwrap().is_none());
        assert!(store.load_trip_summary().unwrap().is_none());
    }

    #[test]
    fn test_profile_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let profile = UserProfile {
            user_id: 7,
            user_name: "Asha".to_string(),
            user_phone_no: "9876543210".to_string(),
            user_interests: "temples,food".to_string(),
            user_favorites: String::new(),
            session_id: None,
        };
        store.save_profile(&profile).unwrap();

        let loaded = store.load_profile().unwrap().unwrap();
        assert_eq!(loaded.user_phone_no, "9876543210");
        assert_eq!(loaded.session_id, None);
    }

    #[test]
    fn test_session_id_rewrite_is_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let mut profile = UserProfile {
            user_phone_no: "123".to_string(),
            ..Default::default()
        };
        store.save_profile(&profile).unwrap();

        profile.session_id = Some("sess-2".to_string());
        store.save_profile(&profile).unwrap();

        let loaded = store.load_profile().unwrap().unwrap();
        assert_eq!(loaded.session_id.as_deref(), Some("sess-2"));
    }

    #[test]
    fn test_itinerary_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());

        let itinerary = Itinerary {
            days: vec![ItineraryDay {
                day: 1,
                date: "Sep 21, 2025".to_string(),
                theme: Some("Arrival".to_string()),
                schedule: "> Day 1: Arrival\n-- 09:00 AM -- Check in".to_string(),
            }],
            advisories: vec!["Carry water.".to_string()],
            estimated_total_cost: "₹ 20,000".to_string(),
        };
        store.save_itinerary(&itinerary).unwrap();

        let loaded = store.load_itinerary().unwrap().unwrap();
        assert_eq!(loaded.days.len(), 1);
        assert_eq!(loaded.days[0].theme.as_deref(), Some("Arrival"));
    }
}
