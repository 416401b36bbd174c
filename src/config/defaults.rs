use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_data_dir() -> PathBuf {
    // Keep planner state next to the config unless overridden
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".tripflow");
    }
    PathBuf::from(".tripflow")
}

pub fn default_agent_base_url() -> String {
    "http://localhost:8080".to_string()
}

pub fn default_flow_base_url() -> String {
    "http://localhost:3400".to_string()
}

pub fn default_timeout_sec() -> u64 {
    60
}

pub fn default_app_name() -> String {
    "7085873053946609664".to_string()
}

pub fn default_app_url() -> String {
    "projects/1081352890794/locations/us-central1/reasoningEngines/7085873053946609664".to_string()
}

pub fn default_project_id() -> String {
    "kovai-shines-472309".to_string()
}

pub fn default_project_location() -> String {
    "us-central1".to_string()
}

pub fn default_extract_flow() -> String {
    "extractTripDetailsFlow".to_string()
}

pub fn default_recommend_flow() -> String {
    "recommendRelevantPlacesFlow".to_string()
}

pub fn default_itinerary_flow() -> String {
    "generateItineraryFlow".to_string()
}
