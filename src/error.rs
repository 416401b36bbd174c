use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum TripflowError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Agent base URL must not be empty")]
    MissingAgentUrl,

    #[error("Flow base URL must not be empty")]
    MissingFlowUrl,
}

/// Errors from the LLM-backed flow endpoints (extractor, fallback
/// recommender, itinerary generator).
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Flow '{flow}' returned status {status}")]
    BadStatus { flow: String, status: u16 },

    #[error("Failed to decode flow response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Flow returned no usable output")]
    EmptyOutput,
}

/// Errors from the primary session/query backend.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session creation rejected: {0}")]
    SessionRejected(String),

    #[error("Query rejected: {0}")]
    QueryRejected(String),

    #[error("Backend returned no places")]
    NoPlaces,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("An operation for this step is already in progress")]
    Busy,

    #[error("Operation not valid in step '{0}'")]
    WrongStep(String),

    #[error("No user profile found. Run `tripflow profile` to sign in first")]
    MissingProfile,

    #[error("User profile has no phone number. Run `tripflow profile` again")]
    MissingPhone,

    #[error("No places found for your trip. Please adjust your details and retry")]
    NoPlacesFound,

    #[error("Select at least one place before generating an itinerary")]
    EmptySelection,

    #[error("Itinerary generation failed: {0}")]
    Generation(#[source] FlowError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
