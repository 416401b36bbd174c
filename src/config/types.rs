use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory holding the user profile and planner output
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,

    #[serde(default)]
    pub agent: AgentConfig,

    #[serde(default)]
    pub flows: FlowsConfig,
}

/// Primary recommendation backend (session + query endpoints).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentConfig {
    #[serde(default = "default_agent_base_url")]
    pub base_url: String,

    /// Reasoning-engine app the session is created against
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Fully qualified reasoning-engine resource, sent with each query
    #[serde(default = "default_app_url")]
    pub app_url: String,

    #[serde(default = "default_project_id")]
    pub project_id: String,

    #[serde(default = "default_project_location")]
    pub project_location: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: default_agent_base_url(),
            app_name: default_app_name(),
            app_url: default_app_url(),
            project_id: default_project_id(),
            project_location: default_project_location(),
        }
    }
}

/// LLM flow endpoints: extraction, fallback recommendation, generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlowsConfig {
    #[serde(default = "default_flow_base_url")]
    pub base_url: String,

    #[serde(default = "default_extract_flow")]
    pub extract: String,

    #[serde(default = "default_recommend_flow")]
    pub recommend: String,

    #[serde(default = "default_itinerary_flow")]
    pub itinerary: String,
}

impl Default for FlowsConfig {
    fn default() -> Self {
        Self {
            base_url: default_flow_base_url(),
            extract: default_extract_flow(),
            recommend: default_recommend_flow(),
            itinerary: default_itinerary_flow(),
        }
    }
}
