//! Primary recommendation backend: a session-scoped reasoning-engine
//! service reached over JSON POST. Success is signalled by a string
//! `status` field of `"true"`; anything else is a qualifying failure for
//! the fallback protocol.

mod places;

pub use places::{normalize, RawPlace};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::trip::{Place, TripDetails};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Create a conversation session for the user; returns the session id
    async fn create_session(&self, user_id: &str) -> Result<String, AgentError>;

    /// Query the agent for places within an existing session
    async fn query_places(
        &self,
        user_id: &str,
        session_id: &str,
        query: &str,
    ) -> Result<Vec<Place>, AgentError>;
}

pub struct AgentClient {
    config: AgentConfig,
    http: Client,
}

#[derive(Deserialize)]
struct SessionResponse {
    status: String,

    #[serde(default)]
    session_id: Option<String>,

    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct QueryResponse {
    status: String,

    #[serde(default)]
    places_array: Vec<RawPlace>,

    #[serde(default)]
    message: Option<String>,
}

impl AgentClient {
    pub fn new(config: AgentConfig, timeout: Duration) -> Result<Self, AgentError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { config, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl AgentGateway for AgentClient {
    async fn create_session(&self, user_id: &str) -> Result<String, AgentError> {
        debug!("Creating agent session for user");
        let response: SessionResponse = self
            .http
            .post(self.endpoint("create-session"))
            .json(&serde_json::json!({
                "user_id": user_id,
                "reasoning_engine_app_name": self.config.app_name,
                "google_project_id": self.config.project_id,
                "google_project_location": self.config.project_location,
            }))
            .send()
            .await?
            .json()
            .await?;

        if response.status != "true" {
            return Err(AgentError::SessionRejected(
                response
                    .message
                    .unwrap_or_else(|| "Failed to create a session.".to_string()),
            ));
        }

        response.session_id.ok_or_else(|| {
            AgentError::SessionRejected("Backend returned no session id".to_string())
        })
    }

    async fn query_places(
        &self,
        user_id: &str,
        session_id: &str,
        query: &str,
    ) -> Result<Vec<Place>, AgentError> {
        debug!("Querying agent for places");
        let response: QueryResponse = self
            .http
            .post(self.endpoint("query-agent"))
            .json(&serde_json::json!({
                "user_id": user_id,
                "session_id": session_id,
                "query": query,
                "reasoning_engine_app_url": self.config.app_url,
                "type_of_api_call": "places",
            }))
            .send()
            .await?
            .json()
            .await?;

        if response.status != "true" {
            return Err(AgentError::QueryRejected(
                response
                    .message
                    .unwrap_or_else(|| "No places found for your criteria.".to_string()),
            ));
        }

        if response.places_array.is_empty() {
            return Err(AgentError::NoPlaces);
        }

        Ok(response.places_array.into_iter().map(normalize).collect())
    }
}

/// Assemble the natural-language place query from the clarified fields
pub fn build_places_query(details: &TripDetails) -> String {
    [
        format!("Trip Destination: {}", details.destination),
        format!("Travel Dates: {}", details.travel_dates),
        format!("Budget: {}", details.budget),
        format!("Trip Type: {}", details.trip_type),
        format!("Interests: {}", details.interests),
        format!(
            "Number of Travelers: {} Adults, {} Children",
            details.adults, details.kids
        ),
        format!("Mode of Travel: {}", details.mode_of_travel),
        "Please suggest places to visit based on these confirmed details. \
         Proceed directly to the place suggestions without asking for \
         confirmation and respond with the places list array"
            .to_string(),
    ]
    .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Budget, TripType};

    #[test]
    fn test_query_contains_all_fields() {
        let mut details = TripDetails::from_description("family trip");
        details.destination = "Hampi".to_string();
        details.travel_dates = "Dec 25 to Dec 28".to_string();
        details.budget = Budget::BudgetFriendly;
        details.trip_type = TripType::Family;
        details.interests = "temples, history".to_string();
        details.adults = 2;
        details.mode_of_travel = "Car".to_string();

        let query = build_places_query(&details);
        assert!(query.contains("Trip Destination: Hampi"));
        assert!(query.contains("Travel Dates: Dec 25 to Dec 28"));
        assert!(query.contains("Budget: Budget-friendly"));
        assert!(query.contains("Number of Travelers: 2 Adults, 0 Children"));
        assert!(query.contains("Mode of Travel: Car"));
    }
}
