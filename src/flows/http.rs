use super::{ItineraryGenerator, PlaceRecommender, TripExtractor};
use crate::config::FlowsConfig;
use crate::error::FlowError;
use crate::itinerary::{Itinerary, ItineraryDay};
use crate::trip::{ExtractedDetails, Place, RecommendedPlace, TripDetails};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// JSON client for the flow endpoints. Each flow is a POST of
/// `{"data": input}` answered with `{"result": output}`.
#[derive(Clone)]
pub struct HttpFlowClient {
    config: FlowsConfig,
    http: Client,
}

#[derive(Deserialize)]
struct FlowResponse<T> {
    result: T,
}

impl HttpFlowClient {
    pub fn new(config: FlowsConfig, timeout: Duration) -> Result<Self, FlowError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { config, http })
    }

    async fn post_flow<O: DeserializeOwned>(
        &self,
        flow: &str,
        input: serde_json::Value,
    ) -> Result<O, FlowError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), flow);
        debug!("Calling flow {}", flow);

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "data": input }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlowError::BadStatus {
                flow: flow.to_string(),
                status: status.as_u16(),
            });
        }

        let wrapped: FlowResponse<O> = serde_json::from_slice(&response.bytes().await?)?;
        Ok(wrapped.result)
    }
}

#[async_trait]
impl TripExtractor for HttpFlowClient {
    async fn extract(&self, trip_description: &str) -> Result<ExtractedDetails, FlowError> {
        self.post_flow(
            &self.config.extract,
            serde_json::json!({ "tripDescription": trip_description }),
        )
        .await
    }
}

#[async_trait]
impl PlaceRecommender for HttpFlowClient {
    async fn recommend(&self, details: &TripDetails) -> Result<Vec<RecommendedPlace>, FlowError> {
        self.post_flow(
            &self.config.recommend,
            serde_json::json!({
                "destination": details.destination,
                "interests": details.interests,
                "budget": details.budget.to_string(),
                "travelDates": details.travel_dates,
                "tripType": details.trip_type.to_string(),
                "adults": details.adults,
                "kids": details.kids,
                "kidAges": details.kid_ages,
            }),
        )
        .await
    }
}

/// Generator wire shape: newer responses carry structured days, older ones
/// a single markdown-ish itinerary string that gets split per day.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedItinerary {
    #[serde(default)]
    days: Vec<ItineraryDay>,

    #[serde(default)]
    itinerary: String,

    #[serde(default)]
    advisories: Vec<String>,

    #[serde(default)]
    estimated_total_cost: String,
}

#[async_trait]
impl ItineraryGenerator for HttpFlowClient {
    async fn generate(
        &self,
        details: &TripDetails,
        places: &[Place],
    ) -> Result<Itinerary, FlowError> {
        let place_inputs: Vec<serde_json::Value> = places
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "type": p.place_type,
                })
            })
            .collect();

        let generated: GeneratedItinerary = self
            .post_flow(
                &self.config.itinerary,
                serde_json::json!({
                    "tripDetails": {
                        "destination": details.destination,
                        "travelDates": details.travel_dates,
                        "tripType": details.trip_type.to_string(),
                        "adults": details.adults,
                        "kids": details.kids,
                        "interests": details.interests,
                    },
                    "places": place_inputs,
                }),
            )
            .await?;

        let days = if generated.days.is_empty() {
            days_from_legacy_text(&generated.itinerary)
        } else {
            generated.days
        };

        if days.is_empty() {
            return Err(FlowError::EmptyOutput);
        }

        Ok(Itinerary {
            days,
            advisories: generated.advisories,
            estimated_total_cost: generated.estimated_total_cost,
        }
        .normalize())
    }
}

/// Split a single itinerary string into days on its `> Day N: ...` headers.
/// Each day keeps its header line so the timeline parser sees it.
fn days_from_legacy_text(text: &str) -> Vec<ItineraryDay> {
    let mut days: Vec<ItineraryDay> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('>') {
            let theme = trimmed
                .trim_start_matches('>')
                .trim()
                .split_once(':')
                .map(|(_, rest)| rest.trim().to_string());
            days.push(ItineraryDay {
                day: days.len() as u32 + 1,
                date: String::new(),
                theme,
                schedule: trimmed.to_string(),
            });
        } else if let Some(day) = days.last_mut() {
            day.schedule.push('\n');
            day.schedule.push_str(trimmed);
        }
        // Text before the first header has no day to attach to
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_split_two_days() {
        let text = "> Day 1: Arrival\n-- 09:00 AM -- Check in\n\n> Day 2: Temples\n-- 08:00 AM -- Sunrise point";
        let days = days_from_legacy_text(text);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[0].theme.as_deref(), Some("Arrival"));
        assert!(days[0].schedule.starts_with("> Day 1: Arrival"));
        assert!(days[0].schedule.contains("Check in"));
        assert_eq!(days[1].day, 2);
        assert!(days[1].schedule.contains("Sunrise point"));
    }

    #[test]
    fn test_legacy_split_ignores_preamble() {
        let days = days_from_legacy_text("Here is your plan\n> Day 1: Beach\n-- Swim");
        assert_eq!(days.len(), 1);
        assert!(!days[0].schedule.contains("Here is your plan"));
    }

    #[test]
    fn test_legacy_split_empty() {
        assert!(days_from_legacy_text("").is_empty());
        assert!(days_from_legacy_text("no headers at all").is_empty());
    }
}
