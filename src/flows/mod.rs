//! Seams for the LLM-backed collaborators: detail extraction, the fallback
//! place recommender, and itinerary generation. The engine only sees these
//! traits; the HTTP client below is the production implementation.

mod http;

pub use http::HttpFlowClient;

use crate::error::FlowError;
use crate::itinerary::Itinerary;
use crate::trip::{ExtractedDetails, Place, RecommendedPlace, TripDetails};
use async_trait::async_trait;

#[async_trait]
pub trait TripExtractor: Send + Sync {
    /// Turn a free-text trip wish into structured parameters. May fail or
    /// return partial data; the caller degrades to manual entry.
    async fn extract(&self, trip_description: &str) -> Result<ExtractedDetails, FlowError>;
}

#[async_trait]
pub trait PlaceRecommender: Send + Sync {
    /// Secondary recommendation path. An empty result is a terminal
    /// failure for the current attempt.
    async fn recommend(&self, details: &TripDetails) -> Result<Vec<RecommendedPlace>, FlowError>;
}

#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    async fn generate(
        &self,
        details: &TripDetails,
        places: &[Place],
    ) -> Result<Itinerary, FlowError>;
}
