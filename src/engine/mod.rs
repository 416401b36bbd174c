//! Trip planning orchestration engine: a forward-only state machine that
//! sequences extraction, the recommendation fallback protocol, and
//! itinerary generation. All collaborators come in through trait seams so
//! the engine never reaches into ambient state.

use crate::agent::{build_places_query, AgentGateway};
use crate::error::EngineError;
use crate::flows::{ItineraryGenerator, PlaceRecommender, TripExtractor};
use crate::itinerary::{Itinerary, TripSummary};
use crate::store::{Store, UserProfile};
use crate::trip::{ClarifiedDetails, Place, TripDetails};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerStep {
    Chat,
    Clarification,
    Recommendations,
    Complete,
}

impl std::fmt::Display for PlannerStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannerStep::Chat => write!(f, "chat"),
            PlannerStep::Clarification => write!(f, "clarification"),
            PlannerStep::Recommendations => write!(f, "recommendations"),
            PlannerStep::Complete => write!(f, "complete"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// Chat intake with a transcript appended at each step
    Conversational,
    /// Structured form entry; same transitions, no transcript
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub sender: Sender,
    pub content: String,
}

/// The external collaborators the engine sequences
pub struct Collaborators {
    pub extractor: Box<dyn TripExtractor>,
    pub agent: Box<dyn AgentGateway>,
    pub fallback: Box<dyn PlaceRecommender>,
    pub generator: Box<dyn ItineraryGenerator>,
}

pub struct PlannerEngine {
    mode: EntryMode,
    step: PlannerStep,
    details: Option<TripDetails>,
    places: Vec<Place>,
    transcript: Vec<Message>,
    busy: bool,
    store: Store,
    collaborators: Collaborators,
}

impl PlannerEngine {
    pub fn new(mode: EntryMode, store: Store, collaborators: Collaborators) -> Self {
        Self {
            mode,
            step: PlannerStep::Chat,
            details: None,
            places: Vec::new(),
            transcript: Vec::new(),
            busy: false,
            store,
            collaborators,
        }
    }

    pub fn step(&self) -> PlannerStep {
        self.step
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn details(&self) -> Option<&TripDetails> {
        self.details.as_ref()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Pre-filled clarification form for the current details
    pub fn clarification_form(&self) -> Option<ClarifiedDetails> {
        self.details.as_ref().map(ClarifiedDetails::from)
    }

    /// Free-text intake. Extraction failure degrades to an all-defaults
    /// record carrying the raw text; either way the flow advances to
    /// clarification.
    pub async fn submit_free_text(&mut self, text: &str) -> Result<(), EngineError> {
        self.begin(PlannerStep::Chat)?;
        let result = self.run_free_text(text).await;
        self.busy = false;
        result
    }

    async fn run_free_text(&mut self, text: &str) -> Result<(), EngineError> {
        self.say(Sender::User, text);

        let details = match self.collaborators.extractor.extract(text).await {
            Ok(extracted) => TripDetails::from_extracted(text, extracted),
            Err(e) => {
                warn!("Trip detail extraction failed: {}. Falling back to manual entry", e);
                self.say(
                    Sender::Bot,
                    "Could not process your request. Please fill in the details manually.",
                );
                TripDetails::from_description(text)
            }
        };

        self.details = Some(details);
        self.step = PlannerStep::Clarification;
        self.say(Sender::Bot, "Please confirm your trip details.");
        Ok(())
    }

    /// Confirm the clarified fields, then run the fallback protocol:
    /// profile precondition, primary session + query, secondary
    /// recommender. Re-submission always re-runs from the precondition.
    pub async fn submit_clarification(
        &mut self,
        clarified: ClarifiedDetails,
    ) -> Result<&[Place], EngineError> {
        self.begin(PlannerStep::Clarification)?;
        let result = self.run_clarification(clarified).await;
        self.busy = false;
        result?;
        Ok(&self.places)
    }

    async fn run_clarification(&mut self, clarified: ClarifiedDetails) -> Result<(), EngineError> {
        let details = match self.details.as_mut() {
            Some(details) => {
                details.apply_clarification(clarified);
                details.clone()
            }
            None => return Err(EngineError::WrongStep(self.step.to_string())),
        };

        self.say(
            Sender::Bot,
            "Thanks for confirming! Searching for the best places for your trip...",
        );

        // Step 1: the stored profile with a phone identifier is a hard
        // precondition; without it this attempt fails in place.
        let profile = self.store.load_profile()?.ok_or(EngineError::MissingProfile)?;
        if profile.user_phone_no.trim().is_empty() {
            return Err(EngineError::MissingPhone);
        }

        // Steps 2-3: primary path. Any qualifying failure (rejected
        // session, rejected query, empty result) moves on to the
        // fallback; a failed query never retries with a fresh session.
        let places = match self.primary_places(&details, profile).await {
            Ok(places) => places,
            Err(e) => {
                info!("Primary recommendation path failed ({}), using fallback", e);
                self.fallback_places(&details).await?
            }
        };

        self.places = places;
        self.step = PlannerStep::Recommendations;
        Ok(())
    }

    async fn primary_places(
        &mut self,
        details: &TripDetails,
        mut profile: UserProfile,
    ) -> Result<Vec<Place>, crate::error::AgentError> {
        let user_id = profile.user_phone_no.clone();
        let session_id = self.collaborators.agent.create_session(&user_id).await?;

        // Persist the fresh session id alongside the profile
        profile.session_id = Some(session_id.clone());
        if let Err(e) = self.store.save_profile(&profile) {
            warn!("Failed to persist session id: {}", e);
        }

        let query = build_places_query(details);
        self.collaborators
            .agent
            .query_places(&user_id, &session_id, &query)
            .await
    }

    // Step 4: the secondary recommender. Its failure is the only
    // user-visible "no places found" error.
    async fn fallback_places(&mut self, details: &TripDetails) -> Result<Vec<Place>, EngineError> {
        let result = self.collaborators.fallback.recommend(details).await;
        let recommended = match result {
            Ok(recommended) if !recommended.is_empty() => recommended,
            Ok(_) => {
                self.say(
                    Sender::Bot,
                    "Sorry, I couldn't find any places for your trip. Please try again later.",
                );
                return Err(EngineError::NoPlacesFound);
            }
            Err(e) => {
                warn!("Fallback recommender failed: {}", e);
                self.say(
                    Sender::Bot,
                    "Sorry, I couldn't find any places for your trip. Please try again later.",
                );
                return Err(EngineError::NoPlacesFound);
            }
        };

        Ok(recommended.into_iter().map(Place::from_recommended).collect())
    }

    /// Generate the itinerary from the selected places. On success the
    /// itinerary and trip summary are persisted and returned by value;
    /// the engine keeps no reference. On failure the engine stays in
    /// `recommendations` with the place list intact.
    pub async fn submit_selection(
        &mut self,
        selected: Vec<Place>,
    ) -> Result<Itinerary, EngineError> {
        self.begin(PlannerStep::Recommendations)?;
        let result = self.run_selection(selected).await;
        self.busy = false;
        result
    }

    async fn run_selection(&mut self, selected: Vec<Place>) -> Result<Itinerary, EngineError> {
        if selected.is_empty() {
            return Err(EngineError::EmptySelection);
        }
        let details = self
            .details
            .clone()
            .ok_or_else(|| EngineError::WrongStep(self.step.to_string()))?;

        self.say(
            Sender::Bot,
            &format!("Great! Generating an itinerary with {} places.", selected.len()),
        );

        let itinerary = self
            .collaborators
            .generator
            .generate(&details, &selected)
            .await
            .map_err(EngineError::Generation)?
            .normalize();

        self.store.save_itinerary(&itinerary)?;
        self.store.save_trip_summary(&TripSummary {
            destination: details.destination.clone(),
            travel_dates: details.travel_dates.clone(),
            adults: details.adults,
            kids: details.kids,
        })?;

        // Ownership of the itinerary transfers to the caller; the engine
        // only keeps the terminal step.
        self.places.clear();
        self.step = PlannerStep::Complete;
        self.say(Sender::Bot, "Your itinerary is ready!");
        Ok(itinerary)
    }

    /// Back out of place selection: discard the in-flight place list and
    /// return to clarification with the edited fields intact.
    pub fn go_back(&mut self) -> Result<(), EngineError> {
        if self.busy {
            return Err(EngineError::Busy);
        }
        if self.step != PlannerStep::Recommendations {
            return Err(EngineError::WrongStep(self.step.to_string()));
        }
        self.places.clear();
        self.step = PlannerStep::Clarification;
        Ok(())
    }

    fn begin(&mut self, expected: PlannerStep) -> Result<(), EngineError> {
        if self.busy {
            return Err(EngineError::Busy);
        }
        if self.step != expected {
            return Err(EngineError::WrongStep(self.step.to_string()));
        }
        self.busy = true;
        Ok(())
    }

    fn say(&mut self, sender: Sender, content: &str) {
        if self.mode != EntryMode::Conversational {
            return;
        }
        self.transcript.push(Message {
            id: Uuid::new_v4().to_string(),
            sender,
            content: content.to_string(),
        });
    }
}
