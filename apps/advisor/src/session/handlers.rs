//! Advisor transitions — sequences gateway calls and applies their results.
//!
//! Flow per async transition: guard → begin_request → gateway call → apply
//! result if the ticket is still current → end_request. The Details and
//! LearningPath transitions are optimistic: the view switches before the data
//! arrives, and the screen shows its own loading line until it does.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::favorites::FavoritesStore;
use crate::gateway;
use crate::llm_client::GenerativeClient;
use crate::models::CareerPath;
use crate::session::{SessionState, View};

// User-facing messages. The gateway's detailed failure is logged, never shown.
const SKILLS_REQUIRED: &str = "Please enter your skills.";
const RECOMMENDATIONS_FAILED: &str = "Failed to get career recommendations. Please try again.";
const DETAILS_FAILED: &str = "Failed to get career details. Please try again.";
const LEARNING_PATH_FAILED: &str = "Failed to generate learning path. Please try again.";

/// Synchronous guard for submit_skills. Split out so the validation arm of
/// the error taxonomy is testable without a client.
fn validate_skills(skills: &str) -> Result<(), AppError> {
    if skills.trim().is_empty() {
        return Err(AppError::Validation(SKILLS_REQUIRED.to_string()));
    }
    Ok(())
}

/// Owns the session state and its collaborators: the generative client the
/// gateway talks through, and the favorites store.
pub struct Advisor {
    state: SessionState,
    llm: Arc<dyn GenerativeClient>,
    store: Box<dyn FavoritesStore>,
}

impl Advisor {
    /// Builds the advisor with favorites seeded from the store. A store that
    /// cannot be read seeds an empty list; startup never fails on it.
    pub fn new(llm: Arc<dyn GenerativeClient>, store: Box<dyn FavoritesStore>) -> Self {
        let favorites = store.load();
        if !favorites.is_empty() {
            info!("Loaded {} favorite career(s)", favorites.len());
        }
        Self {
            state: SessionState::with_favorites(favorites),
            llm,
            store,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_skills_text(&mut self, text: String) {
        self.state.skills_text = text;
    }

    /// Submits the current skills text for recommendations.
    ///
    /// Guarded: whitespace-only input sets the validation error and issues no
    /// request. The view moves to Recommendations only on success.
    pub async fn submit_skills(&mut self) {
        if let Err(AppError::Validation(message)) = validate_skills(&self.state.skills_text) {
            self.state.error = Some(message);
            return;
        }

        let ticket = self.state.begin_request();
        let result =
            gateway::fetch_recommendations(self.llm.as_ref(), &self.state.skills_text).await;
        match result {
            Ok(recommendations) if self.state.is_current(ticket) => {
                self.state.recommendations = recommendations;
                self.state.view = View::Recommendations;
            }
            Ok(_) => debug!("Discarding superseded recommendations response"),
            Err(e) => {
                error!("Recommendations request failed: {e}");
                if self.state.is_current(ticket) {
                    self.state.error = Some(RECOMMENDATIONS_FAILED.to_string());
                }
            }
        }
        self.state.end_request(ticket);
    }

    /// Selects a career and fetches its guide. The view switches to Details
    /// before the data arrives.
    pub async fn select_career(&mut self, career: CareerPath) {
        let title = career.title.clone();
        self.state.selected_career = Some(career);
        self.state.view = View::Details;

        let ticket = self.state.begin_request();
        let result = gateway::fetch_career_details(self.llm.as_ref(), &title).await;
        match result {
            Ok(details) if self.state.is_current(ticket) => {
                self.state.career_details = Some(details);
            }
            Ok(_) => debug!("Discarding superseded career details response"),
            Err(e) => {
                error!("Career details request failed: {e}");
                if self.state.is_current(ticket) {
                    self.state.error = Some(DETAILS_FAILED.to_string());
                }
            }
        }
        self.state.end_request(ticket);
    }

    /// Generates the personalized learning path from the current skills text.
    /// The view switches to LearningPath before the data arrives.
    pub async fn generate_learning_path(&mut self) {
        self.state.view = View::LearningPath;

        let ticket = self.state.begin_request();
        let result =
            gateway::fetch_skills_learning_path(self.llm.as_ref(), &self.state.skills_text).await;
        match result {
            Ok(path) if self.state.is_current(ticket) => {
                self.state.learning_path = Some(path);
            }
            Ok(_) => debug!("Discarding superseded learning path response"),
            Err(e) => {
                error!("Learning path request failed: {e}");
                if self.state.is_current(ticket) {
                    self.state.error = Some(LEARNING_PATH_FAILED.to_string());
                }
            }
        }
        self.state.end_request(ticket);
    }

    /// Back navigation; also clears any pending error.
    pub fn go_back(&mut self) {
        self.state.go_back();
    }

    /// Toggles a favorite and rewrites the store with the updated list.
    /// Store failures stay in the log; the in-memory list is authoritative.
    pub fn toggle_favorite(&mut self, career: &CareerPath) {
        let added = self.state.toggle_favorite(career);
        debug!(
            "{} favorite: {}",
            if added { "Added" } else { "Removed" },
            career.title
        );
        self.store.save(&self.state.favorites);
    }
}
