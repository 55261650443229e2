//! Application session state — the reducer core of the advisor.
//!
//! `SessionState` is an explicit state object mutated only through the
//! transition helpers below; all gateway I/O lives in `handlers`. Responses
//! are applied against a `RequestTicket`: a response superseded by a newer
//! request or by navigation is discarded instead of overwriting fresher
//! state, and a stale completion never clears a newer request's loading flag.

pub mod handlers;

use crate::models::{CareerDetails, CareerPath, SkillsLearningPath};

/// Which of the four screens is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Input,
    Recommendations,
    Details,
    LearningPath,
}

/// Handed out by `begin_request`; proves a response belongs to the request
/// generation it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
pub struct SessionState {
    pub skills_text: String,
    pub recommendations: Vec<CareerPath>,
    pub selected_career: Option<CareerPath>,
    pub career_details: Option<CareerDetails>,
    pub learning_path: Option<Vec<SkillsLearningPath>>,
    pub favorites: Vec<CareerPath>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub view: View,
    generation: u64,
}

impl SessionState {
    /// Initial state: input view, empty data, favorites seeded from the store.
    pub fn with_favorites(favorites: Vec<CareerPath>) -> Self {
        Self {
            favorites,
            ..Self::default()
        }
    }

    /// Starts a new request generation: loading on, error cleared, any
    /// still-in-flight older response invalidated.
    pub fn begin_request(&mut self) -> RequestTicket {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        RequestTicket(self.generation)
    }

    /// True while no newer request or navigation has superseded this ticket.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation == ticket.0
    }

    /// Clears the loading flag, but only for the current generation.
    pub fn end_request(&mut self, ticket: RequestTicket) {
        if self.is_current(ticket) {
            self.is_loading = false;
        }
    }

    /// View-dependent back navigation. Clears the data owned by the view
    /// being left, clears any pending error, and invalidates in-flight
    /// requests so their responses are discarded on arrival.
    pub fn go_back(&mut self) {
        match self.view {
            View::Details => {
                self.selected_career = None;
                self.career_details = None;
                self.view = View::Recommendations;
            }
            View::LearningPath => {
                self.learning_path = None;
                self.view = View::Recommendations;
            }
            View::Recommendations => {
                self.recommendations.clear();
                self.view = View::Input;
            }
            View::Input => {}
        }
        self.error = None;
        self.is_loading = false;
        self.generation += 1;
    }

    /// Toggles membership of `career` in the favorites list. Membership is
    /// exact `title` equality. Returns true if the career was added.
    pub fn toggle_favorite(&mut self, career: &CareerPath) -> bool {
        if let Some(pos) = self
            .favorites
            .iter()
            .position(|f| f.title == career.title)
        {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(career.clone());
            true
        }
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.iter().any(|f| f.title == title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(title: &str) -> CareerPath {
        CareerPath {
            title: title.to_string(),
            description: format!("{title} description"),
            relevance: format!("{title} relevance"),
        }
    }

    #[test]
    fn test_initial_state_is_input_view_with_seeded_favorites() {
        let state = SessionState::with_favorites(vec![career("Nurse")]);
        assert_eq!(state.view, View::Input);
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert!(state.recommendations.is_empty());
        assert_eq!(state.favorites.len(), 1);
        assert_eq!(state.favorites[0].title, "Nurse");
    }

    #[test]
    fn test_begin_request_sets_loading_and_clears_error() {
        let mut state = SessionState::default();
        state.error = Some("old error".to_string());
        let ticket = state.begin_request();
        assert!(state.is_loading);
        assert!(state.error.is_none());
        assert!(state.is_current(ticket));
    }

    #[test]
    fn test_newer_request_invalidates_older_ticket() {
        let mut state = SessionState::default();
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_stale_end_request_does_not_clear_live_loading_flag() {
        let mut state = SessionState::default();
        let stale = state.begin_request();
        let _live = state.begin_request();
        state.end_request(stale);
        assert!(state.is_loading, "stale completion must not hide the live spinner");
    }

    #[test]
    fn test_go_back_invalidates_in_flight_requests() {
        let mut state = SessionState::default();
        let ticket = state.begin_request();
        state.go_back();
        assert!(!state.is_current(ticket));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_go_back_from_details_clears_selection_and_details() {
        let mut state = SessionState::default();
        state.view = View::Details;
        state.selected_career = Some(career("Data Scientist"));
        state.error = Some("Failed to get career details. Please try again.".to_string());
        state.go_back();
        assert_eq!(state.view, View::Recommendations);
        assert!(state.selected_career.is_none());
        assert!(state.career_details.is_none());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_go_back_from_details_with_empty_fields_still_lands_on_recommendations() {
        let mut state = SessionState::default();
        state.view = View::Details;
        state.go_back();
        assert_eq!(state.view, View::Recommendations);
        assert!(state.selected_career.is_none());
        assert!(state.career_details.is_none());
    }

    #[test]
    fn test_go_back_from_learning_path_clears_path() {
        let mut state = SessionState::default();
        state.view = View::LearningPath;
        state.learning_path = Some(Vec::new());
        state.go_back();
        assert_eq!(state.view, View::Recommendations);
        assert!(state.learning_path.is_none());
    }

    #[test]
    fn test_go_back_from_recommendations_clears_recommendations() {
        let mut state = SessionState::default();
        state.view = View::Recommendations;
        state.recommendations = vec![career("Data Scientist")];
        state.go_back();
        assert_eq!(state.view, View::Input);
        assert!(state.recommendations.is_empty());
    }

    #[test]
    fn test_go_back_from_input_is_a_no_op_but_clears_error() {
        let mut state = SessionState::default();
        state.error = Some("Please enter your skills.".to_string());
        state.go_back();
        assert_eq!(state.view, View::Input);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_go_back_preserves_favorites() {
        let mut state = SessionState::with_favorites(vec![career("Nurse")]);
        state.view = View::Recommendations;
        state.go_back();
        assert_eq!(state.favorites.len(), 1);
    }

    #[test]
    fn test_toggle_favorite_double_invocation_restores_original_state() {
        let mut state = SessionState::default();
        let c = career("Data Scientist");
        assert!(state.toggle_favorite(&c));
        assert!(!state.toggle_favorite(&c));
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_toggle_favorite_is_commutative_across_distinct_titles() {
        let a = career("Data Scientist");
        let b = career("UX Designer");

        let mut first = SessionState::default();
        first.toggle_favorite(&a);
        first.toggle_favorite(&b);

        let mut second = SessionState::default();
        second.toggle_favorite(&b);
        second.toggle_favorite(&a);

        let titles = |s: &SessionState| {
            let mut t: Vec<_> = s.favorites.iter().map(|f| f.title.clone()).collect();
            t.sort();
            t
        };
        assert_eq!(titles(&first), titles(&second));
    }

    #[test]
    fn test_favorites_stay_unique_by_title_under_arbitrary_toggles() {
        let mut state = SessionState::default();
        let c = career("Data Scientist");
        for _ in 0..5 {
            state.toggle_favorite(&c);
        }
        let count = state
            .favorites
            .iter()
            .filter(|f| f.title == "Data Scientist")
            .count();
        assert!(count <= 1, "at most one favorite per distinct title");
    }

    #[test]
    fn test_toggle_favorite_title_match_is_case_sensitive() {
        let mut state = SessionState::default();
        state.toggle_favorite(&career("Data Scientist"));
        state.toggle_favorite(&career("data scientist"));
        assert_eq!(state.favorites.len(), 2);
    }

    #[test]
    fn test_toggle_favorite_preserves_insertion_order() {
        let mut state = SessionState::default();
        state.toggle_favorite(&career("Nurse"));
        state.toggle_favorite(&career("Data Scientist"));
        state.toggle_favorite(&career("UX Designer"));
        state.toggle_favorite(&career("Data Scientist"));
        let titles: Vec<_> = state.favorites.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Nurse", "UX Designer"]);
    }
}
