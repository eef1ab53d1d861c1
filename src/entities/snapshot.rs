use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, PlaceSuggestion, Route};

/// Read-only view of the screen state handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub location: Option<Coordinates>,
    pub waypoints: Vec<Coordinates>,
    pub route: Route,
    pub suggestions: Vec<PlaceSuggestion>,
    pub search_text: String,
    pub is_loading: bool,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            location: None,
            waypoints: vec![],
            route: Route::default(),
            suggestions: vec![],
            search_text: String::new(),
            is_loading: true,
        }
    }
}
