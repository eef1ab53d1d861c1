use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

/// A geocoder candidate. Lives until it is selected or the next search lands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceSuggestion {
    pub name: String,
    pub coordinates: Coordinates,
}

impl PlaceSuggestion {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaceQuery {
    pub text: String,
    pub proximity: Coordinates,
    pub limit: usize,
    pub types: Vec<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}
