mod codec;
mod location;
pub mod mapbox;

use async_trait::async_trait;

use crate::{
    entities::{Coordinates, PlaceQuery, PlaceSuggestion},
    error::Error,
};

pub use codec::{Polyline5, PolylineCodec};
pub use location::{LocationFeed, LocationSource};
pub use mapbox::Mapbox;

#[async_trait]
pub trait Geocoder {
    /// Candidates in the provider's ranking order.
    async fn find_places(&self, query: &PlaceQuery) -> Result<Vec<PlaceSuggestion>, Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectionsResult {
    /// Compact polyline encoding of the full path.
    pub geometry: String,
    pub distance: f64,
    pub duration: f64,
}

#[async_trait]
pub trait Directions {
    /// Driving directions through `stops` in order. The first stop is the origin.
    async fn find_directions(&self, stops: &[Coordinates]) -> Result<DirectionsResult, Error>;
}
