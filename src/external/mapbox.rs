use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{
    config::MapboxSettings,
    entities::{Coordinates, PlaceQuery, PlaceSuggestion},
    error::{configuration_error, invalid_input_error, no_route_error, upstream_error, Error},
    external::{Directions, DirectionsResult, Geocoder},
};

pub const GEOCODING_API_PATH: &str = "geocoding/v5/mapbox.places";
pub const DIRECTIONS_API_PATH: &str = "directions/v5/mapbox/driving";

#[derive(Clone, Debug, Serialize, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Feature {
    place_name: String,
    /// `[lon, lat]`
    center: [f64; 2],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct DirectionsResponse {
    code: String,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<MapboxRoute>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct MapboxRoute {
    geometry: String,
    distance: f64,
    duration: f64,
}

impl FeatureCollection {
    fn into_suggestions(self) -> Vec<PlaceSuggestion> {
        self.features
            .into_iter()
            .map(|feature| {
                let [longitude, latitude] = feature.center;
                PlaceSuggestion::new(feature.place_name, Coordinates::new(latitude, longitude))
            })
            .collect()
    }
}

impl DirectionsResponse {
    fn into_result(self) -> Result<DirectionsResult, Error> {
        match self.code.as_str() {
            "Ok" => {}
            "NoRoute" | "NoSegment" => {
                tracing::info!("no route: {:?}", self.message);
                return Err(no_route_error());
            }
            code => {
                tracing::warn!("directions failed with {}: {:?}", code, self.message);
                return Err(upstream_error());
            }
        }

        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| no_route_error())?;

        Ok(DirectionsResult {
            geometry: route.geometry,
            distance: route.distance,
            duration: route.duration,
        })
    }
}

fn check_status(status_code: u16) -> Result<(), Error> {
    if (400..500).contains(&status_code) {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    Ok(())
}

/// Mapbox geocoding and directions.
#[derive(Clone, Debug)]
pub struct Mapbox {
    api_base: Url,
    access_token: String,
    client: reqwest::Client,
}

impl Mapbox {
    pub fn new(settings: MapboxSettings) -> Result<Self, Error> {
        let api_base = Url::parse(&settings.api_base).map_err(configuration_error)?;

        if api_base.cannot_be_a_base() {
            return Err(configuration_error(api_base));
        }

        Ok(Self {
            api_base,
            access_token: settings.access_token,
            client: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str, resource: &str) -> Result<Url, Error> {
        let mut url = self.api_base.clone();

        url.path_segments_mut()
            .map_err(configuration_error)?
            .pop_if_empty()
            .extend(path.split('/'))
            .push(resource);

        Ok(url)
    }

    pub fn geocoding_url(&self, text: &str) -> Result<Url, Error> {
        self.endpoint(GEOCODING_API_PATH, &format!("{}.json", text))
    }

    pub fn directions_url(&self, stops: &[Coordinates]) -> Result<Url, Error> {
        let stops = stops
            .iter()
            .map(Coordinates::to_lon_lat)
            .collect::<Vec<String>>()
            .join(";");

        self.endpoint(DIRECTIONS_API_PATH, &stops)
    }
}

#[async_trait]
impl Geocoder for Mapbox {
    #[tracing::instrument(skip(self))]
    async fn find_places(&self, query: &PlaceQuery) -> Result<Vec<PlaceSuggestion>, Error> {
        let url = self.geocoding_url(&query.text)?;

        let mut request = self
            .client
            .get(url)
            .query(&[("access_token", &self.access_token)])
            .query(&[("proximity", query.proximity.to_lon_lat())])
            .query(&[("limit", query.limit)])
            .query(&[("types", query.types.join(","))]);

        if let Some(language) = &query.language {
            request = request.query(&[("language", language)]);
        }

        if let Some(country) = &query.country {
            request = request.query(&[("country", country)]);
        }

        let res = request.send().await?;

        check_status(res.status().as_u16())?;

        let data: FeatureCollection = res.json().await?;

        Ok(data.into_suggestions())
    }
}

#[async_trait]
impl Directions for Mapbox {
    #[tracing::instrument(skip(self))]
    async fn find_directions(&self, stops: &[Coordinates]) -> Result<DirectionsResult, Error> {
        if stops.len() < 2 {
            return Err(invalid_input_error());
        }

        let url = self.directions_url(stops)?;

        let res = self
            .client
            .get(url)
            .query(&[("access_token", &self.access_token)])
            .query(&[("geometries", "polyline"), ("overview", "full")])
            .send()
            .await?;

        check_status(res.status().as_u16())?;

        let data: DirectionsResponse = res.json().await?;

        data.into_result()
    }
}
