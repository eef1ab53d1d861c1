use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub path: Vec<Coordinates>,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

impl Route {
    pub fn new(path: Vec<Coordinates>, distance: f64, duration: f64) -> Self {
        Route {
            path,
            distance,
            duration,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
