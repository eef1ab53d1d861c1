use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// WGS84 position in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Proximity bias used when the device position is not known yet.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// `lon,lat`, the pair order routing and geocoding APIs expect.
    pub fn to_lon_lat(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

impl From<Coord<f64>> for Coordinates {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_uses_longitude_as_x() {
        let point: Point<f64> = Coordinates::new(-23.5, -46.6).into();

        assert_eq!(point.x(), -46.6);
        assert_eq!(point.y(), -23.5);
    }

    #[test]
    fn formats_lon_lat() {
        assert_eq!(Coordinates::new(-23.5, -46.6).to_lon_lat(), "-46.6,-23.5");
    }
}
