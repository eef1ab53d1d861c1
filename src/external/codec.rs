use crate::{
    entities::Coordinates,
    error::{polyline_error, Error},
};

pub trait PolylineCodec {
    fn decode(&self, encoded: &str) -> Result<Vec<Coordinates>, Error>;
}

/// Polyline encoding with 5 decimal digits (`geometries=polyline`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Polyline5;

impl PolylineCodec for Polyline5 {
    fn decode(&self, encoded: &str) -> Result<Vec<Coordinates>, Error> {
        let line = polyline::decode_polyline(encoded, 5).map_err(polyline_error)?;

        Ok(line.into_iter().map(Coordinates::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &Coordinates, latitude: f64, longitude: f64) {
        assert!((actual.latitude - latitude).abs() < 1e-6, "{:?}", actual);
        assert!((actual.longitude - longitude).abs() < 1e-6, "{:?}", actual);
    }

    #[test]
    fn decodes_reference_polyline() {
        let path = Polyline5.decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();

        assert_eq!(path.len(), 3);
        assert_close(&path[0], 38.5, -120.2);
        assert_close(&path[1], 40.7, -120.95);
        assert_close(&path[2], 43.252, -126.453);
    }

    #[test]
    fn empty_string_is_an_empty_path() {
        assert!(Polyline5.decode("").unwrap().is_empty());
    }
}
