use serde::{Deserialize, Serialize};

/// A geographic rectangle in decimal degrees.
///
/// Construction does not check the coordinates; callers that accept
/// user input are expected to validate before querying.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        }
    }

    /// Whether the point lies inside the rectangle, edges included.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_lat
            && latitude <= self.max_lat
            && longitude >= self.min_lon
            && longitude <= self.max_lon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let bounds = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert!(bounds.contains(10.0, 30.0));
        assert!(bounds.contains(15.0, 35.0));
        assert!(!bounds.contains(20.1, 35.0));
        assert!(!bounds.contains(15.0, 29.9));
    }
}
