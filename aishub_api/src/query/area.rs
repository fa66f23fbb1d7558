use url::Url;

use crate::types::BoundingBox;

use super::Query;

/// Query for every vessel reporting inside a latitude/longitude rectangle.
///
/// The provider names its axes `x` (longitude) and `y` (latitude).
#[derive(Debug, Clone, Copy)]
pub struct AreaQuery {
    pub bounds: BoundingBox,
}

impl AreaQuery {
    pub fn new(bounds: BoundingBox) -> Self {
        Self { bounds }
    }
}

impl From<BoundingBox> for AreaQuery {
    fn from(bounds: BoundingBox) -> Self {
        Self::new(bounds)
    }
}

impl Query for AreaQuery {
    fn path(&self) -> &'static str {
        "/vessels"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("xmin", &self.bounds.min_lon.to_string())
            .append_pair("xmax", &self.bounds.max_lon.to_string())
            .append_pair("ymin", &self.bounds.min_lat.to_string())
            .append_pair("ymax", &self.bounds.max_lat.to_string());
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{AreaQuery, Query},
        types::BoundingBox,
    };

    #[test]
    fn test_area_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(
            AreaQuery::new(BoundingBox::new(24.5, 27.0, 55.5, 57.25))
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/?xmin=55.5&xmax=57.25&ymin=24.5&ymax=27"
        );
    }

    #[test]
    fn test_area_query_negative_coordinates() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(
            AreaQuery::from(BoundingBox::new(-10.0, 5.0, -80.5, -70.0))
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/?xmin=-80.5&xmax=-70&ymin=-10&ymax=5"
        );
    }
}
