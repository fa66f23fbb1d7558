use url::Url;

use super::Query;

/// Query for a single vessel by its MMSI (maritime identity number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselQuery {
    pub mmsi: u64,
}

impl VesselQuery {
    pub fn new(mmsi: u64) -> Self {
        Self { mmsi }
    }
}

impl Query for VesselQuery {
    fn path(&self) -> &'static str {
        "/vessel"
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("mmsi", &self.mmsi.to_string());
        url
    }
}
