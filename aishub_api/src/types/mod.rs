mod bounds;
pub use self::bounds::BoundingBox;

mod response;
pub use self::response::AisHubResponse;

mod vessel;
pub use self::vessel::{AisHubVessel, Vessel, DEFAULT_VESSEL_TYPE, SOURCE_LABEL, UNKNOWN_VESSEL_NAME};
