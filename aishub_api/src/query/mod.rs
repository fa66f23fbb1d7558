mod common;
pub use self::common::Query;
pub(crate) use self::common::add_common_to_url;

mod area;
pub use self::area::AreaQuery;

mod vessel;
pub use self::vessel::VesselQuery;
