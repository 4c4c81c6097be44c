pub mod error;
pub mod itinerary;
pub mod route;
pub mod units;
pub mod waypoint;

pub use error::LegendError;
pub use itinerary::{Itinerary, ItineraryBuilder, ItineraryEntry, MAX_STOPS};
pub use route::{LatLng, Leg, Measure, Route, StartEnd};
pub use waypoint::{
    DEFAULT_TOLERANCE_DEGREES, MatchWaypoint, Waypoint, WaypointMatcher, WaypointMatcherConfig,
};
