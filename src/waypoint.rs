use geo_types::Point;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Default per-axis matching tolerance in degrees. Roughly 100m of latitude,
/// coarse enough to absorb the routing engine snapping stops to the road
/// network, fine enough to keep distinct user waypoints apart.
pub const DEFAULT_TOLERANCE_DEGREES: f64 = 0.001;

/// A labeled geographic stop as delivered by the waypoint query endpoint.
/// `x` is longitude and `y` is latitude, matching the endpoint's JSON shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Waypoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: label.into(),
            species: None,
            url: None,
        }
    }

    /// Position as a geo point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

/// Resolves a bare coordinate to one of a set of candidate waypoints.
///
/// A trait rather than a concrete type so that the itinerary builder can be
/// driven with an alternative matching policy.
pub trait MatchWaypoint {
    /// Return the candidate matching `point`, or `None` if no candidate
    /// qualifies.
    fn match_point<'a>(&self, point: Point<f64>, candidates: &'a [Waypoint])
    -> Option<&'a Waypoint>;
}

impl<M: MatchWaypoint + ?Sized> MatchWaypoint for &M {
    fn match_point<'a>(
        &self,
        point: Point<f64>,
        candidates: &'a [Waypoint],
    ) -> Option<&'a Waypoint> {
        (**self).match_point(point, candidates)
    }
}

/// Waypoint matching configuration
#[derive(Debug, Clone)]
pub struct WaypointMatcherConfig {
    /// Maximum per-axis coordinate difference (degrees) for a point to match
    /// a waypoint. Compared independently on each axis, not as a geodesic
    /// distance.
    pub tolerance_degrees: f64,
}

impl Default for WaypointMatcherConfig {
    fn default() -> Self {
        Self {
            tolerance_degrees: DEFAULT_TOLERANCE_DEGREES,
        }
    }
}

/// Resolves the bare coordinates returned by the routing engine back to the
/// labeled waypoints the user originally supplied.
///
/// The engine reports each leg's end point as a plain coordinate, snapped to
/// the road network, so recovering the user's label requires a tolerance
/// comparison rather than exact equality.
#[derive(Debug, Clone, Default)]
pub struct WaypointMatcher {
    config: WaypointMatcherConfig,
}

impl WaypointMatcher {
    pub fn new(config: WaypointMatcherConfig) -> Self {
        Self { config }
    }
}

impl MatchWaypoint for WaypointMatcher {
    /// Linear scan over `candidates`; the first waypoint whose latitude and
    /// longitude both differ from `point` by strictly less than the tolerance
    /// wins. When two candidates lie within tolerance of each other the match
    /// is ambiguous and resolves to whichever comes first in the collection.
    fn match_point<'a>(
        &self,
        point: Point<f64>,
        candidates: &'a [Waypoint],
    ) -> Option<&'a Waypoint> {
        let tolerance = self.config.tolerance_degrees;
        for candidate in candidates {
            let lat_diff = (candidate.y - point.y()).abs();
            let lng_diff = (candidate.x - point.x()).abs();
            if lat_diff < tolerance && lng_diff < tolerance {
                trace!(
                    "Matched ({}, {}) to waypoint '{}'",
                    point.y(),
                    point.x(),
                    candidate.label
                );
                return Some(candidate);
            }
        }
        debug!(
            "No waypoint within {} degrees of ({}, {})",
            tolerance,
            point.y(),
            point.x()
        );
        None
    }
}
