use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::LegendError;
use crate::waypoint::Waypoint;

/// A coordinate in the routing engine's response, in floating point degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// As a geo point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }
}

/// A scalar measurement as the engine reports it: `{"value": n}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Measure {
    pub value: f64,
}

impl Measure {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// One segment of a computed route between two consecutive stops.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Leg {
    pub end_location: LatLng,
    /// Distance covered by this leg, in meters.
    pub distance: Measure,
    /// Time taken by this leg, in seconds.
    pub duration: Measure,
}

impl Leg {
    pub fn new(end_location: LatLng, distance_meters: f64, duration_seconds: f64) -> Self {
        Self {
            end_location,
            distance: Measure::new(distance_meters),
            duration: Measure::new(duration_seconds),
        }
    }
}

/// A route as computed by the external routing engine: an ordered sequence of
/// legs, plus the engine's optimized visiting order when it supplies one.
///
/// `waypoint_order` indexes the original waypoint collection and covers stops
/// only; the final leg to the end point is not part of the order, so
/// `legs.len() == waypoint_order.len() + 1` when the order is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Route {
    pub legs: Vec<Leg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint_order: Option<Vec<usize>>,
}

impl Route {
    pub fn new(legs: Vec<Leg>) -> Self {
        Self {
            legs,
            waypoint_order: None,
        }
    }

    /// Parse the engine's JSON response. A missing or malformed `legs` array
    /// is an invalid route, never a partial one.
    pub fn from_json(raw: &str) -> Result<Self, LegendError> {
        serde_json::from_str(raw).map_err(LegendError::InvalidRoute)
    }

    /// Sum of all leg distances, in meters.
    pub fn total_distance_meters(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance.value).sum()
    }

    /// Sum of all leg durations, in seconds.
    pub fn total_duration_seconds(&self) -> f64 {
        self.legs.iter().map(|leg| leg.duration.value).sum()
    }
}

/// The start/end pair entered by the user, as served by the start-end
/// endpoint: `{"start": {x, y, label}, "end": {x, y, label}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StartEnd {
    pub start: Waypoint,
    pub end: Waypoint,
}
