use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegendError {
    #[error("invalid route")]
    InvalidRoute(#[source] serde_json::Error),
    #[error("waypoint order index {index} is out of range for {count} waypoints")]
    WaypointOrderOutOfRange { index: usize, count: usize },
    #[error("route has {count} stops but legend markers run out after 24")]
    TooManyStops { count: usize },
}
