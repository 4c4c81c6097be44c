use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::LegendError;
use crate::route::Route;
use crate::units::{hours_to_minutes, meters_to_miles, round1, seconds_to_hours};
use crate::waypoint::{MatchWaypoint, Waypoint, WaypointMatcher};

/// Legend markers run A through Z. The start takes A and the end needs a
/// letter of its own, which leaves room for this many stops.
pub const MAX_STOPS: usize = 24;

/// One renderable line of the route legend.
///
/// Serializes with a lowercase `kind` tag, the shape the rendering layer
/// consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItineraryEntry {
    Start {
        marker: char,
        label: String,
    },
    Stop {
        marker: char,
        /// Label of the matched waypoint; empty when no waypoint lay within
        /// matching tolerance of the leg's end point.
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        species: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
    },
    End {
        marker: char,
        label: String,
    },
    Summary {
        text: String,
    },
}

impl fmt::Display for ItineraryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItineraryEntry::Start { marker, label } | ItineraryEntry::End { marker, label } => {
                write!(f, "{}: {}", marker, label)
            }
            ItineraryEntry::Stop {
                marker,
                label,
                species,
                url,
            } => {
                write!(f, "{}: {}", marker, label)?;
                if let Some(species) = species {
                    write!(f, " ({})", species)?;
                }
                if let Some(url) = url {
                    write!(f, " - {}", url)?;
                }
                Ok(())
            }
            ItineraryEntry::Summary { text } => write!(f, "{}", text),
        }
    }
}

/// The ordered legend for one computed route: start marker, lettered stops,
/// end marker, then the distance and duration summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    pub entries: Vec<ItineraryEntry>,
}

impl Itinerary {
    pub fn iter(&self) -> impl Iterator<Item = &ItineraryEntry> {
        self.entries.iter()
    }

    /// Each entry rendered as its legend line.
    pub fn legend_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

/// Turns a computed route plus the user's labeled waypoints into a renderable
/// [`Itinerary`].
///
/// When the engine supplies an explicit visiting order, stops are read
/// straight out of the waypoint collection by index. Otherwise each leg's end
/// coordinate goes through the matcher to recover its label.
#[derive(Debug, Clone)]
pub struct ItineraryBuilder<M = WaypointMatcher> {
    matcher: M,
    start_label: String,
    end_label: String,
}

impl ItineraryBuilder<WaypointMatcher> {
    pub fn new() -> Self {
        Self::with_matcher(WaypointMatcher::default())
    }
}

impl Default for ItineraryBuilder<WaypointMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: MatchWaypoint> ItineraryBuilder<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self {
            matcher,
            start_label: String::from("start"),
            end_label: String::from("end"),
        }
    }

    /// Label for the start marker, e.g. the address the user entered.
    pub fn start_label(mut self, label: impl Into<String>) -> Self {
        self.start_label = label.into();
        self
    }

    /// Label for the end marker.
    pub fn end_label(mut self, label: impl Into<String>) -> Self {
        self.end_label = label.into();
        self
    }

    /// Build the itinerary for `route` over the user's `waypoints`.
    ///
    /// Empty inputs are fine: a route with no legs produces just the start
    /// and end markers plus zero-valued summaries. A failed coordinate match
    /// degrades to a stop with an empty label rather than an error; the
    /// legend is best-effort by design.
    pub fn build(&self, route: &Route, waypoints: &[Waypoint]) -> Result<Itinerary, LegendError> {
        let stops = self.resolve_stops(route, waypoints)?;
        if stops.len() > MAX_STOPS {
            return Err(LegendError::TooManyStops { count: stops.len() });
        }

        let mut entries = Vec::with_capacity(stops.len() + 4);
        let mut marker = 'A';
        entries.push(ItineraryEntry::Start {
            marker,
            label: self.start_label.clone(),
        });
        for stop in stops {
            marker = next_marker(marker);
            match stop {
                Some(waypoint) => entries.push(ItineraryEntry::Stop {
                    marker,
                    label: waypoint.label.clone(),
                    species: waypoint.species.clone(),
                    url: waypoint.url.clone(),
                }),
                None => {
                    warn!("No waypoint matched for stop {}", marker);
                    entries.push(ItineraryEntry::Stop {
                        marker,
                        label: String::new(),
                        species: None,
                        url: None,
                    });
                }
            }
        }
        marker = next_marker(marker);
        entries.push(ItineraryEntry::End {
            marker,
            label: self.end_label.clone(),
        });

        entries.push(ItineraryEntry::Summary {
            text: distance_summary(route.total_distance_meters()),
        });
        entries.push(ItineraryEntry::Summary {
            text: duration_summary(route.total_duration_seconds()),
        });

        Ok(Itinerary { entries })
    }

    /// Determine the visited waypoints in stop order.
    ///
    /// The engine's explicit `waypoint_order` is the preferred, unambiguous
    /// path; coordinate matching only runs when the order is absent. On the
    /// matching path the final leg is skipped, since it always terminates at
    /// the end point rather than a waypoint.
    fn resolve_stops<'a>(
        &self,
        route: &Route,
        waypoints: &'a [Waypoint],
    ) -> Result<Vec<Option<&'a Waypoint>>, LegendError> {
        match &route.waypoint_order {
            Some(order) => order
                .iter()
                .map(|&index| {
                    waypoints
                        .get(index)
                        .map(Some)
                        .ok_or(LegendError::WaypointOrderOutOfRange {
                            index,
                            count: waypoints.len(),
                        })
                })
                .collect(),
            None => {
                let stop_legs = route.legs.len().saturating_sub(1);
                Ok(route.legs[..stop_legs]
                    .iter()
                    .map(|leg| {
                        self.matcher
                            .match_point(leg.end_location.point(), waypoints)
                    })
                    .collect())
            }
        }
    }
}

fn next_marker(marker: char) -> char {
    // build() bounds the stop count, so this never walks past 'Z'.
    char::from(marker as u8 + 1)
}

fn distance_summary(meters: f64) -> String {
    format!(
        "Total Route Distance: {} miles",
        round1(meters_to_miles(meters))
    )
}

/// Durations shorter than an hour read better in minutes. The minutes figure
/// derives from the unrounded hours so that 900 seconds reports 15 minutes,
/// not a double-rounded 18.
fn duration_summary(seconds: f64) -> String {
    let hours = seconds_to_hours(seconds);
    if round1(hours) < 1.0 {
        format!(
            "Total Route Duration: {} minutes",
            round1(hours_to_minutes(hours))
        )
    } else {
        format!("Total Route Duration: {} hours", round1(hours))
    }
}
