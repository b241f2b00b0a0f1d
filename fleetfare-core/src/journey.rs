//! Multi-leg journeys submitted for planning.

use serde::{Deserialize, Serialize};

use crate::Location;

/// One point-to-point segment with an optional trailing pause.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripLeg {
    /// Where the leg starts.
    pub start_location: Location,
    /// Where the leg ends and any pause takes place.
    pub end_location: Location,
    /// Minutes the vehicle stays parked after arriving.
    #[serde(default)]
    pub pause_minutes: u32,
}

impl TripLeg {
    /// Construct a leg between two locations.
    #[must_use]
    pub const fn new(start_location: Location, end_location: Location, pause_minutes: u32) -> Self {
        Self {
            start_location,
            end_location,
            pause_minutes,
        }
    }
}

/// An ordered sequence of legs travelled with a single vehicle.
///
/// Leg order is travel order. Consecutive legs are expected, not required,
/// to join up: the walk from one leg's end to the next leg's start is
/// charged as booking time.
///
/// # Examples
/// ```
/// use fleetfare_core::{Journey, Location, TripLeg};
///
/// let journey = Journey::new(vec![
///     TripLeg::new(Location::new(50.8355, 4.3573), Location::new(50.8245, 4.3635), 120),
///     TripLeg::new(Location::new(50.8245, 4.3635), Location::new(50.8275, 4.3745), 0),
/// ]);
/// assert_eq!(journey.total_pause_minutes(), 120);
/// assert_eq!(journey.start(), Some(Location::new(50.8355, 4.3573)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Journey {
    /// Legs in travel order.
    pub legs: Vec<TripLeg>,
}

impl Journey {
    /// Construct a journey from its legs.
    #[must_use]
    pub const fn new(legs: Vec<TripLeg>) -> Self {
        Self { legs }
    }

    /// Whether the journey has no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Start of the first leg.
    #[must_use]
    pub fn start(&self) -> Option<Location> {
        self.legs.first().map(|leg| leg.start_location)
    }

    /// End of the last leg, where the vehicle is returned.
    #[must_use]
    pub fn destination(&self) -> Option<Location> {
        self.legs.last().map(|leg| leg.end_location)
    }

    /// Sum of the requested pauses across all legs.
    #[must_use]
    pub fn total_pause_minutes(&self) -> u64 {
        self.legs.iter().map(|leg| u64::from(leg.pause_minutes)).sum()
    }
}
