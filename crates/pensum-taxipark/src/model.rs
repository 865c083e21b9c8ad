//! The taxi-park data model: drivers, passengers, trips, and the park
//! that owns them. All values are plain in-memory data; queries over
//! them live in [`crate::queries`].

use rustc_hash::FxHashSet;

/// A taxi driver, identified by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Driver {
    /// Display name, unique within a park.
    pub name: String,
}

impl Driver {
    /// Creates a driver with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A passenger, identified by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Passenger {
    /// Display name, unique within a park.
    pub name: String,
}

impl Passenger {
    /// Creates a passenger with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single completed trip.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    /// Who drove.
    pub driver: Driver,
    /// Everyone who rode along.
    pub passengers: FxHashSet<Passenger>,
    /// Duration in minutes.
    pub duration_minutes: u32,
    /// Distance in kilometres.
    pub distance_km: f64,
    /// Fractional discount in `0.0..=1.0`, if one was applied.
    pub discount: Option<f64>,
}

impl Trip {
    /// Creates an undiscounted trip.
    #[must_use]
    pub fn new(
        driver: Driver,
        passengers: impl IntoIterator<Item = Passenger>,
        duration_minutes: u32,
        distance_km: f64,
    ) -> Self {
        Self {
            driver,
            passengers: passengers.into_iter().collect(),
            duration_minutes,
            distance_km,
            discount: None,
        }
    }

    /// Applies a fractional discount to the trip.
    #[must_use]
    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = Some(discount);
        self
    }

    /// Total cost of the trip: duration plus distance, scaled down by
    /// the discount when one was applied.
    #[must_use]
    pub fn cost(&self) -> f64 {
        (f64::from(self.duration_minutes) + self.distance_km)
            * (1.0 - self.discount.unwrap_or(0.0))
    }
}

/// The dataset every query runs against.
///
/// The rosters may list drivers and passengers who appear in no trip;
/// several queries exist precisely to find them.
#[derive(Clone, Debug, Default)]
pub struct TaxiPark {
    /// Every registered driver, including ones who never drove.
    pub all_drivers: FxHashSet<Driver>,
    /// Every registered passenger, including ones who never rode.
    pub all_passengers: FxHashSet<Passenger>,
    /// Every completed trip.
    pub trips: Vec<Trip>,
}

impl TaxiPark {
    /// Creates a park from its roster and trip log.
    #[must_use]
    pub fn new(
        all_drivers: impl IntoIterator<Item = Driver>,
        all_passengers: impl IntoIterator<Item = Passenger>,
        trips: Vec<Trip>,
    ) -> Self {
        Self {
            all_drivers: all_drivers.into_iter().collect(),
            all_passengers: all_passengers.into_iter().collect(),
            trips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_without_discount() {
        let trip = Trip::new(Driver::new("D-1"), [Passenger::new("P-1")], 20, 5.0);
        assert!((trip.cost() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_with_discount() {
        let trip =
            Trip::new(Driver::new("D-1"), [Passenger::new("P-1")], 20, 5.0).with_discount(0.2);
        assert!((trip.cost() - 20.0).abs() < 1e-9);
    }
}
