//! The collection-query exercises, as read-only methods on
//! [`TaxiPark`]. Set-valued queries borrow from the park rather than
//! cloning drivers and passengers.

use std::ops::RangeInclusive;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::{Driver, Passenger, TaxiPark, Trip};

impl TaxiPark {
    fn trips_of<'a>(&'a self, passenger: &'a Passenger) -> impl Iterator<Item = &'a Trip> {
        self.trips
            .iter()
            .filter(move |trip| trip.passengers.contains(passenger))
    }

    /// Drivers who performed no trips at all.
    #[must_use]
    pub fn fake_drivers(&self) -> FxHashSet<&Driver> {
        let active: FxHashSet<&Driver> = self.trips.iter().map(|trip| &trip.driver).collect();
        self.all_drivers
            .iter()
            .filter(|driver| !active.contains(*driver))
            .collect()
    }

    /// Passengers who completed at least `min_trips` trips.
    ///
    /// A threshold of zero is vacuously met by every registered
    /// passenger.
    #[must_use]
    pub fn faithful_passengers(&self, min_trips: usize) -> FxHashSet<&Passenger> {
        self.all_passengers
            .iter()
            .filter(|passenger| self.trips_of(passenger).count() >= min_trips)
            .collect()
    }

    /// Passengers taken by the given driver more than once.
    #[must_use]
    pub fn frequent_passengers(&self, driver: &Driver) -> FxHashSet<&Passenger> {
        self.all_passengers
            .iter()
            .filter(|passenger| {
                self.trips_of(passenger)
                    .filter(|trip| &trip.driver == driver)
                    .count()
                    > 1
            })
            .collect()
    }

    /// Passengers who were discounted on a strict majority of their
    /// trips.
    #[must_use]
    pub fn smart_passengers(&self) -> FxHashSet<&Passenger> {
        self.all_passengers
            .iter()
            .filter(|passenger| {
                let discounted = self
                    .trips_of(passenger)
                    .filter(|trip| trip.discount.is_some())
                    .count();
                let full_fare = self
                    .trips_of(passenger)
                    .filter(|trip| trip.discount.is_none())
                    .count();
                discounted > full_fare
            })
            .collect()
    }

    /// The most frequent trip duration among the ten-minute periods
    /// `0..=9`, `10..=19` and so on; the last period is clipped at
    /// `u32::MAX`.
    ///
    /// Ties are broken arbitrarily. Returns `None` when the park has
    /// no trips.
    #[must_use]
    pub fn most_frequent_trip_duration_period(&self) -> Option<RangeInclusive<u32>> {
        let mut buckets: FxHashMap<u32, usize> = FxHashMap::default();
        for trip in &self.trips {
            *buckets.entry(trip.duration_minutes / 10).or_insert(0) += 1;
        }
        buckets
            .into_iter()
            .max_by_key(|(_, count)| *count)
            .map(|(decade, _)| {
                // decade <= u32::MAX / 10, so the start fits; the end
                // saturates in the clipped final period.
                let start = decade * 10;
                start..=start.saturating_add(9)
            })
    }

    /// Checks the Pareto principle: do the top 20% of drivers earn at
    /// least 80% of the total income?
    ///
    /// The 20% is taken over the whole roster, rounded down, so fake
    /// drivers dilute the top group. Returns `false` when the park has
    /// no trips.
    #[must_use]
    pub fn is_pareto_satisfied(&self) -> bool {
        if self.trips.is_empty() {
            return false;
        }

        let mut income_by_driver: FxHashMap<&Driver, f64> = FxHashMap::default();
        for trip in &self.trips {
            *income_by_driver.entry(&trip.driver).or_insert(0.0) += trip.cost();
        }
        let total_income: f64 = income_by_driver.values().sum();
        let mut incomes: Vec<f64> = income_by_driver.into_values().collect();
        incomes.sort_by(|a, b| b.total_cmp(a));

        let top_count = self.all_drivers.len() / 5;
        let top_income: f64 = incomes.iter().take(top_count).sum();
        top_income >= 0.8 * total_income
    }
}
