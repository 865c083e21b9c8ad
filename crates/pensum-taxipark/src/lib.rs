//! # pensum-taxipark
//!
//! Collection-query exercises over an in-memory taxi-trip dataset.
//!
//! A [`TaxiPark`] owns a roster of drivers and passengers together with
//! the trips they took; the exercises are read-only queries over that
//! data, from "which drivers never drove" up to a Pareto-principle
//! check on driver income.
//!
//! ```rust
//! use pensum_taxipark::{Driver, Passenger, TaxiPark, Trip};
//!
//! let driver = Driver::new("D-1");
//! let rider = Passenger::new("P-1");
//! let park = TaxiPark::new(
//!     [driver.clone()],
//!     [rider.clone()],
//!     vec![Trip::new(driver, [rider], 10, 3.5)],
//! );
//! assert!(park.fake_drivers().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod model;
pub mod queries;

pub use model::{Driver, Passenger, TaxiPark, Trip};
