//! Date arithmetic, clocks, and the pure view engine that sits on top of the ledger.

pub mod clock;
pub mod dates;
pub mod recipes;
pub mod views;

pub use clock::{Clock, FixedClock, SystemClock};
