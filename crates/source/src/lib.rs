//! Southwest booking-search fare source.

mod southwest;

pub use southwest::SouthwestSource;
