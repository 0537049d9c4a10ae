// In-memory store and the tracker operations built on it

pub mod clock;
pub mod store;
pub mod tracker_service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use store::TrackerStore;
pub use tracker_service::{LogFilter, NewExercise, TrackerService};
