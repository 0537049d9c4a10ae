// Domain models for users and their exercise logs

pub mod date;
pub mod exercise;
pub mod user;

pub use date::*;
pub use exercise::*;
pub use user::*;
