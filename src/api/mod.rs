// API routes and handlers

pub mod exercises;
pub mod extract;
pub mod health;
pub mod routes;
pub mod users;
