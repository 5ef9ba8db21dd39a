//! Storage abstractions for service layer
//!
//! File-backed collection stores shared by the flight and city services.

pub mod json_array_store;
