pub mod city;
pub mod flight;

pub use city::{City, NewCity};
pub use flight::Flight;
