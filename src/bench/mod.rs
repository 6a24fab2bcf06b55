//! Benchmark data
//!
//! - [`directory_generator`] - Seeded synthetic phonebook and find list

pub mod directory_generator;
