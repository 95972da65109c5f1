// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;
pub mod error;
pub mod params;
pub mod specs;

pub mod runner;
pub mod store;
