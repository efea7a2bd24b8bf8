#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Calendar month grid and per-day presence
pub mod calendar;

/// Configuration options
pub mod config;

/// Entry domain types
pub mod entry;

/// Error (common error types)
pub mod error;

/// Gallery projection (flattened photo wall)
pub mod gallery;

/// Photo upload helper
pub mod photos;

/// Entry repository (session state, synced with the store)
pub mod repository;

/// Demo seed entries
pub mod seed;

/// Remote store abstraction
pub mod store;

#[cfg(test)]
pub mod test_utils;
