//! Modules layer - Infrastructure components
//!
//! Contains the record store backends that the features query.

pub mod store;
