//! # Integer Range Arithmetic Helpers

pub mod ranges;
