//! Integration test crate for Pigment.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every pigment library crate to verify they work together.

#[cfg(test)]
mod operators;

#[cfg(test)]
mod compositing;

#[cfg(test)]
mod adjustment;
