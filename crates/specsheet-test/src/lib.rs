//! CLI regression tests for the `specsheet` binary.
//!
//! The library itself is empty; everything lives in the test module so
//! the binary is only required when running the tests.

#[cfg(test)]
pub mod cli;
