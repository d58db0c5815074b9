//! Stress-testing utilities: random group generation.

pub mod scenario;
