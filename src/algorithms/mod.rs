//! Layer 2: Algorithms
//!
//! This layer implements the least-squares arithmetic: the running sums that
//! summarize a stream and the closed-form solve that turns them into a line.
//! It is orchestrated by the adapters layer.

// Sufficient statistics and the closed-form least-squares solve.
pub mod sums;
