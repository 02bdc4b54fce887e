//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the user-facing processors built on the lower layers:
//!
//! - **Accumulator**: Sample-at-a-time ingestion for live streams
//! - **Segmented**: One trend line per equal segment of a recorded series
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Streaming least-squares accumulator.
pub mod accumulator;

/// Piecewise fits over a recorded series.
pub mod segmented;
