//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer owns the finalized result type handed to callers and to
//! rendering collaborators, and the validation run when builders construct
//! processors.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Immutable regression snapshot.
pub mod output;

/// Builder configuration validation.
pub mod validator;
