//! # quest-core
//!
//! Goal tracking and scoring engine.
//!
//! A [`Goal`] is one trackable objective. Three kinds exist, with distinct
//! completion and scoring semantics:
//!
//! - **Simple** — done once; recording completion sets the flag and awards
//!   the goal's point value.
//! - **Eternal** — never done; every completion bumps the point value by
//!   one and awards the new value.
//! - **Checklist** — done after a fixed number of completions, with a
//!   500-point bonus on the final one.
//!
//! The [`GoalStore`] owns an ordered collection of goals plus the running
//! aggregate score. The score is an event log of additions, not a sum of
//! final values: a goal's current point value is added both when the goal
//! is added to the store and at every recorded completion.
//!
//! The [`codec`] module persists a store to a flat comma-separated text
//! file and reads it back. The format has two known, deliberate quirks —
//! see the module docs.

pub mod codec;
pub mod error;
pub mod goal;
pub mod store;

pub use error::GoalError;
pub use goal::{Goal, GoalKind};
pub use store::GoalStore;
