//! Scheduler-free animation state for the photo wall.
//!
//! Everything here is plain data stepped by plain functions, so the frame
//! systems stay thin and the behaviour can be driven tick by tick in tests.

/// Idle/Falling selection machine that drops one panel at a time.
pub mod fall;

/// Time-based camera sweep along the x axis.
pub mod sweep;
