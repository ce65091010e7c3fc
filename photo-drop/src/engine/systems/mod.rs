//! Per-frame runtime systems.
//!
//! The frame driver advances camera controls, the fall animation and the
//! camera sweep in a fixed order each frame; the FPS overlay is native only.

/// Ordered per-frame update: controls, fall animation, camera sweep.
pub mod frame_driver;

/// Frame time diagnostics and the on-screen FPS counter.
pub mod fps_tracking;
