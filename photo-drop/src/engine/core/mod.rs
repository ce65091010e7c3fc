//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, runtime settings
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with the scene, loader, viewport, frame driver
/// and debug panel plugins plus platform-specific defaults.
pub mod app_setup;

/// Application state machine and the transition out of scene building.
pub mod app_state;

/// Runtime tunables and the seeded random source shared by scene setup.
pub mod settings;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
