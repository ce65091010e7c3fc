//! Remote photo loading.
//!
//! Photos are fetched in the background on the IO task pool and attached to
//! their placeholder materials as they arrive; the scene never waits on them.

/// Fetch tasks, decoding, and material patching for the photo textures.
pub mod photo_loader;

/// Scene build and photo fetch progress used for state transitions and logging.
pub mod progress;
