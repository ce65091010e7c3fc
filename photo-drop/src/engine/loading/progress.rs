use bevy::prelude::*;

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub scene_built: bool,
    pub photos_requested: usize,
    pub photos_loaded: usize,
    pub photos_failed: usize,
}

impl LoadingProgress {
    pub fn photos_settled(&self) -> bool {
        self.photos_loaded + self.photos_failed >= self.photos_requested
    }
}
