use anyhow::{Context, Result};
use bevy::asset::RenderAssetUsages;
use bevy::image::{CompressedImageFormats, ImageSampler, ImageType};
use bevy::prelude::*;
use bevy::tasks::{IoTaskPool, Task, block_on, futures_lite::future};

use crate::constants::photos::{PHOTO_MIME_TYPE, PHOTO_URLS};
use crate::constants::scene_layout::SURFACE_GREY;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSlotState {
    Pending,
    Loaded,
    Failed,
}

/// One remote photo and the shared material every panel showing it uses.
#[derive(Debug, Clone)]
pub struct PhotoSlot {
    pub url: String,
    pub material: Handle<StandardMaterial>,
    pub state: PhotoSlotState,
}

/// Photo materials in URL order. Panels index into this by slot.
#[derive(Resource, Default)]
pub struct PhotoLibrary {
    pub slots: Vec<PhotoSlot>,
}

impl PhotoLibrary {
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn material(&self, slot: usize) -> Option<&Handle<StandardMaterial>> {
        self.slots.get(slot).map(|s| &s.material)
    }
}

/// In-flight download for a single library slot.
#[derive(Component)]
pub struct PhotoFetchTask {
    pub slot: usize,
    task: Task<Result<Image>>,
}

/// Grey, fully rough surface shown until (or instead of) the photo.
pub fn placeholder_material() -> StandardMaterial {
    let [r, g, b] = SURFACE_GREY;
    StandardMaterial {
        base_color: Color::srgb_u8(r, g, b),
        perceptual_roughness: 1.0,
        ..default()
    }
}

// Creates one placeholder material per photo and kicks off the downloads.
pub fn create_photo_library(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    let pool = IoTaskPool::get();

    let slots: Vec<PhotoSlot> = PHOTO_URLS
        .iter()
        .enumerate()
        .map(|(slot, url)| {
            let request = url.to_string();
            let task = pool.spawn(async move { fetch_photo(request).await });
            commands.spawn((Name::new(format!("PhotoFetch{slot}")), PhotoFetchTask { slot, task }));

            PhotoSlot {
                url: url.to_string(),
                material: materials.add(placeholder_material()),
                state: PhotoSlotState::Pending,
            }
        })
        .collect();

    loading_progress.photos_requested = slots.len();
    info!("Requested {} photos", slots.len());
    commands.insert_resource(PhotoLibrary { slots });
}

// Polls outstanding downloads and patches finished photos into their materials.
pub fn poll_photo_fetches(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut PhotoFetchTask)>,
    mut library: ResMut<PhotoLibrary>,
    mut images: ResMut<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut loading_progress: ResMut<LoadingProgress>,
) {
    for (entity, mut fetch) in &mut tasks {
        let Some(result) = block_on(future::poll_once(&mut fetch.task)) else {
            continue;
        };
        commands.entity(entity).despawn();

        let Some(slot) = library.slots.get_mut(fetch.slot) else {
            warn!("Photo fetch finished for unknown slot {}", fetch.slot);
            continue;
        };

        match attach_photo(slot, result, &mut images, &mut materials) {
            PhotoSlotState::Loaded => {
                loading_progress.photos_loaded += 1;
                info!("✓ Photo {} loaded", fetch.slot);
            }
            _ => loading_progress.photos_failed += 1,
        }

        if loading_progress.photos_settled() {
            info!(
                "Photo loading finished: {} loaded, {} on placeholder",
                loading_progress.photos_loaded, loading_progress.photos_failed
            );
        }
    }
}

/// Applies a finished download to its slot and returns the slot's new state.
///
/// Failures leave the placeholder material untouched.
pub fn attach_photo(
    slot: &mut PhotoSlot,
    result: Result<Image>,
    images: &mut Assets<Image>,
    materials: &mut Assets<StandardMaterial>,
) -> PhotoSlotState {
    slot.state = match result {
        Ok(image) => {
            let texture = images.add(image);
            match materials.get_mut(&slot.material) {
                Some(material) => {
                    material.base_color_texture = Some(texture);
                    PhotoSlotState::Loaded
                }
                None => {
                    warn!("Material for {} was dropped before its photo arrived", slot.url);
                    PhotoSlotState::Failed
                }
            }
        }
        Err(err) => {
            warn!("Keeping placeholder for {}: {err:#}", slot.url);
            PhotoSlotState::Failed
        }
    };
    slot.state
}

pub fn decode_photo(bytes: &[u8]) -> Result<Image> {
    let image = Image::from_buffer(
        bytes,
        ImageType::MimeType(PHOTO_MIME_TYPE),
        CompressedImageFormats::NONE,
        true,
        ImageSampler::Default,
        RenderAssetUsages::default(),
    )?;
    Ok(image)
}

async fn fetch_photo(url: String) -> Result<Image> {
    let bytes = fetch_bytes(&url).await?;
    decode_photo(&bytes).with_context(|| format!("decoding {url}"))
}

// Runs on the IO pool, so the blocking client never touches the frame loop.
#[cfg(not(target_arch = "wasm32"))]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?;
    let body = response
        .bytes()
        .with_context(|| format!("reading body of {url}"))?;
    Ok(body.to_vec())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("requesting {url}"))?
        .error_for_status()
        .with_context(|| format!("fetching {url}"))?;
    let body = response
        .bytes()
        .await
        .with_context(|| format!("reading body of {url}"))?;
    Ok(body.to_vec())
}
