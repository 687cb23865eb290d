// src/models/catalog.rs
// the JSON cover manifest
//
// Either a plain list of cover URLs, or a saved-tracks page as returned by
// the music catalog, where each track contributes its album's first image.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::TileWallError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CoverManifest {
    Urls(Vec<String>),
    SavedTracks(SavedTracksPage),
}

#[derive(Debug, Deserialize)]
pub struct SavedTracksPage {
    pub items: Vec<SavedTrack>,
}

#[derive(Debug, Deserialize)]
pub struct SavedTrack {
    pub track: Track,
}

#[derive(Debug, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub name: String,
    pub album: Album,
}

#[derive(Debug, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl CoverManifest {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TileWallError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| TileWallError::Manifest(format!("{}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, TileWallError> {
        serde_json::from_str(content).map_err(|e| TileWallError::Manifest(e.to_string()))
    }

    /// Cover URLs in manifest order. Duplicates are kept; the tile set
    /// builder drops them.
    pub fn cover_urls(&self) -> Vec<String> {
        match self {
            CoverManifest::Urls(urls) => urls.clone(),
            CoverManifest::SavedTracks(page) => page
                .items
                .iter()
                .filter_map(|item| {
                    let album = &item.track.album;
                    let url = album.images.first().map(|image| image.url.clone());
                    if url.is_none() {
                        log::warn!(
                            "Skipping \"{}\": album \"{}\" has no artwork",
                            item.track.name,
                            album.name
                        );
                    }
                    url
                })
                .collect(),
        }
    }
}
