// src/services/image_loader.rs
//
// Resolves cover URLs to local files and decodes them once per URL.
// A cover that fails to load still yields a source, with no image, so the
// wall can keep its slot and skip it when drawing.

use std::collections::HashMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::models::TileSource;

const FALLBACK_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub struct ImageLoader<I> {
    base_dir: PathBuf,  // for relative paths
    cover_dir: PathBuf, // for remote URLs
    cache: HashMap<String, Option<I>>,
}

impl<I: Clone> ImageLoader<I> {
    pub fn new(base_dir: impl Into<PathBuf>, cover_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cover_dir: cover_dir.into(),
            cache: HashMap::new(),
        }
    }

    /// Local path for `url`. Remote URLs map to their last path segment
    /// inside the cover directory, trying common image extensions when the
    /// bare name does not exist.
    pub fn resolve(&self, url: &str) -> PathBuf {
        if let Some(file_name) = remote_file_name(url) {
            let bare = self.cover_dir.join(file_name);
            if bare.exists() {
                return bare;
            }
            return FALLBACK_EXTENSIONS
                .iter()
                .map(|ext| bare.with_extension(ext))
                .find(|candidate| candidate.exists())
                .unwrap_or(bare);
        }

        let path = Path::new(url);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Decodes `url` with `decode` unless it was seen before.
    pub fn load_with<F, E>(&mut self, url: &str, decode: F) -> Option<I>
    where
        F: FnOnce(&Path) -> Result<I, E>,
        E: Display,
    {
        if let Some(cached) = self.cache.get(url) {
            return cached.clone();
        }

        let path = self.resolve(url);
        let image = match decode(&path) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Could not load cover {} ({}): {}", url, path.display(), e);
                None
            }
        };
        self.cache.insert(url.to_string(), image.clone());
        image
    }

    /// One source per URL, in order, duplicates included.
    pub fn load_all_with<F, E>(&mut self, urls: &[String], mut decode: F) -> Vec<TileSource<I>>
    where
        F: FnMut(&Path) -> Result<I, E>,
        E: Display,
    {
        let sources: Vec<TileSource<I>> = urls
            .iter()
            .map(|url| {
                let image = self.load_with(url, &mut decode);
                TileSource::new(url.clone(), image)
            })
            .collect();

        let loaded = sources.iter().filter(|s| s.image.is_some()).count();
        log::info!(
            "Loaded {} of {} covers ({} distinct URLs)",
            loaded,
            sources.len(),
            self.cached_count()
        );
        sources
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}

fn remote_file_name(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))?;
    let path = rest.split(['?', '#']).next().unwrap_or(rest);
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn loader() -> ImageLoader<u32> {
        ImageLoader::new("/srv/wall", "/nonexistent/covers")
    }

    #[test]
    fn test_resolve_paths() {
        let loader = loader();
        assert_eq!(loader.resolve("a/b.png"), PathBuf::from("/srv/wall/a/b.png"));
        assert_eq!(loader.resolve("/abs/c.jpg"), PathBuf::from("/abs/c.jpg"));
        assert_eq!(
            loader.resolve("https://i.example/image/ab67616d?size=640"),
            PathBuf::from("/nonexistent/covers/ab67616d")
        );
    }

    #[test]
    fn test_remote_file_name() {
        assert_eq!(remote_file_name("http://x/y/z.jpg"), Some("z.jpg"));
        assert_eq!(remote_file_name("https://x/y/"), None);
        assert_eq!(remote_file_name("covers/z.jpg"), None);
    }

    #[test]
    fn test_duplicate_urls_decode_once() {
        let mut loader = loader();
        let calls = Cell::new(0);
        let urls: Vec<String> = ["a.jpg", "b.jpg", "a.jpg"].iter().map(|s| s.to_string()).collect();

        let sources = loader.load_all_with(&urls, |_path| {
            calls.set(calls.get() + 1);
            Ok::<u32, String>(calls.get())
        });

        assert_eq!(calls.get(), 2);
        assert_eq!(loader.cached_count(), 2);
        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0].image, Some(1));
        assert_eq!(sources[2].image, Some(1));
        assert_eq!(sources[1].image, Some(2));
    }

    #[test]
    fn test_failed_decode_is_soft() {
        let mut loader = loader();
        let urls = vec!["ok.png".to_string(), "bad.png".to_string()];

        let sources = loader.load_all_with(&urls, |path| {
            if path.ends_with("bad.png") {
                Err("corrupt header")
            } else {
                Ok(9)
            }
        });

        assert_eq!(sources[0].image, Some(9));
        assert_eq!(sources[1].image, None);
        assert_eq!(sources[1].url, "bad.png");
    }
}
