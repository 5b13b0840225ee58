//! Local media storage for uploaded files.
//!
//! Files live under `MEDIA_ROOT` and are addressed by relative paths stored
//! on the owning row (e.g. `uploads/airplanes/b737-<uuid>.png`). The router
//! serves the whole tree read-only at `/media/` via `ServeDir`.

use std::path::{Component, Path, PathBuf};

use skyport_core::error::CoreError;
use skyport_core::naming::slugify;
use uuid::Uuid;

/// Subdirectory for airplane images, relative to the media root.
const AIRPLANE_IMAGE_DIR: &str = "uploads/airplanes";

/// Validate that `data` is a fully decodable image, returning its format.
///
/// Magic-byte sniffing alone is not enough: the whole payload must decode,
/// matching the behavior callers rely on (truncated or text payloads are
/// rejected before anything is written to disk).
pub fn validate_image(data: &[u8]) -> Result<image::ImageFormat, CoreError> {
    let format = image::guess_format(data)
        .map_err(|_| CoreError::Validation("Uploaded file is not a valid image".into()))?;
    image::load_from_memory(data)
        .map_err(|_| CoreError::Validation("Uploaded file is not a valid image".into()))?;
    Ok(format)
}

/// Filesystem-backed store rooted at the configured media directory.
#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path of a stored relative path.
    pub fn absolute_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Public URL a stored relative path is served at.
    pub fn url_for(relative: &str) -> String {
        format!("/media/{relative}")
    }

    /// Persist an airplane image, returning the stored relative path.
    ///
    /// The filename is `<slugified airplane name>-<uuid>.<ext>` so repeated
    /// uploads never collide and names stay filesystem-safe.
    pub async fn save_airplane_image(
        &self,
        airplane_name: &str,
        format: image::ImageFormat,
        data: &[u8],
    ) -> std::io::Result<String> {
        let ext = format.extensions_str().first().copied().unwrap_or("bin");
        let filename = format!("{}-{}.{ext}", slugify(airplane_name), Uuid::new_v4());
        let relative = format!("{AIRPLANE_IMAGE_DIR}/{filename}");

        let path = self.root.join(AIRPLANE_IMAGE_DIR);
        tokio::fs::create_dir_all(&path).await?;
        tokio::fs::write(path.join(&filename), data).await?;

        Ok(relative)
    }

    /// Remove a stored file. Missing files are not an error, so deletion is
    /// idempotent and leaves no orphans behind.
    pub async fn delete(&self, relative: &str) -> std::io::Result<()> {
        if !is_safe_relative(Path::new(relative)) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "media paths must be relative and must not traverse upward",
            ));
        }

        match tokio::fs::remove_file(self.root.join(relative)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// A stored path must stay inside the media root.
fn is_safe_relative(path: &Path) -> bool {
    path.is_relative()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_image_bytes() {
        assert!(validate_image(b"not image").is_err());
        assert!(validate_image(&[]).is_err());
    }

    #[test]
    fn accepts_encoded_png() {
        let img = image::RgbImage::new(4, 4);
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();

        let format = validate_image(buf.get_ref()).unwrap();
        assert_eq!(format, image::ImageFormat::Png);
    }

    #[test]
    fn rejects_truncated_png() {
        let img = image::RgbImage::new(16, 16);
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();

        // Valid magic bytes, unreadable body.
        let truncated = &buf.get_ref()[..24];
        assert!(validate_image(truncated).is_err());
    }

    #[test]
    fn unsafe_paths_are_refused() {
        assert!(is_safe_relative(Path::new("uploads/airplanes/a.png")));
        assert!(!is_safe_relative(Path::new("../escape.png")));
        assert!(!is_safe_relative(Path::new("/etc/passwd")));
    }
}
