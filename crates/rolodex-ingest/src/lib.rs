use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use fastrace::trace;
use thiserror::Error;

pub const MAX_AVATAR_BYTES: u64 = 800 * 1024;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("File is too large ({size} bytes). The maximum size is 800KB")]
    FileTooLarge { size: u64 },
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),
}

/// Reads an image file and returns it as a data URL that can be assigned
/// directly as an image source. The size ceiling is checked against file
/// metadata before any content is read.
#[trace]
pub async fn ingest_avatar(path: &Path) -> Result<String, IngestError> {
    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_AVATAR_BYTES {
        return Err(IngestError::FileTooLarge {
            size: metadata.len(),
        });
    }

    let bytes = tokio::fs::read(path).await?;
    Ok(format!(
        "data:{};base64,{}",
        image_mime_type(path),
        STANDARD.encode(&bytes)
    ))
}

pub fn image_mime_type(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

/// Media-type gate callers apply before ingesting; ingestion itself only
/// validates size and readability.
pub fn is_image_file(path: &Path) -> bool {
    image_mime_type(path).starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, size: usize) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, vec![0u8; size]).unwrap();
        path
    }

    #[tokio::test]
    async fn test_file_at_the_limit_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "avatar.png", MAX_AVATAR_BYTES as usize);

        let data_url = ingest_avatar(&path).await.unwrap();
        assert!(data_url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_file_over_the_limit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "avatar.png", (MAX_AVATAR_BYTES + 1) as usize);

        let err = ingest_avatar(&path).await.unwrap_err();
        assert!(matches!(err, IngestError::FileTooLarge { size } if size == MAX_AVATAR_BYTES + 1));
    }

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = ingest_avatar(&dir.path().join("missing.png")).await.unwrap_err();
        assert!(matches!(err, IngestError::Read(_)));
    }

    #[tokio::test]
    async fn test_data_url_carries_the_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.gif");
        std::fs::write(&path, b"GIF89a").unwrap();

        let data_url = ingest_avatar(&path).await.unwrap();
        let encoded = data_url.strip_prefix("data:image/gif;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), b"GIF89a");
    }

    #[test]
    fn test_mime_detection() {
        assert_eq!(image_mime_type(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("a.JPEG")), "image/jpeg");
        assert_eq!(image_mime_type(Path::new("a.webp")), "image/webp");
        assert_eq!(
            image_mime_type(Path::new("notes.txt")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_image_gate() {
        assert!(is_image_file(Path::new("photo.png")));
        assert!(is_image_file(Path::new("photo.svg")));
        assert!(!is_image_file(Path::new("resume.pdf")));
        assert!(!is_image_file(Path::new("no_extension")));
    }
}
