use std::path::{Path, PathBuf};

use druid::ImageBuf;

#[derive(Debug, thiserror::Error)]
pub enum PodError {
    #[error("Failed to decode pod image")]
    ImageDecode(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to read pod image from {path}")]
    ImageFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Pod image has no pixels ({width}x{height})")]
    EmptyImage { width: usize, height: usize },
}

fn non_empty(image: ImageBuf) -> Result<ImageBuf, PodError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(PodError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(image)
}

/// Decodes an encoded image (png, jpeg) for the pod.
pub fn load_pod_image(bytes: &[u8]) -> Result<ImageBuf, PodError> {
    let image = ImageBuf::from_data(bytes).map_err(PodError::ImageDecode)?;
    non_empty(image)
}

pub fn load_pod_image_file(path: impl AsRef<Path>) -> Result<ImageBuf, PodError> {
    let path = path.as_ref();
    let image = ImageBuf::from_file(path).map_err(|source| PodError::ImageFile {
        path: path.to_path_buf(),
        source,
    })?;
    non_empty(image)
}
