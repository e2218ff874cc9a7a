use std::path::PathBuf;

/// Failures while writing icon assets. Both variants are plain I/O trouble:
/// nothing here is retried and partial output is left in place.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to create output directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
