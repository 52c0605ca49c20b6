//! Image artifacts produced by the acquisition pipeline.
//!
//! A downloaded image is written to a named temporary file owned by the
//! current iteration. The file is removed by [`ImageArtifact::release`] or,
//! failing that, when the artifact is dropped.

use fakebuzz_domain::ImageCandidate;
use std::io::{self, Write};
use std::path::Path;
use tempfile::TempPath;

/// A downloaded image held on local storage.
#[derive(Debug)]
pub struct ImageArtifact {
    path: TempPath,
    extension: String,
    source_url: String,
    size: usize,
}

impl ImageArtifact {
    /// Write `bytes` to a new temp file named `fakebuzz-*.<ext>`.
    ///
    /// `dir` selects the parent directory; `None` uses the system temp dir.
    pub fn write(dir: Option<&Path>, candidate: &ImageCandidate, bytes: &[u8]) -> io::Result<Self> {
        let suffix = candidate.dotted_extension();
        let mut builder = tempfile::Builder::new();
        builder.prefix("fakebuzz-").suffix(&suffix);
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;

        Ok(Self {
            path: file.into_temp_path(),
            extension: candidate.extension.clone(),
            source_url: candidate.url.clone(),
            size: bytes.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extension with a leading dot, e.g. `.png`.
    pub fn dotted_extension(&self) -> String {
        format!(".{}", self.extension)
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Delete the file now, reporting any I/O error.
    pub fn release(self) -> io::Result<()> {
        self.path.close()
    }
}

/// Outcome of image acquisition.
#[derive(Debug)]
pub enum ImageResult {
    Found(ImageArtifact),
    NotFound,
}

impl ImageResult {
    pub fn is_found(&self) -> bool {
        matches!(self, ImageResult::Found(_))
    }

    pub fn artifact(&self) -> Option<&ImageArtifact> {
        match self {
            ImageResult::Found(artifact) => Some(artifact),
            ImageResult::NotFound => None,
        }
    }
}
