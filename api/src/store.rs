//! Flat-file persistence for the testimonial collection
//! One JSON document holds the whole collection; every append rewrites it.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;

use shared::{Testimonial, TestimonialsFile};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access testimonial file: {0}")]
    Io(#[from] std::io::Error),
    #[error("testimonial file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Append-only testimonial collection backed by a single JSON file.
///
/// Appends hold `write_lock` across the whole read-modify-write and land
/// via temp file + rename. Readers never take the lock.
pub struct TestimonialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl TestimonialStore {
    pub fn new(path: PathBuf) -> Self {
        TestimonialStore {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the full collection. A missing file is an empty collection.
    pub async fn load(&self) -> Result<TestimonialsFile, StoreError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(TestimonialsFile::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Read for display: any failure degrades to the empty collection.
    pub async fn load_or_empty(&self) -> TestimonialsFile {
        match self.load().await {
            Ok(data) => data,
            Err(err) => {
                warn!(
                    error = %err,
                    path = %self.path.display(),
                    "serving empty testimonial collection"
                );
                TestimonialsFile::default()
            }
        }
    }

    /// Append one testimonial and rewrite the whole collection.
    pub async fn append(&self, testimonial: Testimonial) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut data = self.load().await?;
        data.testimonials.push(testimonial);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_vec_pretty(&data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
