use crate::core::{ArchiveJob, ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::{Cursor, Write};
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

pub struct Packager<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> Packager<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Compresses the configured source file into a single-entry zip archive
    /// and returns the archive path.
    pub fn package(&self) -> Result<String> {
        let job = ArchiveJob::new(self.config.source_path(), self.config.archive_path());
        let entry_name = job.entry_name()?.to_string();

        tracing::debug!("Reading plugin source: {}", job.source_path);
        let plugin_bytes = self.storage.read_file(&job.source_path)?;
        tracing::debug!("Read {} bytes", plugin_bytes.len());

        // The archive is assembled in memory; the output file is only
        // created once the writer has finished.
        let zip_data = {
            let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

            zip.start_file::<_, ()>(
                entry_name.as_str(),
                FileOptions::default().compression_method(CompressionMethod::Deflated),
            )?;
            zip.write_all(&plugin_bytes)?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!(
            "Writing archive ({} bytes) to {}",
            zip_data.len(),
            job.archive_path
        );
        self.storage.write_file(&job.archive_path, &zip_data)?;

        Ok(job.archive_path)
    }
}
