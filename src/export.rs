/*!
 * Writes the PDF and text artifacts of a validated record.
 *
 * The PDF is written first and must succeed. The text file is written second;
 * when it fails the PDF stays on disk and the failure is handed back to the
 * caller alongside the PDF path.
 */

use std::io;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::document::{render, PageLayout, RenderedDocument};
use crate::errors::DocumentError;
use crate::file_utils::FileManager;
use crate::record::{FieldList, Record};

/// Files produced for one record
#[derive(Debug)]
pub struct ExportOutcome {
    /// Path of the PDF artifact
    pub pdf_path: PathBuf,
    /// Path of the text artifact, or why it could not be written
    pub text: Result<PathBuf, DocumentError>,
}

impl ExportOutcome {
    /// Whether both artifacts were written
    pub fn is_complete(&self) -> bool {
        self.text.is_ok()
    }

    /// Paths of the artifacts that exist on disk
    pub fn written_paths(&self) -> Vec<&Path> {
        let mut paths = vec![self.pdf_path.as_path()];
        if let Ok(text_path) = &self.text {
            paths.push(text_path.as_path());
        }
        paths
    }
}

/// Renders records and writes the artifact pair into an output directory
#[derive(Debug, Clone)]
pub struct FichaExporter {
    output_dir: PathBuf,
    layout: PageLayout,
    fields: FieldList,
}

impl FichaExporter {
    pub fn new(output_dir: impl Into<PathBuf>, layout: PageLayout) -> Self {
        Self {
            output_dir: output_dir.into(),
            layout,
            fields: FieldList::standard(),
        }
    }

    /// Lay out a record without writing anything
    pub fn render(&self, record: &Record) -> RenderedDocument {
        render(record, self.fields, &self.layout)
    }

    /// Target paths (pdf, txt) for a record
    pub fn artifact_paths(&self, record: &Record) -> (PathBuf, PathBuf) {
        let base_name = record.base_name();
        (
            FileManager::generate_output_path(&self.output_dir, &base_name, "pdf"),
            FileManager::generate_output_path(&self.output_dir, &base_name, "txt"),
        )
    }

    /// Render and write both artifacts.
    ///
    /// Returns `Err` only when the PDF could not be produced; a text write
    /// failure is reported through `ExportOutcome::text`.
    pub fn export(&self, record: &Record) -> Result<ExportOutcome, DocumentError> {
        let document = self.render(record);
        let (pdf_path, text_path) = self.artifact_paths(record);

        // The base name comes from user input and must not leave the output directory
        if pdf_path.parent() != Some(self.output_dir.as_path()) {
            return Err(DocumentError::write_failure(
                &pdf_path,
                io::Error::new(io::ErrorKind::InvalidInput, "file name contains a path separator"),
            ));
        }

        let pdf_bytes = document.to_pdf_bytes()?;
        FileManager::ensure_dir(&self.output_dir)
            .map_err(|e| DocumentError::write_failure(&self.output_dir, e))?;
        FileManager::write_atomically(&pdf_path, &pdf_bytes)
            .map_err(|e| DocumentError::write_failure(&pdf_path, e))?;
        info!("Wrote {:?} ({} page(s))", pdf_path, document.page_count());

        let text = match FileManager::write_to_file(&text_path, &document.to_text_bytes()) {
            Ok(()) => {
                info!("Wrote {:?}", text_path);
                Ok(text_path)
            }
            Err(e) => {
                let failure = DocumentError::write_failure(&text_path, e);
                error!("Text artifact not written: {}", failure);
                Err(failure)
            }
        };

        Ok(ExportOutcome { pdf_path, text })
    }
}
