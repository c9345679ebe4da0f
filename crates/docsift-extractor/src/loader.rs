//! Discovery and loading of PDF files

use crate::config::FolderPolicy;
use crate::error::ExtractorError;
use crate::types::{FolderLoad, LoadFailure};
use docsift_domain::traits::PdfBackend;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Recognized PDF suffix (case-sensitive)
pub const PDF_EXTENSION: &str = ".pdf";

/// Whether `path` ends with the PDF suffix
pub fn has_pdf_extension(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().ends_with(PDF_EXTENSION)
}

/// List the names of directory entries ending in `.pdf`
///
/// No recursion into subdirectories. Names are returned sorted.
pub fn get_pdf_files(dir: &Path) -> Result<Vec<String>, ExtractorError> {
    if !dir.is_dir() {
        return Err(ExtractorError::NotADirectory(dir.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(PDF_EXTENSION) => names.push(name),
            Ok(_) => {}
            Err(raw) => debug!("Skipping non UTF-8 entry {:?}", raw),
        }
    }
    names.sort();

    Ok(names)
}

/// Open a single PDF
///
/// A path without the `.pdf` suffix is rejected as `UnsupportedFile` before
/// the backend is consulted; a decode failure is `Extraction`.
pub fn load_file<P>(backend: &P, path: &Path) -> Result<P::Document, ExtractorError>
where
    P: PdfBackend,
    P::Error: Display,
{
    if !has_pdf_extension(path) {
        return Err(ExtractorError::UnsupportedFile(path.to_path_buf()));
    }

    backend
        .open(path)
        .map_err(|e| ExtractorError::Extraction(format!("{}: {}", path.display(), e)))
}

/// Open every PDF in a folder
pub fn load_folder<P>(
    backend: &P,
    dir: &Path,
    policy: FolderPolicy,
) -> Result<FolderLoad<P::Document>, ExtractorError>
where
    P: PdfBackend,
    P::Error: Display,
{
    let names = get_pdf_files(dir)?;
    info!("Loading {} PDF files from {}", names.len(), dir.display());

    let mut load = FolderLoad::default();
    for name in names {
        match load_file(backend, &dir.join(&name)) {
            Ok(document) => {
                load.documents.insert(name, document);
            }
            Err(e) if policy == FolderPolicy::SkipAndReport => {
                warn!("Skipping {}: {}", name, e);
                load.failures.push(LoadFailure {
                    file_name: name,
                    kind: e.kind().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(load)
}
