//! Locating the source workbook.
use crate::config::WORKBOOK_CANDIDATES;
use crate::error::{Result, SheetDbError};
use crate::report::Reporter;
use std::path::{Path, PathBuf};

/// Finds the workbook to import.
///
/// An explicit path wins when it exists, or when it exists once the whitespace around its
/// file name is removed. Without one, [`default_candidates`] are probed in order.
pub fn resolve(explicit: Option<&Path>, reporter: &dyn Reporter) -> Result<PathBuf> {
    resolve_with(explicit, &default_candidates(), reporter)
}

/// [`resolve`] with a caller-provided fallback list.
pub fn resolve_with(
    explicit: Option<&Path>,
    candidates: &[PathBuf],
    reporter: &dyn Reporter,
) -> Result<PathBuf> {
    let mut searched = Vec::new();

    if let Some(path) = explicit {
        let path = expand_home(path);
        if path.exists() {
            return Ok(path);
        }
        searched.push(path.clone());

        if let Some(trimmed) = trim_file_name(&path) {
            if trimmed.exists() {
                reporter.debug(&format!(
                    "Using '{}' for requested '{}'",
                    trimmed.display(),
                    path.display()
                ));
                return Ok(trimmed);
            }
            searched.push(trimmed);
        }
    }

    for candidate in candidates {
        if candidate.exists() {
            return Ok(candidate.to_owned());
        }
        searched.push(candidate.to_owned());
    }

    Err(SheetDbError::WorkbookNotFound { searched })
}

/// Candidate workbook locations inside the user's Downloads directory.
pub fn default_candidates() -> Vec<PathBuf> {
    match downloads_dir() {
        Some(downloads) => WORKBOOK_CANDIDATES
            .iter()
            .map(|name| downloads.join(name))
            .collect(),
        None => Vec::new(),
    }
}

fn downloads_dir() -> Option<PathBuf> {
    dirs::download_dir().or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
}

/// Replaces a leading `~` component with the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_owned(),
        },
        Err(_) => path.to_owned(),
    }
}

/// Same path with surrounding whitespace removed from the file name, if that changes anything.
fn trim_file_name(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == name {
        None
    } else {
        Some(path.with_file_name(trimmed))
    }
}
