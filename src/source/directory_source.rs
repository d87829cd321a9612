use crate::source::SourceProvider;
use crate::{Result, SgfPreviewError};
use glob::{glob, Pattern};
use std::path::{Component, Path, PathBuf};

const RECORD_EXTENSION: &str = "sgf";

/// `*.sgf` files of a single directory (not recursive)
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Only bare file names are accepted as ids
    fn resolve(&self, id: &str) -> Result<PathBuf> {
        let mut components = Path::new(id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.dir.join(id)),
            _ => Err(SgfPreviewError::InvalidSource(id.to_string())),
        }
    }
}

impl SourceProvider for DirectorySource {
    fn list_available(&self) -> Result<Vec<String>> {
        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(&self.dir.to_string_lossy()),
            RECORD_EXTENSION
        );

        let mut ids: Vec<String> = glob(&pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    log::warn!("Unreadable entry in {}: {}", self.dir.display(), e);
                    None
                }
            })
            .filter(|path| path.is_file())
            .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
            .collect();
        ids.sort();

        log::debug!("Found {} records in {}", ids.len(), self.dir.display());
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<String> {
        let path = self.resolve(id)?;
        std::fs::read_to_string(&path).map_err(|e| {
            log::error!("Failed to read {}: {}", path.display(), e);
            SgfPreviewError::Io(e)
        })
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
