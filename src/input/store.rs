//! On-disk profile store
//!
//! Layout: `<root>/<kind>/<kind>_<id>.json`, e.g. `processed_texts/resume/resume_42.json`.

use crate::error::{Result, ScorerError};
use crate::input::document::{DocumentKind, StoredDocument};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn kind_dir(&self, kind: DocumentKind) -> PathBuf {
        self.root.join(kind.as_str())
    }

    pub fn path_for(&self, kind: DocumentKind, id: &str) -> PathBuf {
        self.kind_dir(kind).join(format!("{}_{}.json", kind, id))
    }

    /// Id of the most recently modified document of `kind`.
    pub async fn latest_id(&self, kind: DocumentKind) -> Result<String> {
        let dir = self.kind_dir(kind);
        let mut entries = tokio::fs::read_dir(&dir).await.map_err(|e| {
            ScorerError::ProfileNotFound(format!("No {} files found in {}: {}", kind, dir.display(), e))
        })?;

        let prefix = format!("{}_", kind);
        let mut latest: Option<(SystemTime, String)> = None;

        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name().to_string_lossy().to_string();
            let Some(id) = file_name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".json"))
            else {
                continue;
            };

            let modified = entry.metadata().await?.modified()?;
            if latest.as_ref().map_or(true, |(time, _)| modified > *time) {
                latest = Some((modified, id.to_string()));
            }
        }

        latest
            .map(|(_, id)| id)
            .ok_or_else(|| ScorerError::ProfileNotFound(format!("No {} files found", kind)))
    }

    /// Load the document `id` of `kind`, or the latest one when `id` is `None`.
    ///
    /// Returns the id the document was stored under alongside it; the document's own
    /// `id` field may be empty.
    pub async fn load(&self, kind: DocumentKind, id: Option<&str>) -> Result<(String, StoredDocument)> {
        let id = match id {
            Some(id) => id.to_string(),
            None => {
                let latest = self.latest_id(kind).await?;
                info!("Using most recent {} document: {}", kind, latest);
                latest
            }
        };

        let document = load_document(&self.path_for(kind, &id)).await?;
        Ok((id, document))
    }

    /// Persist a document under its id, creating directories as needed.
    pub async fn save(&self, kind: DocumentKind, document: &StoredDocument) -> Result<PathBuf> {
        if document.id.trim().is_empty() {
            return Err(ScorerError::InvalidInput("Document id must not be empty".to_string()));
        }

        let path = self.path_for(kind, &document.id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(document)?;
        tokio::fs::write(&path, content).await?;
        Ok(path)
    }
}

/// Read and parse a stored document from an explicit path.
pub async fn load_document(path: &Path) -> Result<StoredDocument> {
    debug!("Loading document: {}", path.display());

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScorerError::ProfileNotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&content)?)
}
