use std::fs;
use std::path::PathBuf;
use tracert_model::NodesResponse;
use tracert_ui::{decode_nodes, NodeSource, SourceError};

/// Serves a saved `/api/nodes` body from disk.
pub struct FileNodeSource {
    path: PathBuf,
}

impl FileNodeSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl NodeSource for FileNodeSource {
    async fn fetch_nodes(&self) -> Result<NodesResponse, SourceError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|err| SourceError::Io(format!("{:?}: {}", self.path, err)))?;
        decode_nodes(&text)
    }
}
