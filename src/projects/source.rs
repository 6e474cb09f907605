//! Loading the project data document.
//!
//! The source is fetched once at startup on a background task; the result
//! comes back to the event loop as an [`AppEvent`]. There is no retry and no
//! timeout beyond the HTTP client's own.

use crate::app::event::AppEvent;
use crate::projects::project::{Project, ProjectDocument};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("invalid project data: {0}")]
    Parse(#[from] serde_json::Error),
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Parse a data document. A document without `projects` yields an empty list.
pub fn parse_document(body: &str) -> Result<Vec<Project>, SourceError> {
    let doc: ProjectDocument = serde_json::from_str(body)?;
    Ok(doc.projects)
}

/// Fetch and parse the document at `source`: an `http(s)://` URL or a path.
pub async fn load(source: &str) -> Result<Vec<Project>, SourceError> {
    let body = if is_remote(source) {
        fetch_remote(source).await?
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| SourceError::Io {
                path: source.to_string(),
                source: e,
            })?
    };
    debug!(bytes = body.len(), "project data received");
    parse_document(&body)
}

async fn fetch_remote(url: &str) -> Result<String, SourceError> {
    let http_err = |e: reqwest::Error| SourceError::Http {
        url: url.to_string(),
        source: e,
    };
    let response = reqwest::get(url).await.map_err(http_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    response.text().await.map_err(http_err)
}

/// Spawn the one-shot load task. The outcome is delivered as
/// [`AppEvent::ProjectsLoaded`] or [`AppEvent::ProjectsFailed`].
pub fn spawn_load(source: String, event_tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        info!(%source, "loading project data");
        let event = match load(&source).await {
            Ok(projects) => AppEvent::ProjectsLoaded(projects),
            Err(e) => AppEvent::ProjectsFailed(e.to_string()),
        };
        let _ = event_tx.send(event);
    });
}
