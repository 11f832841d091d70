use crate::errors::LoadError;
use crate::models::OpportunitiesDocument;
use crate::state::AppState;
use crate::view::update_view;
use reqwest::Url;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error};

/// Location of the opportunities document relative to the page.
pub const OPPORTUNITIES_PATH: &str = "../data/processed/opportunities.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Http(Url),
}

impl DataSource {
    /// An explicit location: an `http`/`https` URL, a `file` URL or a
    /// filesystem path.
    pub fn parse(location: &str) -> Self {
        match url_source(location) {
            Some(source) => source,
            None => Self::File(PathBuf::from(location)),
        }
    }

    /// Resolves [`OPPORTUNITIES_PATH`] against the page location. A location
    /// ending in `/` is taken as a directory.
    pub fn relative_to_page(page_location: &str) -> Self {
        if let Some(source) = Url::parse(page_location)
            .ok()
            .and_then(|base| base.join(OPPORTUNITIES_PATH).ok())
            .and_then(|url| url_source(url.as_str()))
        {
            return source;
        }

        let page = Path::new(page_location);
        let base = if page_location.ends_with('/') || page_location.ends_with('\\') {
            page
        } else {
            page.parent().unwrap_or(Path::new(""))
        };
        Self::File(base.join(OPPORTUNITIES_PATH))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => write!(f, "{url}"),
        }
    }
}

fn url_source(location: &str) -> Option<DataSource> {
    let url = Url::parse(location).ok()?;
    match url.scheme() {
        "http" | "https" => Some(DataSource::Http(url)),
        "file" => url.to_file_path().ok().map(DataSource::File),
        _ => None,
    }
}

/// One read of `source`, parsed as JSON. HTTP status is not inspected; the
/// body is parsed whatever it is.
pub async fn fetch_document(source: &DataSource) -> Result<OpportunitiesDocument, LoadError> {
    let location = source.to_string();
    let mut status = None;
    let bytes = match source {
        DataSource::File(path) => fs::read(path).await.map_err(|source| LoadError::Read {
            location: location.clone(),
            source,
        })?,
        DataSource::Http(url) => {
            let response = reqwest::get(url.clone()).await.map_err(|source| LoadError::Fetch {
                location: location.clone(),
                source,
            })?;
            status = Some(response.status());
            response
                .bytes()
                .await
                .map_err(|source| LoadError::Fetch {
                    location: location.clone(),
                    source,
                })?
                .to_vec()
        }
    };

    let document = OpportunitiesDocument::from_slice(&bytes)
        .map_err(|source| LoadError::Parse { location: location.clone(), source })?;
    if let Some(status) = status {
        debug!(%status, "fetched {location}");
    }
    Ok(document)
}

/// Page-load data path: fetch, replace the stored document and refresh the
/// view. A failure is logged once and leaves store and page untouched.
pub async fn load_opportunities(state: &AppState, source: &DataSource) {
    let document = match fetch_document(source).await {
        Ok(document) => document,
        Err(err) => {
            error!("error loading data: {err}");
            return;
        }
    };

    let mut page = state.page.lock().await;
    let mut store = state.opportunities.lock().await;
    store.replace(document);
    update_view(&mut page, &store);
    debug!(count = store.combined_count(), "opportunities loaded from {source}");
}
