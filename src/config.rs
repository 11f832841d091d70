use crate::loader::DataSource;
use std::{env, path::PathBuf};

pub const DEFAULT_PAGE_LOCATION: &str = "dashboard/index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Location the page is served from; the data path is resolved against it.
    pub page_location: String,
    pub data_location: Option<String>,
    pub output_path: Option<PathBuf>,
    pub initial_tab: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            page_location: non_empty("DASHBOARD_PAGE")
                .unwrap_or_else(|| DEFAULT_PAGE_LOCATION.to_string()),
            data_location: non_empty("DASHBOARD_DATA"),
            output_path: non_empty("DASHBOARD_OUTPUT").map(PathBuf::from),
            initial_tab: non_empty("DASHBOARD_TAB"),
        }
    }

    pub fn data_source(&self) -> DataSource {
        match &self.data_location {
            Some(location) => DataSource::parse(location),
            None => DataSource::relative_to_page(&self.page_location),
        }
    }
}
