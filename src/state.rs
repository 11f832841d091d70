use crate::models::{OpportunitiesDocument, TabSpec};
use crate::page::Page;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Latest successfully loaded opportunities, replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct OpportunityStore {
    current: Option<OpportunitiesDocument>,
}

impl OpportunityStore {
    pub fn replace(&mut self, document: OpportunitiesDocument) {
        self.current = Some(document);
    }

    pub fn current(&self) -> Option<&OpportunitiesDocument> {
        self.current.as_ref()
    }

    pub fn combined_count(&self) -> usize {
        self.current
            .as_ref()
            .map_or(0, OpportunitiesDocument::combined_count)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Mutex<Page>>,
    pub opportunities: Arc<Mutex<OpportunityStore>>,
}

impl AppState {
    pub fn new(page: Page) -> Self {
        Self {
            page: Arc::new(Mutex::new(page)),
            opportunities: Arc::new(Mutex::new(OpportunityStore::default())),
        }
    }

    pub fn dashboard(tabs: &[TabSpec]) -> Self {
        Self::new(Page::dashboard(tabs))
    }
}
