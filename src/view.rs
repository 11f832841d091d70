use crate::page::{LAST_UPDATE_ID, OPP_COUNT_ID, Page};
use crate::state::OpportunityStore;
use chrono::{DateTime, Local, TimeZone};

/// Fixed en-US style rendering (`10/16/2026, 3:04:05 PM`) in local time;
/// the system locale is not consulted.
pub const LAST_UPDATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn update_view(page: &mut Page, store: &OpportunityStore) {
    update_view_at(Local::now(), page, store)
}

/// Writes the update time and the opportunity count into their targets.
pub fn update_view_at<Tz>(now: DateTime<Tz>, page: &mut Page, store: &OpportunityStore)
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    page.set_text(LAST_UPDATE_ID, now.format(LAST_UPDATE_FORMAT).to_string());
    page.set_text(OPP_COUNT_ID, store.combined_count().to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OpportunitiesDocument, default_tabs};
    use chrono::Utc;
    use serde_json::json;

    fn store_with(value: serde_json::Value) -> OpportunityStore {
        let mut store = OpportunityStore::default();
        store.replace(OpportunitiesDocument(value));
        store
    }

    fn rendered_count(value: serde_json::Value) -> String {
        let mut page = Page::dashboard(&default_tabs());
        update_view(&mut page, &store_with(value));
        page.text_of(OPP_COUNT_ID).unwrap_or_default().to_string()
    }

    #[test]
    fn count_follows_combined_length() {
        assert_eq!(rendered_count(json!({ "combined": [1, 2, 3] })), "3");
        assert_eq!(rendered_count(json!({})), "0");
        assert_eq!(rendered_count(json!({ "combined": [] })), "0");
    }

    #[test]
    fn empty_store_renders_zero() {
        let mut page = Page::dashboard(&default_tabs());
        update_view(&mut page, &OpportunityStore::default());
        assert_eq!(page.text_of(OPP_COUNT_ID), Some("0"));
        assert!(!page.text_of(LAST_UPDATE_ID).unwrap_or_default().is_empty());
    }

    #[test]
    fn last_update_uses_the_given_moment() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 15, 4, 5).unwrap();
        let mut page = Page::dashboard(&default_tabs());
        let store = store_with(json!({ "timestamp": "2001-01-01T00:00:00", "combined": [1] }));

        update_view_at(now, &mut page, &store);

        assert_eq!(page.text_of(LAST_UPDATE_ID), Some("10/16/2026, 3:04:05 PM"));
        assert_eq!(page.text_of(OPP_COUNT_ID), Some("1"));
    }

    #[test]
    fn missing_targets_are_skipped() {
        let mut page = Page::new();
        update_view(&mut page, &store_with(json!({ "combined": [1] })));
        assert!(page.text_of(OPP_COUNT_ID).is_none());
    }
}
