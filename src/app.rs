use crate::config::Config;
use crate::loader::load_opportunities;
use crate::models::default_tabs;
use crate::state::AppState;
use crate::tabs::{click, tab_button};
use crate::ui::render_page;
use tracing::{info, warn};

/// Page load: build the dashboard, load the data once, apply the configured
/// tab selection and render the result.
pub async fn run(config: &Config) -> String {
    let state = AppState::dashboard(&default_tabs());
    let source = config.data_source();

    info!("loading opportunities from {source}");
    load_opportunities(&state, &source).await;

    let mut page = state.page.lock().await;
    if let Some(tab) = &config.initial_tab {
        match tab_button(&page, tab) {
            Some(button) => {
                click(&mut page, button);
            }
            None => warn!("no tab button for {tab:?}"),
        }
    }

    render_page(&page)
}
