pub mod app;
pub mod config;
pub mod errors;
pub mod loader;
pub mod models;
pub mod page;
pub mod state;
pub mod tabs;
pub mod ui;
pub mod view;

pub use app::run;
pub use config::Config;
pub use loader::{DataSource, load_opportunities};
pub use state::{AppState, OpportunityStore};
