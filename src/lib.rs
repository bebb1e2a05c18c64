pub mod analytics;
pub mod api;
pub mod app;
pub mod charts;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod history;
pub mod models;
pub mod pager;
pub mod search;
pub mod state;
pub mod ui;
pub mod window;

pub use api::ApiClient;
pub use app::router;
pub use state::AppState;
