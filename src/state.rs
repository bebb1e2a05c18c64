use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::api::ApiClient;
use crate::charts::ChartSpec;
use crate::models::GameEntry;
use crate::pager::PageState;
use crate::window::WindowNavigator;

/// View state for the current browsing session. Held in memory only;
/// nothing survives a restart.
#[derive(Default)]
pub struct Session {
    /// Last visited page, keyed per list view. Reset when the page size
    /// changes.
    pub pages: HashMap<String, PageState>,
    /// Date window per game, anchored to the day the game was first opened
    /// in this session.
    pub windows: HashMap<u64, WindowNavigator>,
    pub charts: Vec<ChartSpec>,
}

#[derive(Clone)]
pub struct AppState {
    pub client: ApiClient,
    pub session: Arc<Mutex<Session>>,
    /// Search candidates, fetched on first use and reused for the rest of
    /// the session.
    pub search_index: Arc<OnceCell<Vec<GameEntry>>>,
}

impl AppState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            session: Arc::new(Mutex::new(Session::default())),
            search_index: Arc::new(OnceCell::new()),
        }
    }
}
