//! Application state shared with every request handler as `web::Data<AppState>`.

use crate::config::Config;
use crate::store::Store;
use ab_glyph::FontArc;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Store,
    /// Font for exported images. `None` exports the form grid without text.
    pub font: Option<FontArc>,
}

impl AppState {
    pub fn new(config: Config, font: Option<FontArc>) -> Self {
        Self {
            store: Store::new(config.database.clone()),
            config: Arc::new(config),
            font,
        }
    }
}
