use lingo::service::TranslationService;
use std::sync::Arc;

/// Server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub translation: Arc<TranslationService>,
}

impl AppState {
    pub fn new(translation: Arc<TranslationService>) -> Self {
        Self { translation }
    }
}
