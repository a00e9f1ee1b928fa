#![deny(clippy::all)]

use crate::domain::MemoKey;
use async_trait::async_trait;
use shared::Result;

// Ports are the pluggable extension points for the provider and memo backends

/// Port for the external translation provider
#[async_trait]
pub trait Translator: Send + Sync + 'static {
    /// Translate `text` from `src` ("auto" lets the provider detect it) into
    /// `dest`. `dest` must already be provider-normalized.
    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String>;
}

/// Port for the per-user memo of finished translations
pub trait TranslationMemo: Send + Sync + 'static {
    fn get(&self, key: &MemoKey) -> Option<String>;
    fn put(&self, key: MemoKey, translation: String);
}
