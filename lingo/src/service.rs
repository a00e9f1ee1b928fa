use crate::domain::{DegradeReason, MemoKey, Translated};
use crate::lang;
use crate::ports::{TranslationMemo, Translator};
use shared::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Application service that orchestrates translation requests
/// This is the main entry point for all translation operations: it applies
/// language normalization, consults the memo before the provider, and
/// degrades to the caller's input when the provider cannot deliver.
#[derive(Clone)]
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    memo: Arc<dyn TranslationMemo>,
    pacing: Duration,
}

impl TranslationService {
    pub fn new(
        translator: Arc<dyn Translator>,
        memo: Arc<dyn TranslationMemo>,
        pacing: Duration,
    ) -> Self {
        Self {
            translator,
            memo,
            pacing,
        }
    }

    /// Translate a single text.
    ///
    /// Anonymous requests (no `user_id`) never read or write the memo.
    pub async fn translate(
        &self,
        text: &str,
        dest: &str,
        src: &str,
        user_id: Option<&str>,
    ) -> Translated {
        let dest = lang::normalize(dest);

        if let Some(hit) = self.memo_lookup(text, &dest, user_id) {
            return hit;
        }

        self.translate_uncached(text, src, &dest, user_id).await
    }

    /// Translate a batch of texts, preserving input order.
    ///
    /// Each item is translated independently: a provider failure on one item
    /// degrades only that item. Provider invocations are paced to respect the
    /// provider's rate limits; memo hits are not.
    pub async fn translate_bulk(
        &self,
        texts: &[String],
        dest: &str,
        src: &str,
        user_id: Option<&str>,
    ) -> Vec<Translated> {
        let dest = lang::normalize(dest);
        let mut results = Vec::with_capacity(texts.len());

        for text in texts {
            if let Some(hit) = self.memo_lookup(text, &dest, user_id) {
                results.push(hit);
                continue;
            }

            results.push(self.translate_uncached(text, src, &dest, user_id).await);

            if !self.pacing.is_zero() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        results
    }

    fn memo_lookup(&self, text: &str, dest: &str, user_id: Option<&str>) -> Option<Translated> {
        let user = user_id?;
        let key = MemoKey::new(user, dest, text);
        let hit = self.memo.get(&key)?;
        debug!("memo hit for user={} dest={}", user, dest);
        Some(Translated::cached(hit))
    }

    /// Call the provider and memoize the result for identified users.
    ///
    /// Provider errors never propagate: the caller always gets text back,
    /// marked `Degraded` when it is just the input echoed.
    async fn translate_uncached(
        &self,
        text: &str,
        src: &str,
        dest: &str,
        user_id: Option<&str>,
    ) -> Translated {
        debug!("translating from {} to {}", src, dest);

        match self.translator.translate(text, src, dest).await {
            Ok(translation) if translation.is_empty() => {
                warn!("provider returned an empty translation, echoing input");
                Translated::degraded(text, DegradeReason::EmptyResult)
            }
            Ok(translation) => {
                if let Some(user) = user_id {
                    self.memo
                        .put(MemoKey::new(user, dest, text), translation.clone());
                }
                Translated::provider(translation)
            }
            Err(e) => {
                warn!("translation failed, echoing input: {}", e);
                Translated::degraded(text, degrade_reason(e))
            }
        }
    }
}

fn degrade_reason(err: Error) -> DegradeReason {
    match err {
        Error::EmptyTranslation => DegradeReason::EmptyResult,
        other => DegradeReason::ProviderError(other.to_string()),
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("pacing", &self.pacing)
            .finish()
    }
}
