/// Key for one memoized translation: a single flat map entry per
/// (user, destination language, source text). The destination language is
/// stored in its provider-normalized form.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MemoKey {
    pub user_id: String,
    pub dest_lang: String,
    pub text: String,
}

impl MemoKey {
    pub fn new(
        user_id: impl Into<String>,
        dest_lang: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            dest_lang: dest_lang.into(),
            text: text.into(),
        }
    }
}

/// A finished translation together with where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translated {
    pub text: String,
    pub origin: Origin,
}

impl Translated {
    pub fn provider(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Provider,
        }
    }

    pub fn cached(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Cache,
        }
    }

    pub fn degraded(text: impl Into<String>, reason: DegradeReason) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Degraded(reason),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.origin, Origin::Degraded(_))
    }
}

/// Where a translation came from. `Degraded` means the text is the caller's
/// input echoed back because the provider could not produce a translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
    Provider,
    Cache,
    Degraded(DegradeReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DegradeReason {
    ProviderError(String),
    EmptyResult,
}
