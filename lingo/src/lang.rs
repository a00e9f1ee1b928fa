// Short language codes and the codes the provider expects for them.
// Codes missing from this table pass through unchanged.
const LANGUAGE_CODES: [(&str, &str); 12] = [
    ("en", "en"),    // English
    ("es", "es"),    // Spanish
    ("fr", "fr"),    // French
    ("de", "de"),    // German
    ("it", "it"),    // Italian
    ("pt", "pt"),    // Portuguese
    ("ru", "ru"),    // Russian
    ("ja", "ja"),    // Japanese
    ("ko", "ko"),    // Korean
    ("zh", "zh-cn"), // Chinese (Simplified)
    ("ar", "ar"),    // Arabic
    ("hi", "hi"),    // Hindi
];

/// Convert a language code to the form the provider accepts.
pub fn normalize(code: &str) -> String {
    let lower = code.to_lowercase();
    LANGUAGE_CODES
        .iter()
        .find(|(short, _)| *short == lower)
        .map(|(_, provider)| (*provider).to_string())
        .unwrap_or(lower)
}
