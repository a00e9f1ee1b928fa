use crate::models::{BulkTranslateRequest, TranslateRequest};

#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingTextOrDest,
    MissingTextsOrDest,
    NoValidTexts,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingTextOrDest => {
                write!(f, "Text and destination language are required")
            }
            ValidationError::MissingTextsOrDest => {
                write!(f, "Texts and destination language are required")
            }
            ValidationError::NoValidTexts => {
                write!(f, "No valid texts to translate")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_translate(req: &TranslateRequest) -> Result<(), ValidationError> {
    if req.text.is_empty() || req.dest.is_empty() {
        return Err(ValidationError::MissingTextOrDest);
    }
    Ok(())
}

/// Validate a bulk request and return its usable texts, dropping null and
/// empty entries.
pub fn validate_bulk(req: &BulkTranslateRequest) -> Result<Vec<String>, ValidationError> {
    if req.texts.is_empty() || req.dest.is_empty() {
        return Err(ValidationError::MissingTextsOrDest);
    }

    let valid: Vec<String> = req
        .texts
        .iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .cloned()
        .collect();

    if valid.is_empty() {
        return Err(ValidationError::NoValidTexts);
    }

    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_request(text: &str, dest: &str) -> TranslateRequest {
        TranslateRequest {
            text: text.to_string(),
            src: "auto".to_string(),
            dest: dest.to_string(),
            user_id: None,
        }
    }

    fn bulk_request(texts: Vec<Option<&str>>, dest: &str) -> BulkTranslateRequest {
        BulkTranslateRequest {
            texts: texts
                .into_iter()
                .map(|t| t.map(|s| s.to_string()))
                .collect(),
            src: "auto".to_string(),
            dest: dest.to_string(),
            user_id: None,
        }
    }

    #[test]
    fn test_validate_translate_accepts_complete_request() {
        assert!(validate_translate(&translate_request("hello", "es")).is_ok());
    }

    #[test]
    fn test_validate_translate_rejects_empty_text() {
        let err = validate_translate(&translate_request("", "es")).unwrap_err();
        assert_eq!(err, ValidationError::MissingTextOrDest);
    }

    #[test]
    fn test_validate_translate_rejects_empty_dest() {
        let err = validate_translate(&translate_request("hello", "")).unwrap_err();
        assert_eq!(err, ValidationError::MissingTextOrDest);
    }

    #[test]
    fn test_validate_bulk_drops_null_and_empty_entries() {
        let texts = validate_bulk(&bulk_request(
            vec![Some("one"), None, Some(""), Some("two")],
            "es",
        ))
        .unwrap();
        assert_eq!(texts, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_validate_bulk_rejects_empty_list() {
        let err = validate_bulk(&bulk_request(vec![], "es")).unwrap_err();
        assert_eq!(err, ValidationError::MissingTextsOrDest);
    }

    #[test]
    fn test_validate_bulk_rejects_when_nothing_valid_remains() {
        let err = validate_bulk(&bulk_request(vec![Some(""), None], "es")).unwrap_err();
        assert_eq!(err, ValidationError::NoValidTexts);
    }
}
