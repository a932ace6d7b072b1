//! Draft state rules for the upload form
//!
//! The form itself only wires signals to these functions; everything that
//! can be checked without a browser lives here.

/// File types accepted by the résumé and JD file inputs
pub const RESUME_ACCEPT: &str = ".pdf,.doc,.docx";

/// Job-description source for a draft submission.
///
/// A file upload and pasted text are mutually exclusive by construction; the
/// form disables the alternate input as soon as one side has content, so the
/// "both present" state cannot arise.
#[derive(Clone, Default)]
pub enum JdSource {
    #[default]
    None,
    File(web_sys::File),
    Text(String),
}

impl JdSource {
    pub fn has_content(&self) -> bool {
        match self {
            JdSource::None => false,
            JdSource::File(_) => true,
            JdSource::Text(text) => !text.trim().is_empty(),
        }
    }
}

/// Resolve the JD source from the two input surfaces.
///
/// A selected file wins; pasted text counts only when non-blank.
pub fn jd_source(file: Option<web_sys::File>, text: &str) -> JdSource {
    if let Some(file) = file {
        JdSource::File(file)
    } else if !text.trim().is_empty() {
        JdSource::Text(text.to_string())
    } else {
        JdSource::None
    }
}

/// Names of required fields still missing from the draft, in form order.
///
/// Submission is allowed only when this is empty; nothing goes over the
/// network otherwise.
pub fn missing_fields(
    has_resume: bool,
    has_jd: bool,
    category: &str,
    score: &str,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !has_resume {
        missing.push("resume");
    }
    if !has_jd {
        missing.push("job description");
    }
    if category.is_empty() {
        missing.push("category");
    }
    if score.is_empty() {
        missing.push("score");
    }
    missing
}

/// Keystroke guard for the score field.
///
/// The empty string is always accepted so the field can be cleared while
/// editing; anything else must parse to a number within [0, 100].
pub fn accept_score_input(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    matches!(value.parse::<f64>(), Ok(n) if (0.0..=100.0).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accepts_empty_and_in_range() {
        assert!(accept_score_input(""));
        assert!(accept_score_input("0"));
        assert!(accept_score_input("100"));
        assert!(accept_score_input("67.5"));
    }

    #[test]
    fn test_score_rejects_out_of_range_and_garbage() {
        assert!(!accept_score_input("-1"));
        assert!(!accept_score_input("101"));
        assert!(!accept_score_input("1e3"));
        assert!(!accept_score_input("abc"));
        assert!(!accept_score_input(" "));
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        assert_eq!(
            missing_fields(false, false, "", ""),
            vec!["resume", "job description", "category", "score"]
        );
        assert_eq!(missing_fields(true, false, "solid", "80"), vec!["job description"]);
        assert!(missing_fields(true, true, "solid", "80").is_empty());
    }

    #[test]
    fn test_jd_source_from_text() {
        assert!(matches!(jd_source(None, "some role"), JdSource::Text(_)));
        assert!(matches!(jd_source(None, "   "), JdSource::None));
        assert!(matches!(jd_source(None, ""), JdSource::None));
    }

    #[test]
    fn test_blank_text_has_no_content() {
        assert!(!JdSource::Text("  \n".to_string()).has_content());
        assert!(JdSource::Text("rust engineer".to_string()).has_content());
        assert!(!JdSource::None.has_content());
    }
}
