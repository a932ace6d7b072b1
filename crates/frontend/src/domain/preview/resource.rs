use web_sys::{Blob, Url};

/// Preview classification for an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Embeddable in an iframe via an object URL
    Pdf,
    /// No in-browser rendering; show an advisory instead
    WordDocument,
    Unsupported,
}

impl PreviewKind {
    /// Classify by declared content type first, then by filename suffix.
    pub fn detect(name: &str, content_type: &str) -> Self {
        if content_type == "application/pdf" {
            return PreviewKind::Pdf;
        }
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".doc") || lower.ends_with(".docx") {
            return PreviewKind::WordDocument;
        }
        PreviewKind::Unsupported
    }
}

/// A revocable object URL scoped to one selected file.
///
/// The browser keeps the underlying blob alive for as long as the URL
/// exists, so the URL must be revoked exactly once, when the selection
/// changes or the preview unmounts. Dropping the resource revokes it.
pub struct PreviewResource {
    url: String,
}

impl PreviewResource {
    pub fn create(blob: &Blob) -> Result<Self, String> {
        let url = Url::create_object_url_with_blob(blob)
            .map_err(|e| format!("Failed to create object URL: {e:?}"))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewResource {
    fn drop(&mut self) {
        Url::revoke_object_url(&self.url).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_by_content_type() {
        assert_eq!(
            PreviewKind::detect("resume.pdf", "application/pdf"),
            PreviewKind::Pdf
        );
        // Content type wins over the suffix
        assert_eq!(
            PreviewKind::detect("resume.docx", "application/pdf"),
            PreviewKind::Pdf
        );
    }

    #[test]
    fn test_word_by_suffix() {
        assert_eq!(PreviewKind::detect("cv.doc", ""), PreviewKind::WordDocument);
        assert_eq!(
            PreviewKind::detect("CV.DOCX", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            PreviewKind::WordDocument
        );
    }

    #[test]
    fn test_everything_else_unsupported() {
        assert_eq!(PreviewKind::detect("notes.txt", "text/plain"), PreviewKind::Unsupported);
        assert_eq!(PreviewKind::detect("photo.png", "image/png"), PreviewKind::Unsupported);
    }
}
