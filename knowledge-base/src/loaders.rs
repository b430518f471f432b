//! Plain text extraction for the supported document formats.
//!
//! - `.pdf`         → `pdf-extract`
//! - `.docx`        → `word/document.xml` inside the zip container, one line per paragraph
//! - `.txt`, `.md`  → read verbatim

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use tracing::debug;

use crate::errors::knowledge_base_error::KnowledgeBaseError;

/// Supported document kinds, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Detects the kind from the (case-insensitive) extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" | "md" | "markdown" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// Extracts the text of a document at `path`.
///
/// # Errors
/// - [`KnowledgeBaseError::UnsupportedFormat`] for unknown extensions
/// - [`KnowledgeBaseError::Pdf`] / [`KnowledgeBaseError::Docx`] when extraction fails
/// - [`KnowledgeBaseError::Io`] for filesystem errors
pub fn extract_text(path: &Path) -> Result<String, KnowledgeBaseError> {
    let kind = DocumentKind::from_path(path)
        .ok_or_else(|| KnowledgeBaseError::UnsupportedFormat(path.to_path_buf()))?;

    debug!(path = %path.display(), ?kind, "extracting document text");

    match kind {
        DocumentKind::Pdf => extract_pdf(path),
        DocumentKind::Docx => extract_docx(path),
        DocumentKind::PlainText => Ok(std::fs::read_to_string(path)?),
    }
}

fn extract_pdf(path: &Path) -> Result<String, KnowledgeBaseError> {
    let pdf_err = |reason: String| KnowledgeBaseError::Pdf {
        path: path.to_path_buf(),
        reason,
    };

    // pdf-extract panics on some malformed files.
    match std::panic::catch_unwind(|| pdf_extract::extract_text(path)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(pdf_err(e.to_string())),
        Err(_) => Err(pdf_err("extractor panicked".to_string())),
    }
}

fn extract_docx(path: &Path) -> Result<String, KnowledgeBaseError> {
    let docx_err = |reason: String| KnowledgeBaseError::Docx {
        path: PathBuf::from(path),
        reason,
    };

    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| docx_err(e.to_string()))?;
    let mut entry = archive
        .by_name("word/document.xml")
        .map_err(|e| docx_err(e.to_string()))?;

    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;

    Ok(docx_paragraphs(&xml).join("\n"))
}

/// Text runs, tabs, breaks and paragraph ends in WordprocessingML.
static DOCX_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:t(?:\s[^>]*)?/>|<w:tab/>|<w:br(?:\s[^>]*)?/>|</w:p>")
        .expect("static docx token regex")
});

/// Paragraph texts of a `word/document.xml` body, in document order.
pub(crate) fn docx_paragraphs(xml: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for caps in DOCX_TOKEN.captures_iter(xml) {
        let token = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        if let Some(text) = caps.get(1) {
            current.push_str(&unescape_xml(text.as_str()));
        } else if token == "</w:p>" {
            paragraphs.push(std::mem::take(&mut current));
        } else if token == "<w:tab/>" {
            current.push('\t');
        } else if token.starts_with("<w:br") {
            current.push('\n');
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

/// Named and numeric (`&#NNN;`, `&#xHH;`) XML character references.
static XML_ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#x([0-9a-fA-F]+)|#([0-9]+)|(lt|gt|quot|apos|amp));")
        .expect("static xml entity regex")
});

fn unescape_xml(s: &str) -> String {
    XML_ENTITY
        .replace_all(s, |caps: &regex::Captures<'_>| {
            let decoded = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = caps.get(2) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match caps.get(3).map(|m| m.as_str()) {
                    Some("lt") => Some('<'),
                    Some("gt") => Some('>'),
                    Some("quot") => Some('"'),
                    Some("apos") => Some('\''),
                    Some("amp") => Some('&'),
                    _ => None,
                }
            };
            match decoded {
                Some(c) => c.to_string(),
                // Out-of-range code point: keep the reference as written.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(
            DocumentKind::from_path(Path::new("a/Panduan.PDF")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("b.docx")),
            Some(DocumentKind::Docx)
        );
        assert_eq!(
            DocumentKind::from_path(Path::new("c.md")),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(DocumentKind::from_path(Path::new("d.xlsx")), None);
        assert_eq!(DocumentKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn docx_runs_are_joined_per_paragraph() {
        let xml = r#"<w:document><w:body>
            <w:p><w:r><w:t>Asam </w:t></w:r><w:r><w:t xml:space="preserve">folat &amp; zat besi</w:t></w:r></w:p>
            <w:p><w:r><w:t>Kolom</w:t><w:tab/><w:t>dua</w:t></w:r></w:p>
            <w:p></w:p>
            <w:p><w:r><w:t>Caf&#233; &#x2013; 2&#8211;3 kali</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let paras = docx_paragraphs(xml);
        assert_eq!(
            paras,
            vec![
                "Asam folat & zat besi",
                "Kolom\tdua",
                "",
                "Caf\u{e9} \u{2013} 2\u{2013}3 kali"
            ]
        );
    }

    #[test]
    fn entities_decode_once() {
        assert_eq!(unescape_xml("&amp;lt; &#60; &#x3C; &#1114112;"), "&lt; < < &#1114112;");
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = extract_text(Path::new("laporan.xlsx")).unwrap_err();
        assert!(matches!(err, KnowledgeBaseError::UnsupportedFormat(_)));
    }
}
