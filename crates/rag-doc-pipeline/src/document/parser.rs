use crate::document::DocumentLoader;
use crate::utils::error::DocumentLoadError;
use lopdf::{Dictionary, Document as PdfDocument, Object, ObjectId};
use std::path::Path;
use tracing::{debug, warn};

/// One page of extracted text with its metadata.
#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-based page number.
    pub page_number: u32,
    /// Extracted text content.
    pub text: String,
    /// Embedded images discovered on this page (0 when extraction is off).
    pub image_count: usize,
}

#[derive(Debug, Clone)]
pub struct ParsedDocument {
    pub pages: Vec<PageText>,
    pub metadata: DocumentMetadata,
}

#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    pub page_count: usize,
    pub char_count: usize,
}

pub struct PdfParser;

impl PdfParser {
    /// Parse a PDF from a path: validate, load bytes, extract per-page text.
    pub fn parse(path: &Path, extract_images: bool) -> Result<ParsedDocument, DocumentLoadError> {
        let bytes = DocumentLoader::load_file(path)?;
        Self::parse_bytes(&bytes, extract_images)
    }

    /// Parse a PDF from raw bytes using lopdf.
    pub fn parse_bytes(
        bytes: &[u8],
        extract_images: bool,
    ) -> Result<ParsedDocument, DocumentLoadError> {
        let doc = PdfDocument::load_mem(bytes)
            .map_err(|e| DocumentLoadError::InvalidPdf(e.to_string()))?;

        let page_map = doc.get_pages();
        let page_count = page_map.len();

        let mut pages = Vec::with_capacity(page_count);
        let mut char_count = 0usize;

        for (page_num, page_id) in page_map.iter() {
            let text = match doc.extract_text(&[*page_num]) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to extract text from page {}: {}", page_num, e);
                    continue;
                }
            };

            // Image discovery is best-effort: a broken resource dictionary
            // must never abort text extraction.
            let image_count = if extract_images {
                match Self::count_page_images(&doc, *page_id) {
                    Ok(count) => count,
                    Err(e) => {
                        warn!("Failed to inspect images on page {}: {}", page_num, e);
                        0
                    }
                }
            } else {
                0
            };

            char_count += text.len();
            pages.push(PageText {
                page_number: *page_num,
                text,
                image_count,
            });
        }

        debug!(
            "Parsed PDF: {} pages, {} characters",
            page_count, char_count
        );

        Ok(ParsedDocument {
            pages,
            metadata: DocumentMetadata {
                page_count,
                char_count,
            },
        })
    }

    /// Count image XObjects in the page's resource dictionary.
    fn count_page_images(doc: &PdfDocument, page_id: ObjectId) -> Result<usize, lopdf::Error> {
        let page_dict = doc.get_dictionary(page_id)?;

        let resources = match page_dict.get(b"Resources") {
            Ok(obj) => Self::resolve_dict(doc, obj)?,
            // No resources on the page itself (may be inherited): nothing to count.
            Err(_) => return Ok(0),
        };

        let xobjects = match resources.get(b"XObject") {
            Ok(obj) => Self::resolve_dict(doc, obj)?,
            Err(_) => return Ok(0),
        };

        let mut count = 0;
        for (_name, entry) in xobjects.iter() {
            let stream = match entry {
                Object::Reference(id) => doc.get_object(*id).and_then(|o| o.as_stream()),
                other => other.as_stream(),
            };

            if let Ok(stream) = stream {
                if let Ok(Object::Name(subtype)) = stream.dict.get(b"Subtype") {
                    if subtype.as_slice() == b"Image".as_slice() {
                        count += 1;
                    }
                }
            }
        }

        Ok(count)
    }

    fn resolve_dict<'a>(
        doc: &'a PdfDocument,
        obj: &'a Object,
    ) -> Result<&'a Dictionary, lopdf::Error> {
        match obj {
            Object::Reference(id) => doc.get_object(*id).and_then(|o| o.as_dict()),
            other => other.as_dict(),
        }
    }
}
