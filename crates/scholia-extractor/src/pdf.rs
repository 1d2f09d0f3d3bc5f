//! PDF text extraction using the `pdf-extract` crate

use crate::error::ExtractorError;
use scholia_domain::DocumentFormat;

/// Extract text from PDF bytes, page texts concatenated in page order
pub(crate) fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractorError> {
    if !bytes.starts_with(b"%PDF") {
        return Err(ExtractorError::extraction(
            DocumentFormat::Pdf,
            "missing %PDF header",
        ));
    }

    // pdf-extract panics on some malformed inputs
    let text = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|_| ExtractorError::extraction(DocumentFormat::Pdf, "parser panicked"))?
        .map_err(|e| ExtractorError::extraction(DocumentFormat::Pdf, e))?;

    // Pages are separated by form feeds
    Ok(text.split('\x0C').collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal PDF with one Helvetica text line per page
    fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let font_id = 3 + 2 * pages.len();
        let kids: Vec<String> = (0..pages.len()).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), pages.len()),
        ];
        for (i, text) in pages.iter().enumerate() {
            let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
                font_id,
                4 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ));
        }
        objects.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref = pdf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            tail.push_str(&format!("{:010} 00000 n \n", offset));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref
        ));
        pdf.extend_from_slice(tail.as_bytes());
        pdf
    }

    #[test]
    fn test_pages_are_concatenated_in_order() {
        let bytes = pdf_with_pages(&["Alpha page one", "Beta page two"]);
        let text = extract_pdf(&bytes).unwrap();

        let first = text.find("Alpha page one").expect("first page text");
        let second = text.find("Beta page two").expect("second page text");
        assert!(first < second);
        assert!(!text.contains('\x0C'));
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = extract_pdf(b"PK\x03\x04 not a pdf");
        match result {
            Err(ExtractorError::Extraction { format, message }) => {
                assert_eq!(format, DocumentFormat::Pdf);
                assert!(message.contains("%PDF"));
            }
            other => panic!("Expected Extraction error, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_pdf_is_an_error_not_a_panic() {
        let result = extract_pdf(b"%PDF-1.7\n1 0 obj\n<< /Type /Catalog");
        assert!(matches!(result, Err(ExtractorError::Extraction { .. })));
    }
}
