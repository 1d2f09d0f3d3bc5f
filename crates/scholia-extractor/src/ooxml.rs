//! Office Open XML (docx, pptx) text extraction
//!
//! Both formats are ZIP archives of XML parts. Only the parts carrying body
//! text are read; styles, media and metadata are ignored.

use crate::error::ExtractorError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use scholia_domain::DocumentFormat;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use zip::ZipArchive;

type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

const DOCX_BODY: &str = "word/document.xml";
const PPTX_PRESENTATION: &str = "ppt/presentation.xml";
const PPTX_PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";

/// Extract body paragraphs of a docx, one per line
pub(crate) fn extract_docx(bytes: &[u8]) -> Result<String, ExtractorError> {
    let format = DocumentFormat::Docx;
    let mut archive = open_archive(bytes, format)?;
    let xml = read_part(&mut archive, DOCX_BODY, format)?;
    let paragraphs =
        docx_paragraphs(&xml).map_err(|e| ExtractorError::extraction(format, e))?;
    Ok(paragraphs.join("\n"))
}

/// Extract the text of every text-bearing shape, slide by slide
pub(crate) fn extract_pptx(bytes: &[u8]) -> Result<String, ExtractorError> {
    let format = DocumentFormat::Pptx;
    let mut archive = open_archive(bytes, format)?;

    let mut text = String::new();
    for part in slide_parts(&mut archive) {
        let xml = read_part(&mut archive, &part, format)?;
        let shapes = slide_shape_texts(&xml).map_err(|e| ExtractorError::extraction(format, e))?;
        for shape in shapes {
            text.push_str(&shape);
            text.push('\n');
        }
    }
    Ok(text)
}

fn open_archive(bytes: &[u8], format: DocumentFormat) -> Result<Archive<'_>, ExtractorError> {
    ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractorError::extraction(format, e))
}

fn read_part(
    archive: &mut Archive<'_>,
    name: &str,
    format: DocumentFormat,
) -> Result<String, ExtractorError> {
    let mut part = archive
        .by_name(name)
        .map_err(|e| ExtractorError::extraction(format, format!("{}: {}", name, e)))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractorError::extraction(format, format!("{}: {}", name, e)))?;
    Ok(xml)
}

/// Paragraph texts of the document body, skipping paragraphs inside tables
///
/// Only runs belonging directly to a body paragraph contribute. Paragraphs
/// nested inside one (text boxes, and their `mc:Fallback` copies) and
/// paragraph properties such as tab stop definitions are ignored.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut paragraph_depth = 0usize;
    let mut table_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        let body_paragraph = paragraph_depth == 1 && table_depth == 0;
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" if table_depth == 0 => paragraph_depth += 1,
                b"r" if body_paragraph => run_depth += 1,
                b"t" if body_paragraph && run_depth > 0 => in_text = true,
                _ => {}
            },
            Event::Empty(e) if table_depth == 0 => match e.local_name().as_ref() {
                b"p" if paragraph_depth == 0 => paragraphs.push(String::new()),
                b"tab" if body_paragraph && run_depth > 0 => current.push('\t'),
                b"br" | b"cr" if body_paragraph && run_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                current.push_str(&t.unescape()?);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"p" if table_depth == 0 && paragraph_depth > 0 => {
                    paragraph_depth -= 1;
                    if paragraph_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"r" if body_paragraph => run_depth = run_depth.saturating_sub(1),
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Slide part names in presentation order
///
/// Presentation order comes from the slide id list and its relationships.
/// Archives missing those parts fall back to the slide number in the part
/// name.
fn slide_parts(archive: &mut Archive<'_>) -> Vec<String> {
    let format = DocumentFormat::Pptx;
    let ordered = read_part(archive, PPTX_PRESENTATION, format)
        .and_then(|presentation| {
            let rels = read_part(archive, PPTX_PRESENTATION_RELS, format)?;
            Ok((presentation, rels))
        })
        .ok()
        .and_then(|(presentation, rels)| {
            let ids = slide_relationship_ids(&presentation).ok()?;
            let targets = relationship_targets(&rels).ok()?;
            ids.iter()
                .map(|id| targets.get(id).map(|target| resolve_target(target)))
                .collect::<Option<Vec<_>>>()
        })
        .filter(|parts| !parts.is_empty());

    if let Some(parts) = ordered {
        return parts;
    }

    let mut numbered: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    numbered.sort_by_key(|(n, _)| *n);
    numbered.into_iter().map(|(_, name)| name).collect()
}

fn slide_number(part: &str) -> Option<u32> {
    part.strip_prefix("ppt/slides/slide")?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

/// Relationship targets are relative to `ppt/`
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("ppt/{}", target),
    }
}

fn attribute(element: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    element
        .attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// `r:id` of each `p:sldId`, in list order
fn slide_relationship_ids(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(id) = attribute(&e, b"r:id") {
                    ids.push(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(ids)
}

/// Relationship id to target
fn relationship_targets(xml: &str) -> Result<HashMap<String, String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attribute(&e, b"Id"), attribute(&e, b"Target")) {
                    targets.insert(id, target);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(targets)
}

/// Text of each top-level shape (`p:sp`) on a slide
///
/// Paragraphs inside a shape are joined with `\n`. Shapes nested in groups,
/// pictures, tables and connectors carry no text of their own.
fn slide_shape_texts(xml: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut shapes = Vec::new();
    let mut group_depth = 0usize;
    let mut shape: Option<Vec<String>> = None;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"grpSp" => group_depth += 1,
                b"sp" if group_depth == 0 => shape = Some(Vec::new()),
                b"p" => {
                    if let Some(paragraphs) = shape.as_mut() {
                        paragraphs.push(String::new());
                    }
                }
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                if let Some(paragraphs) = shape.as_mut() {
                    match e.local_name().as_ref() {
                        b"p" => paragraphs.push(String::new()),
                        b"br" => {
                            if let Some(last) = paragraphs.last_mut() {
                                last.push('\n');
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::Text(t) if in_text => {
                if let Some(last) = shape.as_mut().and_then(|p| p.last_mut()) {
                    last.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"grpSp" => group_depth = group_depth.saturating_sub(1),
                b"sp" if group_depth == 0 => {
                    if let Some(paragraphs) = shape.take() {
                        shapes.push(paragraphs.join("\n"));
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(shapes)
}
