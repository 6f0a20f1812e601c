use std::fs;
use std::io::{Cursor, Read, Write};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{Error, Result};

/// Package part holding the document body
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Text to place into one body paragraph, with the run formatting to apply.
#[derive(Debug, Clone, Copy)]
pub struct Placeholder<'a> {
    /// 0-based index among the direct paragraphs of the document body
    pub paragraph_index: usize,
    pub text: &'a str,
    pub font_size_pt: f32,
    pub font_name: &'a str,
}

impl Placeholder<'_> {
    /// Run size in half-points, the unit of `w:sz`
    pub fn half_points(&self) -> u32 {
        (self.font_size_pt * 2.0).round() as u32
    }
}

/// Open the document at `path`, replace the placeholder paragraph, and save in place.
///
/// Every other part of the package is copied without recompression.
pub fn fill_placeholder(path: &Path, placeholder: &Placeholder) -> Result<()> {
    let original = fs::read(path)?;
    let mut archive = ZipArchive::new(Cursor::new(original.as_slice()))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::with_capacity(original.len())));
    let mut found = false;

    for i in 0..archive.len() {
        let name = archive.by_index_raw(i)?.name().to_string();
        if name == DOCUMENT_PART {
            let mut xml = String::new();
            archive.by_index(i)?.read_to_string(&mut xml)?;
            let rewritten = rewrite_placeholder(&xml, placeholder)?;

            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            writer.start_file(name, options)?;
            writer.write_all(rewritten.as_bytes())?;
            found = true;
        } else {
            writer.raw_copy_file(archive.by_index_raw(i)?)?;
        }
    }

    if !found {
        return Err(Error::NotADocument {
            part: DOCUMENT_PART,
            path: path.to_path_buf(),
        });
    }

    let bytes = writer.finish()?.into_inner();
    fs::write(path, bytes)?;
    debug!("Filled paragraph {} of {:?}", placeholder.paragraph_index, path);
    Ok(())
}

/// Rewrite the document part so that the chosen body paragraph holds only
/// `placeholder.text` in a single formatted run.
///
/// Only direct children of `w:body` count as paragraphs; paragraphs nested in
/// tables or text boxes are skipped. The paragraph's own properties (`w:pPr`)
/// are kept; all other content of the paragraph is dropped.
pub fn rewrite_placeholder(xml: &str, placeholder: &Placeholder) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len() + 256));

    // Local names of the currently open elements
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut seen = 0usize;
    let mut replaced = false;
    // Stack depth of the open target paragraph, and whether its current child is kept
    let mut target_depth: Option<usize> = None;
    let mut keep_child = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(e) => {
                let local = e.local_name().as_ref().to_vec();
                if let Some(depth) = target_depth {
                    if stack.len() == depth {
                        keep_child = local == b"pPr";
                    }
                    stack.push(local);
                    if keep_child {
                        writer.write_event(Event::Start(e))?;
                    }
                    continue;
                }

                let body_paragraph = is_body_paragraph(&stack, &local);
                stack.push(local);
                writer.write_event(Event::Start(e))?;
                if body_paragraph {
                    if seen == placeholder.paragraph_index && !replaced {
                        target_depth = Some(stack.len());
                        keep_child = false;
                    }
                    seen += 1;
                }
            }
            Event::Empty(e) => {
                if let Some(depth) = target_depth {
                    let keep = if stack.len() == depth {
                        e.local_name().as_ref() == b"pPr"
                    } else {
                        keep_child
                    };
                    if keep {
                        writer.write_event(Event::Empty(e))?;
                    }
                    continue;
                }

                let body_paragraph = is_body_paragraph(&stack, e.local_name().as_ref());
                if body_paragraph && seen == placeholder.paragraph_index && !replaced {
                    let end =
                        BytesEnd::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                    writer.write_event(Event::Start(e))?;
                    write_name_run(&mut writer, placeholder)?;
                    writer.write_event(Event::End(end))?;
                    replaced = true;
                } else {
                    writer.write_event(Event::Empty(e))?;
                }
                if body_paragraph {
                    seen += 1;
                }
            }
            Event::End(e) => {
                stack.pop();
                if let Some(depth) = target_depth {
                    if stack.len() + 1 == depth {
                        write_name_run(&mut writer, placeholder)?;
                        writer.write_event(Event::End(e))?;
                        target_depth = None;
                        replaced = true;
                        continue;
                    }
                    if keep_child {
                        writer.write_event(Event::End(e))?;
                    }
                    if stack.len() == depth {
                        keep_child = false;
                    }
                    continue;
                }
                writer.write_event(Event::End(e))?;
            }
            other => {
                if let Some(depth) = target_depth {
                    if keep_child && stack.len() > depth {
                        writer.write_event(other)?;
                    }
                    continue;
                }
                writer.write_event(other)?;
            }
        }
    }

    if !replaced {
        return Err(Error::PlaceholderMissing {
            index: placeholder.paragraph_index,
            found: seen,
        });
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn is_body_paragraph(stack: &[Vec<u8>], local: &[u8]) -> bool {
    local == b"p" && stack.last().is_some_and(|parent| parent.as_slice() == b"body")
}

/// `<w:r><w:rPr><w:rFonts/><w:sz/></w:rPr>text</w:r>` with tabs and line breaks
/// turned into `w:tab` / `w:br`.
fn write_name_run<W: Write>(writer: &mut Writer<W>, placeholder: &Placeholder) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("w:r")))?;

    writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    let mut fonts = BytesStart::new("w:rFonts");
    fonts.push_attribute(("w:ascii", placeholder.font_name));
    fonts.push_attribute(("w:hAnsi", placeholder.font_name));
    writer.write_event(Event::Empty(fonts))?;
    let size = placeholder.half_points().to_string();
    let mut sz = BytesStart::new("w:sz");
    sz.push_attribute(("w:val", size.as_str()));
    writer.write_event(Event::Empty(sz))?;
    writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;

    let mut pending = String::new();
    let mut chars = placeholder.text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\t' => {
                write_text(writer, &mut pending)?;
                writer.write_event(Event::Empty(BytesStart::new("w:tab")))?;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                write_text(writer, &mut pending)?;
                writer.write_event(Event::Empty(BytesStart::new("w:br")))?;
            }
            _ => pending.push(c),
        }
    }
    write_text(writer, &mut pending)?;

    writer.write_event(Event::End(BytesEnd::new("w:r")))?;
    Ok(())
}

fn write_text<W: Write>(writer: &mut Writer<W>, pending: &mut String) -> Result<()> {
    if pending.is_empty() {
        return Ok(());
    }
    let mut t = BytesStart::new("w:t");
    t.push_attribute(("xml:space", "preserve"));
    writer.write_event(Event::Start(t))?;
    writer.write_event(Event::Text(BytesText::new(pending.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
    pending.clear();
    Ok(())
}
