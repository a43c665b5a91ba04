// ABOUTME: PPTX generation module for the aqilha-deck application
// ABOUTME: Writes the deck as an OOXML presentation package

use crate::errors::{DeckError, Result};
use crate::model::Deck;
use crate::theme;
use crate::xml;
use chrono::{DateTime, TimeZone, Utc};
use log::{debug, info};
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Configuration for PPTX generation
#[derive(Debug, Clone)]
pub struct PptxConfig {
    pub title: String,
    pub creator: String,
    /// Written as both the created and modified timestamp
    pub created: DateTime<Utc>,
}

impl Default for PptxConfig {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            creator: env!("CARGO_PKG_NAME").to_string(),
            created: default_timestamp(),
        }
    }
}

/// 2025-01-01T00:00:00Z
pub fn default_timestamp() -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_689_600, 0)
        .single()
        .unwrap_or_default()
}

/// Save the deck as a PPTX file, creating the parent directory if needed
pub fn save(deck: &Deck, output_file: &Path, config: &PptxConfig) -> Result<()> {
    info!("Generating PPTX with {} slides", deck.len());

    // Ensure parent directory for output file exists
    if let Some(parent) = output_file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(DeckError::FileWriteError)?;
        }
    }

    let file = fs::File::create(output_file).map_err(DeckError::FileWriteError)?;
    write_pptx(deck, file, config)?;

    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

/// Write the deck as a PPTX package to any seekable sink
pub fn write_pptx<W: Write + Seek>(deck: &Deck, writer: W, config: &PptxConfig) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let slide_count = deck.len();

    add_part(&mut zip, "[Content_Types].xml", &xml::content_types(slide_count)?)?;
    add_part(&mut zip, "_rels/.rels", &xml::root_relationships()?)?;
    add_part(&mut zip, "docProps/app.xml", &xml::app_properties(slide_count)?)?;
    add_part(&mut zip, "docProps/core.xml", &xml::core_properties(config)?)?;

    add_part(&mut zip, "ppt/presentation.xml", &xml::presentation(deck)?)?;
    add_part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        &xml::presentation_relationships(slide_count)?,
    )?;

    add_part(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        theme::SLIDE_MASTER.as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &theme::slide_master_relationships()?,
    )?;
    add_part(
        &mut zip,
        "ppt/slideLayouts/slideLayout1.xml",
        theme::SLIDE_LAYOUT.as_bytes(),
    )?;
    add_part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &theme::slide_layout_relationships()?,
    )?;
    add_part(&mut zip, "ppt/theme/theme1.xml", theme::THEME.as_bytes())?;

    // Process each slide
    for (i, slide) in deck.slides().iter().enumerate() {
        let slide_num = i + 1;
        info!("Writing slide {}: {} shapes", slide_num, slide.shapes().len());

        add_part(
            &mut zip,
            &format!("ppt/slides/slide{}.xml", slide_num),
            &xml::slide(deck.palette(), slide)?,
        )?;
        add_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            &xml::slide_relationships()?,
        )?;
    }

    // Finalize the ZIP file
    info!("Finalizing PPTX file");
    let writer = zip.finish()?;
    Ok(writer)
}

fn add_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &[u8]) -> Result<()> {
    debug!("Adding part {} ({} bytes)", name, content.len());
    // Fixed timestamp keeps repeated runs byte-identical
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());
    zip.start_file(name, options)?;
    zip.write_all(content)?;
    Ok(())
}
