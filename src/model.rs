// ABOUTME: Document model for the aqilha-deck application
// ABOUTME: Deck, slides and positioned text boxes, with OOXML length units

use crate::errors::Result;
use crate::palette::{Palette, Rgb};
use anyhow::anyhow;
use std::io::Write;

/// EMUs per inch (English Metric Units, the OOXML length unit)
pub const EMU_PER_INCH: i64 = 914_400;

/// A length in English Metric Units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Emu(pub i64);

impl Emu {
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH as f64).round() as i64)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// A shape rectangle authored in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Slide canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: Emu,
    pub height: Emu,
}

impl Canvas {
    /// 10in x 7.5in, the default for a new presentation
    pub const STANDARD_4X3: Canvas = Canvas {
        width: Emu(9_144_000),
        height: Emu(6_858_000),
    };
}

impl Default for Canvas {
    fn default() -> Self {
        Self::STANDARD_4X3
    }
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Value of the DrawingML `algn` attribute
    pub fn as_ooxml(self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeRole {
    Title,
    Body,
}

/// A positioned, styled text box
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub role: ShapeRole,
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
    pub text: String,
    /// Font size in whole points
    pub font_size: u32,
    pub color: Rgb,
    pub bold: bool,
    /// `None` inherits the default (left) alignment
    pub alignment: Option<Alignment>,
}

impl TextShape {
    pub fn new(role: ShapeRole, frame: Frame, text: &str) -> Self {
        Self {
            role,
            x: Emu::from_inches(frame.x),
            y: Emu::from_inches(frame.y),
            width: Emu::from_inches(frame.width),
            height: Emu::from_inches(frame.height),
            text: text.to_string(),
            font_size: 18,
            color: Rgb::default(),
            bold: false,
            alignment: None,
        }
    }

    pub fn font_size(mut self, points: u32) -> Self {
        self.font_size = points;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn alignment(mut self, alignment: Option<Alignment>) -> Self {
        self.alignment = alignment;
        self
    }

    /// One entry per paragraph; every `\n` starts a new one
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Whether the shape's rectangle lies inside the canvas
    pub fn fits(&self, canvas: &Canvas) -> bool {
        self.x.0 >= 0
            && self.y.0 >= 0
            && self.x.0 + self.width.0 <= canvas.width.0
            && self.y.0 + self.height.0 <= canvas.height.0
    }
}

/// A slide: an ordered list of text boxes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    shapes: Vec<TextShape>,
}

impl Slide {
    pub fn add_textbox(&mut self, shape: TextShape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    pub fn shapes(&self) -> &[TextShape] {
        &self.shapes
    }

    pub fn title(&self) -> Option<&TextShape> {
        self.shapes.iter().find(|s| s.role == ShapeRole::Title)
    }

    pub fn bodies(&self) -> impl Iterator<Item = &TextShape> {
        self.shapes.iter().filter(|s| s.role == ShapeRole::Body)
    }
}

/// The ordered collection of slides produced by one run
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<Slide>,
    palette: Palette,
    canvas: Canvas,
}

impl Deck {
    pub fn new(palette: Palette) -> Self {
        Self {
            slides: Vec::new(),
            palette,
            canvas: Canvas::default(),
        }
    }

    /// Append an empty slide and return it for population
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::default());
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Title text of every slide, in order
    pub fn outline(&self) -> Vec<&str> {
        self.slides
            .iter()
            .map(|slide| slide.title().map(|t| t.text.as_str()).unwrap_or(""))
            .collect()
    }

    /// Write the numbered outline, one title per line
    pub fn write_outline<W: Write>(&self, mut out: W) -> Result<()> {
        for (i, title) in self.outline().iter().enumerate() {
            writeln!(out, "{:>2}. {}", i + 1, title)
                .map_err(|e| anyhow!("Failed to print outline: {}", e))?;
        }
        Ok(())
    }
}
