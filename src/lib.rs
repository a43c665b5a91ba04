// ABOUTME: Library module for the aqilha-deck program.
// ABOUTME: Contains the deck model, the literal slide content and the PPTX writer.

// Reexport modules
pub mod config;
pub mod content;
pub mod errors;
pub mod model;
pub mod palette;
pub mod pptx;
pub mod theme;
pub mod xml;

// Reexport common types and functions
pub use config::Config;
pub use content::{build_deck, SLIDE_COUNT};
pub use errors::{DeckError, Result};
pub use model::{Alignment, Deck, Slide, TextShape};
pub use palette::{Palette, Rgb};
pub use pptx::{save, write_pptx, PptxConfig};

#[cfg(test)]
mod tests;
