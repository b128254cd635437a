//! PPTX (Office Open XML) deck builder backend.
//!
//! Builds .pptx files, which are ZIP archives containing XML documents:
//! slide parts composed with `quick-xml`, assembled into an OOXML package
//! with the `zip` crate.

pub mod builder;
mod package;
mod parts;
mod shapes;
mod xml;

pub use builder::DeckBuilder;
