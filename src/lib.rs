//! # quill
//!
//! A data model and codecs for rich, formatted chat text.
//!
//! Chat text is modelled as a graph of typed [`Component`] nodes (plain
//! text, translatable keys, scoreboard values, entity selectors), each
//! carrying a sparse [`Style`], optional click/hover events, and an ordered
//! list of child nodes. The graph converts losslessly between two boundary
//! representations:
//!
//! - **Legacy text** — a flat string using inline `§`-marker formatting
//!   codes, handled by the [`legacy`] module.
//! - **Structured-tree documents** — nested, sparse JSON documents,
//!   handled by the [`json`] module.
//!
//! The [`builder`] module provides a cursor-based assembly API with
//! explicit format-retention policies for composing component sequences.
//!
//! ## Testing
//!
//! Behavioral suites live under `tests/`, one file per concern; round-trip
//! properties are exercised with proptest in `tests/codec_proptest.rs`.

pub mod builder;
pub mod color;
pub mod component;
pub mod event;
pub mod json;
pub mod legacy;
pub mod style;

pub use builder::{ComponentBuilder, IndexError};
pub use color::{Color, NamedColor, COLOR_CHAR};
pub use component::{Component, ComponentKind, ComponentRef, FormatRetention};
pub use event::{ClickAction, ClickEvent, Content, HoverAction, HoverEvent, TextValue};
pub use json::{ParseError, SerializeError};
pub use legacy::{from_legacy_text, to_legacy_text};
pub use style::Style;
