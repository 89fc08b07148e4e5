//! The cursor-based component builder
//!
//! A builder holds an ordered list of parts plus a cursor naming the part
//! that new appends inherit from and that style mutators target. The
//! cursor follows every append but can be pointed anywhere, so earlier
//! parts can be restyled after the fact.
//!
//! An empty builder has nowhere to point, so styling calls land on a
//! staging template instead; the first append consumes the template as its
//! inheritance source. [`ComponentBuilder::reset`] arms the template with
//! explicit defaults, which is how a later part stops inheriting
//! formatting from the parts before it.

use std::error::Error;
use std::fmt;

use crate::color::Color;
use crate::component::{Component, FormatRetention};
use crate::event::{ClickEvent, HoverEvent};
use crate::legacy::from_legacy_text;
use crate::style::Style;

/// A part index that is out of bounds for the builder's current length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for builder of length {}",
            self.index, self.len
        )
    }
}

impl Error for IndexError {}

/// Assembles a sequence of styled components.
#[derive(Debug, Clone, Default)]
pub struct ComponentBuilder {
    parts: Vec<Component>,
    /// `None` only while the builder is empty.
    cursor: Option<usize>,
    /// Staged formatting for the next append when it should not inherit
    /// from the cursor part. Consumed by the append that uses it.
    template: Option<Component>,
}

impl ComponentBuilder {
    pub fn new() -> Self {
        ComponentBuilder {
            parts: Vec::new(),
            cursor: None,
            template: None,
        }
    }

    /// A builder whose first part is the given text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut builder = ComponentBuilder::new();
        builder.append(text);
        builder
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Appends a text part that inherits all retained formatting.
    pub fn append(&mut self, text: impl Into<String>) -> &mut Self {
        self.append_with(text, FormatRetention::All)
    }

    /// Appends a text part, copying from the inheritance source only the
    /// fields the retention policy names.
    pub fn append_with(&mut self, text: impl Into<String>, retention: FormatRetention) -> &mut Self {
        self.append_component_with(Component::text(text.into()), retention)
    }

    /// Appends an existing component that inherits all retained formatting
    /// into its unset fields.
    pub fn append_component(&mut self, component: Component) -> &mut Self {
        self.append_component_with(component, FormatRetention::All)
    }

    /// Appends an existing component. Retained fields fill only the unset
    /// fields of the supplied component; anything it sets itself wins.
    pub fn append_component_with(
        &mut self,
        mut component: Component,
        retention: FormatRetention,
    ) -> &mut Self {
        if let Some(template) = self.template.take() {
            component.copy_formatting(&template, retention, false);
        } else if let Some(cursor) = self.cursor {
            component.copy_formatting(&self.parts[cursor], retention, false);
        }
        self.push_part(component)
    }

    /// Appends a component sequence. Only the first element inherits from
    /// the part at the cursor; the rest are appended as they are.
    pub fn append_components(
        &mut self,
        components: impl IntoIterator<Item = Component>,
    ) -> &mut Self {
        let mut first = true;
        for component in components {
            if first {
                self.append_component(component);
                first = false;
            } else {
                self.push_part(component);
            }
        }
        self
    }

    /// Decodes a legacy string and appends the resulting runs.
    pub fn append_legacy(&mut self, text: &str) -> &mut Self {
        self.append_components(from_legacy_text(text))
    }

    fn push_part(&mut self, part: Component) -> &mut Self {
        self.parts.push(part);
        self.cursor = Some(self.parts.len() - 1);
        self
    }

    /// The component style mutators apply to: the part at the cursor, or
    /// the staging template while the builder is empty.
    fn styled_target(&mut self) -> &mut Component {
        match self.cursor {
            Some(cursor) => &mut self.parts[cursor],
            None => self
                .template
                .get_or_insert_with(|| Component::text("")),
        }
    }

    pub fn color(&mut self, color: impl Into<Option<Color>>) -> &mut Self {
        self.styled_target().set_color(color);
        self
    }

    pub fn font(&mut self, font: impl Into<Option<String>>) -> &mut Self {
        self.styled_target().set_font(font);
        self
    }

    pub fn bold(&mut self, bold: impl Into<Option<bool>>) -> &mut Self {
        self.styled_target().set_bold(bold);
        self
    }

    pub fn italic(&mut self, italic: impl Into<Option<bool>>) -> &mut Self {
        self.styled_target().set_italic(italic);
        self
    }

    pub fn underlined(&mut self, underlined: impl Into<Option<bool>>) -> &mut Self {
        self.styled_target().set_underlined(underlined);
        self
    }

    pub fn strikethrough(&mut self, strikethrough: impl Into<Option<bool>>) -> &mut Self {
        self.styled_target().set_strikethrough(strikethrough);
        self
    }

    pub fn obfuscated(&mut self, obfuscated: impl Into<Option<bool>>) -> &mut Self {
        self.styled_target().set_obfuscated(obfuscated);
        self
    }

    pub fn insertion(&mut self, insertion: impl Into<Option<String>>) -> &mut Self {
        self.styled_target().set_insertion(insertion);
        self
    }

    pub fn click_event(&mut self, event: impl Into<Option<ClickEvent>>) -> &mut Self {
        self.styled_target().set_click_event(event);
        self
    }

    pub fn hover_event(&mut self, event: impl Into<Option<HoverEvent>>) -> &mut Self {
        self.styled_target().set_hover_event(event);
        self
    }

    /// Arms the staging template with explicit defaults, so the next
    /// append stops inheriting formatting from the existing parts.
    pub fn reset(&mut self) -> &mut Self {
        let mut template = Component::text("");
        *template.style_mut() = Style::explicit_defaults();
        self.template = Some(template);
        self
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Points the cursor at an existing part.
    pub fn set_cursor(&mut self, index: usize) -> Result<&mut Self, IndexError> {
        if index >= self.parts.len() {
            return Err(IndexError {
                index,
                len: self.parts.len(),
            });
        }
        self.cursor = Some(index);
        Ok(self)
    }

    /// Moves the cursor back to the last part.
    pub fn reset_cursor(&mut self) -> &mut Self {
        self.cursor = self.parts.len().checked_sub(1);
        self
    }

    /// The part at the cursor. Fails only on an empty builder.
    pub fn current_component(&self) -> Result<&Component, IndexError> {
        match self.cursor {
            Some(cursor) => Ok(&self.parts[cursor]),
            None => Err(IndexError { index: 0, len: 0 }),
        }
    }

    pub fn component(&self, index: usize) -> Result<&Component, IndexError> {
        self.parts.get(index).ok_or(IndexError {
            index,
            len: self.parts.len(),
        })
    }

    /// Removes and returns a part. A cursor pointing at the removed part
    /// re-clamps to the new last part; a cursor past it shifts down.
    pub fn remove_component(&mut self, index: usize) -> Result<Component, IndexError> {
        if index >= self.parts.len() {
            return Err(IndexError {
                index,
                len: self.parts.len(),
            });
        }
        let removed = self.parts.remove(index);
        self.cursor = match self.cursor {
            _ if self.parts.is_empty() => None,
            Some(cursor) if cursor == index => Some(self.parts.len() - 1),
            Some(cursor) if cursor > index => Some(cursor - 1),
            other => other,
        };
        Ok(removed)
    }

    /// The assembled parts, as an owned sequence of deep copies. The
    /// builder stays usable afterwards.
    pub fn create(&self) -> Vec<Component> {
        self.parts.clone()
    }

    /// The assembled parts under a single empty-text root.
    pub fn build(&self) -> Component {
        let mut root = Component::text("");
        for part in &self.parts {
            root.add_extra(part.clone());
        }
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn test_append_inherits_from_cursor_part() {
        let mut builder = ComponentBuilder::new();
        builder
            .append("Hello ")
            .color(Color::Named(NamedColor::Red))
            .append("World");
        let parts = builder.create();
        assert_eq!(parts[1].color_raw(), Some(Color::Named(NamedColor::Red)));
    }

    #[test]
    fn test_retention_none() {
        let mut builder = ComponentBuilder::new();
        builder
            .append("Hello ")
            .color(Color::Named(NamedColor::Red))
            .append_with("World", FormatRetention::None);
        assert_eq!(builder.create()[1].color_raw(), None);
    }

    #[test]
    fn test_styling_an_empty_builder_stages_a_template() {
        let mut builder = ComponentBuilder::new();
        builder
            .color(Color::Named(NamedColor::Green))
            .append("go");
        let parts = builder.create();
        assert_eq!(parts[0].color_raw(), Some(Color::Named(NamedColor::Green)));

        // The template was consumed; the next part inherits from the part
        // chain as usual.
        builder.append_with("stop", FormatRetention::None);
        assert_eq!(builder.create()[1].color_raw(), None);
    }

    #[test]
    fn test_reset_stops_inheritance() {
        let mut builder = ComponentBuilder::new();
        builder
            .append("red")
            .color(Color::Named(NamedColor::Red))
            .bold(true)
            .reset()
            .append("plain");
        let parts = builder.create();
        assert_eq!(parts[1].color_raw(), Some(Color::WHITE));
        assert_eq!(parts[1].bold_raw(), Some(false));
    }

    #[test]
    fn test_cursor_moves_and_restyles() {
        let mut builder = ComponentBuilder::new();
        builder.append("a").append("b").append("c");
        assert_eq!(builder.cursor(), Some(2));

        builder.set_cursor(0).unwrap();
        builder.color(Color::Named(NamedColor::Blue));
        assert_eq!(
            builder.component(0).unwrap().color_raw(),
            Some(Color::Named(NamedColor::Blue))
        );
        assert_eq!(builder.component(2).unwrap().color_raw(), None);

        builder.reset_cursor();
        assert_eq!(builder.cursor(), Some(2));
        assert!(builder.set_cursor(3).is_err());
    }

    #[test]
    fn test_remove_component_adjusts_cursor() {
        let mut builder = ComponentBuilder::new();
        builder.append("a").append("b").append("c");

        builder.set_cursor(1).unwrap();
        builder.remove_component(0).unwrap();
        assert_eq!(builder.cursor(), Some(0));

        builder.reset_cursor();
        builder.remove_component(1).unwrap();
        // Cursor pointed at the removed last part and re-clamped.
        assert_eq!(builder.cursor(), Some(0));

        builder.remove_component(0).unwrap();
        assert_eq!(builder.cursor(), None);
        assert!(builder.remove_component(0).is_err());
    }

    #[test]
    fn test_sequence_append_merges_only_first() {
        let mut builder = ComponentBuilder::new();
        builder
            .append("lead")
            .color(Color::Named(NamedColor::Gold))
            .append_components(vec![Component::text("x"), Component::text("y")]);
        let parts = builder.create();
        assert_eq!(parts[1].color_raw(), Some(Color::Named(NamedColor::Gold)));
        assert_eq!(parts[2].color_raw(), None);
    }

    #[test]
    fn test_build_wraps_parts_under_empty_root() {
        let mut builder = ComponentBuilder::new();
        builder.append("a").append("b");
        let root = builder.build();
        assert_eq!(root.to_plain_text(), "ab");
        assert_eq!(root.extra().len(), 2);
    }

    #[test]
    fn test_index_error_display() {
        let err = IndexError { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 5 out of bounds for builder of length 2"
        );
    }
}
