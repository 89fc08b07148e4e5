//! The component graph
//!
//! `Component` is the canonical in-memory form of rich chat text: a
//! discriminated node (plain text, translatable key, scoreboard value, or
//! entity selector) carrying a sparse [`Style`], optional interaction
//! events, an insertion string, and an ordered list of child nodes
//! (`extra`).
//!
//! Children are [`ComponentRef`] handles (`Rc<RefCell<Component>>`), so the
//! same node may legitimately hang under several parents. That makes the
//! graph a general DAG rather than a tree — and makes true cycles
//! expressible, which is why the structured-tree serializer tracks the open
//! DFS path and rejects any node reachable from itself (see
//! [`crate::json`]). Nothing in this module follows `extra` links other
//! than the read-only renderers, so building a cyclic graph is possible;
//! serializing one is not.
//!
//! Equality is structural (through the refs, by value). `Clone` is a deep
//! copy: every child is re-allocated and the copy shares no state with the
//! original.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Color;
use crate::event::{ClickEvent, HoverEvent};
use crate::style::Style;

/// Shared handle to a component node. Identity (for cycle detection) is the
/// `Rc` allocation, not the value.
pub type ComponentRef = Rc<RefCell<Component>>;

/// Which fields a newly appended builder part copies from the previously
/// active part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRetention {
    /// Copy nothing.
    None,
    /// Copy style fields only (color, font, flags).
    Formatting,
    /// Copy click/hover events and the insertion string only.
    Events,
    /// Copy both.
    All,
}

/// The payload variants of a component node.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    Text {
        text: String,
    },
    /// A translation key with ordered argument nodes. The key is stored
    /// opaquely; resolution to display text is a consumer concern.
    Translatable {
        translate: String,
        with: Vec<Component>,
    },
    Score {
        name: String,
        objective: String,
        value: Option<String>,
    },
    Selector {
        selector: String,
        separator: Option<Box<Component>>,
    },
}

/// A node in the component graph.
#[derive(Debug, PartialEq)]
pub struct Component {
    kind: ComponentKind,
    style: Style,
    insertion: Option<String>,
    click_event: Option<ClickEvent>,
    hover_event: Option<HoverEvent>,
    extra: Vec<ComponentRef>,
}

impl Clone for Component {
    /// Deep copy: children are re-allocated rather than shared.
    fn clone(&self) -> Self {
        Component {
            kind: self.kind.clone(),
            style: self.style.clone(),
            insertion: self.insertion.clone(),
            click_event: self.click_event.clone(),
            hover_event: self.hover_event.clone(),
            extra: self
                .extra
                .iter()
                .map(|child| child.borrow().clone().into_ref())
                .collect(),
        }
    }
}

impl Component {
    pub fn new(kind: ComponentKind) -> Self {
        Component {
            kind,
            style: Style::new(),
            insertion: None,
            click_event: None,
            hover_event: None,
            extra: Vec::new(),
        }
    }

    /// A plain text node.
    pub fn text(text: impl Into<String>) -> Self {
        Component::new(ComponentKind::Text { text: text.into() })
    }

    /// A translatable node with its argument list.
    pub fn translatable(translate: impl Into<String>, with: Vec<Component>) -> Self {
        Component::new(ComponentKind::Translatable {
            translate: translate.into(),
            with,
        })
    }

    /// A scoreboard value node.
    pub fn score(name: impl Into<String>, objective: impl Into<String>) -> Self {
        Component::new(ComponentKind::Score {
            name: name.into(),
            objective: objective.into(),
            value: None,
        })
    }

    /// An entity selector node.
    pub fn selector(selector: impl Into<String>) -> Self {
        Component::new(ComponentKind::Selector {
            selector: selector.into(),
            separator: None,
        })
    }

    /// Wraps this node in a shared handle.
    pub fn into_ref(self) -> ComponentRef {
        Rc::new(RefCell::new(self))
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ComponentKind {
        &mut self.kind
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Effective color: the node's own color, or the default (white) when
    /// unset. Use [`Component::color_raw`] to distinguish the two.
    pub fn color(&self) -> Color {
        self.style.color.unwrap_or(Color::WHITE)
    }

    pub fn color_raw(&self) -> Option<Color> {
        self.style.color
    }

    pub fn set_color(&mut self, color: impl Into<Option<Color>>) {
        self.style.color = color.into();
    }

    pub fn font(&self) -> Option<&str> {
        self.style.font.as_deref()
    }

    pub fn set_font(&mut self, font: impl Into<Option<String>>) {
        self.style.font = font.into();
    }

    pub fn is_bold(&self) -> bool {
        self.style.bold.unwrap_or(false)
    }

    pub fn bold_raw(&self) -> Option<bool> {
        self.style.bold
    }

    pub fn set_bold(&mut self, bold: impl Into<Option<bool>>) {
        self.style.bold = bold.into();
    }

    pub fn is_italic(&self) -> bool {
        self.style.italic.unwrap_or(false)
    }

    pub fn italic_raw(&self) -> Option<bool> {
        self.style.italic
    }

    pub fn set_italic(&mut self, italic: impl Into<Option<bool>>) {
        self.style.italic = italic.into();
    }

    pub fn is_underlined(&self) -> bool {
        self.style.underlined.unwrap_or(false)
    }

    pub fn underlined_raw(&self) -> Option<bool> {
        self.style.underlined
    }

    pub fn set_underlined(&mut self, underlined: impl Into<Option<bool>>) {
        self.style.underlined = underlined.into();
    }

    pub fn is_strikethrough(&self) -> bool {
        self.style.strikethrough.unwrap_or(false)
    }

    pub fn strikethrough_raw(&self) -> Option<bool> {
        self.style.strikethrough
    }

    pub fn set_strikethrough(&mut self, strikethrough: impl Into<Option<bool>>) {
        self.style.strikethrough = strikethrough.into();
    }

    pub fn is_obfuscated(&self) -> bool {
        self.style.obfuscated.unwrap_or(false)
    }

    pub fn obfuscated_raw(&self) -> Option<bool> {
        self.style.obfuscated
    }

    pub fn set_obfuscated(&mut self, obfuscated: impl Into<Option<bool>>) {
        self.style.obfuscated = obfuscated.into();
    }

    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    pub fn set_insertion(&mut self, insertion: impl Into<Option<String>>) {
        self.insertion = insertion.into();
    }

    pub fn click_event(&self) -> Option<&ClickEvent> {
        self.click_event.as_ref()
    }

    pub fn set_click_event(&mut self, event: impl Into<Option<ClickEvent>>) {
        self.click_event = event.into();
    }

    pub fn hover_event(&self) -> Option<&HoverEvent> {
        self.hover_event.as_ref()
    }

    pub fn set_hover_event(&mut self, event: impl Into<Option<HoverEvent>>) {
        self.hover_event = event.into();
    }

    pub fn extra(&self) -> &[ComponentRef] {
        &self.extra
    }

    /// Appends an owned child, returning the handle so callers can alias it
    /// elsewhere in the graph.
    pub fn add_extra(&mut self, child: Component) -> ComponentRef {
        let child = child.into_ref();
        self.extra.push(Rc::clone(&child));
        child
    }

    /// Appends an existing handle, possibly already linked from another
    /// parent.
    pub fn add_extra_ref(&mut self, child: ComponentRef) {
        self.extra.push(child);
    }

    pub fn set_extra(&mut self, extra: Vec<ComponentRef>) {
        self.extra = extra;
    }

    /// True when any style field, insertion, event, or child is present.
    pub fn has_formatting(&self) -> bool {
        !self.style.is_empty()
            || self.insertion.is_some()
            || self.click_event.is_some()
            || self.hover_event.is_some()
            || !self.extra.is_empty()
    }

    /// Copies display state from `source` according to the retention
    /// policy. Without `replace`, only fields unset on `self` are filled;
    /// with it, every covered field is taken from `source` as-is.
    pub fn copy_formatting(&mut self, source: &Component, retention: FormatRetention, replace: bool) {
        if matches!(retention, FormatRetention::Events | FormatRetention::All) {
            if replace || self.insertion.is_none() {
                self.insertion = source.insertion.clone();
            }
            if replace || self.click_event.is_none() {
                self.click_event = source.click_event.clone();
            }
            if replace || self.hover_event.is_none() {
                self.hover_event = source.hover_event.clone();
            }
        }
        if matches!(retention, FormatRetention::Formatting | FormatRetention::All) {
            self.style.merge_from(&source.style, replace);
        }
    }

    /// The unformatted text of this node and its children: literal text,
    /// raw translation keys, score values, and selector strings. Hover
    /// payloads are not included.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain(&mut out);
        out
    }

    fn write_plain(&self, out: &mut String) {
        match &self.kind {
            ComponentKind::Text { text } => out.push_str(text),
            ComponentKind::Translatable { translate, .. } => out.push_str(translate),
            ComponentKind::Score { value, .. } => {
                if let Some(value) = value {
                    out.push_str(value);
                }
            }
            ComponentKind::Selector { selector, .. } => out.push_str(selector),
        }
        for child in &self.extra {
            child.borrow().write_plain(out);
        }
    }

    /// Renders this node (and its children) into the legacy marker
    /// encoding. See [`crate::legacy::to_legacy_text`] for sequences.
    pub fn to_legacy_text(&self) -> String {
        crate::legacy::to_legacy_text(std::slice::from_ref(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use crate::event::{ClickAction, HoverAction};

    #[test]
    fn test_has_formatting() {
        let mut component = Component::text("");
        assert!(!component.has_formatting());

        component.set_bold(true);
        assert!(component.has_formatting());

        let mut with_child = Component::text("");
        with_child.add_extra(Component::text("x"));
        assert!(with_child.has_formatting());
    }

    #[test]
    fn test_structural_equality() {
        let mut first = Component::text("Hello, ");
        first.add_extra(Component::text("World!"));
        let mut second = Component::text("Hello, ");
        second.add_extra(Component::text("World!"));
        assert_eq!(first, second);

        let mut third = Component::text("Hello, ");
        third.add_extra(Component::text("World."));
        assert_ne!(first, third);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Component::text("parent");
        let child = original.add_extra(Component::text("child"));

        let copy = original.clone();
        child.borrow_mut().set_color(Color::Named(NamedColor::Red));

        // The copy kept its own child, unaffected by the mutation.
        assert_eq!(copy.extra()[0].borrow().color_raw(), None);
        assert_eq!(
            original.extra()[0].borrow().color_raw(),
            Some(Color::Named(NamedColor::Red))
        );
    }

    #[test]
    fn test_plain_text_walks_children() {
        let mut component = Component::text("Hello ");
        component.add_extra(Component::text("world"));
        component.add_extra(Component::translatable("item.swordGold.name", Vec::new()));
        assert_eq!(component.to_plain_text(), "Hello worlditem.swordGold.name");
    }

    #[test]
    fn test_copy_formatting_replace() {
        let mut first = Component::text("Hello");
        first.set_bold(true);
        first.set_color(Color::Named(NamedColor::Red));
        first.set_click_event(ClickEvent::new(ClickAction::RunCommand, "test"));
        first.set_hover_event(crate::event::HoverEvent::for_components(
            HoverAction::ShowText,
            vec![Component::text("Test")],
        ));

        let mut second = Component::text(" world");
        second.copy_formatting(&first, FormatRetention::All, true);
        assert_eq!(second.is_bold(), first.is_bold());
        assert_eq!(second.color(), first.color());
        assert_eq!(second.click_event(), first.click_event());
        assert_eq!(second.hover_event(), first.hover_event());
    }
}
