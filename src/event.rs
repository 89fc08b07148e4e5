//! Click and hover interaction events
//!
//! Events store an action tag and a payload; nothing here interprets or
//! executes the action. Hover payloads are polymorphic [`Content`] items:
//! literal or embedded text, an item stack description, or an entity
//! reference whose 128-bit identifier is canonicalized to a [`Uuid`]
//! regardless of which wire shape it arrived in.

use uuid::Uuid;

use crate::component::Component;

/// What a client should do when a component is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickAction {
    OpenUrl,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

impl ClickAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "open_url" => Some(ClickAction::OpenUrl),
            "run_command" => Some(ClickAction::RunCommand),
            "suggest_command" => Some(ClickAction::SuggestCommand),
            "change_page" => Some(ClickAction::ChangePage),
            "copy_to_clipboard" => Some(ClickAction::CopyToClipboard),
            _ => None,
        }
    }
}

/// A click action plus its string payload. Structural equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        ClickEvent {
            action,
            value: value.into(),
        }
    }
}

/// What a client should display when a component is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoverAction {
    ShowText,
    ShowItem,
    ShowEntity,
}

impl HoverAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HoverAction::ShowText => "show_text",
            HoverAction::ShowItem => "show_item",
            HoverAction::ShowEntity => "show_entity",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "show_text" => Some(HoverAction::ShowText),
            "show_item" => Some(HoverAction::ShowItem),
            "show_entity" => Some(HoverAction::ShowEntity),
            _ => None,
        }
    }
}

/// The value of a text hover content: either a literal string or an
/// embedded component sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum TextValue {
    Plain(String),
    Components(Vec<Component>),
}

/// One hover payload item.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(TextValue),
    /// An item stack. The tag is an opaque NBT-like string; it is stored
    /// and re-emitted verbatim, never validated.
    Item {
        id: String,
        count: Option<i32>,
        tag: Option<String>,
    },
    /// An entity reference. The identifier is canonical in memory and is
    /// always serialized in the dashed-string form.
    Entity {
        kind: String,
        id: Uuid,
        name: Option<Box<Component>>,
    },
}

impl Content {
    /// A literal text content.
    pub fn text(value: impl Into<String>) -> Self {
        Content::Text(TextValue::Plain(value.into()))
    }
}

/// A hover action with its ordered content list.
///
/// `legacy` records that the event was built from the single-value
/// constructor ([`HoverEvent::for_components`]); it decides whether the
/// serializer emits the `value` or `contents` field and participates in
/// structural equality.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEvent {
    action: HoverAction,
    contents: Vec<Content>,
    legacy: bool,
}

impl HoverEvent {
    /// An event with an explicit contents list.
    ///
    /// Text contents are canonicalized to at most one component each: a
    /// content holding several components is split into one content per
    /// component, which is the form the document codec round-trips
    /// exactly.
    pub fn new(action: HoverAction, contents: Vec<Content>) -> Self {
        let contents = contents
            .into_iter()
            .flat_map(|content| match content {
                Content::Text(TextValue::Components(components)) if components.len() > 1 => {
                    components
                        .into_iter()
                        .map(|component| Content::Text(TextValue::Components(vec![component])))
                        .collect()
                }
                other => vec![other],
            })
            .collect();
        HoverEvent {
            action,
            contents,
            legacy: false,
        }
    }

    /// The single-value form: the component sequence is wrapped in one
    /// text content and the event is marked legacy, so it serializes under
    /// the backward-compatible `value` key.
    pub fn for_components(action: HoverAction, components: Vec<Component>) -> Self {
        HoverEvent {
            action,
            contents: vec![Content::Text(TextValue::Components(components))],
            legacy: true,
        }
    }

    pub(crate) fn from_parts(action: HoverAction, contents: Vec<Content>, legacy: bool) -> Self {
        HoverEvent {
            action,
            contents,
            legacy,
        }
    }

    pub fn action(&self) -> HoverAction {
        self.action
    }

    pub fn contents(&self) -> &[Content] {
        &self.contents
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }
}
