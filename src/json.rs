//! The structured-tree document codec
//!
//! Components serialize to sparse JSON documents: only explicitly set
//! fields appear, so an untouched attribute stays an inheritance hole in
//! the output. Documents are built over [`serde_json::Value`] whose object
//! maps keep keys in sorted order, which makes serialization deterministic
//! and reserialization of a parsed document byte-exact.
//!
//! Serialization walks the graph depth-first and tracks the open path by
//! `Rc` pointer identity. A child already on the open path means the graph
//! reaches a node from itself; that is a [`SerializeError::Cycle`], raised
//! before any output is produced. Nodes merely shared between branches are
//! not on the open path and serialize normally (duplicated in the output).
//!
//! Deserialization is strict. Unknown keys, type mismatches, missing
//! required fields, and conflicting payload fields all fail with a
//! [`ParseError`] carrying the JSON path of the offending value. The two
//! accepted hover shapes (the old `value` field and the modern `contents`
//! field) and the two entity-identifier shapes (dashed string and
//! four-integer array) both canonicalize to the same in-memory form.

use std::cell::RefCell;
use std::error::Error;
use std::fmt;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::color::Color;
use crate::component::{Component, ComponentKind, ComponentRef};
use crate::event::{ClickAction, ClickEvent, Content, HoverAction, HoverEvent, TextValue};
use crate::style::Style;

/// Serialization failure. The only structural fault a component graph can
/// have is a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializeError {
    Cycle,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Cycle => write!(f, "component graph contains a cycle"),
        }
    }
}

impl Error for SerializeError {}

/// Deserialization failure, carrying the JSON path (`$`, `$.extra[0]`, ...)
/// of the offending value where one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not valid JSON at all.
    Json(String),
    /// The document shape is wrong at `path`.
    Field { path: String, message: String },
}

impl ParseError {
    fn field(path: &str, message: impl Into<String>) -> Self {
        ParseError::Field {
            path: path.to_owned(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Json(message) => write!(f, "invalid document: {message}"),
            ParseError::Field { path, message } => write!(f, "{path}: {message}"),
        }
    }
}

impl Error for ParseError {}

/// Serializes a single component to a document value.
pub fn to_value(component: &Component) -> Result<Value, SerializeError> {
    let mut open_path = Vec::new();
    component_to_value(component, &mut open_path)
}

/// Serializes a single component to a document string.
pub fn to_string(component: &Component) -> Result<String, SerializeError> {
    Ok(to_value(component)?.to_string())
}

/// Serializes a component sequence: a single component emits bare, several
/// wrap as the children of an empty-text root. An empty sequence emits a
/// bare empty-text node.
pub fn sequence_to_value(components: &[Component]) -> Result<Value, SerializeError> {
    if components.len() == 1 {
        return to_value(&components[0]);
    }
    let mut map = Map::new();
    if !components.is_empty() {
        let mut open_path = Vec::new();
        let mut extra = Vec::with_capacity(components.len());
        for component in components {
            extra.push(component_to_value(component, &mut open_path)?);
        }
        map.insert("extra".to_owned(), Value::Array(extra));
    }
    map.insert("text".to_owned(), Value::String(String::new()));
    Ok(Value::Object(map))
}

pub fn sequence_to_string(components: &[Component]) -> Result<String, SerializeError> {
    Ok(sequence_to_value(components)?.to_string())
}

/// Deserializes a single component from a document value.
pub fn from_value(value: &Value) -> Result<Component, ParseError> {
    component_from_value(value, "$")
}

/// Deserializes a single component from a document string.
pub fn from_str(input: &str) -> Result<Component, ParseError> {
    let value: Value =
        serde_json::from_str(input).map_err(|err| ParseError::Json(err.to_string()))?;
    from_value(&value)
}

/// Deserializes a document string holding either a single component or a
/// top-level array of components.
pub fn parse(input: &str) -> Result<Vec<Component>, ParseError> {
    let value: Value =
        serde_json::from_str(input).map_err(|err| ParseError::Json(err.to_string()))?;
    match &value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| component_from_value(item, &format!("$[{i}]")))
            .collect(),
        other => Ok(vec![component_from_value(other, "$")?]),
    }
}

/// Serializes a standalone style document. Infallible: styles hold no
/// children.
pub fn style_to_value(style: &Style) -> Value {
    let mut map = Map::new();
    style_into_map(style, &mut map);
    Value::Object(map)
}

/// Deserializes a standalone style document. Strict in the same way as
/// component deserialization.
pub fn style_from_value(value: &Value) -> Result<Style, ParseError> {
    let map = expect_object(value, "$")?;
    let mut style = Style::new();
    for (key, field) in map {
        let path = format!("$.{key}");
        if !apply_style_key(&mut style, key, field, &path)? {
            return Err(ParseError::field(&path, "unknown key"));
        }
    }
    Ok(style)
}

impl serde::Serialize for Component {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let value = to_value(self).map_err(serde::ser::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// serialization

fn component_to_value(
    component: &Component,
    open_path: &mut Vec<*const RefCell<Component>>,
) -> Result<Value, SerializeError> {
    let mut map = Map::new();

    match component.kind() {
        ComponentKind::Text { text } => {
            map.insert("text".to_owned(), Value::String(text.clone()));
        }
        ComponentKind::Translatable { translate, with } => {
            map.insert("translate".to_owned(), Value::String(translate.clone()));
            if !with.is_empty() {
                let mut args = Vec::with_capacity(with.len());
                for arg in with {
                    args.push(component_to_value(arg, open_path)?);
                }
                map.insert("with".to_owned(), Value::Array(args));
            }
        }
        ComponentKind::Score {
            name,
            objective,
            value,
        } => {
            let mut score = Map::new();
            score.insert("name".to_owned(), Value::String(name.clone()));
            score.insert("objective".to_owned(), Value::String(objective.clone()));
            if let Some(value) = value {
                score.insert("value".to_owned(), Value::String(value.clone()));
            }
            map.insert("score".to_owned(), Value::Object(score));
        }
        ComponentKind::Selector {
            selector,
            separator,
        } => {
            map.insert("selector".to_owned(), Value::String(selector.clone()));
            if let Some(separator) = separator {
                map.insert(
                    "separator".to_owned(),
                    component_to_value(separator, open_path)?,
                );
            }
        }
    }

    style_into_map(component.style(), &mut map);

    if let Some(insertion) = component.insertion() {
        map.insert("insertion".to_owned(), Value::String(insertion.to_owned()));
    }
    if let Some(click) = component.click_event() {
        let mut event = Map::new();
        event.insert("action".to_owned(), Value::String(click.action.as_str().to_owned()));
        event.insert("value".to_owned(), Value::String(click.value.clone()));
        map.insert("clickEvent".to_owned(), Value::Object(event));
    }
    if let Some(hover) = component.hover_event() {
        map.insert("hoverEvent".to_owned(), hover_to_value(hover, open_path)?);
    }

    if !component.extra().is_empty() {
        let mut extra = Vec::with_capacity(component.extra().len());
        for child in component.extra() {
            extra.push(child_to_value(child, open_path)?);
        }
        map.insert("extra".to_owned(), Value::Array(extra));
    }

    Ok(Value::Object(map))
}

fn child_to_value(
    child: &ComponentRef,
    open_path: &mut Vec<*const RefCell<Component>>,
) -> Result<Value, SerializeError> {
    let identity = std::rc::Rc::as_ptr(child);
    if open_path.contains(&identity) {
        return Err(SerializeError::Cycle);
    }
    open_path.push(identity);
    let value = component_to_value(&child.borrow(), open_path);
    open_path.pop();
    value
}

fn style_into_map(style: &Style, map: &mut Map<String, Value>) {
    if let Some(bold) = style.bold {
        map.insert("bold".to_owned(), Value::Bool(bold));
    }
    if let Some(italic) = style.italic {
        map.insert("italic".to_owned(), Value::Bool(italic));
    }
    if let Some(underlined) = style.underlined {
        map.insert("underlined".to_owned(), Value::Bool(underlined));
    }
    if let Some(strikethrough) = style.strikethrough {
        map.insert("strikethrough".to_owned(), Value::Bool(strikethrough));
    }
    if let Some(obfuscated) = style.obfuscated {
        map.insert("obfuscated".to_owned(), Value::Bool(obfuscated));
    }
    if let Some(color) = &style.color {
        map.insert("color".to_owned(), Value::String(color.serialized_name()));
    }
    if let Some(font) = &style.font {
        map.insert("font".to_owned(), Value::String(font.clone()));
    }
}

fn hover_to_value(
    hover: &HoverEvent,
    open_path: &mut Vec<*const RefCell<Component>>,
) -> Result<Value, SerializeError> {
    let mut event = Map::new();
    event.insert(
        "action".to_owned(),
        Value::String(hover.action().as_str().to_owned()),
    );

    // Events built from the single-value constructor keep the
    // backward-compatible field name.
    let key = if hover.is_legacy() && matches!(hover.contents(), [Content::Text(_)]) {
        "value"
    } else {
        "contents"
    };
    let mut values = Vec::with_capacity(hover.contents().len());
    for content in hover.contents() {
        values.push(content_to_value(content, open_path)?);
    }
    let payload = if values.len() == 1 {
        values.pop().unwrap()
    } else {
        Value::Array(values)
    };
    event.insert(key.to_owned(), payload);
    Ok(Value::Object(event))
}

fn content_to_value(
    content: &Content,
    open_path: &mut Vec<*const RefCell<Component>>,
) -> Result<Value, SerializeError> {
    match content {
        Content::Text(TextValue::Plain(text)) => Ok(Value::String(text.clone())),
        Content::Text(TextValue::Components(components)) => {
            let mut values = Vec::with_capacity(components.len());
            for component in components {
                values.push(component_to_value(component, open_path)?);
            }
            if values.len() == 1 {
                Ok(values.pop().unwrap())
            } else {
                Ok(Value::Array(values))
            }
        }
        Content::Item { id, count, tag } => {
            let mut map = Map::new();
            map.insert("id".to_owned(), Value::String(id.clone()));
            if let Some(count) = count {
                map.insert("count".to_owned(), Value::Number((*count).into()));
            }
            if let Some(tag) = tag {
                map.insert("tag".to_owned(), Value::String(tag.clone()));
            }
            Ok(Value::Object(map))
        }
        Content::Entity { kind, id, name } => {
            let mut map = Map::new();
            map.insert("type".to_owned(), Value::String(kind.clone()));
            // Always the dashed lowercase form, whatever shape it arrived in.
            map.insert("id".to_owned(), Value::String(id.to_string()));
            if let Some(name) = name {
                map.insert("name".to_owned(), component_to_value(name, open_path)?);
            }
            Ok(Value::Object(map))
        }
    }
}

// ---------------------------------------------------------------------------
// deserialization

fn component_from_value(value: &Value, path: &str) -> Result<Component, ParseError> {
    // Wire shorthand: bare scalars are plain text.
    match value {
        Value::String(text) => return Ok(Component::text(text.clone())),
        Value::Number(number) => return Ok(Component::text(number.to_string())),
        Value::Bool(flag) => return Ok(Component::text(flag.to_string())),
        _ => {}
    }
    let map = expect_object(value, path)?;

    let mut kind = None;
    let mut style = Style::new();
    let mut insertion = None;
    let mut click_event = None;
    let mut hover_event = None;
    let mut extra: Vec<ComponentRef> = Vec::new();
    let mut with: Option<Vec<Component>> = None;
    let mut separator: Option<Component> = None;

    for (key, field) in map {
        let field_path = format!("{path}.{key}");
        match key.as_str() {
            "text" => {
                set_kind(
                    &mut kind,
                    ComponentKind::Text {
                        text: expect_str(field, &field_path)?.to_owned(),
                    },
                    &field_path,
                )?;
            }
            "translate" => {
                set_kind(
                    &mut kind,
                    ComponentKind::Translatable {
                        translate: expect_str(field, &field_path)?.to_owned(),
                        with: Vec::new(),
                    },
                    &field_path,
                )?;
            }
            "with" => {
                let items = expect_array(field, &field_path)?;
                let mut args = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    args.push(component_from_value(item, &format!("{field_path}[{i}]"))?);
                }
                with = Some(args);
            }
            "score" => {
                set_kind(&mut kind, score_from_value(field, &field_path)?, &field_path)?;
            }
            "selector" => {
                set_kind(
                    &mut kind,
                    ComponentKind::Selector {
                        selector: expect_str(field, &field_path)?.to_owned(),
                        separator: None,
                    },
                    &field_path,
                )?;
            }
            "separator" => {
                separator = Some(component_from_value(field, &field_path)?);
            }
            "extra" => {
                let items = expect_array(field, &field_path)?;
                for (i, item) in items.iter().enumerate() {
                    let child = component_from_value(item, &format!("{field_path}[{i}]"))?;
                    extra.push(child.into_ref());
                }
            }
            "insertion" => {
                insertion = Some(expect_str(field, &field_path)?.to_owned());
            }
            "clickEvent" => {
                click_event = Some(click_from_value(field, &field_path)?);
            }
            "hoverEvent" => {
                hover_event = Some(hover_from_value(field, &field_path)?);
            }
            other => {
                if !apply_style_key(&mut style, other, field, &field_path)? {
                    return Err(ParseError::field(&field_path, "unknown key"));
                }
            }
        }
    }

    let mut kind = kind.ok_or_else(|| {
        ParseError::field(path, "expected one of \"text\", \"translate\", \"score\", \"selector\"")
    })?;

    match (&mut kind, with) {
        (ComponentKind::Translatable { with: slot, .. }, Some(args)) => *slot = args,
        (_, Some(_)) => {
            return Err(ParseError::field(
                &format!("{path}.with"),
                "\"with\" requires \"translate\"",
            ));
        }
        _ => {}
    }
    match (&mut kind, separator) {
        (ComponentKind::Selector { separator: slot, .. }, Some(sep)) => {
            *slot = Some(Box::new(sep));
        }
        (_, Some(_)) => {
            return Err(ParseError::field(
                &format!("{path}.separator"),
                "\"separator\" requires \"selector\"",
            ));
        }
        _ => {}
    }

    let mut component = Component::new(kind);
    *component.style_mut() = style;
    component.set_insertion(insertion);
    component.set_click_event(click_event);
    component.set_hover_event(hover_event);
    component.set_extra(extra);
    Ok(component)
}

/// Applies one style key to `style`. Returns false when the key is not a
/// style key at all.
fn apply_style_key(
    style: &mut Style,
    key: &str,
    value: &Value,
    path: &str,
) -> Result<bool, ParseError> {
    match key {
        "bold" => style.bold = Some(expect_bool(value, path)?),
        "italic" => style.italic = Some(expect_bool(value, path)?),
        "underlined" => style.underlined = Some(expect_bool(value, path)?),
        "strikethrough" => style.strikethrough = Some(expect_bool(value, path)?),
        "obfuscated" => style.obfuscated = Some(expect_bool(value, path)?),
        "color" => {
            let name = expect_str(value, path)?;
            style.color = Some(Color::parse(name).ok_or_else(|| {
                ParseError::field(path, format!("unknown color {name:?}"))
            })?);
        }
        "font" => style.font = Some(expect_str(value, path)?.to_owned()),
        _ => return Ok(false),
    }
    Ok(true)
}

fn set_kind(
    slot: &mut Option<ComponentKind>,
    kind: ComponentKind,
    path: &str,
) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::field(path, "conflicting component payloads"));
    }
    *slot = Some(kind);
    Ok(())
}

fn score_from_value(value: &Value, path: &str) -> Result<ComponentKind, ParseError> {
    let map = expect_object(value, path)?;
    let mut name = None;
    let mut objective = None;
    let mut score_value = None;
    for (key, field) in map {
        let field_path = format!("{path}.{key}");
        match key.as_str() {
            "name" => name = Some(expect_str(field, &field_path)?.to_owned()),
            "objective" => objective = Some(expect_str(field, &field_path)?.to_owned()),
            "value" => score_value = Some(expect_str(field, &field_path)?.to_owned()),
            _ => return Err(ParseError::field(&field_path, "unknown key")),
        }
    }
    Ok(ComponentKind::Score {
        name: name.ok_or_else(|| ParseError::field(path, "missing \"name\""))?,
        objective: objective.ok_or_else(|| ParseError::field(path, "missing \"objective\""))?,
        value: score_value,
    })
}

fn click_from_value(value: &Value, path: &str) -> Result<ClickEvent, ParseError> {
    let map = expect_object(value, path)?;
    let mut action = None;
    let mut click_value = None;
    for (key, field) in map {
        let field_path = format!("{path}.{key}");
        match key.as_str() {
            "action" => {
                let name = expect_str(field, &field_path)?;
                action = Some(ClickAction::from_name(name).ok_or_else(|| {
                    ParseError::field(&field_path, format!("unknown click action {name:?}"))
                })?);
            }
            "value" => click_value = Some(expect_str(field, &field_path)?.to_owned()),
            _ => return Err(ParseError::field(&field_path, "unknown key")),
        }
    }
    Ok(ClickEvent {
        action: action.ok_or_else(|| ParseError::field(path, "missing \"action\""))?,
        value: click_value.ok_or_else(|| ParseError::field(path, "missing \"value\""))?,
    })
}

fn hover_from_value(value: &Value, path: &str) -> Result<HoverEvent, ParseError> {
    let map = expect_object(value, path)?;

    let action_value = map
        .get("action")
        .ok_or_else(|| ParseError::field(path, "missing \"action\""))?;
    let action_path = format!("{path}.action");
    let action_name = expect_str(action_value, &action_path)?;
    let action = HoverAction::from_name(action_name).ok_or_else(|| {
        ParseError::field(&action_path, format!("unknown hover action {action_name:?}"))
    })?;

    let legacy_value = map.get("value");
    let contents_value = map.get("contents");
    for key in map.keys() {
        if !matches!(key.as_str(), "action" | "value" | "contents") {
            return Err(ParseError::field(&format!("{path}.{key}"), "unknown key"));
        }
    }

    match (legacy_value, contents_value) {
        (Some(_), Some(_)) => Err(ParseError::field(
            path,
            "\"value\" and \"contents\" are mutually exclusive",
        )),
        (None, None) => Err(ParseError::field(
            path,
            "missing \"value\" or \"contents\"",
        )),
        (Some(value), None) => {
            let text = legacy_value_from_value(value, &format!("{path}.value"))?;
            Ok(HoverEvent::from_parts(action, vec![Content::Text(text)], true))
        }
        (None, Some(value)) => {
            let contents_path = format!("{path}.contents");
            let contents = match value {
                Value::Array(items) => {
                    let mut contents = Vec::with_capacity(items.len());
                    for (i, item) in items.iter().enumerate() {
                        contents.push(content_from_value(
                            action,
                            item,
                            &format!("{contents_path}[{i}]"),
                        )?);
                    }
                    contents
                }
                single => vec![content_from_value(action, single, &contents_path)?],
            };
            Ok(HoverEvent::from_parts(action, contents, false))
        }
    }
}

fn legacy_value_from_value(value: &Value, path: &str) -> Result<TextValue, ParseError> {
    match value {
        Value::String(text) => Ok(TextValue::Plain(text.clone())),
        Value::Array(items) => {
            let mut components = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                components.push(component_from_value(item, &format!("{path}[{i}]"))?);
            }
            Ok(TextValue::Components(components))
        }
        Value::Object(_) => Ok(TextValue::Components(vec![component_from_value(
            value, path,
        )?])),
        other => Err(ParseError::field(
            path,
            format!("expected a string, array, or object, found {}", type_name(other)),
        )),
    }
}

fn content_from_value(
    action: HoverAction,
    value: &Value,
    path: &str,
) -> Result<Content, ParseError> {
    match action {
        HoverAction::ShowText => match value {
            Value::String(text) => Ok(Content::Text(TextValue::Plain(text.clone()))),
            other => Ok(Content::Text(TextValue::Components(vec![
                component_from_value(other, path)?,
            ]))),
        },
        HoverAction::ShowItem => item_from_value(value, path),
        HoverAction::ShowEntity => entity_from_value(value, path),
    }
}

fn item_from_value(value: &Value, path: &str) -> Result<Content, ParseError> {
    let map = expect_object(value, path)?;
    let mut id = None;
    let mut count = None;
    let mut tag = None;
    for (key, field) in map {
        let field_path = format!("{path}.{key}");
        match key.as_str() {
            "id" => id = Some(expect_str(field, &field_path)?.to_owned()),
            "count" => {
                let number = field
                    .as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or_else(|| {
                        ParseError::field(&field_path, "expected a 32-bit integer")
                    })?;
                count = Some(number);
            }
            // The tag is opaque; it is kept verbatim, never validated.
            "tag" => tag = Some(expect_str(field, &field_path)?.to_owned()),
            _ => return Err(ParseError::field(&field_path, "unknown key")),
        }
    }
    Ok(Content::Item {
        id: id.ok_or_else(|| ParseError::field(path, "missing \"id\""))?,
        count,
        tag,
    })
}

fn entity_from_value(value: &Value, path: &str) -> Result<Content, ParseError> {
    let map = expect_object(value, path)?;
    let mut kind = None;
    let mut id = None;
    let mut name = None;
    for (key, field) in map {
        let field_path = format!("{path}.{key}");
        match key.as_str() {
            "type" => kind = Some(expect_str(field, &field_path)?.to_owned()),
            "id" => id = Some(uuid_from_value(field, &field_path)?),
            "name" => name = Some(Box::new(component_from_value(field, &field_path)?)),
            _ => return Err(ParseError::field(&field_path, "unknown key")),
        }
    }
    Ok(Content::Entity {
        kind: kind.ok_or_else(|| ParseError::field(path, "missing \"type\""))?,
        id: id.ok_or_else(|| ParseError::field(path, "missing \"id\""))?,
        name,
    })
}

/// Accepts the dashed-string form or the four-integer big-endian array form
/// and canonicalizes both to [`Uuid`].
fn uuid_from_value(value: &Value, path: &str) -> Result<Uuid, ParseError> {
    match value {
        Value::String(text) => Uuid::parse_str(text)
            .map_err(|err| ParseError::field(path, format!("invalid uuid: {err}"))),
        Value::Array(words) => {
            if words.len() != 4 {
                return Err(ParseError::field(path, "expected exactly four integers"));
            }
            let mut bits: u128 = 0;
            for (i, word) in words.iter().enumerate() {
                let word = word
                    .as_i64()
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or_else(|| {
                        ParseError::field(&format!("{path}[{i}]"), "expected a 32-bit integer")
                    })?;
                bits = (bits << 32) | (word as u32 as u128);
            }
            Ok(Uuid::from_u128(bits))
        }
        other => Err(ParseError::field(
            path,
            format!("expected a string or array, found {}", type_name(other)),
        )),
    }
}

// ---------------------------------------------------------------------------
// value helpers

fn expect_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ParseError> {
    value.as_object().ok_or_else(|| {
        ParseError::field(path, format!("expected an object, found {}", type_name(value)))
    })
}

fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a Vec<Value>, ParseError> {
    value.as_array().ok_or_else(|| {
        ParseError::field(path, format!("expected an array, found {}", type_name(value)))
    })
}

fn expect_str<'a>(value: &'a Value, path: &str) -> Result<&'a str, ParseError> {
    value.as_str().ok_or_else(|| {
        ParseError::field(path, format!("expected a string, found {}", type_name(value)))
    })
}

fn expect_bool(value: &Value, path: &str) -> Result<bool, ParseError> {
    value.as_bool().ok_or_else(|| {
        ParseError::field(path, format!("expected a boolean, found {}", type_name(value)))
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
