//! The legacy text codec
//!
//! Legacy text is a flat string with inline formatting: a `§` marker
//! followed by one code character switches the active color or adds a
//! format flag, and every color switch implicitly clears the flags.
//! Decoding ([`from_legacy_text`]) splits such a string into styled text
//! runs and never fails; unrecognized marker pairs are dropped. Encoding
//! ([`to_legacy_text`]) walks a component sequence and emits the shortest
//! code string that reproduces each run's effective style, rather than
//! restating the full style before every run.
//!
//! Two compatibility behaviors ride along with the plain alphabet: the
//! `§x§R§R§G§G§B§B` sequence smuggles a 24-bit RGB color through the
//! single-character code space, and bare URLs in the input are split into
//! their own runs carrying an `open_url` click event.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::{Color, LegacyCode, COLOR_CHAR};
use crate::component::{Component, ComponentKind};
use crate::event::{ClickAction, ClickEvent};
use crate::style::Style;

/// Code character introducing the six-digit RGB compatibility sequence.
pub const RGB_CODE: char = 'x';

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(https?)://)?([-\w_.]{2,}\.[a-z]{2,4})(/\S*)?$").unwrap()
});

/// Decodes a legacy string into a sequence of styled text runs.
///
/// Consecutive runs with the same style and no click event coalesce into
/// one node. The trailing run is always present, even when it is empty, so
/// a string that ends in a code keeps that code through a round trip.
/// Invalid marker pairs (and a trailing bare marker) are silently removed.
pub fn from_legacy_text(message: &str) -> Vec<Component> {
    let chars: Vec<char> = message.chars().collect();
    let mut components = Vec::new();
    let mut run = String::new();
    let mut style = Style::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == COLOR_CHAR {
            if i + 1 >= chars.len() {
                // Bare trailing marker.
                i += 1;
                continue;
            }
            let code = chars[i + 1];
            if code.to_ascii_lowercase() == RGB_CODE {
                if let Some(rgb) = read_rgb(&chars, i + 2) {
                    flush_run(&mut components, &mut run, &style);
                    style = Style {
                        color: Some(Color::Rgb(rgb)),
                        ..Style::new()
                    };
                    i += 14;
                } else {
                    // Malformed sequence: drop the marker and introducer,
                    // leave the rest of the input alone.
                    i += 2;
                }
                continue;
            }
            if let Some(legacy) = LegacyCode::from_char(code) {
                flush_run(&mut components, &mut run, &style);
                match legacy {
                    LegacyCode::Color(named) => {
                        style = Style {
                            color: Some(Color::Named(named)),
                            ..Style::new()
                        };
                    }
                    // Reset pins the default color explicitly, so it
                    // survives re-encoding.
                    LegacyCode::Reset => {
                        style = Style {
                            color: Some(Color::WHITE),
                            ..Style::new()
                        };
                    }
                    LegacyCode::Bold => style.bold = Some(true),
                    LegacyCode::Italic => style.italic = Some(true),
                    LegacyCode::Underlined => style.underlined = Some(true),
                    LegacyCode::Strikethrough => style.strikethrough = Some(true),
                    LegacyCode::Obfuscated => style.obfuscated = Some(true),
                }
            }
            i += 2;
            continue;
        }

        // URL autodetection: test the remainder of the space-delimited
        // token starting here.
        let pos = chars[i..]
            .iter()
            .position(|&ch| ch == ' ')
            .map(|p| i + p)
            .unwrap_or(chars.len());
        let token: String = chars[i..pos].iter().collect();
        if URL_PATTERN.is_match(&token) {
            flush_run(&mut components, &mut run, &style);
            let value = if token.starts_with("http") {
                token.clone()
            } else {
                format!("http://{token}")
            };
            let mut url = Component::text(token);
            *url.style_mut() = style.clone();
            url.set_click_event(ClickEvent::new(ClickAction::OpenUrl, value));
            components.push(url);
            i = pos;
            continue;
        }

        run.push(c);
        i += 1;
    }

    // The trailing run is kept even when empty, so a trailing code
    // survives decoding.
    if let Some(tail) = coalescible(&mut components, &style) {
        tail.push_str(&run);
    } else {
        let mut last = Component::text(run);
        *last.style_mut() = style;
        components.push(last);
    }
    components
}

/// Reads the six `§<hexdigit>` pairs of an RGB sequence starting at `at`.
/// Every interleaved marker is verified; any fault rejects the whole
/// sequence.
fn read_rgb(chars: &[char], at: usize) -> Option<u32> {
    if at + 12 > chars.len() {
        return None;
    }
    let mut value = 0u32;
    for pair in 0..6 {
        if chars[at + pair * 2] != COLOR_CHAR {
            return None;
        }
        let digit = chars[at + pair * 2 + 1].to_digit(16)?;
        value = (value << 4) | digit;
    }
    Some(value)
}

fn flush_run(components: &mut Vec<Component>, run: &mut String, style: &Style) {
    if run.is_empty() {
        return;
    }
    let text = std::mem::take(run);
    if let Some(tail) = coalescible(components, style) {
        tail.push_str(&text);
        return;
    }
    let mut part = Component::text(text);
    *part.style_mut() = style.clone();
    components.push(part);
}

/// Consecutive runs with the same style and no event coalesce into one
/// node. Returns the previous node's text when the current run can join
/// it.
fn coalescible<'a>(components: &'a mut [Component], style: &Style) -> Option<&'a mut String> {
    let last = components.last_mut()?;
    if last.click_event().is_some() || last.style() != style {
        return None;
    }
    match last.kind_mut() {
        ComponentKind::Text { text } => Some(text),
        _ => None,
    }
}

/// Encodes a component sequence into legacy text with minimal style
/// transitions.
///
/// Walks the graph depth-first, each node's effective style being its own
/// fields overlaid on the inherited ones. A run that only adds flags over
/// the previous run emits just those flag codes; a color change or a flag
/// removal forces a fresh color code (or `§r` when the target color is
/// unset) followed by the target's active flags. Non-text nodes contribute
/// no literal text but their children are still rendered.
pub fn to_legacy_text(components: &[Component]) -> String {
    let mut out = String::new();
    let mut state = EmitState::new();
    for component in components {
        emit(component, &Style::new(), &mut state, &mut out);
    }
    out
}

/// Flag codes in emission order.
const FLAG_CODES: [char; 5] = ['l', 'o', 'n', 'm', 'k'];

struct EmitState {
    color: Option<Color>,
    flags: [bool; 5],
}

impl EmitState {
    fn new() -> Self {
        EmitState {
            color: None,
            flags: [false; 5],
        }
    }
}

fn style_flags(style: &Style) -> [bool; 5] {
    [
        style.bold.unwrap_or(false),
        style.italic.unwrap_or(false),
        style.underlined.unwrap_or(false),
        style.strikethrough.unwrap_or(false),
        style.obfuscated.unwrap_or(false),
    ]
}

fn emit(component: &Component, inherited: &Style, state: &mut EmitState, out: &mut String) {
    let mut effective = component.style().clone();
    effective.merge_from(inherited, false);

    // The transition is emitted even for an empty literal, so a
    // formatting-only run keeps its codes through a round trip.
    if let ComponentKind::Text { text } = component.kind() {
        transition(state, &effective, out);
        out.push_str(text);
    }

    for child in component.extra() {
        emit(&child.borrow(), &effective, state, out);
    }
}

fn transition(state: &mut EmitState, target: &Style, out: &mut String) {
    let wanted = style_flags(target);
    let color_changed = state.color != target.color;
    let flag_removed = state
        .flags
        .iter()
        .zip(wanted.iter())
        .any(|(active, want)| *active && !*want);

    if color_changed || flag_removed {
        match target.color {
            Some(color) => push_color(out, color),
            None => {
                out.push(COLOR_CHAR);
                out.push(LegacyCode::Reset.code());
            }
        }
        state.color = target.color;
        state.flags = [false; 5];
    }

    for (slot, code) in FLAG_CODES.iter().enumerate() {
        if wanted[slot] && !state.flags[slot] {
            out.push(COLOR_CHAR);
            out.push(*code);
            state.flags[slot] = true;
        }
    }
}

fn push_color(out: &mut String, color: Color) {
    match color {
        Color::Named(named) => {
            out.push(COLOR_CHAR);
            out.push(named.code());
        }
        // RGB never degrades to a nearest named code here; the six-digit
        // sequence carries it exactly. Only the low 24 bits are
        // meaningful.
        Color::Rgb(rgb) => {
            out.push(COLOR_CHAR);
            out.push(RGB_CODE);
            for digit in format!("{:06x}", rgb & 0xFF_FFFF).chars() {
                out.push(COLOR_CHAR);
                out.push(digit);
            }
        }
    }
}
