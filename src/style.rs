//! The three-state style bag
//!
//! Every display attribute of a component is tri-state: explicitly set to a
//! value, explicitly set to the default, or unset. Unset means *inherit
//! from context* and is distinct from an explicit `false`/default through
//! every stage — construction, retention copying, and serialization (where
//! unset fields are omitted entirely).

use crate::color::Color;

/// A sparse bag of display attributes. `None` always means "inherit".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub font: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underlined: Option<bool>,
    pub strikethrough: Option<bool>,
    pub obfuscated: Option<bool>,
}

impl Style {
    /// A style that inherits everything.
    pub fn new() -> Self {
        Style::default()
    }

    /// A style with every field explicitly set to its default: white color,
    /// all flags false, no font. This is what a builder `reset()` installs
    /// so later parts stop inheriting.
    pub fn explicit_defaults() -> Self {
        Style {
            color: Some(Color::WHITE),
            font: None,
            bold: Some(false),
            italic: Some(false),
            underlined: Some(false),
            strikethrough: Some(false),
            obfuscated: Some(false),
        }
    }

    /// True when every field is unset.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.font.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underlined.is_none()
            && self.strikethrough.is_none()
            && self.obfuscated.is_none()
    }

    /// Field-wise copy from `other`. With `replace` set every field is taken
    /// from `other` (including unset ones); otherwise only fields unset on
    /// `self` are filled in. The latter is the retention-copy primitive.
    pub fn merge_from(&mut self, other: &Style, replace: bool) {
        if replace || self.color.is_none() {
            self.color = other.color;
        }
        if replace || self.font.is_none() {
            self.font = other.font.clone();
        }
        if replace || self.bold.is_none() {
            self.bold = other.bold;
        }
        if replace || self.italic.is_none() {
            self.italic = other.italic;
        }
        if replace || self.underlined.is_none() {
            self.underlined = other.underlined;
        }
        if replace || self.strikethrough.is_none() {
            self.strikethrough = other.strikethrough;
        }
        if replace || self.obfuscated.is_none() {
            self.obfuscated = other.obfuscated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn test_empty() {
        assert!(Style::new().is_empty());
        assert!(!Style::explicit_defaults().is_empty());

        let mut style = Style::new();
        style.bold = Some(false);
        // Explicit false is set, not inherit.
        assert!(!style.is_empty());
    }

    #[test]
    fn test_merge_fills_only_unset_fields() {
        let mut target = Style {
            color: Some(Color::Named(NamedColor::Red)),
            ..Style::new()
        };
        let source = Style {
            color: Some(Color::Named(NamedColor::Blue)),
            bold: Some(true),
            ..Style::new()
        };

        target.merge_from(&source, false);
        assert_eq!(target.color, Some(Color::Named(NamedColor::Red)));
        assert_eq!(target.bold, Some(true));
    }

    #[test]
    fn test_merge_replace_overwrites_everything() {
        let mut target = Style {
            color: Some(Color::Named(NamedColor::Red)),
            italic: Some(true),
            ..Style::new()
        };
        let source = Style {
            bold: Some(true),
            ..Style::new()
        };

        target.merge_from(&source, true);
        assert_eq!(target.color, None);
        assert_eq!(target.italic, None);
        assert_eq!(target.bold, Some(true));
    }
}
