//! Behavioral tests for the legacy text codec
//!
//! Covers run splitting, flag accumulation, reset handling, the RGB
//! compatibility sequence, URL autodetection, and the minimal-transition
//! re-encoder.

use rstest::rstest;

use quill::{
    from_legacy_text, to_legacy_text, ClickAction, Color, Component, ComponentKind, NamedColor,
};

fn norm(input: &str) -> String {
    to_legacy_text(&from_legacy_text(input))
}

#[test]
fn test_plain_text_passes_through() {
    assert_eq!(norm("Hello world"), "Hello world");
    let parts = from_legacy_text("Hello world");
    assert_eq!(parts.len(), 1);
    assert!(parts[0].style().is_empty());
}

#[test]
fn test_styled_round_trip() {
    assert_eq!(norm("§a§lHello §f§kworld §7!"), "§a§lHello §f§kworld §7!");
}

#[test]
fn test_reset_becomes_explicit_white() {
    let parts = from_legacy_text("§4§n44444§rdd§6§l6666");
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].color_raw(), Some(Color::Named(NamedColor::DarkRed)));
    assert!(parts[0].is_underlined());
    assert_eq!(parts[1].color_raw(), Some(Color::WHITE));
    assert!(!parts[1].is_underlined());
    assert_eq!(parts[2].color_raw(), Some(Color::Named(NamedColor::Gold)));
    assert!(parts[2].is_bold());

    // Re-encoding pins the reset as the white color code.
    assert_eq!(to_legacy_text(&parts), "§4§n44444§fdd§6§l6666");
}

#[test]
fn test_color_code_clears_flags() {
    let parts = from_legacy_text("§l§ntext§6more");
    assert_eq!(parts.len(), 2);
    assert!(parts[0].is_bold());
    assert!(parts[0].is_underlined());
    assert_eq!(parts[0].color_raw(), None);
    assert!(!parts[1].is_bold());
    assert!(!parts[1].is_underlined());
    assert_eq!(parts[1].color_raw(), Some(Color::Named(NamedColor::Gold)));
}

#[rstest]
#[case("§apre§zpost", "§aprepost")]
#[case("§qHello", "Hello")]
#[case("trailing§", "trailing")]
#[case("§", "")]
fn test_invalid_codes_are_dropped(#[case] input: &str, #[case] expected: &str) {
    let plain: String = from_legacy_text(input)
        .iter()
        .map(|part| part.to_plain_text())
        .collect();
    assert_eq!(plain, expected);
}

#[test]
fn test_every_invalid_pair_normalizes_to_nothing() {
    // Every marker+alphanumeric pair outside the recognized alphabet,
    // followed by a bare trailing marker.
    let mut input = String::new();
    for code in ('0'..='9').chain('a'..='z') {
        if quill::color::LegacyCode::from_char(code).is_some() || code == quill::legacy::RGB_CODE {
            continue;
        }
        input.push(quill::COLOR_CHAR);
        input.push(code);
    }
    input.push(quill::COLOR_CHAR);
    assert_eq!(norm(&input), norm(""));
    assert_eq!(norm(&input), "");
}

#[test]
fn test_uppercase_codes_normalize_to_lowercase() {
    assert_eq!(norm("§AHello §LWorld"), "§aHello §lWorld");
}

#[test]
fn test_rgb_sequence_round_trip() {
    let parts = from_legacy_text("§x§1§2§a§b§c§dcoloured");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].color_raw(), Some(Color::Rgb(0x12ABCD)));
    assert_eq!(to_legacy_text(&parts), "§x§1§2§a§b§c§dcoloured");
}

#[test]
fn test_rgb_color_never_degrades_on_encode() {
    let mut part = Component::text("x");
    part.set_color(Color::Rgb(0xFF5555));
    // 0xFF5555 is exactly the red palette entry, but the encoder still
    // emits the six-digit sequence.
    assert_eq!(to_legacy_text(&[part]), "§x§f§f§5§5§5§5x");
}

#[rstest]
#[case("§xff0000text")]
#[case("§x§f§f§0§0§0text")]
#[case("§x§f§f§0§0§0§gtext")]
fn test_malformed_rgb_drops_only_the_introducer(#[case] input: &str) {
    let parts = from_legacy_text(input);
    // No part picked up an RGB color.
    assert!(parts
        .iter()
        .all(|part| !matches!(part.color_raw(), Some(Color::Rgb(_)))));
}

#[test]
fn test_trailing_code_survives_round_trip() {
    let parts = from_legacy_text("Hello §a");
    assert_eq!(parts.len(), 2);
    assert!(matches!(parts[1].kind(), ComponentKind::Text { text } if text.is_empty()));
    assert_eq!(parts[1].color_raw(), Some(Color::Named(NamedColor::Green)));
    // The empty green run still emits its color code.
    assert_eq!(to_legacy_text(&parts), "Hello §a");
}

#[test]
fn test_formatting_only_input_keeps_its_codes() {
    assert_eq!(norm("§a"), "§a");
    assert_eq!(norm("§2§o"), "§2§o");
    assert_eq!(norm("text §l"), "text §l");
}

#[test]
fn test_url_detection() {
    let parts = from_legacy_text("Text http://spigotmc.org §agoogle.com/test");
    assert_eq!(parts.len(), 5);

    let spigot = parts[1].click_event().expect("expected a click event");
    assert_eq!(spigot.action, ClickAction::OpenUrl);
    assert_eq!(spigot.value, "http://spigotmc.org");

    let google = parts[3].click_event().expect("expected a click event");
    // The scheme is supplied when the token lacks one.
    assert_eq!(google.value, "http://google.com/test");
    assert_eq!(parts[3].color_raw(), Some(Color::Named(NamedColor::Green)));

    assert_eq!(
        to_legacy_text(&parts),
        "Text http://spigotmc.org §agoogle.com/test"
    );
}

#[test]
fn test_url_keeps_https_scheme() {
    let parts = from_legacy_text("see https://spigotmc.org please");
    let url = parts
        .iter()
        .find_map(|part| part.click_event())
        .expect("expected a click event");
    assert_eq!(url.value, "https://spigotmc.org");
}

#[test]
fn test_non_urls_are_left_alone() {
    for input in ["no dots here", "trailing.dot. stays", "a.b single letters"] {
        assert!(from_legacy_text(input)
            .iter()
            .all(|part| part.click_event().is_none()));
    }
}

#[test]
fn test_minimal_transitions_add_flags_without_restating_color() {
    let mut first = Component::text("one ");
    first.set_color(Color::Named(NamedColor::Green));
    let mut second = Component::text("two");
    second.set_color(Color::Named(NamedColor::Green));
    second.set_bold(true);
    assert_eq!(to_legacy_text(&[first, second]), "§aone §ltwo");
}

#[test]
fn test_flag_removal_forces_color_restatement() {
    let mut first = Component::text("one ");
    first.set_color(Color::Named(NamedColor::Green));
    first.set_bold(true);
    let mut second = Component::text("two");
    second.set_color(Color::Named(NamedColor::Green));
    second.set_bold(false);
    assert_eq!(to_legacy_text(&[first, second]), "§a§lone §atwo");
}

#[test]
fn test_children_inherit_parent_style_on_encode() {
    let mut parent = Component::text("parent ");
    parent.set_color(Color::Named(NamedColor::Green));
    let mut child = Component::text("child");
    child.set_bold(true);
    parent.add_extra(child);
    assert_eq!(to_legacy_text(std::slice::from_ref(&parent)), "§aparent §lchild");
    assert_eq!(parent.to_legacy_text(), "§aparent §lchild");
}

#[test]
fn test_non_text_nodes_emit_no_literal() {
    let mut selector = Component::selector("@p");
    selector.add_extra(Component::text("tail"));
    assert_eq!(to_legacy_text(std::slice::from_ref(&selector)), "tail");
}
