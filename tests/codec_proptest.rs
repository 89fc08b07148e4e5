//! Property-based tests for both codecs
//!
//! Generates arbitrary acyclic component graphs and arbitrary legacy-ish
//! input strings, then checks the round-trip and determinism guarantees.

use proptest::prelude::*;

use quill::{
    from_legacy_text, json, to_legacy_text, ClickAction, ClickEvent, Color, Component,
    ComponentKind, Content, HoverAction, HoverEvent, NamedColor, Style,
};

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![
        prop::sample::select(&NamedColor::ALL[..]).prop_map(Color::Named),
        (0u32..0x0100_0000).prop_map(Color::Rgb),
    ]
}

fn style_strategy() -> impl Strategy<Value = Style> {
    (
        proptest::option::of(color_strategy()),
        proptest::option::of("[a-z_:]{1,10}"),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(
            |(color, font, bold, italic, underlined, strikethrough, obfuscated)| Style {
                color,
                font,
                bold,
                italic,
                underlined,
                strikethrough,
                obfuscated,
            },
        )
}

fn click_strategy() -> impl Strategy<Value = ClickEvent> {
    (
        prop::sample::select(vec![
            ClickAction::OpenUrl,
            ClickAction::RunCommand,
            ClickAction::SuggestCommand,
            ClickAction::ChangePage,
            ClickAction::CopyToClipboard,
        ]),
        "[ -~]{0,16}",
    )
        .prop_map(|(action, value)| ClickEvent::new(action, value))
}

fn hover_strategy() -> impl Strategy<Value = HoverEvent> {
    prop_oneof![
        // The single-value form, carrying a small component sequence.
        prop::collection::vec("[ -~]{0,8}".prop_map(Component::text), 1..3)
            .prop_map(|seq| HoverEvent::for_components(HoverAction::ShowText, seq)),
        // Modern text contents.
        prop::collection::vec("[ -~]{0,8}".prop_map(Content::text), 1..3)
            .prop_map(|contents| HoverEvent::new(HoverAction::ShowText, contents)),
        // An item stack.
        ("[a-z:_]{1,12}", proptest::option::of(any::<i32>()), proptest::option::of("[ -~]{0,12}"))
            .prop_map(|(id, count, tag)| {
                HoverEvent::new(HoverAction::ShowItem, vec![Content::Item { id, count, tag }])
            }),
        // An entity reference.
        ("[a-z:_]{1,12}", any::<u128>(), proptest::option::of("[ -~]{0,8}"))
            .prop_map(|(kind, bits, name)| {
                HoverEvent::new(
                    HoverAction::ShowEntity,
                    vec![Content::Entity {
                        kind,
                        id: uuid::Uuid::from_u128(bits),
                        name: name.map(|text| Box::new(Component::text(text))),
                    }],
                )
            }),
    ]
}

fn kind_strategy() -> impl Strategy<Value = ComponentKind> {
    prop_oneof![
        "[ -~]{0,12}".prop_map(|text| ComponentKind::Text { text }),
        "[a-z.]{1,16}".prop_map(|translate| ComponentKind::Translatable {
            translate,
            with: Vec::new(),
        }),
        ("[A-Za-z0-9_]{1,8}", "[a-z]{1,8}", proptest::option::of("[0-9]{1,4}")).prop_map(
            |(name, objective, value)| ComponentKind::Score {
                name,
                objective,
                value,
            }
        ),
        "@[aeprs]".prop_map(|selector| ComponentKind::Selector {
            selector,
            separator: None,
        }),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = Component> {
    (
        kind_strategy(),
        style_strategy(),
        proptest::option::of("[a-z ]{1,8}"),
        proptest::option::of(click_strategy()),
        proptest::option::of(hover_strategy()),
    )
        .prop_map(|(kind, style, insertion, click, hover)| {
            let mut component = Component::new(kind);
            *component.style_mut() = style;
            component.set_insertion(insertion);
            component.set_click_event(click);
            component.set_hover_event(hover);
            component
        })
}

fn component_strategy() -> impl Strategy<Value = Component> {
    leaf_strategy().prop_recursive(3, 24, 3, |inner| {
        (leaf_strategy(), prop::collection::vec(inner, 0..3)).prop_map(|(mut parent, children)| {
            for child in children {
                parent.add_extra(child);
            }
            parent
        })
    })
}

/// Fragments that stress the legacy scanner: plain text, every kind of
/// code pair (valid and not), and RGB sequences.
fn legacy_input_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9 ./:-]{0,8}".boxed(),
            "§[0-9a-fk-rxzA-FK-RXZ]".boxed(),
            Just("§x§f§f§0§0§5§5".to_owned()).boxed(),
            Just("spigotmc.org".to_owned()).boxed(),
            Just("§".to_owned()).boxed(),
        ],
        0..12,
    )
    .prop_map(|fragments| fragments.concat())
}

proptest! {
    #[test]
    fn prop_document_round_trip(component in component_strategy()) {
        let value = json::to_value(&component).unwrap();
        let parsed = json::from_value(&value).unwrap();
        prop_assert_eq!(parsed, component);
    }

    #[test]
    fn prop_reserialization_is_byte_exact(component in component_strategy()) {
        let first = json::to_string(&component).unwrap();
        let reparsed = json::from_str(&first).unwrap();
        prop_assert_eq!(json::to_string(&reparsed).unwrap(), first);
    }

    #[test]
    fn prop_style_documents_round_trip(style in style_strategy()) {
        let value = json::style_to_value(&style);
        prop_assert_eq!(json::style_from_value(&value).unwrap(), style);
    }

    #[test]
    fn prop_legacy_decoding_never_fails(input in "\\PC*") {
        let parts = from_legacy_text(&input);
        prop_assert!(!parts.is_empty());
    }

    #[test]
    fn prop_legacy_normalization_is_idempotent(input in legacy_input_strategy()) {
        let once = to_legacy_text(&from_legacy_text(&input));
        let twice = to_legacy_text(&from_legacy_text(&once));
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_legacy_runs_survive_the_document_codec(input in legacy_input_strategy()) {
        let parts = from_legacy_text(&input);
        let value = json::sequence_to_value(&parts).unwrap();
        let document = value.to_string();
        let reparsed = json::parse(&document).unwrap();
        prop_assert_eq!(json::sequence_to_value(&reparsed).unwrap().to_string(), document);
    }
}
