use petaldom::{Color, ColorContext, ColorError, EmptyTheme, Rgb, WidgetTheme};

#[test]
fn test_hex_long_form() {
    assert_eq!(Color::hex("#96a9bc").unwrap(), Color::rgb(0x96, 0xa9, 0xbc));
    assert_eq!(Color::hex("96a9bc").unwrap(), Color::rgb(0x96, 0xa9, 0xbc));
}

#[test]
fn test_hex_short_form() {
    assert_eq!(Color::hex("#eee").unwrap(), Color::rgb(0xee, 0xee, 0xee));
}

#[test]
fn test_hex_invalid() {
    let err = Color::hex("#zzzzzz").unwrap_err();
    let ColorError::InvalidHex { input, .. } = err;
    assert_eq!(input, "#zzzzzz");
}

#[test]
fn test_resolve_theme_variable() {
    let theme = WidgetTheme::new();
    let cx = ColorContext::new(&theme);

    assert_eq!(
        cx.resolve(&Color::var("selected")),
        Some(Rgb::new(0xee, 0xee, 0xee))
    );
}

#[test]
fn test_resolve_unknown_variable() {
    let cx = ColorContext::new(&EmptyTheme);
    assert_eq!(cx.resolve(&Color::var("selected")), None);
}

#[test]
fn test_resolve_variable_chain() {
    let mut theme = WidgetTheme::new();
    theme.set("accent", Color::var("arrow"));
    let cx = ColorContext::new(&theme);

    assert_eq!(
        cx.resolve(&Color::var("accent")),
        Some(Rgb::new(0x96, 0xa9, 0xbc))
    );
}

#[test]
fn test_resolve_cycle_gives_up() {
    let mut theme = WidgetTheme::new();
    theme.set("a", Color::var("b"));
    theme.set("b", Color::var("a"));
    let cx = ColorContext::new(&theme);

    assert_eq!(cx.resolve(&Color::var("a")), None);
}

#[test]
fn test_theme_hex_overrides() {
    let theme = WidgetTheme::new()
        .with_hex([("selected", "#dddddd")])
        .unwrap();
    let cx = ColorContext::new(&theme);

    assert_eq!(
        cx.resolve(&Color::var("selected")),
        Some(Rgb::new(0xdd, 0xdd, 0xdd))
    );
    assert!(WidgetTheme::new().with_hex([("selected", "nope")]).is_err());
}
