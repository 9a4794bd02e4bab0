use qrfaktura::theme::*;

fn dark() -> Rgb {
    Rgb::new(0x11, 0x18, 0x27)
}

// --- Contrast resolver ---

#[test]
fn contrast_sample_backgrounds() {
    let cases = [
        ("#FFFFFF", dark()),
        ("#000000", Rgb::WHITE),
        ("#808080", Rgb::WHITE),
        ("#FF0000", Rgb::WHITE),
        ("#00FF00", dark()),
        ("#0000FF", Rgb::WHITE),
        ("#FFFF00", dark()),
        ("#0B1F3A", Rgb::WHITE),
    ];
    for (hex, expected) in cases {
        let bg: Rgb = hex.parse().unwrap();
        assert_eq!(
            resolve_text_color(bg, dark(), Rgb::WHITE),
            expected,
            "background {hex}"
        );
    }
}

#[test]
fn navy_gets_light_text() {
    let navy = Rgb::from_hex("#0B1F3A").unwrap();
    assert!(is_dark(navy));
    assert_eq!(resolve_text_color(navy, Rgb::BLACK, Rgb::WHITE), Rgb::WHITE);
}

#[test]
fn luminance_extremes() {
    assert!((luminance("#FFFFFF").unwrap() - 1.0).abs() < 1e-9);
    assert!(luminance("000").unwrap().abs() < 1e-9);
    let gray = luminance("#808080").unwrap();
    assert!(gray > 0.21 && gray < 0.22, "{gray}");
}

#[test]
fn hex_parsing() {
    assert_eq!(Rgb::from_hex("#abc").unwrap(), Rgb::new(0xAA, 0xBB, 0xCC));
    assert_eq!(Rgb::from_hex("0b1f3a").unwrap().to_hex(), "#0B1F3A");
    assert!(Rgb::from_hex("#12345").is_err());
    assert!(Rgb::from_hex("#GG0000").is_err());
    assert!(Rgb::from_hex("").is_err());
}

// --- Themes and overrides ---

#[test]
fn named_themes() {
    for name in ["classic", "modern", "minimal", "corporate"] {
        let theme = ThemeName::from_name(name).unwrap().base();
        assert!(theme.layout.header_height > 0.0);
        assert!(theme.layout.safe_bottom() < theme.layout.page_height);
    }
    assert!(ThemeName::from_name("neon").is_none());

    let minimal = ThemeName::Minimal.base();
    assert_eq!(minimal.palette.alt_row_background, minimal.palette.row_background);
    assert_eq!(minimal.layout.logo_position, LogoPosition::Right);
}

#[test]
fn overrides_merge_onto_base() {
    let base = ThemeName::Classic.base();
    let overrides = ThemeOverrides {
        logo_position: Some(LogoPosition::Center),
        logo_size: Some(LogoSize::Large),
        primary_color: Some("#FF6600".into()),
        ..Default::default()
    };
    let theme = resolve_theme(&base, &overrides);

    assert_eq!(theme.layout.logo_position, LogoPosition::Center);
    assert_eq!(theme.layout.logo_size.height(), 64.0);
    assert_eq!(theme.palette.primary, Rgb::new(0xFF, 0x66, 0x00));
    assert_eq!(theme.palette.text, base.palette.text);
    assert_eq!(theme.layout.header_height, base.layout.header_height);
    // base untouched
    assert_eq!(base.layout.logo_position, LogoPosition::Left);
}

#[test]
fn invalid_override_color_keeps_base() {
    let base = ThemeName::Modern.base();
    let overrides = ThemeOverrides {
        header_background: Some("not-a-color".into()),
        alt_row_background: Some("#FFF".into()),
        ..Default::default()
    };
    let theme = resolve_theme(&base, &overrides);
    assert_eq!(theme.palette.header_background, base.palette.header_background);
    assert_eq!(theme.palette.alt_row_background, Rgb::WHITE);
}

#[test]
fn empty_overrides_are_identity() {
    let base = ThemeName::Corporate.base();
    assert_eq!(resolve_theme(&base, &ThemeOverrides::default()), base);
}

// --- Settings ---

#[test]
fn settings_from_json() {
    let settings = RenderSettings::from_json(
        r##"{
            "theme": "minimal",
            "overrides": { "logo_size": "small", "text_color": "#222222" },
            "quantity_decimals": 3,
            "payment_slip": false
        }"##,
    )
    .unwrap();
    assert_eq!(settings.theme, ThemeName::Minimal);
    assert_eq!(settings.quantity_decimals(), 3);
    assert!(!settings.payment_slip);
    assert!(settings.page_numbers);

    let theme = Theme::from_settings(&settings);
    assert_eq!(theme.layout.logo_size, LogoSize::Small);
    assert_eq!(theme.palette.text, Rgb::new(0x22, 0x22, 0x22));
}

#[test]
fn settings_defaults_and_clamping() {
    let settings = RenderSettings::from_json("{}").unwrap();
    assert_eq!(settings, RenderSettings::default());
    assert_eq!(settings.theme, ThemeName::Classic);

    let settings = RenderSettings::from_json(r#"{ "quantity_decimals": 7 }"#).unwrap();
    assert_eq!(settings.quantity_decimals(), 3);

    assert!(RenderSettings::from_json(r#"{ "theme": "neon" }"#).is_err());
}

#[test]
fn rgb_serializes_as_hex() {
    let json = serde_json::to_string(&Rgb::new(0x0B, 0x1F, 0x3A)).unwrap();
    assert_eq!(json, "\"#0B1F3A\"");
    let back: Rgb = serde_json::from_str("\"#fff\"").unwrap();
    assert_eq!(back, Rgb::WHITE);
}
