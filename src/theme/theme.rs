use serde::{Deserialize, Serialize};
use tracing::warn;

use super::color::Rgb;
use super::settings::RenderSettings;

/// A4 portrait in PDF points.
pub const A4_WIDTH: f32 = 595.28;
pub const A4_HEIGHT: f32 = 841.89;

/// Fully resolved visual style of one render. Built once by
/// [`resolve_theme`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: ThemeName,
    pub layout: LayoutGeometry,
    pub palette: Palette,
    pub fonts: FontSizes,
}

/// Page geometry in points, origin top-left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Fixed height of the header band.
    pub header_height: f32,
    pub logo_position: LogoPosition,
    pub logo_size: LogoSize,
    /// No table row may extend below `page_height - bottom_safety_margin`.
    pub bottom_safety_margin: f32,
}

impl LayoutGeometry {
    pub fn content_width(&self) -> f32 {
        self.page_width - self.margin_left - self.margin_right
    }

    pub fn content_right(&self) -> f32 {
        self.page_width - self.margin_right
    }

    /// Lowest y a table row or totals line may reach.
    pub fn safe_bottom(&self) -> f32 {
        self.page_height - self.bottom_safety_margin
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub text: Rgb,
    pub muted_text: Rgb,
    pub header_background: Rgb,
    pub table_header_background: Rgb,
    pub row_background: Rgb,
    pub alt_row_background: Rgb,
    pub border: Rgb,
    /// Discount sub-rows and footer warnings.
    pub warning: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub title: f32,
    pub heading: f32,
    pub body: f32,
    pub small: f32,
    pub table_header: f32,
    pub total: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LogoSize {
    /// Rendered logo height in points.
    pub fn height(&self) -> f32 {
        match self {
            Self::Small => 32.0,
            Self::Medium => 48.0,
            Self::Large => 64.0,
        }
    }
}

/// Built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Classic,
    Modern,
    Minimal,
    Corporate,
}

impl ThemeName {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Self::Classic),
            "modern" => Some(Self::Modern),
            "minimal" => Some(Self::Minimal),
            "corporate" => Some(Self::Corporate),
            _ => None,
        }
    }

    /// The theme before user overrides.
    pub fn base(&self) -> Theme {
        let palette = match self {
            Self::Classic => Palette {
                primary: Rgb::new(0x1F, 0x29, 0x37),
                secondary: Rgb::new(0x6B, 0x72, 0x80),
                text: Rgb::new(0x11, 0x18, 0x27),
                muted_text: Rgb::new(0x4B, 0x55, 0x63),
                header_background: Rgb::WHITE,
                table_header_background: Rgb::new(0xE5, 0xE7, 0xEB),
                row_background: Rgb::WHITE,
                alt_row_background: Rgb::new(0xF9, 0xFA, 0xFB),
                border: Rgb::new(0xD1, 0xD5, 0xDB),
                warning: Rgb::new(0xB4, 0x53, 0x09),
            },
            Self::Modern => Palette {
                primary: Rgb::new(0x0B, 0x1F, 0x3A),
                secondary: Rgb::new(0x38, 0xBD, 0xF8),
                text: Rgb::new(0x0F, 0x17, 0x2A),
                muted_text: Rgb::new(0x47, 0x55, 0x69),
                header_background: Rgb::new(0x0B, 0x1F, 0x3A),
                table_header_background: Rgb::new(0x0B, 0x1F, 0x3A),
                row_background: Rgb::WHITE,
                alt_row_background: Rgb::new(0xF1, 0xF5, 0xF9),
                border: Rgb::new(0xCB, 0xD5, 0xE1),
                warning: Rgb::new(0xC2, 0x41, 0x0C),
            },
            Self::Minimal => Palette {
                primary: Rgb::new(0x11, 0x11, 0x11),
                secondary: Rgb::new(0x77, 0x77, 0x77),
                text: Rgb::new(0x11, 0x11, 0x11),
                muted_text: Rgb::new(0x66, 0x66, 0x66),
                header_background: Rgb::WHITE,
                table_header_background: Rgb::WHITE,
                row_background: Rgb::WHITE,
                alt_row_background: Rgb::WHITE,
                border: Rgb::new(0xDD, 0xDD, 0xDD),
                warning: Rgb::new(0xB4, 0x53, 0x09),
            },
            Self::Corporate => Palette {
                primary: Rgb::new(0xB9, 0x1C, 0x1C),
                secondary: Rgb::new(0x37, 0x41, 0x51),
                text: Rgb::new(0x1F, 0x29, 0x37),
                muted_text: Rgb::new(0x4B, 0x55, 0x63),
                header_background: Rgb::new(0xF3, 0xF4, 0xF6),
                table_header_background: Rgb::new(0xB9, 0x1C, 0x1C),
                row_background: Rgb::WHITE,
                alt_row_background: Rgb::new(0xFE, 0xF2, 0xF2),
                border: Rgb::new(0xE5, 0xE7, 0xEB),
                warning: Rgb::new(0x92, 0x40, 0x0E),
            },
        };

        let (header_height, logo_position) = match self {
            Self::Classic => (110.0, LogoPosition::Left),
            Self::Modern => (120.0, LogoPosition::Left),
            Self::Minimal => (100.0, LogoPosition::Right),
            Self::Corporate => (120.0, LogoPosition::Center),
        };

        Theme {
            name: *self,
            layout: LayoutGeometry {
                page_width: A4_WIDTH,
                page_height: A4_HEIGHT,
                margin_top: 36.0,
                margin_bottom: 36.0,
                margin_left: 50.0,
                margin_right: 50.0,
                header_height,
                logo_position,
                logo_size: LogoSize::Medium,
                bottom_safety_margin: 70.0,
            },
            palette,
            fonts: FontSizes {
                title: 20.0,
                heading: 11.0,
                body: 9.5,
                small: 8.0,
                table_header: 9.0,
                total: 11.0,
            },
        }
    }
}

/// User-level theme customization. Every field is optional; colors are hex
/// strings as stored in user settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub logo_position: Option<LogoPosition>,
    pub logo_size: Option<LogoSize>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub text_color: Option<String>,
    pub header_background: Option<String>,
    pub table_header_background: Option<String>,
    pub alt_row_background: Option<String>,
}

/// Merge `overrides` onto `base`, producing a new immutable theme.
///
/// Unparseable colors are ignored (the base color is kept) and logged; a
/// bad brand color must never prevent an invoice from being produced.
pub fn resolve_theme(base: &Theme, overrides: &ThemeOverrides) -> Theme {
    let color = |field: &str, value: &Option<String>, fallback: Rgb| -> Rgb {
        match value.as_deref() {
            None => fallback,
            Some(hex) => Rgb::from_hex(hex).unwrap_or_else(|e| {
                warn!(field, error = %e, "ignoring theme color override");
                fallback
            }),
        }
    };

    let p = &base.palette;
    let primary = color("primary_color", &overrides.primary_color, p.primary);
    let palette = Palette {
        primary,
        secondary: color("secondary_color", &overrides.secondary_color, p.secondary),
        text: color("text_color", &overrides.text_color, p.text),
        muted_text: p.muted_text,
        header_background: color(
            "header_background",
            &overrides.header_background,
            p.header_background,
        ),
        table_header_background: color(
            "table_header_background",
            &overrides.table_header_background,
            p.table_header_background,
        ),
        row_background: p.row_background,
        alt_row_background: color(
            "alt_row_background",
            &overrides.alt_row_background,
            p.alt_row_background,
        ),
        border: p.border,
        warning: p.warning,
    };

    Theme {
        name: base.name,
        layout: LayoutGeometry {
            logo_position: overrides.logo_position.unwrap_or(base.layout.logo_position),
            logo_size: overrides.logo_size.unwrap_or(base.layout.logo_size),
            ..base.layout.clone()
        },
        palette,
        fonts: base.fonts.clone(),
    }
}

impl Theme {
    /// Resolve the theme named in `settings` with its overrides applied.
    pub fn from_settings(settings: &RenderSettings) -> Theme {
        resolve_theme(&settings.theme.base(), &settings.overrides)
    }
}
