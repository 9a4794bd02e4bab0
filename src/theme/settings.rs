use serde::{Deserialize, Serialize};

use super::theme::{ThemeName, ThemeOverrides};
use crate::core::FakturaError;

/// Per-document render configuration, as stored in user settings.
///
/// ```
/// use qrfaktura::theme::*;
///
/// let settings = RenderSettings::from_json(
///     r##"{ "theme": "modern", "overrides": { "logo_position": "right", "primary_color": "#FF6600" } }"##,
/// ).unwrap();
/// assert_eq!(settings.theme, ThemeName::Modern);
/// assert_eq!(settings.quantity_decimals(), 2);
/// assert!(settings.payment_slip);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default)]
    pub overrides: ThemeOverrides,
    /// Fraction digits for quantities (2 or 3).
    #[serde(default = "default_quantity_decimals")]
    pub quantity_decimals: u8,
    /// Attach a QR-bill to invoices.
    #[serde(default = "default_true")]
    pub payment_slip: bool,
    /// Print "Page n / m" in the footer.
    #[serde(default = "default_true")]
    pub page_numbers: bool,
}

fn default_quantity_decimals() -> u8 {
    2
}

fn default_true() -> bool {
    true
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            overrides: ThemeOverrides::default(),
            quantity_decimals: default_quantity_decimals(),
            payment_slip: true,
            page_numbers: true,
        }
    }
}

impl RenderSettings {
    /// Parse settings from a JSON user-settings blob. Missing fields take
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, FakturaError> {
        serde_json::from_str(json)
            .map_err(|e| FakturaError::Theme(format!("invalid render settings: {e}")))
    }

    /// Quantity fraction digits, clamped to the supported 2–3.
    pub fn quantity_decimals(&self) -> u32 {
        u32::from(self.quantity_decimals.clamp(2, 3))
    }
}
