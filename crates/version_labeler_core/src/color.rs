//! Hex color codes and WCAG 2.0 contrast checks for label colors.
//!
//! GitHub stores label colors as six hex digits without a leading `#`. A
//! [`HexColor`] can only be built from such a string, so any color that reaches
//! the API has been validated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

/// Minimum contrast ratio for normal text under WCAG 2.0 level AA.
pub const MINIMUM_CONTRAST: f64 = 4.5;

/// Returns true if `color` is exactly six hex digits, without `#`.
///
/// # Examples
///
/// ```
/// use version_labeler_core::color::is_hex_color_code;
///
/// assert!(is_hex_color_code("ff0000"));
/// assert!(!is_hex_color_code("#ff0000"));
/// ```
pub fn is_hex_color_code(color: &str) -> bool {
    color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validates a color code.
///
/// # Errors
/// Returns `ValidationError::InvalidColor` if the code is not six hex digits.
pub fn validate_color_code(color: &str) -> Result<(), ValidationError> {
    if !is_hex_color_code(color) {
        return Err(ValidationError::invalid_color(color));
    }
    Ok(())
}

/// A validated 6 digit hex color code without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

/// Black, for label text.
pub const BLACK: &str = "000000";

/// White, for label text.
pub const WHITE: &str = "ffffff";

impl HexColor {
    /// Validates a color code and stores it in lower case, the way GitHub returns it.
    pub fn new(color: impl Into<String>) -> Result<Self, ValidationError> {
        let color = color.into();
        validate_color_code(&color)?;
        Ok(Self(color.to_ascii_lowercase()))
    }

    /// For compile-time constants known to be valid.
    pub(crate) fn new_unchecked(color: &str) -> Self {
        debug_assert!(is_hex_color_code(color));
        Self(color.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the color into its red, green and blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // Validated on construction, so every pair is two hex digits.
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// Relative luminance as defined by WCAG 2.0, between 0 (black) and 1 (white).
    ///
    /// See <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
    pub fn relative_luminance(&self) -> f64 {
        let (r, g, b) = self.rgb();
        let linear = |v: u8| {
            let v = f64::from(v) / 255.0;
            if v <= 0.03928 {
                v / 12.92
            } else {
                ((v + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
    }

    /// The text color (black or white) that reads best on this background.
    ///
    /// Returns `None` when neither reaches [`MINIMUM_CONTRAST`].
    pub fn accessible_text_color(&self) -> Option<HexColor> {
        let black = HexColor(BLACK.to_string());
        let white = HexColor(WHITE.to_string());

        let on_black = contrast_ratio_between(&black, self);
        let on_white = contrast_ratio_between(&white, self);

        let (best, ratio) = if on_black >= on_white {
            (black, on_black)
        } else {
            (white, on_white)
        };

        (ratio >= MINIMUM_CONTRAST).then_some(best)
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn contrast_ratio_between(foreground: &HexColor, background: &HexColor) -> f64 {
    let fg = foreground.relative_luminance();
    let bg = background.relative_luminance();

    let lighter = fg.max(bg);
    let darker = fg.min(bg);

    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors according to WCAG 2.0, from 1 to 21.
///
/// See <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>
///
/// # Errors
/// Returns `ValidationError::InvalidColor` for the first invalid color code.
pub fn contrast_ratio(foreground: &str, background: &str) -> Result<f64, ValidationError> {
    let foreground = HexColor::new(foreground)?;
    let background = HexColor::new(background)?;
    Ok(contrast_ratio_between(&foreground, &background))
}

/// Checks whether two colors meet the WCAG AA contrast threshold of 4.5.
///
/// See <https://www.w3.org/TR/WCAG20/#visual-audio-contrast-contrast>
///
/// # Errors
/// Returns `ValidationError::InvalidColor` for the first invalid color code.
pub fn has_accessible_contrast(foreground: &str, background: &str) -> Result<bool, ValidationError> {
    Ok(contrast_ratio(foreground, background)? >= MINIMUM_CONTRAST)
}
