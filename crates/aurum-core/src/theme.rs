//! # Design Tokens
//!
//! Centralized styling constants for the storefront, plus the responsive
//! scaling helpers the screens use to size them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DESIGN_SYSTEM                                                          │
//! │  ├── colors      primary gold #D4AF37, slate secondary, red accent     │
//! │  ├── spacing     4 · 8 · 16 · 24 · 32 · 48 · 64                         │
//! │  ├── radius      4 · 8 · 12 · 16 · 24 · 9999                            │
//! │  ├── typography  sizes 12..36, line heights, weights                    │
//! │  ├── shadows     sm / md / lg                                           │
//! │  └── z_index     base 1 → tooltip 300                                   │
//! │                                                                         │
//! │  Responsive::new(screen, pixel_ratio)                                   │
//! │  └── scales against the 390 × 844 reference screen                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here serializes to the same JSON shape the front-end theme
//! file uses, so it can be shipped as-is.

use serde::Serialize;

// =============================================================================
// Token Types
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystem {
    pub colors: Colors,
    pub spacing: Spacing,
    pub radius: Radius,
    pub typography: Typography,
    pub shadows: Shadows,
    pub z_index: ZIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub secondary_light: &'static str,
    pub secondary_dark: &'static str,
    pub accent: &'static str,
    pub accent_light: &'static str,
    pub accent_dark: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub dark: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub inverse: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderColors {
    pub light: &'static str,
    pub medium: &'static str,
    pub dark: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    #[serde(rename = "2xl")]
    pub xxl: u16,
    #[serde(rename = "3xl")]
    pub xxxl: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Radius {
    pub xs: u16,
    pub sm: u16,
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    pub full: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_size: FontSizes,
    pub line_height: LineHeights,
    pub font_weight: FontWeights,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSizes {
    pub xs: u16,
    pub sm: u16,
    pub base: u16,
    pub lg: u16,
    pub xl: u16,
    #[serde(rename = "2xl")]
    pub xxl: u16,
    #[serde(rename = "3xl")]
    pub xxxl: u16,
    #[serde(rename = "4xl")]
    pub xxxxl: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineHeights {
    pub tight: f32,
    pub normal: f32,
    pub relaxed: f32,
}

/// Weights are strings because that is what the native text style expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontWeights {
    pub regular: &'static str,
    pub medium: &'static str,
    pub semibold: &'static str,
    pub bold: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shadows {
    pub sm: Shadow,
    pub md: Shadow,
    pub lg: Shadow,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub shadow_color: &'static str,
    pub shadow_offset: ShadowOffset,
    pub shadow_opacity: f32,
    pub shadow_radius: u16,
    /// Android elevation.
    pub elevation: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShadowOffset {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZIndex {
    pub base: u16,
    pub dropdown: u16,
    pub modal: u16,
    pub popover: u16,
    pub tooltip: u16,
}

// =============================================================================
// Token Values
// =============================================================================

const fn shadow(height: u16, opacity: f32, radius: u16, elevation: u16) -> Shadow {
    Shadow {
        shadow_color: "#000",
        shadow_offset: ShadowOffset { width: 0, height },
        shadow_opacity: opacity,
        shadow_radius: radius,
        elevation,
    }
}

/// The storefront's design tokens.
pub const DESIGN_SYSTEM: DesignSystem = DesignSystem {
    colors: Colors {
        primary: "#D4AF37",
        primary_light: "#EBDFBA",
        primary_dark: "#8A6F20",
        secondary: "#1F2937",
        secondary_light: "#374151",
        secondary_dark: "#111827",
        accent: "#EF4444",
        accent_light: "#FCA5A5",
        accent_dark: "#DC2626",
        success: "#10B981",
        warning: "#F59E0B",
        error: "#EF4444",
        info: "#3B82F6",
        background: BackgroundColors {
            primary: "#FFFFFF",
            secondary: "#F9FAFB",
            dark: "#000000",
        },
        text: TextColors {
            primary: "#111827",
            secondary: "#6B7280",
            tertiary: "#9CA3AF",
            inverse: "#FFFFFF",
        },
        border: BorderColors {
            light: "#E5E7EB",
            medium: "#D1D5DB",
            dark: "#9CA3AF",
        },
    },
    spacing: Spacing {
        xs: 4,
        sm: 8,
        md: 16,
        lg: 24,
        xl: 32,
        xxl: 48,
        xxxl: 64,
    },
    radius: Radius {
        xs: 4,
        sm: 8,
        md: 12,
        lg: 16,
        xl: 24,
        full: 9999,
    },
    typography: Typography {
        font_size: FontSizes {
            xs: 12,
            sm: 14,
            base: 16,
            lg: 18,
            xl: 20,
            xxl: 24,
            xxxl: 30,
            xxxxl: 36,
        },
        line_height: LineHeights {
            tight: 1.2,
            normal: 1.5,
            relaxed: 1.75,
        },
        font_weight: FontWeights {
            regular: "400",
            medium: "500",
            semibold: "600",
            bold: "700",
        },
    },
    shadows: Shadows {
        sm: shadow(1, 0.05, 2, 2),
        md: shadow(2, 0.1, 4, 4),
        lg: shadow(4, 0.15, 8, 8),
    },
    z_index: ZIndex {
        base: 1,
        dropdown: 10,
        modal: 100,
        popover: 200,
        tooltip: 300,
    },
};

// =============================================================================
// Responsive Scaling
// =============================================================================

/// Logical screen size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    /// Reference device the tokens were designed on (390 × 844).
    pub const BASE: Screen = Screen {
        width: 390.0,
        height: 844.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Screen { width, height }
    }

    /// Small below 375pt wide, large from 414pt.
    pub fn device_class(&self) -> DeviceClass {
        if self.width < 375.0 {
            DeviceClass::Small
        } else if self.width < 414.0 {
            DeviceClass::Medium
        } else {
            DeviceClass::Large
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Small,
    Medium,
    Large,
}

/// Screen facts for the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenInfo {
    pub width: f64,
    pub height: f64,
    pub device_class: DeviceClass,
}

/// Sizes tokens for a concrete screen.
///
/// ## Example
/// ```rust
/// use aurum_core::theme::{Responsive, Screen};
///
/// let r = Responsive::new(Screen::new(430.0, 932.0), 3.0);
/// assert_eq!(r.scale(16.0), 18.0);
/// assert_eq!(r.moderate_scale(16.0, 0.5), 17.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Responsive {
    screen: Screen,
    pixel_ratio: f64,
}

impl Responsive {
    pub fn new(screen: Screen, pixel_ratio: f64) -> Self {
        Responsive {
            screen,
            pixel_ratio,
        }
    }

    fn width_ratio(&self) -> f64 {
        self.screen.width / Screen::BASE.width
    }

    fn height_ratio(&self) -> f64 {
        self.screen.height / Screen::BASE.height
    }

    /// Percentage of screen width.
    pub fn wp(&self, percentage: f64) -> f64 {
        self.screen.width * percentage / 100.0
    }

    /// Percentage of screen height.
    pub fn hp(&self, percentage: f64) -> f64 {
        self.screen.height * percentage / 100.0
    }

    /// Scales a dimension by screen width.
    pub fn scale(&self, size: f64) -> f64 {
        round_half_up(size * self.width_ratio())
    }

    /// Scales a dimension by screen height.
    pub fn vertical_scale(&self, size: f64) -> f64 {
        round_half_up(size * self.height_ratio())
    }

    /// Blends unscaled and width-scaled size; `factor` 0.5 is the usual.
    pub fn moderate_scale(&self, size: f64, factor: f64) -> f64 {
        round_half_up(size + (self.width_ratio() - 1.0) * size * factor)
    }

    /// Scales a font size, snapping to a physical pixel first.
    pub fn scale_font(&self, size: f64) -> f64 {
        round_half_up(self.round_to_nearest_pixel(size * self.width_ratio()))
    }

    /// Rounds a layout size to the closest value that maps to a whole
    /// number of physical pixels.
    pub fn round_to_nearest_pixel(&self, size: f64) -> f64 {
        if self.pixel_ratio <= 0.0 {
            return size;
        }
        round_half_up(size * self.pixel_ratio) / self.pixel_ratio
    }

    pub fn screen_info(&self) -> ScreenInfo {
        ScreenInfo {
            width: self.screen.width,
            height: self.screen.height,
            device_class: self.screen.device_class(),
        }
    }
}

impl Default for Responsive {
    fn default() -> Self {
        Responsive::new(Screen::BASE, 3.0)
    }
}

/// Halves round toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_screen_is_identity() {
        let r = Responsive::default();
        assert_eq!(r.scale(16.0), 16.0);
        assert_eq!(r.vertical_scale(24.0), 24.0);
        assert_eq!(r.moderate_scale(16.0, 0.5), 16.0);
        assert_eq!(r.scale_font(14.0), 14.0);
        assert_eq!(r.wp(50.0), 195.0);
        assert_eq!(r.hp(25.0), 211.0);
    }

    #[test]
    fn test_large_screen_scaling() {
        let r = Responsive::new(Screen::new(430.0, 932.0), 3.0);
        assert_eq!(r.scale(16.0), 18.0);
        assert_eq!(r.moderate_scale(16.0, 0.5), 17.0);
        assert_eq!(r.moderate_scale(16.0, 0.0), 16.0);
        assert_eq!(r.vertical_scale(844.0), 932.0);
        assert_eq!(r.scale_font(16.0), 18.0);
    }

    #[test]
    fn test_round_to_nearest_pixel() {
        let r = Responsive::new(Screen::BASE, 2.0);
        assert_eq!(r.round_to_nearest_pixel(10.3), 10.5);
        assert_eq!(r.round_to_nearest_pixel(10.2), 10.0);

        let unknown_density = Responsive::new(Screen::BASE, 0.0);
        assert_eq!(unknown_density.round_to_nearest_pixel(10.3), 10.3);
    }

    #[test]
    fn test_device_class_boundaries() {
        assert_eq!(Screen::new(374.0, 800.0).device_class(), DeviceClass::Small);
        assert_eq!(Screen::new(375.0, 800.0).device_class(), DeviceClass::Medium);
        assert_eq!(Screen::new(413.0, 800.0).device_class(), DeviceClass::Medium);
        assert_eq!(Screen::new(414.0, 800.0).device_class(), DeviceClass::Large);
    }

    #[test]
    fn test_tokens_serialize_like_theme_file() {
        let json = serde_json::to_value(DESIGN_SYSTEM).unwrap();
        assert_eq!(json["colors"]["primary"], "#D4AF37");
        assert_eq!(json["colors"]["background"]["secondary"], "#F9FAFB");
        assert_eq!(json["spacing"]["2xl"], 48);
        assert_eq!(json["radius"]["full"], 9999);
        assert_eq!(json["typography"]["fontSize"]["4xl"], 36);
        assert_eq!(json["typography"]["fontWeight"]["semibold"], "600");
        assert_eq!(json["shadows"]["md"]["shadowOffset"]["height"], 2);
        assert_eq!(json["zIndex"]["tooltip"], 300);
    }

    #[test]
    fn test_screen_info_serializes_device_class() {
        let info = Responsive::new(Screen::new(360.0, 780.0), 2.0).screen_info();
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["deviceClass"], "small");
        assert_eq!(json["width"], 360.0);
    }
}
