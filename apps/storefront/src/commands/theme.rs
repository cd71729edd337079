//! # Theme Command
//!
//! Hands the design tokens and the scaled type ramp to the front-end.

use serde::Serialize;
use tracing::debug;

use crate::config::StorefrontConfig;
use aurum_core::theme::{DesignSystem, FontSizes, Responsive, ScreenInfo, DESIGN_SYSTEM};

/// Pixel density assumed when scaling fonts.
const DEFAULT_PIXEL_RATIO: f64 = 3.0;

/// Design tokens plus their values scaled for the configured screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub store_name: String,
    pub screen: ScreenInfo,
    pub tokens: DesignSystem,
    /// `tokens.typography.font_size` run through `scale_font`.
    pub scaled_font_sizes: FontSizes,
}

/// Returns the theme for the configured screen.
pub fn get_theme(config: &StorefrontConfig) -> ThemeResponse {
    debug!(
        width = config.screen.width,
        height = config.screen.height,
        "get_theme command"
    );

    let responsive = Responsive::new(config.screen, DEFAULT_PIXEL_RATIO);

    ThemeResponse {
        store_name: config.store_name.clone(),
        screen: responsive.screen_info(),
        tokens: DESIGN_SYSTEM,
        scaled_font_sizes: scale_font_sizes(&responsive, &DESIGN_SYSTEM.typography.font_size),
    }
}

fn scale_font_sizes(responsive: &Responsive, sizes: &FontSizes) -> FontSizes {
    // scale_font already lands on whole points
    let scale = |size: u16| responsive.scale_font(f64::from(size)) as u16;

    FontSizes {
        xs: scale(sizes.xs),
        sm: scale(sizes.sm),
        base: scale(sizes.base),
        lg: scale(sizes.lg),
        xl: scale(sizes.xl),
        xxl: scale(sizes.xxl),
        xxxl: scale(sizes.xxxl),
        xxxxl: scale(sizes.xxxxl),
    }
}
