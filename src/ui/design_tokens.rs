// SPDX-License-Identifier: MPL-2.0
//! Visual constants shared by every gallery widget.
//!
//! Widgets never hard-code a color or a pixel size; they pick one of the
//! scales below so cards, swatches and toasts stay in proportion.
//!
//! ```
//! use product_showcase::ui::design_tokens::{palette, spacing};
//!
//! let swatch = palette::ROSE_GOLD;
//! assert!(swatch.r > swatch.b);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_50: Color = Color::from_rgb(0.96, 0.96, 0.96);

    /// Champagne accent for buttons and the active bullet.
    pub const PRIMARY_400: Color = Color::from_rgb(0.78, 0.66, 0.47);
    pub const PRIMARY_500: Color = Color::from_rgb(0.66, 0.53, 0.33);
    pub const PRIMARY_600: Color = Color::from_rgb(0.55, 0.43, 0.25);

    /// `#E6CA97`
    pub const YELLOW_GOLD: Color = Color::from_rgb8(0xE6, 0xCA, 0x97);
    /// `#D9D9D9`
    pub const WHITE_GOLD: Color = Color::from_rgb8(0xD9, 0xD9, 0xD9);
    /// `#E1AA49`
    pub const ROSE_GOLD: Color = Color::from_rgb8(0xE1, 0xAA, 0x49);

    /// `#F6D06F`, filled rating star.
    pub const STAR: Color = Color::from_rgb8(0xF6, 0xD0, 0x6F);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Half star and disabled controls.
    pub const DIMMED: f32 = 0.45;
}

/// Multiples of a 4px step.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    /// Also the gap between carousel slides.
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Height reserved for the card image, whatever its aspect ratio.
    pub const CARD_IMAGE_HEIGHT: f32 = 240.0;
    pub const SWATCH: f32 = 22.0;
    pub const BULLET: f32 = 10.0;
    /// Side of the previous/next carousel buttons.
    pub const NAV_BUTTON: f32 = 40.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// Page heading.
    pub const TITLE_LG: f32 = 30.0;
    /// Product name.
    pub const TITLE_SM: f32 = 18.0;
    /// Price and stars.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Selected swatch ring, toast accent.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Large enough to round any control into a circle or pill.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const CARD: Shadow = Shadow {
        color: Color {
            a: 0.12,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };

    /// Floating elements: toasts, tooltips.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS && spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD && spacing::MD < spacing::LG);
    assert!(sizing::BULLET < sizing::SWATCH && sizing::SWATCH < sizing::NAV_BUTTON);
    assert!(typography::CAPTION < typography::BODY && typography::BODY < typography::BODY_LG);
    assert!(typography::TITLE_SM < typography::TITLE_LG);
    assert!(opacity::DIMMED > opacity::OVERLAY_SUBTLE && opacity::DIMMED < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_gap_matches_spacing_scale() {
        assert_eq!(crate::ui::state::SLIDE_SPACING, spacing::LG);
    }

    #[test]
    fn metal_swatches_match_their_hex_codes() {
        assert_eq!(palette::YELLOW_GOLD, Color::from_rgb8(230, 202, 151));
        assert_eq!(palette::WHITE_GOLD, Color::from_rgb8(217, 217, 217));
        assert_eq!(palette::ROSE_GOLD, Color::from_rgb8(225, 170, 73));
        assert_ne!(palette::YELLOW_GOLD, palette::ROSE_GOLD);
    }
}
