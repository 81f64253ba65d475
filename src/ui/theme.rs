use fltk::{enums::Color, prelude::*, window::Window};

use crate::screen::DeviceCategory;

pub fn mosque_green() -> Color {
    Color::from_rgb(11, 83, 69)
}

pub fn mosque_green_dark() -> Color {
    Color::from_rgb(6, 59, 48)
}

pub fn accent_gold() -> Color {
    Color::from_rgb(212, 175, 55)
}

pub fn text_white() -> Color {
    Color::from_rgb(245, 245, 245)
}

pub fn text_muted() -> Color {
    Color::from_rgb(180, 200, 195)
}

/// Spacing and type scale for one device category. Bigger screens are
/// viewed from further away, so everything grows with the category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub pad: i32,
    pub title_size: i32,
    pub clock_size: i32,
    pub body_size: i32,
    pub small_size: i32,
}

pub fn scale_for(category: DeviceCategory) -> Scale {
    match category {
        DeviceCategory::Small => Scale {
            pad: 8,
            title_size: 20,
            clock_size: 40,
            body_size: 16,
            small_size: 11,
        },
        DeviceCategory::Medium => Scale {
            pad: 14,
            title_size: 28,
            clock_size: 56,
            body_size: 22,
            small_size: 14,
        },
        DeviceCategory::Large => Scale {
            pad: 22,
            title_size: 40,
            clock_size: 84,
            body_size: 32,
            small_size: 20,
        },
        DeviceCategory::ExtraLarge => Scale {
            pad: 32,
            title_size: 56,
            clock_size: 120,
            body_size: 44,
            small_size: 28,
        },
    }
}

pub fn apply_window_theme(window: &mut Window) {
    window.set_color(mosque_green());
    window.set_label_color(text_white());
}
