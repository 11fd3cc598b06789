//! Color Constants for the Comment Board Theme
//!
//! Warm brown/tan scheme shared by every panel of the comment window.

use eframe::egui::Color32;

/// Panel background - Deep brown
pub const PANEL_BG: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Comment list background - Off-white
pub const LIST_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Comment card background - Light tan
pub const CARD_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Comment card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Form bar background - Light tan
pub const FORM_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Form bar border - Muted tan
pub const FORM_BORDER: Color32 = Color32::from_rgb(0xC3, 0xA9, 0x90);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Muted text for pending entries and hints
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Settled indicator - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// Error notice - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Pending indicator - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Post button background
pub const BUTTON_PRIMARY: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Hovered widget background
pub const HOVER_ITEM: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Selection highlight
pub const SELECTION: Color32 = Color32::from_rgb(0x4A, 0x2E, 0x22);

/// Delete action
pub const DELETE_LINK: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);
