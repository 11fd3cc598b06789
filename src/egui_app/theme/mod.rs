//! Theme Module
//!
//! Color scheme and styling for the comment window:
//!
//! - Color constants for the brown/tan theme
//! - Frame builders for the top bar, list, cards and form
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame(false).show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_DARK, "Ann");
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
