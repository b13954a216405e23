// CE Autopilot - ui/theme.rs
//
// Colour scheme, status colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{CheckStatus, IntegrationStatus, IssueSeverity};
use crate::core::score::Readiness;
use egui::Color32;

pub const BLUE: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600
pub const GREEN: Color32 = Color32::from_rgb(22, 163, 74); // Green 600
pub const YELLOW: Color32 = Color32::from_rgb(234, 179, 8); // Yellow 500
pub const RED: Color32 = Color32::from_rgb(239, 68, 68); // Red 500
pub const SLATE: Color32 = Color32::from_rgb(100, 116, 139); // Slate 500
pub const SLATE_LIGHT: Color32 = Color32::from_rgb(148, 163, 184); // Slate 400

/// Sidebar colours (always dark, as in the light theme's navigation rail).
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(15, 23, 42); // Slate 900
pub const SIDEBAR_TEXT: Color32 = Color32::from_rgb(203, 213, 225); // Slate 300
pub const SIDEBAR_CAPTION: Color32 = SLATE;

/// Colour of the score ring and its caption.
pub fn readiness_colour(readiness: Readiness) -> Color32 {
    match readiness {
        Readiness::NotCertified => RED,
        Readiness::AlmostReady => YELLOW,
        Readiness::CertifiedReady => GREEN,
    }
}

pub fn check_colour(status: CheckStatus) -> Color32 {
    match status {
        CheckStatus::Pass => GREEN,
        CheckStatus::Fail => RED,
        CheckStatus::Warning => YELLOW,
    }
}

/// Icon glyph for a checklist status.
pub fn check_icon(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "\u{2714}",    // heavy check mark
        CheckStatus::Fail => "\u{2716}",    // heavy multiplication x
        CheckStatus::Warning => "\u{26a0}", // warning sign
    }
}

pub fn severity_colour(severity: IssueSeverity) -> Color32 {
    match severity {
        IssueSeverity::High => RED,
        IssueSeverity::Medium => Color32::from_rgb(217, 119, 6), // Amber 600
        IssueSeverity::Low => SLATE,
    }
}

pub fn integration_colour(status: IntegrationStatus) -> Color32 {
    match status {
        IntegrationStatus::Connected => GREEN,
        IntegrationStatus::Disconnected => SLATE_LIGHT,
    }
}

/// Subtle row background tint derived from an accent colour.
pub fn tint(colour: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(colour.r(), colour.g(), colour.b(), 28)
}

/// Apply the configured theme and body font size to the egui context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            body.size = font_size;
        }
        if let Some(button) = style.text_styles.get_mut(&egui::TextStyle::Button) {
            button.size = font_size;
        }
    });
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const HEADER_HEIGHT: f32 = 56.0;
pub const CARD_MIN_HEIGHT: f32 = 170.0;
pub const SCORE_RING_DIAMETER: f32 = 112.0;
pub const SCORE_RING_STROKE: f32 = 8.0;
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
