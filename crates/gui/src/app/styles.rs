//! Application style configuration

use eframe::egui;

/// Dark theme with compact spacing, text sized from settings
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.menu_corner_radius = egui::CornerRadius::same(4);
    for widget in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = egui::CornerRadius::same(4);
    }

    style.spacing.item_spacing = egui::vec2(6.0, 5.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(4);
    // Numeric fields in the edit panel
    style.spacing.text_edit_width = 72.0;

    style.visuals.panel_fill = egui::Color32::from_rgb(24, 28, 36);
    style.visuals.window_fill = egui::Color32::from_rgb(31, 36, 46);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(0, 120, 150);

    apply_text_styles(&mut style, font_size);

    ctx.set_style(style);
}

/// Re-apply text sizes after the font size setting changed
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    apply_text_styles(&mut style, font_size);
    ctx.set_style(style);
}

fn apply_text_styles(style: &mut egui::Style, font_size: f32) {
    use egui::{FontId, TextStyle};

    let sizes = [
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.3)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
    ];
    style.text_styles.extend(sizes);
}
