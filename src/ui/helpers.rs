// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height))).clicked()
}

/// Etiqueta tipo "píldora" (dificultad, categoría).
pub fn chip(ui: &mut Ui, text: &str, fg: Color32, bg: Color32) {
    ui.label(
        RichText::new(format!(" {text} "))
            .color(fg)
            .background_color(bg)
            .strong(),
    );
}

pub fn bullet_list(ui: &mut Ui, items: &[String], color: Color32) {
    for item in items {
        ui.label(RichText::new(format!("• {item}")).color(color));
    }
}
