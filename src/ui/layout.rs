use crate::InterviewApp;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Vec2};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

pub fn bottom_panel(app: &mut InterviewApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    app.set_dark_mode(ctx, true);
                }
                if ui.button("☀ Light mode").clicked() {
                    app.set_dark_mode(ctx, false);
                }
            }
        );
    });
}

/// Panel central con scroll y un marco de ancho máximo `max_width`.
pub fn page_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui, f32)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = (ui.available_width() * 0.97).min(max_width);
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .corner_radius(egui::CornerRadius::same(12))
                        .inner_margin(egui::Margin::symmetric(24, 24))
                        .show(ui, |ui| {
                            ui.set_width(w);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                inner(ui, w);
                            });
                        });
                });
            });
    });
}

/// Tarjeta de color con texto claro.
pub fn colored_card(ui: &mut Ui, fill: egui::Color32, inner: impl FnOnce(&mut Ui)) {
    Frame::default()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}

/// Editor de sólo lectura para respuestas de código (Python).
pub fn code_editor_solution(ui: &mut Ui, width: f32, code: &str, dark: bool, max_height: f32) {
    let font_id = egui::TextStyle::Monospace.resolve(ui.style());
    let fontsize = font_id.size;
    let rows = code.lines().count().max(4);
    let theme = if dark {
        ColorTheme::GITHUB_DARK
    } else {
        ColorTheme::GITHUB_LIGHT
    };

    // Los cambios sobre la copia se descartan
    let mut buf = code.to_owned();
    ScrollArea::vertical()
        .id_salt("solution_scroll")
        .max_height(max_height)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.set_width(width);
            CodeEditor::default()
                .id_source("solution")
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(theme)
                .with_syntax(Syntax::python())
                .with_numlines(true)
                .vscroll(false)
                .show(ui, &mut buf);
        });
}

/// Dibuja tres botones en una fila: izquierda, centro (opcional) y derecha.
/// Devuelve (clic izquierdo, clic centro, clic derecho).
pub fn nav_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    center: Option<&str>,
    right: (&str, bool),
) -> (bool, bool, bool) {
    let btn_w = (panel_width - 16.0) / 3.0;
    let mut clicked = (false, false, false);
    ui.horizontal(|ui| {
        clicked.0 = ui
            .add_enabled(left.1, Button::new(left.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
        match center {
            Some(label) => {
                clicked.1 = ui
                    .add(Button::new(label).min_size(Vec2::new(btn_w, 36.0)))
                    .clicked();
            }
            None => {
                ui.add_space(btn_w + ui.spacing().item_spacing.x);
            }
        }
        clicked.2 = ui
            .add_enabled(right.1, Button::new(right.0).min_size(Vec2::new(btn_w, 36.0)))
            .clicked();
    });
    clicked
}
