use crate::InterviewApp;
use crate::model::Section;
use crate::ui::helpers::chip;
use crate::ui::layout::{code_editor_solution, colored_card, nav_button_row, page_panel};
use crate::view_models::difficulty_colors;
use egui::{Button, Color32, Context, ProgressBar, RichText, TextEdit};

pub fn ui_practice(app: &mut InterviewApp, ctx: &Context) {
    page_panel(ctx, 860.0, |ui, panel_width| {
        // ---------- CABECERA: puntuación, volver, reiniciar ----------
        let badge = app.score_badge();
        let (mut back, mut reset) = (false, false);
        ui.horizontal(|ui| {
            ui.heading(RichText::new("🧠 Practice Questions").size(26.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                reset = ui.add(Button::new("🔄 Reset")).clicked();
                back = ui.add(Button::new("Back")).clicked();
                ui.label(RichText::new(format!("🏆 {}", badge.label())).strong());
            });
        });
        if back {
            app.go_to_section(Section::Overview);
            return;
        }
        if reset {
            app.reset_all();
        }
        ui.add_space(16.0);

        let (Some(header), Some(question)) = (app.question_header(), app.current().cloned()) else {
            ui.label("No questions available.");
            return;
        };

        // ---------- PREGUNTA i DE N + ETIQUETAS ----------
        ui.horizontal(|ui| {
            ui.label(RichText::new(header.label()).size(17.0).strong());
            let (fg, bg) = difficulty_colors(header.difficulty);
            chip(ui, header.difficulty.label(), fg, bg);
            chip(
                ui,
                &header.category,
                Color32::from_rgb(30, 64, 175),
                Color32::from_rgb(219, 234, 254),
            );
        });
        ui.add_space(8.0);
        ui.add(ProgressBar::new(app.progress_fraction()).desired_width(panel_width));
        ui.add_space(16.0);

        colored_card(ui, Color32::from_rgb(99, 82, 220), |ui| {
            ui.label(RichText::new("Question:").size(20.0).strong().color(Color32::WHITE));
            ui.add_space(6.0);
            ui.label(RichText::new(&question.question).size(17.0).color(Color32::WHITE));
        });
        ui.add_space(16.0);

        // ---------- BORRADOR ----------
        ui.label(RichText::new("Your Answer:").strong());
        let mut draft = app.session.draft.clone();
        let edited = ui
            .add(
                TextEdit::multiline(&mut draft)
                    .hint_text("Type your answer here...")
                    .desired_rows(6)
                    .desired_width(panel_width),
            )
            .changed();
        if edited {
            app.set_draft(draft);
        }
        ui.add_space(16.0);

        // ---------- RESPUESTA DE EJEMPLO ----------
        if app.session.answer_shown {
            colored_card(ui, Color32::from_rgb(240, 253, 244), |ui| {
                ui.label(
                    RichText::new("✔ Sample Answer:")
                        .size(17.0)
                        .strong()
                        .color(Color32::from_rgb(22, 101, 52)),
                );
                ui.add_space(6.0);
                if question.answer_is_code() {
                    code_editor_solution(ui, panel_width - 32.0, &question.answer, app.dark_mode, 360.0);
                } else {
                    ui.label(RichText::new(&question.answer).color(Color32::from_rgb(21, 128, 61)));
                }
            });
            ui.add_space(16.0);
        }

        // ---------- NAVEGACIÓN ----------
        let show_label = (!app.session.answer_shown).then_some("Show Answer");
        let (prev, show, next) = nav_button_row(
            ui,
            panel_width,
            ("Previous", app.has_previous()),
            show_label,
            ("Next ▶", app.has_next()),
        );
        if prev {
            app.previous();
        }
        if show {
            app.reveal_answer();
        }
        if next {
            app.next();
        }

        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Practice regularly and review the documentation for best results!")
                    .weak(),
            );
        });
    });
}
