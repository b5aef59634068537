use crate::InterviewApp;
use crate::model::Section;
use crate::ui::helpers::bullet_list;
use crate::ui::layout::{colored_card, page_panel};
use crate::view_models::tip_tone_fill;
use egui::{Button, Color32, Context, RichText};

pub fn ui_tips(app: &mut InterviewApp, ctx: &Context) {
    page_panel(ctx, 860.0, |ui, _panel_width| {
        let mut back = false;
        ui.horizontal(|ui| {
            ui.heading(RichText::new(format!("⚡ {}", app.tips.title)).size(26.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                back = ui.add(Button::new("Back to Overview")).clicked();
            });
        });
        ui.add_space(20.0);

        for card in &app.tips.cards {
            colored_card(ui, tip_tone_fill(card.tone), |ui| {
                ui.label(
                    RichText::new(&card.heading)
                        .size(20.0)
                        .strong()
                        .color(Color32::WHITE),
                );
                ui.add_space(8.0);
                bullet_list(ui, &card.items, Color32::WHITE);

                if !card.groups.is_empty() {
                    ui.columns(card.groups.len(), |cols| {
                        for (col, group) in cols.iter_mut().zip(&card.groups) {
                            col.label(RichText::new(&group.heading).strong().color(Color32::WHITE));
                            col.add_space(4.0);
                            bullet_list(col, &group.items, Color32::from_rgb(255, 237, 213));
                        }
                    });
                }
            });
            ui.add_space(16.0);
        }

        if back {
            app.go_to_section(Section::Overview);
        }
    });
}
