use crate::InterviewApp;
use crate::model::Section;
use crate::ui::helpers::{big_list_button, bullet_list};
use crate::ui::layout::{colored_card, page_panel};
use egui::{Color32, Context, RichText};

pub fn ui_overview(app: &mut InterviewApp, ctx: &Context) {
    page_panel(ctx, 860.0, |ui, panel_width| {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new(format!("</> {}", app.overview.title))
                    .size(32.0)
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(RichText::new(&app.overview.subtitle).size(18.0).weak());
        });
        ui.add_space(24.0);

        // Botones de sección en una fila
        let btn_w = (panel_width - 2.0 * ui.spacing().item_spacing.x) / 3.0;
        let mut target = None;
        ui.horizontal(|ui| {
            for section in Section::ALL {
                let label = format!("{}\n{}", section.icon(), section.title());
                if big_list_button(ui, label, btn_w, 72.0, true) {
                    target = Some(section);
                }
            }
        });
        if let Some(section) = target {
            app.go_to_section(section);
        }

        ui.add_space(24.0);

        colored_card(ui, Color32::from_rgb(67, 86, 214), |ui| {
            ui.label(
                RichText::new(&app.overview.learn_heading)
                    .size(22.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.add_space(10.0);
            let topics = &app.overview.topics;
            ui.columns(topics.len().max(1), |cols| {
                for (col, topic) in cols.iter_mut().zip(topics) {
                    col.label(RichText::new(&topic.heading).strong().color(Color32::WHITE));
                    col.add_space(4.0);
                    bullet_list(col, &topic.items, Color32::from_rgb(219, 234, 254));
                }
            });
        });
    });
}
