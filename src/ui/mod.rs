mod helpers;
pub mod layout;
pub mod views;

use crate::app::InterviewApp;
use crate::config::{AppConfig, PREFS_KEY, UiPrefs, resolve_dark_mode};
use crate::error::ContentError;
use crate::model::Section;
use eframe::{App, Frame, get_value, set_value};
use egui::{Context, Visuals};
use layout::bottom_panel;

impl InterviewApp {
    /// Arranque desde eframe: contenido embebido + tema guardado.
    pub fn from_creation_context(
        cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
    ) -> Result<Self, ContentError> {
        let mut app = Self::new()?;
        let saved: Option<UiPrefs> = cc.storage.and_then(|s| get_value(s, PREFS_KEY));
        app.set_dark_mode(&cc.egui_ctx, resolve_dark_mode(config, saved));
        Ok(app)
    }

    pub fn set_dark_mode(&mut self, ctx: &Context, dark: bool) {
        self.dark_mode = dark;
        ctx.set_visuals(if dark { Visuals::dark() } else { Visuals::light() });
    }
}

impl App for InterviewApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Dispatch por sección
        match self.session.section {
            Section::Overview => views::overview::ui_overview(self, ctx),
            Section::Practice => views::practice::ui_practice(self, ctx),
            Section::Tips => views::tips::ui_tips(self, ctx),
        }
    }

    // Solo el tema; la sesión se descarta al cerrar
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(
            storage,
            PREFS_KEY,
            &UiPrefs {
                dark_mode: self.dark_mode,
            },
        );
    }
}
