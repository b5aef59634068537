use serde::{Deserialize, Serialize};

pub const THEME_ENV_VAR: &str = "INTERVIEW_PREP_THEME";

/// Parámetros de arranque de la ventana.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    // Si viene forzado por entorno tiene prioridad sobre lo guardado
    pub dark_mode: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "LangGraph Interview Prep".to_owned(),
            window_size: [960.0, 760.0],
            min_window_size: [560.0, 480.0],
            dark_mode: None,
        }
    }
}

impl AppConfig {
    /// Aplica `INTERVIEW_PREP_THEME` (dark|light) sobre los valores por defecto.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var(THEME_ENV_VAR) {
            match parse_theme(&value) {
                Some(dark) => config.dark_mode = Some(dark),
                None => log::warn!("{THEME_ENV_VAR}={value:?} no reconocido, se ignora"),
            }
        }
        config
    }
}

/// `Some(true)` para oscuro, `Some(false)` para claro.
pub fn parse_theme(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "dark" | "oscuro" => Some(true),
        "light" | "claro" => Some(false),
        _ => None,
    }
}

/// Preferencias que sí se guardan entre ejecuciones (la sesión no).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

pub const PREFS_KEY: &str = "ui_prefs";

/// Orden de prioridad: entorno, preferencias guardadas, claro.
pub fn resolve_dark_mode(config: &AppConfig, saved: Option<UiPrefs>) -> bool {
    config
        .dark_mode
        .or(saved.map(|p| p.dark_mode))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_values_are_case_insensitive() {
        assert_eq!(parse_theme("Dark"), Some(true));
        assert_eq!(parse_theme(" light "), Some(false));
        assert_eq!(parse_theme("oscuro"), Some(true));
    }

    #[test]
    fn unknown_theme_is_ignored() {
        assert_eq!(parse_theme("sepia"), None);
        assert_eq!(parse_theme(""), None);
    }

    #[test]
    fn env_theme_wins_over_saved_prefs() {
        let saved = Some(UiPrefs { dark_mode: true });
        let forced = AppConfig {
            dark_mode: Some(false),
            ..AppConfig::default()
        };
        assert!(!resolve_dark_mode(&forced, saved));
        assert!(resolve_dark_mode(&AppConfig::default(), saved));
        assert!(!resolve_dark_mode(&AppConfig::default(), None));
    }

    #[test]
    fn default_config_does_not_force_a_theme() {
        let config = AppConfig::default();
        assert_eq!(config.dark_mode, None);
        assert_eq!(config.window_title, "LangGraph Interview Prep");
    }
}
