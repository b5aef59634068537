use thiserror::Error;

/// Fallos al cargar el contenido embebido. Es el único punto falible de la app.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no se pudo parsear el contenido YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("el banco de preguntas está vacío")]
    EmptyBank,
}
