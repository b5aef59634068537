use langgraph_interview_prep::InterviewApp;
use langgraph_interview_prep::config::AppConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    log::info!("arrancando {} v{}", config.window_title, env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let app = InterviewApp::from_creation_context(cc, &config).inspect_err(|e| {
                log::error!("no se pudo cargar el contenido: {e}");
            })?;
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay documento en la ventana");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(c) => c,
            None => {
                log::error!("no se encontró el canvas `the_canvas_id`");
                return;
            }
        };

        let config = AppConfig::default();
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(InterviewApp::from_creation_context(cc, &config)?))),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("fallo al arrancar eframe: {e:?}");
        }
    });
}
