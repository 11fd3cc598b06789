/**
 * Comment Board - Desktop Entry Point
 *
 * Implements eframe::App around the comment view. Network calls run on a
 * tokio runtime owned by `main`, which outlives the window.
 */
use eframe::egui;
use std::time::Duration;

use commentbox::egui_app::{theme, views, AppState, CommentApiClient, Config, Reconciler};

/// Repaint cadence so background completions show up without input
const REPAINT_INTERVAL: Duration = Duration::from_millis(200);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,commentbox=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::load()?;
    tracing::info!("Using comment server at {}", config.server_url());

    let runtime = tokio::runtime::Runtime::new()?;
    let api = CommentApiClient::new(&config)?;
    let reconciler = Reconciler::new(api, runtime.handle().clone());
    let poll_interval = config.poll_interval();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Comments",
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(CommentApp::new(AppState::new(reconciler, poll_interval))))
        }),
    )?;

    Ok(())
}

/// Main application state
struct CommentApp {
    state: AppState,
}

impl CommentApp {
    fn new(mut state: AppState) -> Self {
        state.mount();
        Self { state }
    }
}

impl eframe::App for CommentApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
