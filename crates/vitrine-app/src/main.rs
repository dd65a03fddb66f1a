mod app;
mod cli;
mod config;
mod host_input;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use crate::config::ViewDecl;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("info");
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Vitrine v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    let override_path = args.config.as_deref().map(std::path::Path::new);
    let mut config = config::load_config(override_path).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        config::VitrineConfig::default()
    });

    // CLI URLs replace the configured views, tiled into equal columns.
    // With neither, a single full-window view opens.
    if !args.urls.is_empty() {
        config.views = ViewDecl::columns(&args.urls, args.spin);
    } else if config.views.is_empty() {
        config.views = vec![ViewDecl {
            spin: args.spin,
            ..ViewDecl::default()
        }];
    } else if args.spin {
        for view in &mut config.views {
            view.spin = true;
        }
    }
    tracing::info!("Config loaded ({} views)", config.views.len());

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app::VitrineApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
