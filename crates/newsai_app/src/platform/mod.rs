mod app;
mod cli;
pub mod config;
pub mod controller;
pub mod effects;
pub mod keys;
pub mod logging;
pub mod ui;

use std::time::Duration;

use anyhow::Context;
use newsai_core::{InputMode, Msg};
use newsai_engine::EngineHandle;
use newsai_logging::newsai_info;

pub use cli::Cli;
pub use config::AppConfig;
pub use controller::Controller;

/// Entry point shared by the binary: resolve config, set up logging, then run
/// either the interactive UI or a single analysis.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let (config, load) = AppConfig::resolve(&cli, |key| std::env::var(key).ok());
    let one_shot = cli.one_shot();

    let destination = if one_shot.is_some() || config.log_to_terminal {
        logging::LogDestination::Terminal
    } else {
        logging::LogDestination::File
    };
    logging::initialize(destination, config.log_level());
    load.report();
    newsai_info!("Using analysis endpoint {}", config.endpoint);

    let engine =
        EngineHandle::new(config.analyze_settings()).context("failed to start request worker")?;
    let controller = Controller::new(engine);

    match one_shot {
        Some((mode, content)) => run_once(controller, mode, content),
        None => app::run_tui(controller, config.tick()),
    }
}

fn run_once(mut controller: Controller, mode: InputMode, content: String) -> anyhow::Result<()> {
    controller.dispatch(Msg::SetMode(mode));
    controller.dispatch(Msg::SetInput(content));
    if !controller.dispatch(Msg::SubmitStart) {
        anyhow::bail!("nothing to analyze: input is blank");
    }
    controller.settle(Duration::from_millis(100));

    let view = controller.view();
    if let Some(message) = view.error {
        anyhow::bail!(message);
    }
    for line in ui::render::plain_lines(&view) {
        println!("{line}");
    }
    Ok(())
}
