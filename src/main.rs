use clap::Parser;

use resume_screening::{Cli, Config, gui, logging};

fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());
    logging::init_tracing(config.verbose);

    tracing::debug!(dataset = %config.dataset_path.display(), "Starting");
    gui::run(config)
}
