use clap::Parser;
use newsai_app::platform::{self, Cli};

fn main() -> anyhow::Result<()> {
    platform::run(Cli::parse())
}
