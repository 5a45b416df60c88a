use clap::Parser;

use anyhow::Result;

use dirlist::cli::{self, Args, CliConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(err) => {
            cli::handle_error(&err);
            std::process::exit(2);
        }
    };

    if let Err(err) = cli::init_logging(&config).and_then(|()| cli::run(&config).map(drop)) {
        cli::handle_error(&err);
        std::process::exit(1);
    }

    Ok(())
}
