mod commands;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    cli.run()
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        1 => "ngwrite=debug,ngwrite_angular=debug,ngwrite_core=debug,ngwrite_manifest=debug",
        _ => "ngwrite=trace,ngwrite_angular=trace,ngwrite_core=trace,ngwrite_manifest=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "warn");
        assert_eq!(
            directive_for_verbosity(1),
            "ngwrite=debug,ngwrite_angular=debug,ngwrite_core=debug,ngwrite_manifest=debug"
        );
        assert_eq!(directive_for_verbosity(2), directive_for_verbosity(5));
    }
}
