//! termcfg - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termcfg::cli::{Cli, Commands, PresetCommands};
use termcfg::console::current_theme;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        let theme = current_theme();
        eprintln!("{} {:#}", theme.error_text("Error:"), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check(source) => commands::check::handle(&source),
        Commands::Show(source) => commands::show::handle(&source),
        Commands::Export { source, format } => commands::export::handle(&source, format),
        Commands::Preview { source, no_color } => commands::preview::handle(&source, no_color),
        Commands::Presets(cmd) => match cmd {
            PresetCommands::List => commands::presets::handle_list(),
            PresetCommands::Show { name } => commands::presets::handle_show(&name),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Install a stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("termcfg={}", default_level)));

    let use_ansi = atty::is(atty::Stream::Stderr) && std::env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
