use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomodoro::cli::args::{Cli, Commands};
use pomodoro::cli::commands::{self, TimerAction};
use pomodoro::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        print!("{}", commands::completions(shell)?);
        return Ok(());
    }

    let settings = Config::load()?;
    let format = cli.output.unwrap_or(settings.general.default_output);

    let output = match cli.command {
        Commands::Status => commands::timer_command(&settings, TimerAction::Status, format)?,
        Commands::Start => commands::timer_command(&settings, TimerAction::Start, format)?,
        Commands::Pause => commands::timer_command(&settings, TimerAction::Pause, format)?,
        Commands::Reset => commands::timer_command(&settings, TimerAction::Reset, format)?,
        Commands::Skip => commands::timer_command(&settings, TimerAction::Skip, format)?,
        Commands::Run { start } => commands::run(&settings, start, format)?,
        Commands::Config(args) => commands::config(args.command, format)?,
        Commands::History(args) => commands::history(args, format)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
