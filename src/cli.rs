use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True for invocations that only touch the config file and never poll.
pub fn is_config_command(args: &Args) -> bool {
    args.list_config || args.init_config
}

/// NBA halftime score tracker
///
/// Polls the live NBA scoreboard and compares each team's first-half points
/// (and, for finished games, second-half points) against its season
/// averages. Teams scoring 5% or more above average are marked 🔥, 5% or
/// more below ❄️. Games where both teams share a streak are shown in bold.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Poll once, print the results and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Seconds between scoreboard polls. Overrides the config file.
    #[arg(short, long, value_name = "SECONDS", help_heading = "Display Options")]
    pub interval: Option<u64>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write a config file with the default settings if none exists.
    #[arg(long = "init-config", help_heading = "Configuration")]
    pub init_config: bool,

    /// Enable debug mode: the screen is not cleared between polls and logs
    /// are echoed to the terminal as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
