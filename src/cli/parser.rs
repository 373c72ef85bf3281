use clap::{Parser, Subcommand};

/// Command-line interface definition for itinerary
/// Terminal viewer for a day-by-day travel itinerary
#[derive(Parser)]
#[command(
    name = "itinerary",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal itinerary viewer: timeline per day, live clock and countdown to the next highlighted event",
    long_about = None
)]
pub struct Cli {
    /// Override the data file (JSON document with the events)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Disable ANSI colours in the output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Run in test mode (no config, flag or log file writes)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the app directory, configuration and a sample itinerary
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render one tab once and exit
    Show {
        /// Tab to show: day1, day2, ... or stations
        #[arg(long, short)]
        tab: Option<String>,

        /// Pretend the current time is this instant ("YYYY-MM-DD HH:MM[:SS]")
        #[arg(long, value_name = "DATETIME")]
        at: Option<String>,
    },

    /// Live view: clock, countdown and tab switching from the input line
    Watch {
        /// Tab to start on: day1, day2, ... or stations
        #[arg(long, short)]
        tab: Option<String>,
    },

    /// Inspect or change the first-run reminder flag
    Reminder {
        #[arg(long = "status", help = "Show whether the reminder was acknowledged")]
        status: bool,

        #[arg(
            long = "confirm",
            conflicts_with = "reset",
            help = "Acknowledge the reminder so it never shows again"
        )]
        confirm: bool,

        #[arg(long = "reset", help = "Forget the acknowledgement: the reminder shows again")]
        reset: bool,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print the internal activity log")]
        print: bool,
    },
}
