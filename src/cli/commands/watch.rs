use super::{activity_log, data_path, initial_tab, terminal_options};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reminder::{FlagStore, MemoryFlagStore, YamlFlagStore};
use crate::core::runtime::{Runtime, Timing, forward_lines};
use crate::core::scheduler::SystemClock;
use crate::core::session::{Features, Session};
use crate::core::store::FileSource;
use crate::errors::AppResult;
use crate::view::TerminalView;
use crate::view::terminal::TerminalOptions;
use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Handle the `watch` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { tab } = &cli.command {
        if cli.test {
            run(cli, cfg, tab, MemoryFlagStore::default())
        } else {
            run(cli, cfg, tab, YamlFlagStore::new(cfg.flag_path()))
        }
    } else {
        Ok(())
    }
}

fn run<F: FlagStore>(cli: &Cli, cfg: &Config, tab: &Option<String>, flags: F) -> AppResult<()> {
    let features = Features::from_config(cfg);
    let timing = Timing::from_config(cfg)?;
    let initial = initial_tab(tab, &features, cfg)?;
    let opts = TerminalOptions {
        clear: true,
        help: true,
        ..terminal_options(cli, cfg)
    };

    let view = TerminalView::new(io::stdout(), &features.regions(), opts);
    let session = Session::new(features, initial, view, flags, activity_log(cli, cfg));
    let source = FileSource::new(data_path(cli, cfg));
    let mut rt = Runtime::new(session, SystemClock, source, timing);

    // input lines arrive on a channel; the loop below stays single-threaded
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        forward_lines(io::stdin().lock(), &tx);
    });

    rt.start();
    rt.session.present();

    let fallback = Duration::from_millis(cfg.tick_millis);
    let mut input_open = true;

    loop {
        let wait = rt
            .time_to_next()
            .and_then(|d| d.to_std().ok())
            .unwrap_or(fallback);

        if input_open {
            match rx.recv_timeout(wait) {
                Ok(line) => {
                    if !rt.handle_line(&line) {
                        break;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => input_open = false,
            }
        } else {
            thread::sleep(wait);
        }

        rt.run_due();
        rt.session.present();
    }

    Ok(())
}
