use super::{activity_log, data_path, initial_tab, terminal_options};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reminder::MemoryFlagStore;
use crate::core::runtime::{Runtime, Timing};
use crate::core::scheduler::ManualClock;
use crate::core::session::{Features, Session};
use crate::core::store::{FileSource, LoadState};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::{date, time};
use crate::view::TerminalView;
use std::io;

/// Handle the `show` command
///
/// Runs the same startup as `watch`, frozen at one instant: clock, load,
/// first paint of the tab and the countdown, then a single frame on stdout.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { tab, at } = &cli.command {
        let now = match at {
            Some(s) => time::parse_datetime(s)?,
            None => date::now(),
        };

        // a one-shot frame never waits for the reminder
        let features = Features {
            first_run_reminder: false,
            ..Features::from_config(cfg)
        };
        let initial = initial_tab(tab, &features, cfg)?;
        let timing = Timing::from_config(cfg)?;

        let view = TerminalView::new(io::stdout(), &features.regions(), terminal_options(cli, cfg));
        let session = Session::new(
            features,
            initial,
            view,
            MemoryFlagStore::default(),
            activity_log(cli, cfg),
        );

        let source = FileSource::new(data_path(cli, cfg));
        let mut rt = Runtime::new(session, ManualClock::new(now), source, timing);
        rt.start();
        rt.session.present();

        if let LoadState::Failed(reason) = rt.session.state.store.state() {
            warning(format!("Could not load {}: {}", data_path(cli, cfg).display(), reason));
        }
    }

    Ok(())
}
