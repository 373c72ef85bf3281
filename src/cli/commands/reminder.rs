use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::reminder::{FlagStore, YamlFlagStore};
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success};

/// Handle the `reminder` command
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Reminder {
        status,
        confirm,
        reset,
    } = &cli.command
    {
        let mut store = YamlFlagStore::new(cfg.flag_path());

        if *reset {
            store.reset()?;
            success("Reminder reset: it will show again at the next start");
        }

        if *confirm {
            store.acknowledge()?;
            success("Reminder acknowledged: it will not show again");
        }

        if *status || (!*reset && !*confirm) {
            let state = if store.is_acknowledged()? {
                "acknowledged"
            } else {
                "pending"
            };
            info(format!("Reminder {state}"));
            detail("Flag file", store.path().display());
        }
    }

    Ok(())
}
