use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use log::{LevelFilter, error, info};
use sync_mvn_deps::{
    arguments::Arguments, config::SyncConfig, runner::ProcessRunner, syncer::VersionSyncer,
};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let config = match SyncConfig::try_from(args) {
        Ok(config) => config,
        Err(usage) => {
            error!("{}", usage);
            Arguments::command().print_help()?;
            return Ok(());
        }
    };

    let runner = ProcessRunner;
    let stdout = std::io::stdout();
    let mut syncer = VersionSyncer::new(&config, &runner, stdout.lock());
    let synced = syncer.run().context("Sync aborted")?;

    info!("Done, {} project(s) synced", synced);
    Ok(())
}
