//! This crate contains the source code for the binary of the maze solver mazeroute.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mazeroute::{config::Config, file_loader, logging, Session};

fn main() -> Result<()> {
    install()?;

    let config = Config::parse();
    logging::init(config.verbose)?;

    let mut session = Session::new();
    session.load(file_loader::load(config.input.as_deref())?);

    println!("{}", session.describe());
    println!(
        "{}",
        session.path_report(config.start, config.exit, config.overlay)?
    );

    Ok(())
}
