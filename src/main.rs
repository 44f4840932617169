use anyhow::Context;
use clap::Parser;
use hike_log::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    let result = runtime.block_on(async {
        // Ctrl-C drops the in-flight command
        tokio::select! {
            result = commands::run(args) => result.map_err(anyhow::Error::from),
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(hike_log::Error::processing_interrupted("interrupted by user").into())
            }
        }
    });

    // A fetch still blocked on the network must not hold up exit
    runtime.shutdown_background();
    result
}
