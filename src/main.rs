use anyhow::Context;
use categorical_sampler_rs::args::Args;
use categorical_sampler_rs::{demo, logging};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let stdout = std::io::stdout();
    demo::run(&args, &mut stdout.lock()).context("running categorical sampler demo")?;

    Ok(())
}
