mod opts;

use clap::{CommandFactory, Parser};
use eyre::Result;
use opts::Opts;

fn main() -> Result<()> {
    color_eyre::install()?;
    let opts = Opts::parse();

    let (Some(input), Some(output)) = (opts.input, opts.output) else {
        Opts::command().print_long_help()?;
        println!();
        return Ok(());
    };

    kitti2pcd::convert(input, output)?;

    Ok(())
}
