// src/bin/madden.rs
use nfl_scrape::{cli, config::options::Source};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(Source::Madden)
}
