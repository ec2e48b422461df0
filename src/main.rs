/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Main executable for cubefield

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = cubefield::cli::Cli::parse();
    cubefield::cli::run(cli)
}
