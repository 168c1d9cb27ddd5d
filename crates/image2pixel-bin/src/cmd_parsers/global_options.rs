/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use image2pixel_core::block_size::BlockSize;
use log::{info, Level};
use zune_image::errors::ImageErrors;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub block_size:     BlockSize,
    pub override_files: bool,
    pub report:         bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            block_size:     BlockSize::default(),
            override_files: false,
            report:         false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, ImageErrors> {
    let mut cmd_options = CmdOptions::new();

    if let Some(size) = options.get_one::<u64>("block-size") {
        let size = usize::try_from(*size)
            .map_err(|x| ImageErrors::GenericString(format!("Invalid block size {size}: {x}")))?;

        cmd_options.block_size = BlockSize::new(size)
            .map_err(|x| ImageErrors::GenericString(x.to_string()))?;
    }
    info!("Using block size {}", cmd_options.block_size);

    if options.value_source("all-yes") == Some(ValueSource::CommandLine) {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    if options.value_source("report") == Some(ValueSource::CommandLine) {
        info!("Reporting processed files as json");
        cmd_options.report = true;
    }
    Ok(cmd_options)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn;
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
