/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use image2pixel_core::block_size::BlockSize;

use crate::cmd_args::help_strings::{BLOCK_SIZE_HELP, OUTPUT_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("image2pixel")
        .about("Pixelate images by averaging square blocks of pixels")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .long_help(OUTPUT_HELP)
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf)))
        .arg(Arg::new("block-size")
            .short('b')
            .long("block-size")
            .help("Edge length of a pixelation block")
            .long_help(BLOCK_SIZE_HELP)
            .help_heading("OPERATIONS")
            .value_parser(value_parser!(u64).range(BlockSize::MIN as u64..=BlockSize::MAX as u64))
            .default_value("10"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("report")
            .long("report")
            .action(ArgAction::SetTrue)
            .help("Print a JSON summary of every processed file"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the pixelation options"))
}
