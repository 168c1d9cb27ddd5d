/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdin, BufRead};
use std::path::{Path, PathBuf};

use log::info;
use zune_image::errors::ImageErrors;

/// Prefix added to input file names when no output is given
pub const DEFAULT_OUTPUT_PREFIX: &str = "pixel_";

/// Output path used when the user did not give one
///
/// This is the input's directory joined with `pixel_<input file name>`
pub fn default_output_path(input: &Path) -> Result<PathBuf, ImageErrors> {
    let file_name = input.file_name().ok_or_else(|| {
        ImageErrors::GenericString(format!("Path {input:?} does not name a file"))
    })?;
    let mut new_name = DEFAULT_OUTPUT_PREFIX.to_string();
    new_name.push_str(&file_name.to_string_lossy());

    Ok(input.with_file_name(new_name))
}

pub fn verify_file_paths(
    in_path: &Path, out_path: &Path, override_files: bool
) -> Result<(), ImageErrors> {
    if in_path == out_path {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }

    if !in_path.exists() {
        return Err(ImageErrors::GenericString(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(ImageErrors::GenericString(format!(
            "Path {in_path:?} is not a file"
        )));
    }

    if out_path.exists() {
        if override_files {
            info!("Overwriting path {:?} ", out_path);
        } else {
            println!("File {out_path:?} exists, overwrite [y/N]");
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(ImageErrors::GenericString(format!(
                    "Not overwriting file {out_path:?}"
                )));
            }
        }
    }
    Ok(())
}
