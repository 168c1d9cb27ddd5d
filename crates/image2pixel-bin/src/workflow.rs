/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use image2pixel_ops::convert::layout_for_colorspace;
use image2pixel_ops::pixelate::Pixelate;
use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::errors::ImageErrors;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{default_output_path, verify_file_paths};
use crate::serde::Report;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ImageErrors> {
    info!("Creating workflows from input");

    let inputs: Vec<&PathBuf> = args
        .get_many::<PathBuf>("in")
        .map(Iterator::collect)
        .unwrap_or_default();
    let outputs: Vec<&PathBuf> = args
        .get_many::<PathBuf>("out")
        .map(Iterator::collect)
        .unwrap_or_default();

    if outputs.len() > inputs.len() {
        return Err(ImageErrors::GenericString(format!(
            "Got {} outputs for {} inputs",
            outputs.len(),
            inputs.len()
        )));
    }

    for (pos, in_file) in inputs.iter().enumerate() {
        let out_file = match outputs.get(pos) {
            Some(out) => (*out).clone(),
            None => default_output_path(in_file)?
        };
        debug!("Writing {:?} to {:?}", in_file, out_file);

        verify_file_paths(in_file, &out_file, cmd_opts.override_files)?;

        let image = pixelate_file(in_file, &out_file, cmd_opts)?;

        if cmd_opts.report {
            let report = Report::new(
                in_file,
                &out_file,
                image.dimensions(),
                image.colorspace(),
                cmd_opts.block_size
            );
            let json = serde_json::to_string_pretty(&report)
                .map_err(|x| ImageErrors::GenericString(x.to_string()))?;

            println!("{json}");
        }
    }

    Ok(())
}

/// Decode `in_file`, pixelate it and encode the result to `out_file`
///
/// The encoder is picked from the output extension.
/// Returns the pixelated image.
pub(crate) fn pixelate_file(
    in_file: &Path, out_file: &Path, cmd_opts: &CmdOptions
) -> Result<Image, ImageErrors> {
    info!("Decoding {:?}", in_file);
    let mut image = Image::open(in_file)?;

    prepare_image(&mut image)?;

    let (width, height) = image.dimensions();
    info!(
        "Pixelating {}x{} image with block size {}",
        width, height, cmd_opts.block_size
    );
    Pixelate::new(cmd_opts.block_size).execute(&mut image)?;

    info!("Encoding to {:?}", out_file);
    image.save(out_file)?;

    Ok(image)
}

/// Bring an image to a depth and colorspace the pixelate operation supports
///
/// Pixelation works on 8-bit channels, and only on colorspaces whose
/// channels can be averaged independently.
fn prepare_image(image: &mut Image) -> Result<(), ImageErrors> {
    if image.depth() != BitDepth::Eight {
        debug!("Converting image depth {:?} to 8 bits", image.depth());
        Depth::new(BitDepth::Eight).execute(image)?;
    }
    let colorspace = image.colorspace();

    if layout_for_colorspace(colorspace).is_none() {
        let target = if colorspace.has_alpha() {
            ColorSpace::RGBA
        } else {
            ColorSpace::RGB
        };
        debug!("Converting colorspace {:?} to {:?}", colorspace, target);
        ColorspaceConv::new(target).execute(image)?;
    }
    Ok(())
}
