use std::path::Path;

use image2pixel_core::block_size::BlockSize;
use image2pixel_core::grid::BlockGrid;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use zune_core::colorspace::ColorSpace;

/// Summary of a single pixelated file, printed with `--report`
pub struct Report<'a> {
    input:      &'a Path,
    output:     &'a Path,
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    block_size: BlockSize
}

impl<'a> Report<'a> {
    pub fn new(
        input: &'a Path, output: &'a Path, dimensions: (usize, usize), colorspace: ColorSpace,
        block_size: BlockSize
    ) -> Report<'a> {
        Report {
            input,
            output,
            width: dimensions.0,
            height: dimensions.1,
            colorspace,
            block_size
        }
    }
}

impl<'a> Serialize for Report<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let grid = BlockGrid::new(self.width, self.height, self.block_size);
        let mut state = serializer.serialize_struct("Report", 9)?;

        state.serialize_field("input", &self.input.to_string_lossy())?;
        state.serialize_field("output", &self.output.to_string_lossy())?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("colorspace", &format!("{:?}", self.colorspace))?;
        state.serialize_field("block_size", &self.block_size.get())?;
        state.serialize_field("block_columns", &grid.columns())?;
        state.serialize_field("block_rows", &grid.rows())?;
        state.serialize_field("blocks", &grid.block_count())?;

        state.end()
    }
}

#[test]
fn report_lists_block_grid() {
    let report = Report::new(
        Path::new("in.png"),
        Path::new("pixel_in.png"),
        (25, 10),
        ColorSpace::RGBA,
        BlockSize::new(10).unwrap()
    );
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["input"], "in.png");
    assert_eq!(value["colorspace"], "RGBA");
    assert_eq!(value["block_columns"], 3);
    assert_eq!(value["block_rows"], 1);
    assert_eq!(value["blocks"], 3);
}
