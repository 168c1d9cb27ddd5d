pub static BLOCK_SIZE_HELP: &str = "Edge length of a pixelation block in pixels

Every block is replaced by the average color of the pixels it covers.
Blocks start at the top left corner, blocks on the right and bottom
edge are cut off by the image border.

Range is between 1 and 100, 1 leaves the image unchanged";

pub static OUTPUT_HELP: &str = "Output to write the data to

May be repeated, the n-th output belongs to the n-th input.
Inputs without an output are written next to the input
as pixel_<input file name>";
