fn main() {
    image2pixel_bin::main();
}
