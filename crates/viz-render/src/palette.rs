use plotters::style::RGBColor;

/// Fixed palette cycled through per sender: red, blue, yellow, green,
/// purple, black, pink, cyan, orange.
pub const PALETTE: [RGBColor; 9] = [
    RGBColor(214, 39, 40),
    RGBColor(31, 119, 180),
    RGBColor(218, 165, 32),
    RGBColor(44, 160, 44),
    RGBColor(128, 0, 128),
    RGBColor(0, 0, 0),
    RGBColor(227, 119, 194),
    RGBColor(23, 190, 207),
    RGBColor(255, 127, 14),
];

/// Color for the `index`-th sender, wrapping around the palette.
pub fn color_for(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}
