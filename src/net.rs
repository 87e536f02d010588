//! Plain-text view of the six sides of a cube.

use crate::cube::Cube;
use crate::geometry::Face;

/// Formats every side of the cube as a block of face letters.
///
/// Sides are laid out left to right in the order up, down, right, left,
/// front, back, each headed by its own letter. Within a block each letter
/// names the original side of the cubie showing there, rows and columns
/// following [`Cube::facelets`]. A solved cube shows each block filled with
/// its own letter.
pub fn format_net(cube: &Cube) -> String {
    let size = cube.size();
    let sides: Vec<(Face, Vec<Face>)> = Face::ALL
        .into_iter()
        .map(|face| (face, cube.facelets(face)))
        .collect();

    let mut lines = Vec::with_capacity(size + 1);

    // header: one letter per side, padded to the block width
    let mut header = String::new();
    for (i, (face, _)) in sides.iter().enumerate() {
        if i > 0 {
            header.push_str("  ");
        }
        header.push_str(&format!("{:<width$}", face.letter(), width = size));
    }
    lines.push(header);

    for row in 0..size {
        let mut line = String::new();
        for (i, (_, facelets)) in sides.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            for facelet in &facelets[row * size..(row + 1) * size] {
                line.push(facelet.letter());
            }
        }
        lines.push(line);
    }

    let mut output = String::new();
    for line in lines {
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}
