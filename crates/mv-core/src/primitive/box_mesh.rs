//! Cube mesh generation

use super::PrimitiveBuilder;
use crate::mesh::InterleavedMesh;

/// Generate an axis-aligned cube centred on the origin
///
/// 24 vertices (4 per face, so each face keeps its own normal), 12 triangles
pub fn generate_cube(size: f32) -> InterleavedMesh {
    let h = size / 2.0;
    let mut builder = PrimitiveBuilder::new();

    let mut add_face = |corners: [[f32; 3]; 4], normal: [f32; 3]| {
        let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        let base = builder.vertex_count();
        for (corner, uv) in corners.into_iter().zip(uvs) {
            builder.vertex(corner, normal, uv);
        }
        builder.triangle(base, base + 1, base + 2);
        builder.triangle(base, base + 2, base + 3);
    };

    // +X
    add_face(
        [[h, -h, -h], [h, h, -h], [h, h, h], [h, -h, h]],
        [1.0, 0.0, 0.0],
    );
    // -X
    add_face(
        [[-h, h, -h], [-h, -h, -h], [-h, -h, h], [-h, h, h]],
        [-1.0, 0.0, 0.0],
    );
    // +Y
    add_face(
        [[h, h, -h], [-h, h, -h], [-h, h, h], [h, h, h]],
        [0.0, 1.0, 0.0],
    );
    // -Y
    add_face(
        [[-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h]],
        [0.0, -1.0, 0.0],
    );
    // +Z
    add_face(
        [[-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h]],
        [0.0, 0.0, 1.0],
    );
    // -Z
    add_face(
        [[-h, h, -h], [h, h, -h], [h, -h, -h], [-h, -h, -h]],
        [0.0, 0.0, -1.0],
    );

    builder.finish()
}
