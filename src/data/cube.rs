//! A cube spanning `[-1, 1]` on every axis.
//!
//! Rows 8 through 13 of [VERTICES] are the six axis directions; no triangle refers to them.

use meshlit_common::Align32;

use crate::{Model, TexIndices};

#[rustfmt::skip]
pub static VERTICES: Align32<[f32; 42]> = Align32([
    -1.00, -1.00,  1.00,
    -1.00,  1.00,  1.00,
    -1.00, -1.00, -1.00,
    -1.00,  1.00, -1.00,
     1.00, -1.00,  1.00,
     1.00,  1.00,  1.00,
     1.00, -1.00, -1.00,
     1.00,  1.00, -1.00,
    -1.00,  0.00,  0.00,
     0.00,  0.00, -1.00,
     1.00,  0.00,  0.00,
     0.00,  0.00,  1.00,
     0.00, -1.00,  0.00,
     0.00,  1.00,  0.00,
]);

#[rustfmt::skip]
pub static INDICES: Align32<[u16; 36]> = Align32([
    1, 2, 0,
    3, 6, 2,
    7, 4, 6,
    5, 0, 4,
    6, 0, 2,
    3, 5, 7,
    1, 3, 2,
    3, 7, 6,
    7, 5, 4,
    5, 1, 0,
    6, 4, 0,
    3, 1, 5,
]);

#[rustfmt::skip]
pub static TEX_COORDS: Align32<[f32; 40]> = Align32([
    1.0, 0.0,
    0.0, 1.0,
    0.0, 0.0,
    1.0, 0.0,
    0.0, 1.0,
    0.0, 0.0,
    1.0, 0.0,
    0.0, 1.0,
    0.0, 0.0,
    1.0, 0.0,
    0.0, 1.0,
    0.0, 0.0,
    1.0, 0.0,
    0.0, 1.0,
    0.0, 0.0,
    1.0, 1.0,
    1.0, 1.0,
    1.0, 1.0,
    1.0, 1.0,
    1.0, 1.0,
]);

#[rustfmt::skip]
pub static TEX_INDICES: Align32<[u16; 36]> = Align32([
     0,  1,  2,
     3,  4,  5,
     6,  7,  8,
     9, 10, 11,
    12, 10,  5,
     3, 13, 14,
     0, 15,  1,
     3, 16,  4,
     6, 17,  7,
     9, 18, 10,
    12, 19, 10,
     3, 18, 13,
]);

pub static CUBE: Model<'static> = Model {
    name: "cube",
    vertices: &VERTICES.0,
    vertices_amount: 14,
    indices: &INDICES.0,
    indices_amount: 36,
    tex_coords: &TEX_COORDS.0,
    tex_coords_amount: 40,
    tex_indices: Some(TexIndices {
        data: &TEX_INDICES.0,
        amount: 36,
    }),
};
