mod error;
mod lint;

use std::iter::FusedIterator;

pub use error::*;
pub use lint::*;

use meshlit_common::ArrayIndex;
use num_traits::AsPrimitive;

use crate::attribute::{
    try_cast, ArrayKind, ArrayLayout, AttributeComponentType, AttributeType, Position, Texcoord,
};

/// An index list mapping each triangle corner to a texture coordinate, with its declared length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexIndices<'a, Idx: ArrayIndex = u16> {
    pub data: &'a [Idx],
    pub amount: usize,
}

/// The geometry and texture-mapping data of one mesh.
///
/// All arrays are stored flat, exactly as they would be handed to graphics hardware, next to the
/// element counts their author declared for them. Nothing here assumes the declared counts agree
/// with the arrays; see [Model::validate] and [Model::lints].
///
/// # Declared amounts
///
/// * `vertices_amount` counts points, each made of three `vertices` components.
/// * `indices_amount` counts entries of `indices`.
/// * `tex_coords_amount` counts components of `tex_coords`, i.e. twice the number of (u, v) pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model<'a, Idx: ArrayIndex = u16> {
    pub name: &'a str,
    pub vertices: &'a [f32],
    pub vertices_amount: usize,
    pub indices: &'a [Idx],
    pub indices_amount: usize,
    pub tex_coords: &'a [f32],
    pub tex_coords_amount: usize,
    /// Absent for meshes whose texture coordinates are not indexed per triangle corner.
    pub tex_indices: Option<TexIndices<'a, Idx>>,
}

/// One triangle of a [Model], resolved to positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Position of this triangle within its model
    pub index: usize,
    /// Vertex indices of each corner
    pub corners: [usize; 3],
    pub positions: [Position; 3],
}

impl<'a, Idx: ArrayIndex> Model<'a, Idx> {
    /// View `vertices` as 3-D points.
    pub fn positions(&self) -> Result<&'a [Position], Error> {
        try_cast::<f32, Position>(self.vertices).map_err(|source| Error::Cast {
            kind: ArrayKind::Vertices,
            source,
        })
    }

    /// View `tex_coords` as (u, v) pairs.
    pub fn tex_coord_pairs(&self) -> Result<&'a [Texcoord], Error> {
        try_cast::<f32, Texcoord>(self.tex_coords).map_err(|source| Error::Cast {
            kind: ArrayKind::TexCoords,
            source,
        })
    }

    #[inline]
    pub fn has_tex_indices(&self) -> bool {
        self.tex_indices.is_some()
    }

    /// Number of whole triangles described by `indices`.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Resolve triangle `k` to its corner positions.
    pub fn triangle(&self, k: usize) -> Result<Triangle, Error> {
        let corners = corners_of(self.indices, k)?;
        let positions = self.positions()?;
        let mut resolved = [Position::origin(); 3];
        for (j, (&corner, slot)) in corners.iter().zip(resolved.iter_mut()).enumerate() {
            *slot = *positions.get(corner).ok_or(Error::IndexOutOfRange {
                kind: ArrayKind::Indices,
                position: 3 * k + j,
                value: corner,
                bound: positions.len(),
            })?;
        }
        Ok(Triangle {
            index: k,
            corners,
            positions: resolved,
        })
    }

    /// Resolve triangle `k` to its texture coordinates.
    ///
    /// Returns `Ok(None)` if this model has no [TexIndices].
    pub fn tex_triangle(&self, k: usize) -> Result<Option<[Texcoord; 3]>, Error> {
        let Some(tex) = self.tex_indices else {
            return Ok(None);
        };
        let corners = corners_of(tex.data, k)?;
        let pairs = self.tex_coord_pairs()?;
        let mut resolved = [Texcoord::origin(); 3];
        for (j, (&corner, slot)) in corners.iter().zip(resolved.iter_mut()).enumerate() {
            *slot = *pairs.get(corner).ok_or(Error::IndexOutOfRange {
                kind: ArrayKind::TexIndices,
                position: 3 * k + j,
                value: corner,
                bound: pairs.len(),
            })?;
        }
        Ok(Some(resolved))
    }

    #[inline]
    pub fn triangles(&self) -> Triangles<'_, 'a, Idx> {
        Triangles {
            model: self,
            next: 0,
        }
    }

    /// Check every structural invariant, returning the first violation.
    pub fn validate(&self) -> Result<(), Error> {
        match self.errors().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Check every structural invariant, returning all violations in array order.
    ///
    /// The vertex count is compared in points, other counts in array entries.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(model = self.name))
    )]
    pub fn errors(&self) -> Vec<Error> {
        let mut errs = Vec::new();

        let points = self.vertices.len() / 3;
        if self.vertices_amount != points || self.vertices.len() % 3 != 0 {
            errs.push(Error::CountMismatch {
                kind: ArrayKind::Vertices,
                declared: self.vertices_amount,
                actual: points,
            });
        }
        if let Err(e) = self.positions() {
            errs.push(e);
        }

        // indices must name a declared vertex which is also stored
        check_list(
            ArrayKind::Indices,
            self.indices,
            self.indices_amount,
            self.vertices_amount.min(points),
            &mut errs,
        );

        if self.tex_coords.len() != self.tex_coords_amount {
            errs.push(Error::CountMismatch {
                kind: ArrayKind::TexCoords,
                declared: self.tex_coords_amount,
                actual: self.tex_coords.len(),
            });
        }

        if let Some(tex) = self.tex_indices {
            if self.tex_coords.len() % 2 != 0 {
                errs.push(Error::NotPairs {
                    kind: ArrayKind::TexCoords,
                    len: self.tex_coords.len(),
                });
            }
            check_list(
                ArrayKind::TexIndices,
                tex.data,
                tex.amount,
                self.tex_coords.len() / 2,
                &mut errs,
            );
            if tex.data.len() != self.indices.len() {
                errs.push(Error::CornerMismatch {
                    indices: self.indices.len(),
                    tex_indices: tex.data.len(),
                });
            }
        }

        #[cfg(feature = "tracing")]
        for e in &errs {
            tracing::trace!(error = %e, "model invariant violated");
        }
        errs
    }

    /// Collect non-fatal observations about this model's data.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self), fields(model = self.name))
    )]
    pub fn lints(&self) -> Vec<Lint> {
        let lints = lint::lint(self);
        #[cfg(feature = "tracing")]
        for l in &lints {
            tracing::trace!(lint = %l, "model lint");
        }
        lints
    }
}

impl<'a, Idx: ArrayIndex + AttributeComponentType> Model<'a, Idx> {
    /// Describe the memory layout of each array present in this model.
    pub fn layout(&self) -> Vec<ArrayLayout> {
        let mut out = vec![
            ArrayLayout::of(ArrayKind::Vertices, AttributeType::Vec3, self.vertices),
            ArrayLayout::of(ArrayKind::Indices, AttributeType::Scalar, self.indices),
            ArrayLayout::of(ArrayKind::TexCoords, AttributeType::Vec2, self.tex_coords),
        ];
        if let Some(tex) = self.tex_indices {
            out.push(ArrayLayout::of(
                ArrayKind::TexIndices,
                AttributeType::Scalar,
                tex.data,
            ));
        }
        out
    }
}

/// Read the three corner indices of triangle `k` from `list`.
fn corners_of<Idx: ArrayIndex>(list: &[Idx], k: usize) -> Result<[usize; 3], Error> {
    let count = list.len() / 3;
    if k >= count {
        return Err(Error::TriangleOutOfRange(k, count));
    }
    let corner = |j: usize| <Idx as AsPrimitive<usize>>::as_(list[3 * k + j]);
    Ok([corner(0), corner(1), corner(2)])
}

/// Check the declared length, triangle shape, and value bounds of an index list.
fn check_list<Idx: ArrayIndex>(
    kind: ArrayKind,
    list: &[Idx],
    declared: usize,
    bound: usize,
    errs: &mut Vec<Error>,
) {
    if list.len() != declared {
        errs.push(Error::CountMismatch {
            kind,
            declared,
            actual: list.len(),
        });
    }
    if list.len() % 3 != 0 {
        errs.push(Error::NotTriangles {
            kind,
            len: list.len(),
        });
    }
    for (position, &i) in list.iter().enumerate() {
        let value = <Idx as AsPrimitive<usize>>::as_(i);
        if value >= bound {
            errs.push(Error::IndexOutOfRange {
                kind,
                position,
                value,
                bound,
            });
        }
    }
}

/// Iterator over the [Triangles](Triangle) of a [Model].
#[derive(Debug, Clone)]
pub struct Triangles<'m, 'a, Idx: ArrayIndex> {
    model: &'m Model<'a, Idx>,
    next: usize,
}

impl<'m, 'a, Idx: ArrayIndex> Iterator for Triangles<'m, 'a, Idx> {
    type Item = Result<Triangle, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.model.triangle_count() {
            return None;
        }
        let res = self.model.triangle(self.next);
        self.next += 1;
        Some(res)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.model.triangle_count().saturating_sub(self.next);
        (rem, Some(rem))
    }
}

impl<'m, 'a, Idx: ArrayIndex> ExactSizeIterator for Triangles<'m, 'a, Idx> {}
impl<'m, 'a, Idx: ArrayIndex> FusedIterator for Triangles<'m, 'a, Idx> {}
