//! Non-fatal observations about model data.
//!
//! A model can satisfy every invariant checked by [Model::validate] and still carry data that
//! looks unintended. Lints point at such data without deciding what was meant.

use meshlit_common::ArrayIndex;
use num_traits::AsPrimitive;

use crate::Model;

#[derive(Debug, Clone, PartialEq)]
pub enum Lint {
    /// Declared vertices which no triangle corner refers to.
    UnreferencedVertices(Vec<usize>),
    /// Texture coordinate pairs which no texture index refers to.
    UnreferencedTexCoords(Vec<usize>),
    /// Texture coordinate components outside of `[0, 1]`, e.g. indices stored as coordinates.
    TexCoordsOutsideUnitRange { count: usize, min: f32, max: f32 },
    /// Texture coordinates with no texture indices, whose pair count also differs from the vertex
    /// count, so there is no way to map them onto corners.
    UnmappedTexCoords { pairs: usize, vertices: usize },
}

impl std::fmt::Display for Lint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Lint::UnreferencedVertices(v) => {
                write!(f, "{} vertices never referenced by a triangle: {v:?}", v.len())
            }
            Lint::UnreferencedTexCoords(t) => {
                write!(f, "{} tex coords never referenced by a corner: {t:?}", t.len())
            }
            Lint::TexCoordsOutsideUnitRange { count, min, max } => write!(
                f,
                "{count} tex coord components outside of [0, 1] (range {min}..={max})"
            ),
            Lint::UnmappedTexCoords { pairs, vertices } => write!(
                f,
                "{pairs} tex coord pairs for {vertices} vertices, with no tex indices to map them"
            ),
        }
    }
}

/// Indices in `0..bound` which never occur in `list`.
fn unreferenced<Idx: ArrayIndex>(list: &[Idx], bound: usize) -> Vec<usize> {
    let mut seen = vec![false; bound];
    for &i in list {
        let i = <Idx as AsPrimitive<usize>>::as_(i);
        if let Some(s) = seen.get_mut(i) {
            *s = true;
        }
    }
    seen.iter()
        .enumerate()
        .filter_map(|(i, s)| (!s).then_some(i))
        .collect()
}

pub(crate) fn lint<Idx: ArrayIndex>(model: &Model<'_, Idx>) -> Vec<Lint> {
    let mut lints = Vec::new();

    // never trust the declared amount past what is actually stored
    let stored = model.vertices_amount.min(model.vertices.len() / 3);
    let verts = unreferenced(model.indices, stored);
    if !verts.is_empty() {
        lints.push(Lint::UnreferencedVertices(verts));
    }

    let pairs = model.tex_coords.len() / 2;
    match model.tex_indices {
        Some(tex) => {
            let coords = unreferenced(tex.data, pairs);
            if !coords.is_empty() {
                lints.push(Lint::UnreferencedTexCoords(coords));
            }
        }
        None if !model.tex_coords.is_empty() && pairs != model.vertices_amount => {
            lints.push(Lint::UnmappedTexCoords {
                pairs,
                vertices: model.vertices_amount,
            });
        }
        None => {}
    }

    let outside = model
        .tex_coords
        .iter()
        .copied()
        .filter(|c| !(0.0..=1.0).contains(c))
        .fold(None, |acc: Option<(usize, f32, f32)>, c| match acc {
            None => Some((1, c, c)),
            Some((n, lo, hi)) => Some((n + 1, lo.min(c), hi.max(c))),
        });
    if let Some((count, min, max)) = outside {
        lints.push(Lint::TexCoordsOutsideUnitRange { count, min, max });
    }

    lints
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unreferenced_ignores_out_of_range() {
        let list = [0u16, 2, 7];
        assert_eq!(unreferenced(&list, 4), vec![1, 3]);
        assert!(unreferenced(&list, 0).is_empty());
    }
}
