use crate::attribute::{ArrayKind, CastError};

/// Structural errors in a [Model](crate::Model).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{kind} declares {declared} {} but holds {actual}", .kind.unit())]
    CountMismatch {
        kind: ArrayKind,
        declared: usize,
        actual: usize,
    },
    #[error("{kind} holds {len} entries, which is not a whole number of triangles")]
    NotTriangles { kind: ArrayKind, len: usize },
    #[error("{kind} holds {len} components, which is not a whole number of (u, v) pairs")]
    NotPairs { kind: ArrayKind, len: usize },
    #[error("{kind}[{position}] is out of range: 0..{bound} ∌ {value}")]
    IndexOutOfRange {
        kind: ArrayKind,
        position: usize,
        value: usize,
        bound: usize,
    },
    #[error("Attempted to access triangle outside of model: 0..{1} ∌ {0}")]
    TriangleOutOfRange(usize, usize),
    #[error("{indices} vertex indices but {tex_indices} texture indices; each corner needs both")]
    CornerMismatch { indices: usize, tex_indices: usize },
    #[error("{kind}: {source}")]
    Cast { kind: ArrayKind, source: CastError },
}
