use num_traits::{AsPrimitive, PrimInt};

mod align;
pub use align::*;

/// Trait for types which can act as indices within an array (or an array-like structure).
pub trait ArrayIndex: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static {}
impl<P> ArrayIndex for P where P: PrimInt + AsPrimitive<usize> + std::fmt::Debug + 'static {}
