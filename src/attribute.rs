//! Typed views over the flat scalar arrays a [Model](crate::Model) is built from.

use meshlit_common::is_aligned;
use nalgebra::{Point2, Point3};

/// A 3-D vertex position.
pub type Position = Point3<f32>;
/// A 2-D (u, v) texture coordinate.
pub type Texcoord = Point2<f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("cannot view slice as requested type; base slice not aligned to requested type")]
    Alignment,
    #[error("cannot view slice as requested type; {len} components do not form whole {ty} values")]
    Size { len: usize, ty: AttributeType },
}

/// The role an array plays within a [Model](crate::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayKind {
    Vertices,
    Indices,
    TexCoords,
    TexIndices,
}

impl ArrayKind {
    /// The unit a [Model](crate::Model) declares this array's amount in.
    pub const fn unit(self) -> &'static str {
        match self {
            ArrayKind::Vertices => "points",
            ArrayKind::TexCoords => "components",
            ArrayKind::Indices | ArrayKind::TexIndices => "entries",
        }
    }
}

impl std::fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayKind::Vertices => f.write_str("vertices"),
            ArrayKind::Indices => f.write_str("indices"),
            ArrayKind::TexCoords => f.write_str("tex_coords"),
            ArrayKind::TexIndices => f.write_str("tex_indices"),
        }
    }
}

/// The inner components of an [AttributeType]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeComponent {
    U16,
    F32,
}

impl AttributeComponent {
    pub const fn alignment(self) -> usize {
        use std::mem::align_of;
        match self {
            AttributeComponent::U16 => align_of::<u16>(),
            AttributeComponent::F32 => align_of::<f32>(),
        }
    }

    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            AttributeComponent::U16 => size_of::<u16>(),
            AttributeComponent::F32 => size_of::<f32>(),
        }
    }
}

impl std::fmt::Display for AttributeComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeComponent::U16 => f.write_str("u16"),
            AttributeComponent::F32 => f.write_str("f32"),
        }
    }
}

/// The shape of each value stored in an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Scalar,
    Vec2,
    Vec3,
}

impl AttributeType {
    #[inline]
    pub const fn alignment(self, comp: AttributeComponent) -> usize {
        // arrays have the same alignment as their component type
        comp.alignment()
    }

    pub const fn size_elements(self) -> usize {
        match self {
            AttributeType::Scalar => 1,
            AttributeType::Vec2 => 2,
            AttributeType::Vec3 => 3,
        }
    }

    pub const fn size_bytes(self, comp: AttributeComponent) -> usize {
        comp.size() * self.size_elements()
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeType::Scalar => f.write_str("scalar"),
            AttributeType::Vec2 => f.write_str("vec2"),
            AttributeType::Vec3 => f.write_str("vec3"),
        }
    }
}

pub trait AttributeComponentType: Copy + 'static {
    const COMPONENT: AttributeComponent;
}

/// Trait for types which can be viewed in place over a flat slice of `C`.
///
/// # Safety
///
/// Implementing types *must* have the size and alignment of `TYPE.size_elements()` consecutive
/// values of `C`, with no padding.
#[allow(unsafe_code)]
pub unsafe trait Attribute<C: AttributeComponentType>: Sized {
    const TYPE: AttributeType;
}

mod _impl_attr {
    use super::{Attribute, AttributeComponent, AttributeComponentType, AttributeType};

    macro_rules! impl_attr_comp_type {
        ($Target:ident: $comp:expr) => {
            impl AttributeComponentType for $Target {
                const COMPONENT: AttributeComponent = $comp;
            }
        };
    }

    impl_attr_comp_type!(u16: AttributeComponent::U16);
    impl_attr_comp_type!(f32: AttributeComponent::F32);

    macro_rules! impl_attr {
        ($t:ident<$($C:ty, $c:ident);+: $CAlias:ident> => $Target:ty) => {
            $( // for every ($C, $c)
               const _: () = { // anonymous module
                type $CAlias = $C;
                // "size of type $C == size of component $c"
                static_assertions::const_assert_eq!(std::mem::size_of::<$CAlias>(), AttributeComponent::$c.size());
                // "size of type $Target == size of attribute $t with component $c"
                static_assertions::const_assert_eq!(std::mem::size_of::<$Target>(), AttributeType::$t.size_bytes(AttributeComponent::$c));
                // "alignment of type $Target == alignment of attribute $t with component $c"
                static_assertions::const_assert_eq!(std::mem::align_of::<$Target>(), AttributeType::$t.alignment(AttributeComponent::$c));
                #[allow(unsafe_code)]
                unsafe impl Attribute<$CAlias> for $Target {
                    const TYPE: AttributeType = AttributeType::$t;
                }
               };
            )+
        };
        ($t:ident<$CAlias:ident> => $Target:ty) => {
            impl_attr!($t<
                u16, U16;
                f32, F32: $CAlias> => $Target);
        };
    }

    impl_attr!(Scalar<C> => C);
    impl_attr!(Scalar<C> => [C; 1]);

    impl_attr!(Vec2<C> => nalgebra::Vector2<C>);
    impl_attr!(Vec2<C> => nalgebra::Point2<C>);
    impl_attr!(Vec2<C> => [C; 2]);

    impl_attr!(Vec3<C> => nalgebra::Vector3<C>);
    impl_attr!(Vec3<C> => nalgebra::Point3<C>);
    impl_attr!(Vec3<C> => [C; 3]);
}

/// View a flat slice of components as a slice of attribute values, without copying.
///
/// Fails if `flat` does not hold a whole number of `T`, or is not aligned for `T`.
#[allow(unsafe_code)]
pub fn try_cast<C: AttributeComponentType, T: Attribute<C>>(flat: &[C]) -> Result<&[T], CastError> {
    let width = T::TYPE.size_elements();
    if flat.len() % width != 0 {
        return Err(CastError::Size {
            len: flat.len(),
            ty: T::TYPE,
        });
    }
    if (flat.as_ptr() as usize) % std::mem::align_of::<T>() != 0 {
        return Err(CastError::Alignment);
    }
    // safety: layout of T is `width` packed C (see `Attribute`), length and alignment checked above
    Ok(unsafe { std::slice::from_raw_parts(flat.as_ptr() as *const T, flat.len() / width) })
}

/// View a slice of attribute values as the flat slice of components it is made of.
///
/// This is the exact inverse of [try_cast]: the result aliases `values` bit for bit.
#[allow(unsafe_code)]
pub fn flatten<C: AttributeComponentType, T: Attribute<C>>(values: &[T]) -> &[C] {
    let width = T::TYPE.size_elements();
    // safety: layout of T is `width` packed C, and align_of::<T>() == align_of::<C>()
    unsafe { std::slice::from_raw_parts(values.as_ptr() as *const C, values.len() * width) }
}

/// In-memory description of one backing array of a [Model](crate::Model).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayLayout {
    pub kind: ArrayKind,
    pub ty: AttributeType,
    pub component: AttributeComponent,
    /// Number of components (not values) in the array.
    pub len: usize,
    /// Whether the first component lies on a [meshlit_common::ALIGNMENT] boundary.
    pub aligned: bool,
}

impl ArrayLayout {
    pub fn of<C: AttributeComponentType>(kind: ArrayKind, ty: AttributeType, data: &[C]) -> Self {
        Self {
            kind,
            ty,
            component: C::COMPONENT,
            len: data.len(),
            aligned: is_aligned(data.as_ptr()),
        }
    }

    /// Number of whole values of `self.ty` in the array.
    #[inline]
    pub fn count(&self) -> usize {
        self.len / self.ty.size_elements()
    }

    #[inline]
    pub fn byte_len(&self) -> usize {
        self.len * self.component.size()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cast_rejects_partial_values() {
        let flat = [0.0f32; 5];
        assert_eq!(
            try_cast::<f32, Position>(&flat),
            Err(CastError::Size {
                len: 5,
                ty: AttributeType::Vec3
            })
        );
    }

    #[test]
    fn cast_reads_rows() {
        let flat = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let points = try_cast::<f32, Position>(&flat).unwrap();
        assert_eq!(points, &[Position::new(1.0, 2.0, 3.0), Position::new(4.0, 5.0, 6.0)]);
        let pairs = try_cast::<f32, Texcoord>(&flat).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], Texcoord::new(5.0, 6.0));
    }

    #[test]
    fn scalar_cast_is_identity() {
        let flat = [3u16, 1, 4];
        let same = try_cast::<u16, u16>(&flat).unwrap();
        assert_eq!(same, &flat);
    }

    #[test]
    fn layout_counts_values() {
        let flat = [0.0f32; 12];
        let layout = ArrayLayout::of(ArrayKind::Vertices, AttributeType::Vec3, &flat);
        assert_eq!(layout.count(), 4);
        assert_eq!(layout.byte_len(), 48);
        assert_eq!(layout.component, AttributeComponent::F32);
    }
}
