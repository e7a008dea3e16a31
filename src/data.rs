//! The static meshes shipped with this crate.
//!
//! Every backing array is stored in an [Align32](meshlit_common::Align32), so it can be handed to
//! hardware which requires 32-byte aligned buffers.

pub mod cube;

pub use cube::CUBE;
pub use test::TEST;

use crate::Model;

/// Every static model, in declaration order.
pub static MODELS: [&Model<'static>; 2] = [&CUBE, &TEST];

/// Look up a static model by its [name](Model::name).
pub fn by_name(name: &str) -> Option<&'static Model<'static>> {
    MODELS.iter().copied().find(|m| m.name == name)
}
