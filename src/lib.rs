#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod attribute;
pub mod data;
mod model;

pub use data::{by_name, CUBE, MODELS, TEST};
pub use meshlit_common::{Align32, ArrayIndex, ALIGNMENT};
pub use model::*;
