pub mod base;
pub mod factory;
pub mod registry;

pub use crate::domain::model::{Configuration, KlaviyoModel};
pub use crate::domain::ports::{Model, TypeRegistry};
pub use crate::utils::error::Result;
