pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod models;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::{factory::ModelFactory, registry::KlaviyoTypeRegistry};
pub use domain::model::{Configuration, KlaviyoModel};
pub use domain::ports::{Model, TypeRegistry};
pub use models::{
    Campaign, Empty, List, ListReference, Membership, Page, Person, PersonList, PersonReference,
    RenderedTemplate, SpecialAttribute, Template,
};
pub use utils::error::{KlaviyoError, Result};
