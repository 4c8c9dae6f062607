use crate::core::base::{to_configuration, DefaultValue, Fields};
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::utils::error::Result;
use serde_json::json;

/// 只帶 id 與名稱的 list
#[derive(Debug, Clone, PartialEq)]
pub struct ListReference {
    object_type: String,
    id: String,
    name: String,
}

impl ListReference {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Model for ListReference {
    const OBJECT_TYPE: &'static str = "list";

    const KEYS: &'static [&'static str] = &["object", "id", "name"];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] =
        &[("object", DefaultValue::Str("list"))];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        Ok(Self {
            object_type: fields.string("object")?,
            id: fields.string("id")?,
            name: fields.string("name")?,
        })
    }

    fn to_json(&self) -> Configuration {
        to_configuration(json!({
            "object": self.object_type,
            "id": self.id,
            "name": self.name,
        }))
    }
}

/// 只帶 id 與 email 的 person
#[derive(Debug, Clone, PartialEq)]
pub struct PersonReference {
    object_type: String,
    id: String,
    email: String,
}

impl PersonReference {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Model for PersonReference {
    const OBJECT_TYPE: &'static str = "person";

    const KEYS: &'static [&'static str] = &["object", "id", "email"];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("object", DefaultValue::Str("person")),
        ("id", DefaultValue::Str("")),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        Ok(Self {
            object_type: fields.string("object")?,
            id: fields.string("id")?,
            email: fields.string("email")?,
        })
    }

    fn to_json(&self) -> Configuration {
        to_configuration(json!({
            "object": self.object_type,
            "id": self.id,
            "email": self.email,
        }))
    }
}
