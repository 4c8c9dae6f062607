use crate::core::base::{format_date, to_configuration, DefaultValue, Fields};
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct List {
    object_type: String,
    id: String,
    name: String,
    list_type: String,
    folder: Option<String>,
    person_count: i64,
    created: Option<NaiveDateTime>,
    updated: Option<NaiveDateTime>,
}

impl List {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn list_type(&self) -> &str {
        &self.list_type
    }

    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn person_count(&self) -> i64 {
        self.person_count
    }

    pub fn created(&self) -> Option<&NaiveDateTime> {
        self.created.as_ref()
    }

    pub fn updated(&self) -> Option<&NaiveDateTime> {
        self.updated.as_ref()
    }
}

impl Model for List {
    const OBJECT_TYPE: &'static str = "list";

    const KEYS: &'static [&'static str] = &[
        "object",
        "id",
        "name",
        "list_type",
        "folder",
        "person_count",
        "created",
        "updated",
    ];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("object", DefaultValue::Str("list")),
        ("id", DefaultValue::Str("")),
        ("list_type", DefaultValue::Str("standard")),
        ("folder", DefaultValue::Null),
        ("person_count", DefaultValue::Int(0)),
        ("created", DefaultValue::Str("")),
        ("updated", DefaultValue::Str("")),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        Ok(Self {
            object_type: fields.string("object")?,
            id: fields.string("id")?,
            name: fields.string("name")?,
            list_type: fields.string("list_type")?,
            folder: fields.nullable_string("folder")?,
            person_count: fields.i64("person_count")?,
            created: fields.date("created")?,
            updated: fields.date("updated")?,
        })
    }

    fn to_json(&self) -> Configuration {
        to_configuration(json!({
            "object": self.object_type,
            "id": self.id,
            "name": self.name,
            "list_type": self.list_type,
            "folder": self.folder,
            "person_count": self.person_count,
            "created": format_date(self.created.as_ref()),
            "updated": format_date(self.updated.as_ref()),
        }))
    }
}
