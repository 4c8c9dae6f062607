use crate::core::base::{format_date, to_configuration, DefaultValue, Fields};
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::models::reference::PersonReference;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use serde_json::{json, Value};

/// List 與其成員
#[derive(Debug, Clone, PartialEq)]
pub struct PersonList {
    object_type: String,
    id: String,
    list_name: String,
    folder: Option<String>,
    created: Option<NaiveDateTime>,
    updated: Option<NaiveDateTime>,
    people: Vec<PersonReference>,
}

impl PersonList {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn list_name(&self) -> &str {
        &self.list_name
    }

    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn created(&self) -> Option<&NaiveDateTime> {
        self.created.as_ref()
    }

    pub fn updated(&self) -> Option<&NaiveDateTime> {
        self.updated.as_ref()
    }

    pub fn people(&self) -> &[PersonReference] {
        &self.people
    }
}

impl Model for PersonList {
    const OBJECT_TYPE: &'static str = "person_list";

    const KEYS: &'static [&'static str] = &[
        "object",
        "id",
        "list_name",
        "folder",
        "created",
        "updated",
        "people",
    ];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("object", DefaultValue::Str("person_list")),
        ("id", DefaultValue::Str("")),
        ("folder", DefaultValue::Null),
        ("created", DefaultValue::Str("")),
        ("updated", DefaultValue::Str("")),
        ("people", DefaultValue::EmptyArray),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        let people = fields
            .objects("people")?
            .into_iter()
            .map(PersonReference::create)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            object_type: fields.string("object")?,
            id: fields.string("id")?,
            list_name: fields.string("list_name")?,
            folder: fields.nullable_string("folder")?,
            created: fields.date("created")?,
            updated: fields.date("updated")?,
            people,
        })
    }

    fn to_json(&self) -> Configuration {
        let people: Vec<Value> = self
            .people
            .iter()
            .map(|person| Value::Object(person.to_json()))
            .collect();

        to_configuration(json!({
            "object": self.object_type,
            "id": self.id,
            "list_name": self.list_name,
            "folder": self.folder,
            "created": format_date(self.created.as_ref()),
            "updated": format_date(self.updated.as_ref()),
            "people": people,
        }))
    }
}
