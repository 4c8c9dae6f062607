use crate::core::base::{format_date, to_configuration, DefaultValue, Fields};
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::models::person::Person;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use serde_json::{json, Value};

/// Person 在某個 list 裡的成員資格
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    object_type: String,
    email: String,
    date_added: Option<NaiveDateTime>,
    person: Person,
}

impl Membership {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date_added(&self) -> Option<&NaiveDateTime> {
        self.date_added.as_ref()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }
}

impl Model for Membership {
    const OBJECT_TYPE: &'static str = "membership";

    const KEYS: &'static [&'static str] = &["object", "email", "date_added", "person"];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] =
        &[("object", DefaultValue::Str("membership"))];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        Ok(Self {
            object_type: fields.string("object")?,
            email: fields.string("email")?,
            date_added: fields.date("date_added")?,
            // 巢狀的 person 來自 API 回應，走 payload 的建構流程
            person: Person::create_from_payload(fields.object("person")?)?,
        })
    }

    fn to_json(&self) -> Configuration {
        to_configuration(json!({
            "object": self.object_type,
            "email": self.email,
            "date_added": format_date(self.date_added.as_ref()),
            "person": Value::Object(self.person.to_map()),
        }))
    }
}
