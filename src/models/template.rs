use crate::core::base::{format_date, to_configuration, DefaultValue, Fields};
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use serde_json::json;

/// Email template
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    object_type: String,
    id: String,
    name: String,
    html: String,
    created: Option<NaiveDateTime>,
    updated: Option<NaiveDateTime>,
}

impl Template {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn created(&self) -> Option<&NaiveDateTime> {
        self.created.as_ref()
    }

    pub fn updated(&self) -> Option<&NaiveDateTime> {
        self.updated.as_ref()
    }
}

impl Model for Template {
    const OBJECT_TYPE: &'static str = "email-template";

    const KEYS: &'static [&'static str] = &["object", "id", "name", "html", "created", "updated"];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("object", DefaultValue::Str("email-template")),
        ("id", DefaultValue::Str("")),
        ("created", DefaultValue::Str("")),
        ("updated", DefaultValue::Str("")),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        Ok(Self {
            object_type: fields.string("object")?,
            id: fields.string("id")?,
            name: fields.string("name")?,
            html: fields.string("html")?,
            created: fields.date("created")?,
            updated: fields.date("updated")?,
        })
    }

    fn to_json(&self) -> Configuration {
        to_configuration(json!({
            "object": self.object_type,
            "id": self.id,
            "name": self.name,
            "html": self.html,
            "created": format_date(self.created.as_ref()),
            "updated": format_date(self.updated.as_ref()),
        }))
    }
}

/// 套用過變數的 template 內容
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTemplate {
    object_type: String,
    id: String,
    name: String,
    html: String,
    text: String,
}

impl RenderedTemplate {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Model for RenderedTemplate {
    const OBJECT_TYPE: &'static str = "rendered-template";

    const KEYS: &'static [&'static str] = &["object", "id", "name", "html", "text"];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("object", DefaultValue::Str("rendered-template")),
        ("id", DefaultValue::Str("")),
        ("name", DefaultValue::Str("")),
        ("text", DefaultValue::Str("")),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        Ok(Self {
            object_type: fields.string("object")?,
            id: fields.string("id")?,
            name: fields.string("name")?,
            html: fields.string("html")?,
            text: fields.string("text")?,
        })
    }

    fn to_json(&self) -> Configuration {
        to_configuration(json!({
            "object": self.object_type,
            "id": self.id,
            "name": self.name,
            "html": self.html,
            "text": self.text,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::KlaviyoError;

    #[test]
    fn test_template_defaults() {
        let template = Template::create_from_json(
            r#"{"name": "Welcome", "html": "<p>Hi {{ first_name }}</p>"}"#,
        )
        .unwrap();

        assert_eq!(template.object_type(), "email-template");
        assert_eq!(template.id(), "");
        assert!(template.created().is_none());
        assert_eq!(template.to_json()["updated"], "");
    }

    #[test]
    fn test_rendered_template_requires_html() {
        let err = RenderedTemplate::create_from_json(r#"{"name": "Welcome"}"#).unwrap_err();
        assert!(matches!(
            err,
            KlaviyoError::RequiredFieldMissing { ref field, .. } if field == "html"
        ));
    }
}
