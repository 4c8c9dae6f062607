use crate::core::base::{format_date, format_nullable_date, to_configuration, DefaultValue, Fields};
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::models::list::List;
use crate::models::template::Template;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    object_type: String,
    id: String,
    name: String,
    subject: String,
    from_email: String,
    from_name: String,
    lists: Vec<List>,
    template: Template,
    status: String,
    status_id: i64,
    status_label: String,
    sent_at: Option<NaiveDateTime>,
    send_time: Option<NaiveDateTime>,
    created: Option<NaiveDateTime>,
    updated: Option<NaiveDateTime>,
    num_recipients: i64,
    is_segmented: bool,
    campaign_type: String,
}

impl Campaign {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn from_email(&self) -> &str {
        &self.from_email
    }

    pub fn from_name(&self) -> &str {
        &self.from_name
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn status_id(&self) -> i64 {
        self.status_id
    }

    pub fn status_label(&self) -> &str {
        &self.status_label
    }

    pub fn sent_at(&self) -> Option<&NaiveDateTime> {
        self.sent_at.as_ref()
    }

    pub fn send_time(&self) -> Option<&NaiveDateTime> {
        self.send_time.as_ref()
    }

    pub fn created(&self) -> Option<&NaiveDateTime> {
        self.created.as_ref()
    }

    pub fn updated(&self) -> Option<&NaiveDateTime> {
        self.updated.as_ref()
    }

    pub fn num_recipients(&self) -> i64 {
        self.num_recipients
    }

    pub fn is_segmented(&self) -> bool {
        self.is_segmented
    }

    pub fn campaign_type(&self) -> &str {
        &self.campaign_type
    }

    fn load_lists(fields: &Fields<'_>) -> Result<Vec<List>> {
        fields
            .objects("lists")?
            .into_iter()
            .map(List::create)
            .collect()
    }
}

impl Model for Campaign {
    const OBJECT_TYPE: &'static str = "campaign";

    const KEYS: &'static [&'static str] = &[
        "object",
        "id",
        "name",
        "subject",
        "from_email",
        "from_name",
        "lists",
        "template",
        "status",
        "status_id",
        "status_label",
        "sent_at",
        "send_time",
        "created",
        "updated",
        "num_recipients",
        "is_segmented",
        "campaign_type",
    ];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("object", DefaultValue::Str("campaign")),
        ("id", DefaultValue::Str("")),
        ("status", DefaultValue::Str("draft")),
        ("status_id", DefaultValue::Int(2)),
        ("status_label", DefaultValue::Str("Draft")),
        ("send_time", DefaultValue::Str("")),
        ("updated", DefaultValue::Str("")),
        ("num_recipients", DefaultValue::Int(0)),
        ("is_segmented", DefaultValue::Bool(false)),
        ("campaign_type", DefaultValue::Str("Regular")),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        Ok(Self {
            object_type: fields.string("object")?,
            id: fields.string("id")?,
            name: fields.string("name")?,
            subject: fields.string("subject")?,
            from_email: fields.string("from_email")?,
            from_name: fields.string("from_name")?,
            lists: Self::load_lists(&fields)?,
            template: Template::create(fields.object("template")?)?,
            status: fields.string("status")?,
            status_id: fields.i64("status_id")?,
            status_label: fields.string("status_label")?,
            sent_at: fields.date("sent_at")?,
            send_time: fields.date("send_time")?,
            created: fields.date("created")?,
            updated: fields.date("updated")?,
            num_recipients: fields.i64("num_recipients")?,
            is_segmented: fields.bool("is_segmented")?,
            campaign_type: fields.string("campaign_type")?,
        })
    }

    fn to_json(&self) -> Configuration {
        let lists: Vec<Value> = self
            .lists
            .iter()
            .map(|list| Value::Object(list.to_json()))
            .collect();

        to_configuration(json!({
            "object": self.object_type,
            "id": self.id,
            "name": self.name,
            "subject": self.subject,
            "from_email": self.from_email,
            "from_name": self.from_name,
            "lists": lists,
            "template": Value::Object(self.template.to_json()),
            "status": self.status,
            "status_id": self.status_id,
            "status_label": self.status_label,
            "sent_at": format_nullable_date(self.sent_at.as_ref()),
            "send_time": format_date(self.send_time.as_ref()),
            "created": format_date(self.created.as_ref()),
            "updated": format_date(self.updated.as_ref()),
            "num_recipients": self.num_recipients,
            "is_segmented": self.is_segmented,
            "campaign_type": self.campaign_type,
        }))
    }
}
