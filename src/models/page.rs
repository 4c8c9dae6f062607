use crate::core::base::{to_configuration, DefaultValue, Fields};
use crate::core::factory::ModelFactory;
use crate::domain::model::{Configuration, KlaviyoModel};
use crate::domain::ports::Model;
use crate::utils::error::Result;
use serde_json::{json, Value};

/// 分頁回應 (`"object": "$list"`)
///
/// `data` 裡的每一筆都依自己的 `object` 交給 factory 建立。
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    object_type: String,
    start: i64,
    end: i64,
    page: i64,
    page_size: i64,
    total: i64,
    data: Vec<KlaviyoModel>,
}

impl Page {
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn data(&self) -> &[KlaviyoModel] {
        &self.data
    }
}

impl Model for Page {
    const OBJECT_TYPE: &'static str = "$list";

    const KEYS: &'static [&'static str] =
        &["object", "start", "end", "page", "page_size", "total", "data"];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("object", DefaultValue::Str("$list")),
        ("start", DefaultValue::Int(0)),
        ("end", DefaultValue::Int(0)),
        ("page", DefaultValue::Int(0)),
        ("page_size", DefaultValue::Int(0)),
        ("total", DefaultValue::Int(0)),
        ("data", DefaultValue::EmptyArray),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);
        let factory = ModelFactory::default();

        let data = fields
            .objects("data")?
            .into_iter()
            .map(|item| factory.create_from_payload(item, None))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            object_type: fields.string("object")?,
            start: fields.i64("start")?,
            end: fields.i64("end")?,
            page: fields.i64("page")?,
            page_size: fields.i64("page_size")?,
            total: fields.i64("total")?,
            data,
        })
    }

    fn to_json(&self) -> Configuration {
        // 每筆資料保留 object，重新建立時才能分派
        let data: Vec<Value> = self
            .data
            .iter()
            .map(|model| Value::Object(model.to_map()))
            .collect();

        to_configuration(json!({
            "object": self.object_type,
            "start": self.start,
            "end": self.end,
            "page": self.page,
            "page_size": self.page_size,
            "total": self.total,
            "data": data,
        }))
    }
}
