use crate::domain::model::Configuration;
use crate::utils::error::{KlaviyoError, Result};
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

/// Klaviyo API 使用的日期格式，輸出時必須逐字相符
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 選填欄位的預設值
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
    Null,
    EmptyArray,
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Str(s) => Value::String(s.to_string()),
            DefaultValue::Int(i) => Value::Number(i.into()),
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Null => Value::Null,
            DefaultValue::EmptyArray => Value::Array(Vec::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DefaultValue::Str(s) => s,
            _ => "",
        }
    }
}

pub fn lookup_default(
    defaults: &[(&'static str, DefaultValue)],
    key: &str,
) -> Option<DefaultValue> {
    defaults
        .iter()
        .find(|(default_key, _)| *default_key == key)
        .map(|(_, value)| *value)
}

/// 只補上缺少的選填欄位，已存在的值不覆蓋
pub fn apply_defaults(
    mut configuration: Configuration,
    defaults: &[(&'static str, DefaultValue)],
) -> Configuration {
    for (key, default) in defaults {
        if !configuration.contains_key(*key) {
            configuration.insert((*key).to_string(), default.to_value());
        }
    }
    configuration
}

/// 移除 key 前面多出來的 `$`
///
/// 只有去掉 `$` 後剛好是模型宣告的 key 才會改名，而且同名的原始 key 優先。
/// 其他 key 原樣保留，Person 未知的 `$` 屬性因此仍會是自訂屬性。
pub fn clean_keys(configuration: Configuration, declared_keys: &[&str]) -> Configuration {
    let mut cleaned = Configuration::new();

    for (key, value) in configuration {
        if declared_keys.contains(&key.as_str()) {
            cleaned.insert(key, value);
            continue;
        }

        match key.strip_prefix('$') {
            Some(stripped) if declared_keys.contains(&stripped) => {
                cleaned.entry(stripped.to_string()).or_insert(value);
            }
            _ => {
                cleaned.insert(key, value);
            }
        }
    }

    cleaned
}

/// 解析 JSON 字串，最外層必須是物件
pub fn parse_configuration(json: &str) -> Result<Configuration> {
    match serde_json::from_str::<Value>(json)? {
        Value::Object(map) => Ok(map),
        other => Err(KlaviyoError::InvalidPayload {
            message: format!("expected a JSON object, got {}", value_kind(&other)),
        }),
    }
}

/// `json!` 物件轉成 Configuration，其他型別得到空 mapping
pub fn to_configuration(value: Value) -> Configuration {
    match value {
        Value::Object(map) => map,
        _ => Configuration::new(),
    }
}

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub fn parse_date(field: &str, raw: &str) -> Result<Option<NaiveDateTime>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDateTime::parse_from_str(raw, DATE_FORMAT) {
        return Ok(Some(date));
    }
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(date.naive_utc()));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Some(date));
    }

    Err(KlaviyoError::InvalidDate {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

/// 沒有日期時輸出空字串
pub fn format_date(date: Option<&NaiveDateTime>) -> Value {
    match date {
        Some(date) => Value::String(date.format(DATE_FORMAT).to_string()),
        None => Value::String(String::new()),
    }
}

pub fn format_nullable_date(date: Option<&NaiveDateTime>) -> Value {
    match date {
        Some(date) => Value::String(date.format(DATE_FORMAT).to_string()),
        None => Value::Null,
    }
}

/// 從 configuration 取出型別化欄位
pub struct Fields<'a> {
    model: &'static str,
    configuration: &'a Configuration,
}

impl<'a> Fields<'a> {
    pub fn new(model: &'static str, configuration: &'a Configuration) -> Self {
        Self {
            model,
            configuration,
        }
    }

    fn value(&self, field: &str) -> Result<&'a Value> {
        self.configuration
            .get(field)
            .ok_or_else(|| KlaviyoError::RequiredFieldMissing {
                model: self.model.to_string(),
                field: field.to_string(),
            })
    }

    fn invalid(&self, field: &str, expected: &str) -> KlaviyoError {
        KlaviyoError::InvalidFieldType {
            model: self.model.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
        }
    }

    /// `null` 視為空字串
    pub fn string(&self, field: &str) -> Result<String> {
        match self.value(field)? {
            Value::String(s) => Ok(s.clone()),
            Value::Null => Ok(String::new()),
            _ => Err(self.invalid(field, "a string")),
        }
    }

    pub fn nullable_string(&self, field: &str) -> Result<Option<String>> {
        match self.value(field)? {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Null => Ok(None),
            _ => Err(self.invalid(field, "a string or null")),
        }
    }

    /// 欄位不存在時回傳 None
    pub fn optional_string(&self, field: &str) -> Result<Option<String>> {
        if self.configuration.contains_key(field) {
            self.nullable_string(field)
        } else {
            Ok(None)
        }
    }

    pub fn i64(&self, field: &str) -> Result<i64> {
        self.value(field)?
            .as_i64()
            .ok_or_else(|| self.invalid(field, "an integer"))
    }

    pub fn bool(&self, field: &str) -> Result<bool> {
        self.value(field)?
            .as_bool()
            .ok_or_else(|| self.invalid(field, "a boolean"))
    }

    pub fn date(&self, field: &str) -> Result<Option<NaiveDateTime>> {
        match self.value(field)? {
            Value::String(s) => parse_date(field, s),
            Value::Null => Ok(None),
            _ => Err(self.invalid(field, "a date string")),
        }
    }

    pub fn object(&self, field: &str) -> Result<Configuration> {
        match self.value(field)? {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(self.invalid(field, "an object")),
        }
    }

    pub fn array(&self, field: &str) -> Result<&'a Vec<Value>> {
        match self.value(field)? {
            Value::Array(items) => Ok(items),
            _ => Err(self.invalid(field, "an array")),
        }
    }

    /// 陣列裡的每個元素都必須是物件
    pub fn objects(&self, field: &str) -> Result<Vec<Configuration>> {
        self.array(field)?
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map.clone()),
                _ => Err(self.invalid(field, "an array of objects")),
            })
            .collect()
    }
}
