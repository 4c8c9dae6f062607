use crate::core::base::DefaultValue;
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::utils::error::Result;

/// 無法辨識的資源型別使用的佔位模型，輸入內容一律忽略
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Empty;

impl Model for Empty {
    const OBJECT_TYPE: &'static str = "empty";

    const KEYS: &'static [&'static str] = &[];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[];

    fn from_configuration(_configuration: &Configuration) -> Result<Self> {
        Ok(Empty)
    }

    fn to_json(&self) -> Configuration {
        Configuration::new()
    }
}
