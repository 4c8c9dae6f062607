use crate::core::base::{apply_defaults, clean_keys, parse_configuration, DefaultValue};
use crate::domain::model::Configuration;
use crate::utils::error::Result;

/// Klaviyo 資料模型的共同契約
///
/// `create` 依序做 `clean_keys`、補上選填欄位預設值，再交給
/// `from_configuration` 取出各欄位。不在 `OPTIONAL_DEFAULTS` 裡的欄位都是必填。
pub trait Model: Sized {
    /// `object` 欄位的預設值
    const OBJECT_TYPE: &'static str;

    /// 模型會讀取的外部 key 拼法
    const KEYS: &'static [&'static str];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)];

    fn from_configuration(configuration: &Configuration) -> Result<Self>;

    /// 輸出 API 需要的 JSON 結構
    fn to_json(&self) -> Configuration;

    /// 轉成一般的 key/value mapping
    fn to_map(&self) -> Configuration {
        self.to_json()
    }

    fn create(configuration: Configuration) -> Result<Self> {
        let configuration = clean_keys(configuration, Self::KEYS);
        let configuration = apply_defaults(configuration, Self::OPTIONAL_DEFAULTS);
        tracing::debug!(
            "Creating {} model from {} fields",
            Self::OBJECT_TYPE,
            configuration.len()
        );
        Self::from_configuration(&configuration)
    }

    /// API 回應已解碼後的建構入口，部分模型會在這裡先清理 payload
    fn create_from_payload(configuration: Configuration) -> Result<Self> {
        Self::create(configuration)
    }

    fn create_from_json(json: &str) -> Result<Self> {
        let configuration = parse_configuration(json)?;
        Self::create_from_payload(configuration)
    }

    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }
}

/// 將原始 discriminator 字串轉成 factory 使用的標準型別 key
pub trait TypeRegistry: Send + Sync {
    fn canonical_type(&self, raw: &str) -> String;
}
