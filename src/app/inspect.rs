use crate::core::factory::ModelFactory;
use crate::domain::model::KlaviyoModel;
use crate::domain::ports::TypeRegistry;
use crate::utils::error::{KlaviyoError, Result};
use std::io::Read;

#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    pub model_type: Option<String>,
    pub unset: Vec<String>,
    pub pretty: bool,
}

/// 讀取 payload，`-` 代表 stdin
pub fn read_payload(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }

    Ok(std::fs::read_to_string(input)?)
}

/// 建立模型並套用刪除
pub fn build_model<R: TypeRegistry>(
    factory: &ModelFactory<R>,
    raw: &str,
    options: &InspectOptions,
) -> Result<KlaviyoModel> {
    let mut model = factory.create_from_json(raw, options.model_type.as_deref())?;
    tracing::debug!("Built {} model", model.model_type());

    if options.unset.is_empty() {
        return Ok(model);
    }

    let model_type = model.model_type();
    let person = model
        .as_person_mut()
        .ok_or_else(|| KlaviyoError::InvalidConfigValueError {
            field: "unset".to_string(),
            value: options.unset.join(","),
            reason: format!("attributes can only be deleted from a person, got {}", model_type),
        })?;

    for key in &options.unset {
        person.delete_attribute(key)?;
        tracing::info!("🗑️ Marked {} for removal", key);
    }

    Ok(model)
}

/// 建立模型並輸出序列化後的 JSON
pub fn render_payload<R: TypeRegistry>(
    factory: &ModelFactory<R>,
    raw: &str,
    options: &InspectOptions,
) -> Result<String> {
    let model = build_model(factory, raw, options)?;

    if options.pretty {
        model.to_json_string_pretty()
    } else {
        model.to_json_string()
    }
}
