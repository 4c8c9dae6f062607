use crate::core::base::parse_configuration;
use crate::core::registry::KlaviyoTypeRegistry;
use crate::domain::model::{Configuration, KlaviyoModel};
use crate::domain::ports::{Model, TypeRegistry};
use crate::models::{
    Campaign, Empty, List, Membership, Page, Person, PersonList, RenderedTemplate, Template,
};
use crate::utils::error::{KlaviyoError, Result};
use serde_json::Value;

pub type Constructor = fn(Configuration) -> Result<KlaviyoModel>;

/// 一個模型型別的兩種建構方式
#[derive(Debug, Clone, Copy)]
pub struct ModelConstructor {
    /// 呼叫端組出來的 configuration
    pub create: Constructor,
    /// API 回應的 payload
    pub create_from_payload: Constructor,
}

fn create_model<M>(configuration: Configuration) -> Result<KlaviyoModel>
where
    M: Model,
    KlaviyoModel: From<M>,
{
    M::create(configuration).map(KlaviyoModel::from)
}

fn create_model_from_payload<M>(configuration: Configuration) -> Result<KlaviyoModel>
where
    M: Model,
    KlaviyoModel: From<M>,
{
    M::create_from_payload(configuration).map(KlaviyoModel::from)
}

macro_rules! constructor {
    ($model:ty) => {
        ModelConstructor {
            create: create_model::<$model>,
            create_from_payload: create_model_from_payload::<$model>,
        }
    };
}

const EMPTY_MODEL_TYPE: &str = "empty";

static EMPTY_CONSTRUCTOR: ModelConstructor = constructor!(Empty);

static MODEL_MAP: &[(&str, ModelConstructor)] = &[
    ("campaign", constructor!(Campaign)),
    ("email-template", constructor!(Template)),
    ("rendered-template", constructor!(RenderedTemplate)),
    ("list", constructor!(List)),
    ("membership", constructor!(Membership)),
    ("page", constructor!(Page)),
    ("person", constructor!(Person)),
    ("person_list", constructor!(PersonList)),
    (EMPTY_MODEL_TYPE, constructor!(Empty)),
];

/// 所有標準型別 key
pub fn model_types() -> Vec<&'static str> {
    MODEL_MAP.iter().map(|(model_type, _)| *model_type).collect()
}

/// 依型別把 configuration 分派給對應的模型
#[derive(Debug, Clone)]
pub struct ModelFactory<R: TypeRegistry = KlaviyoTypeRegistry> {
    registry: R,
}

impl Default for ModelFactory<KlaviyoTypeRegistry> {
    fn default() -> Self {
        Self::new(KlaviyoTypeRegistry::default())
    }
}

impl<R: TypeRegistry> ModelFactory<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// 決定模型型別
    ///
    /// 明確指定的型別優先，其次是 `object` 欄位。兩者都沒有且 configuration
    /// 不是空的時候回傳 `MissingModelType`。
    pub fn model_type(
        &self,
        configuration: &Configuration,
        model_type: Option<&str>,
    ) -> Result<String> {
        let resolved = model_type
            .filter(|model_type| !model_type.is_empty())
            .or_else(|| {
                configuration
                    .get("object")
                    .and_then(Value::as_str)
                    .filter(|object| !object.is_empty())
            });

        match resolved {
            Some(raw) => Ok(self.registry.canonical_type(raw)),
            None if configuration.is_empty() => Ok(self.registry.canonical_type("")),
            None => Err(KlaviyoError::MissingModelType),
        }
    }

    fn constructor(&self, model_type: &str) -> &'static ModelConstructor {
        if let Some((_, constructor)) = MODEL_MAP.iter().find(|(key, _)| *key == model_type) {
            tracing::debug!("Dispatching payload to {} model", model_type);
            return constructor;
        }

        if !model_type.is_empty() {
            tracing::warn!(
                "Unknown model type '{}', falling back to empty model",
                model_type
            );
        }
        &EMPTY_CONSTRUCTOR
    }

    pub fn create(
        &self,
        configuration: Configuration,
        model_type: Option<&str>,
    ) -> Result<KlaviyoModel> {
        let model_type = self.model_type(&configuration, model_type)?;
        (self.constructor(&model_type).create)(configuration)
    }

    /// 已解碼的 API 回應
    pub fn create_from_payload(
        &self,
        configuration: Configuration,
        model_type: Option<&str>,
    ) -> Result<KlaviyoModel> {
        let model_type = self.model_type(&configuration, model_type)?;
        (self.constructor(&model_type).create_from_payload)(configuration)
    }

    pub fn create_from_json(&self, json: &str, model_type: Option<&str>) -> Result<KlaviyoModel> {
        let configuration = parse_configuration(json)?;
        self.create_from_payload(configuration, model_type)
    }
}
