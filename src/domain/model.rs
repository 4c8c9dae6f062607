use crate::domain::ports::Model;
use crate::models::{
    Campaign, Empty, List, Membership, Page, Person, PersonList, RenderedTemplate, Template,
};
use crate::utils::error::Result;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// 模型建構時使用的 key/value mapping，保留插入順序
pub type Configuration = Map<String, Value>;

/// Factory 可以建立的所有模型
#[derive(Debug, Clone, PartialEq)]
pub enum KlaviyoModel {
    Campaign(Campaign),
    Template(Template),
    RenderedTemplate(RenderedTemplate),
    List(List),
    Membership(Membership),
    Page(Page),
    Person(Person),
    PersonList(PersonList),
    Empty(Empty),
}

impl KlaviyoModel {
    /// Factory 對照表使用的標準型別 key
    pub fn model_type(&self) -> &'static str {
        match self {
            KlaviyoModel::Campaign(_) => "campaign",
            KlaviyoModel::Template(_) => "email-template",
            KlaviyoModel::RenderedTemplate(_) => "rendered-template",
            KlaviyoModel::List(_) => "list",
            KlaviyoModel::Membership(_) => "membership",
            KlaviyoModel::Page(_) => "page",
            KlaviyoModel::Person(_) => "person",
            KlaviyoModel::PersonList(_) => "person_list",
            KlaviyoModel::Empty(_) => "empty",
        }
    }

    /// 模型上的 `object` 值，Empty 沒有
    pub fn object_type(&self) -> Option<&str> {
        match self {
            KlaviyoModel::Campaign(model) => Some(model.object_type()),
            KlaviyoModel::Template(model) => Some(model.object_type()),
            KlaviyoModel::RenderedTemplate(model) => Some(model.object_type()),
            KlaviyoModel::List(model) => Some(model.object_type()),
            KlaviyoModel::Membership(model) => Some(model.object_type()),
            KlaviyoModel::Page(model) => Some(model.object_type()),
            KlaviyoModel::Person(model) => Some(model.object_type()),
            KlaviyoModel::PersonList(model) => Some(model.object_type()),
            KlaviyoModel::Empty(_) => None,
        }
    }

    pub fn to_json(&self) -> Configuration {
        match self {
            KlaviyoModel::Campaign(model) => model.to_json(),
            KlaviyoModel::Template(model) => model.to_json(),
            KlaviyoModel::RenderedTemplate(model) => model.to_json(),
            KlaviyoModel::List(model) => model.to_json(),
            KlaviyoModel::Membership(model) => model.to_json(),
            KlaviyoModel::Page(model) => model.to_json(),
            KlaviyoModel::Person(model) => model.to_json(),
            KlaviyoModel::PersonList(model) => model.to_json(),
            KlaviyoModel::Empty(model) => model.to_json(),
        }
    }

    pub fn to_map(&self) -> Configuration {
        match self {
            KlaviyoModel::Person(model) => model.to_map(),
            other => other.to_json(),
        }
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }

    pub fn is_empty_model(&self) -> bool {
        matches!(self, KlaviyoModel::Empty(_))
    }

    pub fn as_campaign(&self) -> Option<&Campaign> {
        match self {
            KlaviyoModel::Campaign(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            KlaviyoModel::List(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            KlaviyoModel::Page(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_person(&self) -> Option<&Person> {
        match self {
            KlaviyoModel::Person(model) => Some(model),
            _ => None,
        }
    }

    pub fn as_person_mut(&mut self) -> Option<&mut Person> {
        match self {
            KlaviyoModel::Person(model) => Some(model),
            _ => None,
        }
    }
}

impl Serialize for KlaviyoModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

macro_rules! impl_from_model {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for KlaviyoModel {
                fn from(model: $variant) -> Self {
                    KlaviyoModel::$variant(model)
                }
            }
        )*
    };
}

impl_from_model!(
    Campaign,
    Template,
    RenderedTemplate,
    List,
    Membership,
    Page,
    Person,
    PersonList,
    Empty,
);
