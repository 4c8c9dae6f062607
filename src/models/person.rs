use crate::core::base::{apply_defaults, lookup_default, DefaultValue, Fields};
use crate::domain::model::Configuration;
use crate::domain::ports::Model;
use crate::utils::error::{KlaviyoError, Result};
use serde_json::Value;

/// 要求 API 移除屬性時使用的保留 key
pub const UNSET_KEY: &str = "$unset";

/// API 在部分回應中以一般 key 回傳這些值，建構前必須移除
const PLAIN_PAYLOAD_KEYS: [&str; 3] = ["email", "first_name", "last_name"];

/// Klaviyo 保留的 person 屬性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialAttribute {
    Object,
    Id,
    Email,
    FirstName,
    LastName,
    Organization,
    Title,
    City,
    Region,
    Zip,
    Country,
    Timezone,
    PhoneNumber,
}

impl SpecialAttribute {
    pub const ALL: [SpecialAttribute; 13] = [
        SpecialAttribute::Object,
        SpecialAttribute::Id,
        SpecialAttribute::Email,
        SpecialAttribute::FirstName,
        SpecialAttribute::LastName,
        SpecialAttribute::Organization,
        SpecialAttribute::Title,
        SpecialAttribute::City,
        SpecialAttribute::Region,
        SpecialAttribute::Zip,
        SpecialAttribute::Country,
        SpecialAttribute::Timezone,
        SpecialAttribute::PhoneNumber,
    ];

    /// API 使用的外部拼法
    pub fn key(self) -> &'static str {
        match self {
            SpecialAttribute::Object => "object",
            SpecialAttribute::Id => "id",
            SpecialAttribute::Email => "$email",
            SpecialAttribute::FirstName => "$first_name",
            SpecialAttribute::LastName => "$last_name",
            SpecialAttribute::Organization => "$organization",
            SpecialAttribute::Title => "$title",
            SpecialAttribute::City => "$city",
            SpecialAttribute::Region => "$region",
            SpecialAttribute::Zip => "$zip",
            SpecialAttribute::Country => "$country",
            SpecialAttribute::Timezone => "$timezone",
            SpecialAttribute::PhoneNumber => "$phone_number",
        }
    }

    /// 模型內部的屬性名稱
    pub fn property(self) -> &'static str {
        match self {
            SpecialAttribute::Object => "objectType",
            SpecialAttribute::Id => "id",
            SpecialAttribute::Email => "email",
            SpecialAttribute::FirstName => "firstName",
            SpecialAttribute::LastName => "lastName",
            SpecialAttribute::Organization => "organization",
            SpecialAttribute::Title => "title",
            SpecialAttribute::City => "city",
            SpecialAttribute::Region => "region",
            SpecialAttribute::Zip => "zip",
            SpecialAttribute::Country => "country",
            SpecialAttribute::Timezone => "timezone",
            SpecialAttribute::PhoneNumber => "phoneNumber",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|attribute| attribute.key() == key)
    }

    pub fn from_property(property: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|attribute| attribute.property() == property)
    }
}

/// 依命名規則推導屬性名稱：去掉 `$`，底線後的片段首字大寫
///
/// 只用來驗證 `SpecialAttribute` 的靜態對照表。
pub fn derive_property(key: &str) -> String {
    if let Some(stripped) = key.strip_prefix('$') {
        let mut segments = stripped.split('_');
        let mut property = segments.next().unwrap_or_default().to_string();
        for segment in segments {
            let mut chars = segment.chars();
            if let Some(first) = chars.next() {
                property.extend(first.to_uppercase());
                property.push_str(chars.as_str());
            }
        }
        property
    } else if key == "object" {
        "objectType".to_string()
    } else {
        key.to_string()
    }
}

/// `null`、空字串、空陣列與空物件都不算有值
fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// Klaviyo 的 "Person"
///
/// 保留屬性各自有欄位，其餘 key 一律存成自訂屬性。刪除屬性時會記錄到
/// unset 清單，序列化時以 `$unset` 送出。
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    object_type: String,
    id: String,
    email: String,
    first_name: String,
    last_name: String,
    organization: String,
    title: String,
    city: String,
    region: String,
    zip: String,
    country: String,
    timezone: String,
    phone_number: String,
    custom_attributes: Configuration,
    unset_attributes: Vec<String>,
}

impl Person {
    pub fn attribute_keys() -> Vec<&'static str> {
        SpecialAttribute::ALL.iter().map(|attribute| attribute.key()).collect()
    }

    pub fn is_special_attribute_key(key: &str) -> bool {
        SpecialAttribute::from_key(key).is_some()
    }

    pub fn is_custom_attribute_key(key: &str) -> bool {
        !Self::is_special_attribute_key(key) && key != UNSET_KEY
    }

    pub fn model_property_from_special_attribute_key(key: &str) -> Result<&'static str> {
        SpecialAttribute::from_key(key)
            .map(SpecialAttribute::property)
            .ok_or_else(|| KlaviyoError::InvalidSpecialAttributeKey {
                key: key.to_string(),
            })
    }

    fn field(&self, attribute: SpecialAttribute) -> &str {
        match attribute {
            SpecialAttribute::Object => &self.object_type,
            SpecialAttribute::Id => &self.id,
            SpecialAttribute::Email => &self.email,
            SpecialAttribute::FirstName => &self.first_name,
            SpecialAttribute::LastName => &self.last_name,
            SpecialAttribute::Organization => &self.organization,
            SpecialAttribute::Title => &self.title,
            SpecialAttribute::City => &self.city,
            SpecialAttribute::Region => &self.region,
            SpecialAttribute::Zip => &self.zip,
            SpecialAttribute::Country => &self.country,
            SpecialAttribute::Timezone => &self.timezone,
            SpecialAttribute::PhoneNumber => &self.phone_number,
        }
    }

    fn field_mut(&mut self, attribute: SpecialAttribute) -> &mut String {
        match attribute {
            SpecialAttribute::Object => &mut self.object_type,
            SpecialAttribute::Id => &mut self.id,
            SpecialAttribute::Email => &mut self.email,
            SpecialAttribute::FirstName => &mut self.first_name,
            SpecialAttribute::LastName => &mut self.last_name,
            SpecialAttribute::Organization => &mut self.organization,
            SpecialAttribute::Title => &mut self.title,
            SpecialAttribute::City => &mut self.city,
            SpecialAttribute::Region => &mut self.region,
            SpecialAttribute::Zip => &mut self.zip,
            SpecialAttribute::Country => &mut self.country,
            SpecialAttribute::Timezone => &mut self.timezone,
            SpecialAttribute::PhoneNumber => &mut self.phone_number,
        }
    }

    /// 依外部 key 讀取保留屬性
    pub fn special_attribute(&self, key: &str) -> Result<&str> {
        SpecialAttribute::from_key(key)
            .map(|attribute| self.field(attribute))
            .ok_or_else(|| KlaviyoError::InvalidSpecialAttributeKey {
                key: key.to_string(),
            })
    }

    /// 重新分配所有屬性，失敗時不會改動目前的狀態
    fn set_attributes(&mut self, configuration: &Configuration) -> Result<()> {
        let fields = Fields::new(Self::OBJECT_TYPE, configuration);

        let object_type = fields
            .optional_string("object")?
            .filter(|object| !object.is_empty())
            .unwrap_or_else(|| Self::OBJECT_TYPE.to_string());
        let id = fields.string("id")?;
        let email = fields.string("$email")?;
        let first_name = fields.string("$first_name")?;
        let last_name = fields.string("$last_name")?;
        let organization = fields.string("$organization")?;
        let title = fields.string("$title")?;
        let city = fields.string("$city")?;
        let region = fields.string("$region")?;
        let zip = fields.string("$zip")?;
        let country = fields.string("$country")?;
        let timezone = fields.string("$timezone")?;
        let phone_number = fields.string("$phone_number")?;
        let unset_attributes = Self::read_unset_attributes(configuration)?;

        self.object_type = object_type;
        self.id = id;
        self.email = email;
        self.first_name = first_name;
        self.last_name = last_name;
        self.organization = organization;
        self.title = title;
        self.city = city;
        self.region = region;
        self.zip = zip;
        self.country = country;
        self.timezone = timezone;
        self.phone_number = phone_number;
        if let Some(unset_attributes) = unset_attributes {
            self.unset_attributes = unset_attributes;
        }

        self.custom_attributes = configuration
            .iter()
            .filter(|(key, _)| Self::is_custom_attribute_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(())
    }

    /// 只有非空的 `$unset` 陣列才會取代目前的清單
    fn read_unset_attributes(configuration: &Configuration) -> Result<Option<Vec<String>>> {
        let items = match configuration.get(UNSET_KEY) {
            Some(Value::Array(items)) if !items.is_empty() => items,
            Some(Value::Array(_)) | Some(Value::Null) | None => return Ok(None),
            Some(_) => {
                return Err(KlaviyoError::InvalidFieldType {
                    model: Self::OBJECT_TYPE.to_string(),
                    field: UNSET_KEY.to_string(),
                    expected: "an array of strings".to_string(),
                })
            }
        };

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| KlaviyoError::InvalidFieldType {
                        model: Self::OBJECT_TYPE.to_string(),
                        field: UNSET_KEY.to_string(),
                        expected: "an array of strings".to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// 把部分欄位疊在目前完整狀態上，再重新建立所有屬性
    pub fn update_from_map(&mut self, configuration: Configuration) -> Result<&mut Self> {
        let mut merged = configuration;
        for (key, value) in self.to_map() {
            merged.entry(key).or_insert(value);
        }

        self.set_attributes(&merged)?;
        Ok(self)
    }

    /// 刪除屬性並記錄到 `$unset`
    ///
    /// 有預設值的保留屬性會重設為預設值；有值的自訂屬性會被移除。
    /// 其他情況回傳 `CannotDeleteRequiredAttribute`，且不會記錄。
    pub fn delete_attribute(&mut self, key: &str) -> Result<&mut Self> {
        if let Some(attribute) = SpecialAttribute::from_key(key) {
            if let Some(default) = lookup_default(Self::OPTIONAL_DEFAULTS, key) {
                *self.field_mut(attribute) = default.as_str().to_string();
                self.unset_attributes.push(key.to_string());
                tracing::debug!("Reset special attribute {} to its default", key);
                return Ok(self);
            }
        }

        if self.custom_attributes.get(key).is_some_and(is_populated) {
            self.custom_attributes.shift_remove(key);
            self.unset_attributes.push(key.to_string());
            tracing::debug!("Removed custom attribute {}", key);
            return Ok(self);
        }

        Err(KlaviyoError::CannotDeleteRequiredAttribute {
            key: key.to_string(),
        })
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn custom_attribute(&self, key: &str) -> Option<&Value> {
        self.custom_attributes.get(key)
    }

    pub fn all_custom_attributes(&self) -> &Configuration {
        &self.custom_attributes
    }

    pub fn unset_attributes(&self) -> &[String] {
        &self.unset_attributes
    }
}

impl Model for Person {
    const OBJECT_TYPE: &'static str = "person";

    const KEYS: &'static [&'static str] = &[
        "object",
        "id",
        "$email",
        "$first_name",
        "$last_name",
        "$organization",
        "$title",
        "$city",
        "$region",
        "$zip",
        "$country",
        "$timezone",
        "$phone_number",
    ];

    const OPTIONAL_DEFAULTS: &'static [(&'static str, DefaultValue)] = &[
        ("id", DefaultValue::Str("")),
        ("$last_name", DefaultValue::Str("")),
        ("$organization", DefaultValue::Str("")),
        ("$title", DefaultValue::Str("")),
        ("$city", DefaultValue::Str("")),
        ("$region", DefaultValue::Str("")),
        ("$zip", DefaultValue::Str("")),
        ("$country", DefaultValue::Str("")),
        ("$timezone", DefaultValue::Str("")),
        ("$phone_number", DefaultValue::Str("")),
    ];

    fn from_configuration(configuration: &Configuration) -> Result<Self> {
        let mut person = Person {
            object_type: Self::OBJECT_TYPE.to_string(),
            id: String::new(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            organization: String::new(),
            title: String::new(),
            city: String::new(),
            region: String::new(),
            zip: String::new(),
            country: String::new(),
            timezone: String::new(),
            phone_number: String::new(),
            custom_attributes: Configuration::new(),
            unset_attributes: Vec::new(),
        };
        person.set_attributes(configuration)?;
        Ok(person)
    }

    /// `$` 開頭的未知 key 是自訂屬性，不做 `clean_keys`
    fn create(configuration: Configuration) -> Result<Self> {
        let configuration = apply_defaults(configuration, Self::OPTIONAL_DEFAULTS);
        tracing::debug!(
            "Creating {} model from {} fields",
            Self::OBJECT_TYPE,
            configuration.len()
        );
        Self::from_configuration(&configuration)
    }

    fn create_from_payload(mut configuration: Configuration) -> Result<Self> {
        for key in PLAIN_PAYLOAD_KEYS {
            configuration.shift_remove(key);
        }
        Self::create(configuration)
    }

    /// `object` 不輸出，Klaviyo API 會把它當成自訂欄位
    fn to_json(&self) -> Configuration {
        let mut json = Configuration::new();
        for attribute in SpecialAttribute::ALL {
            if attribute != SpecialAttribute::Object {
                json.insert(
                    attribute.key().to_string(),
                    Value::String(self.field(attribute).to_string()),
                );
            }
        }

        for (key, value) in &self.custom_attributes {
            json.entry(key.clone()).or_insert_with(|| value.clone());
        }

        if !self.unset_attributes.is_empty() {
            json.insert(
                UNSET_KEY.to_string(),
                Value::Array(
                    self.unset_attributes
                        .iter()
                        .map(|key| Value::String(key.clone()))
                        .collect(),
                ),
            );
        }

        json
    }

    /// 補回 `object`，讓 `update_from_map` 不會遺失型別
    fn to_map(&self) -> Configuration {
        let mut map = Configuration::new();
        map.insert(
            "object".to_string(),
            Value::String(self.object_type.clone()),
        );
        map.extend(self.to_json());
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn george() -> Configuration {
        match json!({
            "id": "dqQnNW",
            "$email": "george.washington@example.com",
            "$first_name": "George",
            "$last_name": "Washington",
            "$organization": "U.S. Government",
            "$title": "President",
            "$city": "Mount Vernon",
            "$region": "Virginia",
            "$zip": "22121",
            "$country": "United States",
            "$timezone": "US/Eastern",
            "$phone_number": ""
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_static_property_table_matches_naming_rule() {
        for attribute in SpecialAttribute::ALL {
            assert_eq!(attribute.property(), derive_property(attribute.key()));
            assert_eq!(SpecialAttribute::from_property(attribute.property()), Some(attribute));
        }
    }

    #[test]
    fn test_keys_table_matches_special_attributes() {
        assert_eq!(Person::KEYS, Person::attribute_keys().as_slice());
    }

    #[test]
    fn test_translation_rejects_unknown_keys() {
        assert_eq!(
            Person::model_property_from_special_attribute_key("$phone_number").unwrap(),
            "phoneNumber"
        );
        assert_eq!(
            Person::model_property_from_special_attribute_key("object").unwrap(),
            "objectType"
        );
        assert!(matches!(
            Person::model_property_from_special_attribute_key("$favorite_color"),
            Err(KlaviyoError::InvalidSpecialAttributeKey { .. })
        ));
        assert!(matches!(
            Person::model_property_from_special_attribute_key("first_name"),
            Err(KlaviyoError::InvalidSpecialAttributeKey { .. })
        ));
    }

    #[test]
    fn test_unset_key_is_never_custom() {
        let mut configuration = george();
        configuration.insert(UNSET_KEY.to_string(), json!(["$title"]));
        let person = Person::create(configuration).unwrap();

        assert!(person.all_custom_attributes().is_empty());
        assert_eq!(person.unset_attributes(), ["$title".to_string()]);
    }

    #[test]
    fn test_failed_update_leaves_person_untouched() {
        let mut person = Person::create(george()).unwrap();
        let before = person.clone();

        let mut partial = Configuration::new();
        partial.insert("$city".to_string(), json!(42));
        assert!(person.update_from_map(partial).is_err());
        assert_eq!(person, before);
    }

    #[test]
    fn test_special_attribute_lookup() {
        let person = Person::create(george()).unwrap();
        assert_eq!(person.special_attribute("$zip").unwrap(), "22121");
        assert_eq!(person.special_attribute("object").unwrap(), "person");
        assert!(person.special_attribute("$shoe_size").is_err());
    }
}
