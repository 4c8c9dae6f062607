use anyhow::Result;
use klaviyo_models::core::factory::model_types;
use klaviyo_models::{
    Configuration, KlaviyoError, KlaviyoModel, Model, ModelFactory, TomlConfig,
};
use serde_json::{json, Value};

fn config(value: Value) -> Configuration {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

/// 每個支援的型別都能建立，且序列化結果包含輸入欄位與預設值
#[test]
fn test_create_every_model_type() -> Result<()> {
    let factory = ModelFactory::default();
    let fixtures = vec![
        (
            "campaign",
            json!({
                "object": "campaign",
                "id": "dqQnNW",
                "name": "Product Launch",
                "subject": "Hello",
                "from_email": "george.washington@example.com",
                "from_name": "George",
                "lists": [{"object": "list", "id": "dqQnNW", "name": "Newsletter Subscribers"}],
                "template": {"object": "email-template", "id": "tmpl", "name": "Launch", "html": "<p>Hi</p>"},
                "sent_at": null,
                "created": "2013-06-14 16:30:00"
            }),
        ),
        (
            "email-template",
            json!({"object": "email-template", "name": "Welcome", "html": "<p>Hi</p>"}),
        ),
        (
            "rendered-template",
            json!({"object": "rendered-template", "html": "<p>Hi George</p>", "text": "Hi George"}),
        ),
        (
            "list",
            json!({"object": "list", "id": "dqQnNW", "name": "Newsletter Subscribers"}),
        ),
        (
            "membership",
            json!({
                "object": "membership",
                "email": "george.washington@example.com",
                "date_added": "2013-06-10 13:00:00",
                "person": {"object": "person", "$email": "george.washington@example.com", "$first_name": "George"}
            }),
        ),
        ("page", json!({"object": "$list", "total": 0, "data": []})),
        (
            "person",
            json!({"object": "person", "$email": "george.washington@example.com", "$first_name": "George"}),
        ),
        (
            "person_list",
            json!({"object": "person_list", "list_name": "VIP", "people": [{"email": "martha@example.com"}]}),
        ),
    ];

    for (expected_type, fixture) in fixtures {
        let configuration = config(fixture);
        let model = factory.create(configuration.clone(), None)?;
        assert_eq!(model.model_type(), expected_type);

        let serialized = serde_json::to_value(&model)?;
        for (key, value) in &configuration {
            // Person 輸出時刻意省略 object
            if expected_type == "person" && key == "object" {
                continue;
            }
            match key.as_str() {
                // 巢狀模型會補上自己的預設值
                "lists" | "template" | "person" | "people" => {
                    assert!(serialized.get(key).is_some(), "{expected_type}: {key}")
                }
                _ => assert_eq!(&serialized[key], value, "{expected_type}: {key}"),
            }
        }
    }
    Ok(())
}

/// 預設值會出現在輸出
#[test]
fn test_defaults_are_serialized() -> Result<()> {
    let factory = ModelFactory::default();
    let model = factory.create(config(json!({"object": "list", "name": "VIP"})), None)?;
    let json = model.to_json();

    assert_eq!(json["id"], "");
    assert_eq!(json["list_type"], "standard");
    assert_eq!(json["folder"], Value::Null);
    assert_eq!(json["person_count"], 0);
    assert_eq!(json["created"], "");
    Ok(())
}

/// 沒有 discriminator 也沒有指定型別時失敗；空 configuration 得到 Empty
#[test]
fn test_missing_model_type() -> Result<()> {
    let factory = ModelFactory::default();

    let err = factory
        .create(config(json!({"id": "dqQnNW", "name": "VIP"})), None)
        .unwrap_err();
    assert!(matches!(err, KlaviyoError::MissingModelType));

    let err = factory.create_from_json(r#"{"name": "VIP"}"#, None).unwrap_err();
    assert!(matches!(err, KlaviyoError::MissingModelType));

    let model = factory.create(Configuration::new(), None)?;
    assert!(model.is_empty_model());
    assert_eq!(model.object_type(), None);

    let model = factory.create_from_json("{}", None)?;
    assert!(matches!(model, KlaviyoModel::Empty(_)));
    Ok(())
}

/// 指定型別時不需要 discriminator
#[test]
fn test_explicit_type() -> Result<()> {
    let factory = ModelFactory::default();
    let model = factory.create(config(json!({"name": "VIP"})), Some("list"))?;

    let list = model.as_list().expect("list model");
    assert_eq!(list.name(), "VIP");
    assert_eq!(list.object_type(), "list");
    Ok(())
}

/// 未知的型別不是錯誤
#[test]
fn test_unknown_type_falls_back_to_empty() -> Result<()> {
    let factory = ModelFactory::default();
    let model = factory.create_from_json(r#"{"object": "metric", "id": "abc", "name": "Placed Order"}"#, None)?;

    assert!(model.is_empty_model());
    assert_eq!(model.to_json_string()?, "{}");
    Ok(())
}

/// 必填欄位缺少時回傳型別化的錯誤
#[test]
fn test_required_field_missing() -> Result<()> {
    let factory = ModelFactory::default();
    let err = factory.create(config(json!({"object": "list"})), None).unwrap_err();

    assert!(matches!(
        err,
        KlaviyoError::RequiredFieldMissing { ref model, ref field } if model == "list" && field == "name"
    ));
    Ok(())
}

/// JSON 解析錯誤與非物件的 payload
#[test]
fn test_invalid_payloads() -> Result<()> {
    let factory = ModelFactory::default();

    assert!(matches!(
        factory.create_from_json("{not json", None),
        Err(KlaviyoError::SerializationError(_))
    ));
    assert!(matches!(
        factory.create_from_json(r#"["person"]"#, Some("person")),
        Err(KlaviyoError::InvalidPayload { .. })
    ));
    Ok(())
}

/// 分頁回應裡的每一筆資料依自己的 object 建立
#[test]
fn test_page_dispatches_items() -> Result<()> {
    let factory = ModelFactory::default();
    let model = factory.create_from_json(
        r#"{
            "object": "$list",
            "start": 0,
            "end": 1,
            "page": 0,
            "page_size": 50,
            "total": 2,
            "data": [
                {"object": "list", "id": "dqQnNW", "name": "Newsletter Subscribers", "person_count": 1},
                {
                    "object": "person",
                    "id": "0mzwQ7",
                    "$email": "martha@example.com",
                    "$first_name": "Martha",
                    "email": "martha@example.com",
                    "first_name": "Martha"
                },
                {"object": "metric", "id": "abc"}
            ]
        }"#,
        None,
    )?;

    let page = model.as_page().expect("page model");
    assert_eq!(page.object_type(), "$list");
    assert_eq!(page.total(), 2);
    assert_eq!(page.page_size(), 50);
    assert_eq!(page.data().len(), 3);
    assert_eq!(page.data()[0].model_type(), "list");

    let person = page.data()[1].as_person().expect("person item");
    assert!(person.all_custom_attributes().is_empty());
    assert!(page.data()[2].is_empty_model());

    // 輸出後再建立要得到相同的分頁
    let restored = factory.create(model.to_map(), None)?;
    assert_eq!(restored, model);
    Ok(())
}

/// 設定檔的別名會改變分派結果
#[test]
fn test_config_aliases_route_discriminators() -> Result<()> {
    let config_file = TomlConfig::from_toml_str(
        r#"
[registry]
aliases = { "profile" = "person" }
"#,
    )?;
    let factory = ModelFactory::new(config_file.type_registry());

    let model = factory.create_from_json(
        r#"{"object": "profile", "$email": "martha@example.com", "$first_name": "Martha"}"#,
        None,
    )?;
    let person = model.as_person().expect("person model");
    assert_eq!(person.object_type(), "profile");
    assert_eq!(person.to_map()["object"], "profile");

    // 預設 factory 不認得這個型別
    let fallback = ModelFactory::default().create_from_json(
        r#"{"object": "profile", "$email": "martha@example.com", "$first_name": "Martha"}"#,
        None,
    )?;
    assert!(fallback.is_empty_model());
    Ok(())
}

#[test]
fn test_model_types_cover_factory_map() {
    let types = model_types();
    assert_eq!(types.len(), 9);
    assert!(types.contains(&"empty"));
}
