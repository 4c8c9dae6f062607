use anyhow::Result;
use klaviyo_models::{Campaign, Configuration, KlaviyoError, Model};
use serde_json::{json, Value};

fn product_launch() -> Configuration {
    match json!({
        "object": "campaign",
        "id": "dqQnNW",
        "name": "Product Launch",
        "subject": "Our newest product is here",
        "from_email": "george.washington@example.com",
        "from_name": "George Washington",
        "lists": [
            {
                "object": "list",
                "id": "dqQnNW",
                "name": "Newsletter Subscribers",
                "list_type": "standard",
                "folder": null,
                "created": "2013-06-10 13:00:00",
                "updated": "2013-06-17 14:00:00",
                "person_count": 1
            }
        ],
        "template": {
            "object": "email-template",
            "id": "9ki8kj",
            "name": "Launch Template",
            "html": "<html><body><p>Hello</p></body></html>",
            "created": "2013-06-10 13:00:00",
            "updated": "2013-06-12 09:00:00"
        },
        "status": "sent",
        "status_id": 1,
        "status_label": "Sent",
        "sent_at": "2013-06-14 16:30:00",
        "send_time": "2013-06-14 16:00:00",
        "created": "2013-06-10 13:00:00",
        "updated": "2013-06-14 16:31:00",
        "num_recipients": 5000,
        "is_segmented": false,
        "campaign_type": "Regular"
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn minimal() -> Configuration {
    match json!({
        "name": "Draft",
        "subject": "Coming soon",
        "from_email": "george.washington@example.com",
        "from_name": "George",
        "lists": [],
        "template": {"name": "Blank", "html": ""},
        "sent_at": null,
        "created": "2013-06-10 13:00:00"
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[test]
fn test_campaign_from_api_response() -> Result<()> {
    let configuration = product_launch();
    let campaign = Campaign::create(configuration.clone())?;

    assert_eq!(campaign.name(), "Product Launch");
    assert_eq!(campaign.status_id(), 1);
    assert_eq!(campaign.num_recipients(), 5000);
    assert_eq!(campaign.lists().len(), 1);
    assert_eq!(campaign.lists()[0].name(), "Newsletter Subscribers");
    assert_eq!(campaign.template().name(), "Launch Template");

    // 完整的 configuration 原樣輸出
    assert_eq!(campaign.to_json(), configuration);
    Ok(())
}

/// created 與 updated 各自輸出自己的值
#[test]
fn test_dates_serialize_their_own_values() -> Result<()> {
    let campaign = Campaign::create(product_launch())?;
    let json = campaign.to_json();

    assert_ne!(campaign.created(), campaign.updated());
    assert_eq!(json["created"], "2013-06-10 13:00:00");
    assert_eq!(json["updated"], "2013-06-14 16:31:00");
    assert_eq!(json["send_time"], "2013-06-14 16:00:00");
    assert_eq!(json["sent_at"], "2013-06-14 16:30:00");
    Ok(())
}

/// 草稿 campaign 套用預設值，sent_at 保持 null
#[test]
fn test_campaign_defaults() -> Result<()> {
    let campaign = Campaign::create(minimal())?;
    let json = campaign.to_json();

    assert_eq!(campaign.object_type(), "campaign");
    assert_eq!(campaign.status(), "draft");
    assert_eq!(campaign.status_id(), 2);
    assert_eq!(campaign.status_label(), "Draft");
    assert_eq!(campaign.campaign_type(), "Regular");
    assert!(!campaign.is_segmented());
    assert!(campaign.sent_at().is_none());
    assert!(campaign.send_time().is_none());

    assert_eq!(json["sent_at"], Value::Null);
    assert_eq!(json["send_time"], "");
    assert_eq!(json["updated"], "");
    assert_eq!(json["template"]["object"], "email-template");
    Ok(())
}

/// `$` 前綴的宣告欄位會改成一般 key
#[test]
fn test_prefixed_keys_are_cleaned() -> Result<()> {
    let mut configuration = minimal();
    configuration.remove("name");
    configuration.insert("$name".to_string(), json!("Prefixed"));
    configuration.insert("$subject".to_string(), json!("Ignored"));

    let campaign = Campaign::create(configuration)?;
    assert_eq!(campaign.name(), "Prefixed");
    // 一般 key 優先
    assert_eq!(campaign.subject(), "Coming soon");
    Ok(())
}

#[test]
fn test_campaign_invalid_fields() -> Result<()> {
    let mut configuration = minimal();
    configuration.insert("created".to_string(), json!("last tuesday"));
    assert!(matches!(
        Campaign::create(configuration),
        Err(KlaviyoError::InvalidDate { .. })
    ));

    let mut configuration = minimal();
    configuration.insert("lists".to_string(), json!(["dqQnNW"]));
    assert!(matches!(
        Campaign::create(configuration),
        Err(KlaviyoError::InvalidFieldType { .. })
    ));

    let mut configuration = minimal();
    configuration.remove("template");
    assert!(matches!(
        Campaign::create(configuration),
        Err(KlaviyoError::RequiredFieldMissing { .. })
    ));
    Ok(())
}

/// ISO 8601 的日期也能解析，輸出統一格式
#[test]
fn test_iso_dates_are_normalized() -> Result<()> {
    let mut configuration = minimal();
    configuration.insert("created".to_string(), json!("2013-06-10T13:00:00Z"));

    let campaign = Campaign::create(configuration)?;
    assert_eq!(campaign.to_json()["created"], "2013-06-10 13:00:00");
    Ok(())
}
