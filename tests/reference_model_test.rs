use anyhow::Result;
use klaviyo_models::{KlaviyoError, ListReference, Model, PersonReference};

#[test]
fn test_list_reference() -> Result<()> {
    let reference = ListReference::create_from_json(
        r#"{"object": "list", "id": "dqQnNW", "name": "Newsletter Subscribers"}"#,
    )?;

    assert_eq!(reference.object_type(), "list");
    assert_eq!(reference.id(), "dqQnNW");
    assert_eq!(reference.name(), "Newsletter Subscribers");
    assert_eq!(
        reference.to_json_string()?,
        r#"{"object":"list","id":"dqQnNW","name":"Newsletter Subscribers"}"#
    );
    Ok(())
}

/// id 與 name 都是必填
#[test]
fn test_list_reference_required_fields() -> Result<()> {
    let reference = ListReference::create_from_json(r#"{"id": "dqQnNW", "name": "VIP"}"#)?;
    assert_eq!(reference.object_type(), "list");

    let err = ListReference::create_from_json(r#"{"name": "VIP"}"#).unwrap_err();
    assert!(matches!(
        err,
        KlaviyoError::RequiredFieldMissing { ref field, .. } if field == "id"
    ));
    Ok(())
}

#[test]
fn test_person_reference() -> Result<()> {
    let reference = PersonReference::create_from_json(
        r#"{"object": "person", "id": "dqQnNW", "email": "george.washington@example.com"}"#,
    )?;

    assert_eq!(reference.object_type(), "person");
    assert_eq!(reference.id(), "dqQnNW");
    assert_eq!(reference.email(), "george.washington@example.com");

    let restored = PersonReference::create(reference.to_json())?;
    assert_eq!(restored, reference);
    Ok(())
}

/// 只有 email 時補上 object 與空 id
#[test]
fn test_person_reference_defaults() -> Result<()> {
    let reference = PersonReference::create_from_json(r#"{"email": "martha@example.com"}"#)?;

    assert_eq!(reference.object_type(), "person");
    assert_eq!(reference.id(), "");

    assert!(matches!(
        PersonReference::create_from_json(r#"{"id": "dqQnNW"}"#),
        Err(KlaviyoError::RequiredFieldMissing { .. })
    ));
    Ok(())
}
