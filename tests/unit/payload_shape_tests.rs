#![cfg(test)]

use apns_payload::{PayloadValue, PushError, PushNotification, PushType};

fn json(push: &PushNotification) -> String {
    serde_json::to_string(&push.generate_payload().unwrap()).unwrap()
}

#[test]
fn background_content_available_shape() {
    let mut push = PushNotification::new(PushType::Background);
    push.add_content_available();
    assert_eq!(json(&push), r#"{"aps":{"content-available":"1"}}"#);
}

#[test]
fn full_alert_shape() {
    let mut push = PushNotification::new(PushType::Alert);
    push.add_content_available()
        .add_mutable_content()
        .add_alert(Some("title"), Some("body"));
    assert_eq!(
        json(&push),
        r#"{"aps":{"content-available":"1","mutable-content":"1","alert":{"title":"title","body":"body"}}}"#
    );
}

#[test]
fn body_only_alert_with_custom_property() {
    let mut push = PushNotification::new(PushType::Alert);
    push.add_alert(None, Some("testAlert"));
    push.add_custom_property("customPropertyKey", "customPropertyValue")
        .unwrap();
    assert_eq!(
        json(&push),
        r#"{"aps":{"alert":"testAlert"},"customPropertyKey":"customPropertyValue"}"#
    );
}

#[test]
fn file_provider_payload_is_container_only() {
    let mut push = PushNotification::new(PushType::FileProvider);
    push.add_container_identifier("container-123").unwrap();
    assert_eq!(json(&push), r#"{"container-identifier":"container-123"}"#);
}

#[test]
fn file_provider_without_container_fails() {
    let push = PushNotification::new(PushType::FileProvider);
    assert!(matches!(
        push.generate_payload(),
        Err(PushError::MissingField(_))
    ));
}

#[test]
fn content_available_is_the_string_one() {
    let mut push = PushNotification::new(PushType::Background);
    push.add_content_available();
    let payload = push.generate_payload().unwrap();
    let Some(PayloadValue::Object(aps)) = payload.get("aps") else {
        panic!("payload has no aps object");
    };
    assert_eq!(
        aps.get("content-available"),
        Some(&PayloadValue::String("1".to_string()))
    );
}

#[test]
fn location_key_is_capitalized() {
    let mut push = PushNotification::new(PushType::Alert);
    push.add_location("office").unwrap();
    assert_eq!(json(&push), r#"{"aps":{"Location":"office"}}"#);
}

#[test]
fn every_set_field_round_trips() {
    let mut push = PushNotification::new(PushType::Alert);
    push.add_mutable_content();
    push.add_alert(Some("a title"), Some("a body"));
    push.add_badge(12).unwrap();
    push.add_sound("horn.aiff").unwrap();
    push.add_location("dock").unwrap();
    push.add_custom_property("first", 1i64).unwrap();
    push.add_custom_property("second", true).unwrap();
    push.add_custom_property("third", "three").unwrap();

    let payload = push.generate_payload().unwrap();
    let Some(PayloadValue::Object(aps)) = payload.get("aps") else {
        panic!("payload has no aps object");
    };

    assert_eq!(
        aps.get("mutable-content"),
        Some(&PayloadValue::String("1".to_string()))
    );
    let Some(PayloadValue::Object(alert)) = aps.get("alert") else {
        panic!("alert is not an object");
    };
    assert_eq!(
        alert.get("title"),
        Some(&PayloadValue::String("a title".to_string()))
    );
    assert_eq!(
        alert.get("body"),
        Some(&PayloadValue::String("a body".to_string()))
    );
    assert_eq!(aps.get("badge"), Some(&PayloadValue::Integer(12)));
    assert_eq!(
        aps.get("sound"),
        Some(&PayloadValue::String("horn.aiff".to_string()))
    );
    assert_eq!(
        aps.get("Location"),
        Some(&PayloadValue::String("dock".to_string()))
    );

    // Custom properties are top-level siblings of aps, in insertion order.
    let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["aps", "first", "second", "third"]);
    assert_eq!(payload.get("first"), Some(&PayloadValue::Integer(1)));
    assert_eq!(payload.get("second"), Some(&PayloadValue::Bool(true)));
    assert_eq!(
        payload.get("third"),
        Some(&PayloadValue::String("three".to_string()))
    );
}

#[test]
fn absent_fields_never_appear() {
    let push = PushNotification::new(PushType::Alert);
    assert_eq!(json(&push), r#"{"aps":{}}"#);
}

#[test]
fn generate_payload_is_repeatable() {
    let mut push = PushNotification::new(PushType::Alert);
    push.add_alert(Some("t"), Some("b"));
    push.add_badge(1).unwrap();
    let first = json(&push);
    let second = json(&push);
    assert_eq!(first, second);
}
