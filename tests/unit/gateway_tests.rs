#![cfg(test)]

use apns_payload::{
    DeliveryRequest, DeliveryResult, PushNotification, PushTransport, PushType,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Transport double that records whatever it is asked to deliver.
struct RecordingTransport {
    delivered: Mutex<Vec<DeliveryRequest>>,
}

impl RecordingTransport {
    fn new() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PushTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn deliver(&self, request: &DeliveryRequest) -> DeliveryResult {
        self.delivered.lock().unwrap().push(request.clone());
        DeliveryResult::success()
    }
}

#[tokio::test]
async fn transport_receives_the_builder_output_unchanged() {
    let mut push = PushNotification::new(PushType::Voip);
    push.add_voip_token("voip-token-1").unwrap();
    push.add_alert(Some("incoming call"), Some("from alice"));

    let request = push.delivery_request().unwrap();
    let transport = RecordingTransport::new();
    let result = transport.deliver(&request).await;

    assert!(result.success);
    let delivered = transport.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].token, "voip-token-1");
    assert_eq!(delivered[0].push_type, PushType::Voip);
    assert_eq!(delivered[0].priority, 10);
    assert_eq!(delivered[0].header_push_type(), "voip");
    assert_eq!(delivered[0].device_path(), "/3/device/voip-token-1");
    assert_eq!(delivered[0].payload, push.payload_json().unwrap().into_bytes());
}

#[tokio::test]
async fn transport_is_enabled_by_default() {
    let transport = RecordingTransport::new();
    assert!(transport.is_enabled());
    assert_eq!(transport.name(), "recording");
}
