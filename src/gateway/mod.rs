//! Interface to the transport collaborator.
//!
//! This crate only produces the transport's input. Connecting to APNs over
//! HTTP/2, authenticating and retrying live behind [`PushTransport`],
//! implemented elsewhere.

use crate::payload::notification::PushType;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Everything a transport needs to deliver one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub token: String,
    pub payload: Vec<u8>,
    pub priority: i32,
    pub push_type: PushType,
}

impl DeliveryRequest {
    /// Value for the `apns-push-type` header.
    pub fn header_push_type(&self) -> &'static str {
        self.push_type.header_value()
    }

    /// Value for the `apns-priority` header.
    pub fn header_priority(&self) -> String {
        self.priority.to_string()
    }

    /// Request path on the gateway host.
    pub fn device_path(&self) -> String {
        format!("/3/device/{}", self.token)
    }
}

/// Outcome reported back by a transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub success: bool,
    pub error: Option<String>,
    pub should_retry: bool,
}

impl DeliveryResult {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
            should_retry: false,
        }
    }

    pub fn failure(error: &str) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            should_retry: false,
        }
    }

    pub fn retryable_failure(error: &str) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            should_retry: true,
        }
    }
}

#[async_trait]
pub trait PushTransport: Send + Sync {
    fn name(&self) -> &str;

    async fn deliver(&self, request: &DeliveryRequest) -> DeliveryResult;

    fn is_enabled(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: crate::common::constants::PRODUCTION_ENDPOINT.to_string(),
            timeout_secs: crate::common::constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    pub fn sandbox() -> Self {
        Self {
            endpoint: crate::common::constants::SANDBOX_ENDPOINT.to_string(),
            ..Default::default()
        }
    }
}
