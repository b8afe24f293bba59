use crate::common::constants::{
    BACKGROUND_PRIORITY, DEFAULT_SOUND, IMMEDIATE_PRIORITY, MAX_PRIORITY, MIN_PRIORITY,
    ROOT_CONTAINER_IDENTIFIER,
};
use crate::common::error::{PayloadResult, PushError};
use crate::common::validation::require_non_blank;
use crate::gateway::DeliveryRequest;
use crate::payload::alert::PushAlert;
use crate::payload::value::{PayloadMap, PayloadValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The closed set of push variants the gateway distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PushType {
    Alert,
    Background,
    Voip,
    FileProvider,
}

impl PushType {
    /// Value carried in the `apns-push-type` request header.
    pub fn header_value(&self) -> &'static str {
        match self {
            PushType::Alert => "alert",
            PushType::Background => "background",
            PushType::Voip => "voip",
            PushType::FileProvider => "fileprovider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AlertContent {
    title: Option<String>,
    body: Option<String>,
}

/// A single notification under construction.
///
/// Attributes are accumulated through fluent `add_*` calls, each of which
/// validates before mutating; a rejected call leaves the notification
/// unchanged. `generate_payload` is read-only and may be called repeatedly.
#[derive(Debug, Clone, PartialEq)]
pub struct PushNotification {
    push_type: PushType,
    token: Option<String>,
    voip_token: Option<String>,
    custom_priority: Option<i32>,
    alert: Option<AlertContent>,
    send_alert_as_text: bool,
    badge: Option<i64>,
    sound: Option<String>,
    location: Option<String>,
    content_available: bool,
    mutable_content: bool,
    container_identifier: Option<String>,
    custom_properties: Option<PayloadMap>,
}

impl PushNotification {
    pub fn new(push_type: PushType) -> Self {
        Self {
            push_type,
            token: None,
            voip_token: None,
            custom_priority: None,
            alert: None,
            send_alert_as_text: false,
            badge: None,
            sound: None,
            location: None,
            content_available: false,
            mutable_content: false,
            container_identifier: None,
            custom_properties: None,
        }
    }

    pub fn push_type(&self) -> PushType {
        self.push_type
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn voip_token(&self) -> Option<&str> {
        self.voip_token.as_deref()
    }

    /// Whichever destination token is set, device or VoIP.
    pub fn destination_token(&self) -> Option<&str> {
        self.token.as_deref().or(self.voip_token.as_deref())
    }

    pub fn custom_priority(&self) -> Option<i32> {
        self.custom_priority
    }

    pub fn badge(&self) -> Option<i64> {
        self.badge
    }

    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn content_available(&self) -> bool {
        self.content_available
    }

    pub fn mutable_content(&self) -> bool {
        self.mutable_content
    }

    pub fn container_identifier(&self) -> Option<&str> {
        self.container_identifier.as_deref()
    }

    pub fn send_alert_as_text(&self) -> bool {
        self.send_alert_as_text
    }

    /// Custom priority when one was set, otherwise 5 for background pushes
    /// and 10 for everything else. Recomputed on every read.
    pub fn effective_priority(&self) -> i32 {
        match self.custom_priority {
            Some(priority) => priority,
            None if self.push_type == PushType::Background => BACKGROUND_PRIORITY,
            None => IMMEDIATE_PRIORITY,
        }
    }

    pub fn add_content_available(&mut self) -> &mut Self {
        self.content_available = true;
        self
    }

    pub fn add_mutable_content(&mut self) -> &mut Self {
        self.mutable_content = true;
        self
    }

    pub fn add_container_identifier(&mut self, identifier: &str) -> PayloadResult<&mut Self> {
        if self.push_type != PushType::FileProvider {
            return Err(PushError::invalid_state(
                "container identifier is only valid for file-provider pushes",
            ));
        }
        if self.container_identifier.is_some() {
            return Err(PushError::already_set("container identifier"));
        }
        self.container_identifier = Some(identifier.to_string());
        Ok(self)
    }

    /// Signals a change on the whole file-provider tree.
    pub fn add_root_container_identifier(&mut self) -> PayloadResult<&mut Self> {
        self.add_container_identifier(ROOT_CONTAINER_IDENTIFIER)
    }

    /// Permissive alert entry point: both parts are optional and nothing is
    /// validated. The stricter path is [`add_push_alert`], which goes
    /// through [`PushAlert`] and rejects a blank body.
    ///
    /// [`add_push_alert`]: Self::add_push_alert
    /// [`PushAlert`]: crate::payload::alert::PushAlert
    pub fn add_alert(&mut self, title: Option<&str>, body: Option<&str>) -> &mut Self {
        self.send_alert_as_text = title.is_none();
        self.alert = Some(AlertContent {
            title: title.map(str::to_string),
            body: body.map(str::to_string),
        });
        self
    }

    pub fn add_push_alert(&mut self, alert: PushAlert) -> &mut Self {
        self.add_alert(alert.title(), Some(alert.body()))
    }

    pub fn set_priority(&mut self, priority: i32) -> PayloadResult<&mut Self> {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(PushError::out_of_range(format!(
                "priority {} is outside [{}, {}]",
                priority, MIN_PRIORITY, MAX_PRIORITY
            )));
        }
        self.custom_priority = Some(priority);
        Ok(self)
    }

    pub fn add_badge(&mut self, badge: i64) -> PayloadResult<&mut Self> {
        if self.content_available {
            return Err(PushError::invalid_state(
                "badge cannot be combined with content-available",
            ));
        }
        if self.badge.is_some() {
            return Err(PushError::already_set("badge"));
        }
        self.badge = Some(badge);
        Ok(self)
    }

    pub fn add_sound(&mut self, sound: &str) -> PayloadResult<&mut Self> {
        require_non_blank("sound", sound)?;
        if self.content_available {
            return Err(PushError::invalid_state(
                "sound cannot be combined with content-available",
            ));
        }
        if self.sound.is_some() {
            return Err(PushError::already_set("sound"));
        }
        self.sound = Some(sound.to_string());
        Ok(self)
    }

    pub fn add_default_sound(&mut self) -> PayloadResult<&mut Self> {
        self.add_sound(DEFAULT_SOUND)
    }

    /// Best-effort field; undocumented by the gateway but passed through.
    pub fn add_location(&mut self, location: &str) -> PayloadResult<&mut Self> {
        require_non_blank("location", location)?;
        if self.content_available {
            return Err(PushError::invalid_state(
                "location cannot be combined with content-available",
            ));
        }
        if self.location.is_some() {
            return Err(PushError::already_set("location"));
        }
        self.location = Some(location.to_string());
        Ok(self)
    }

    pub fn add_token(&mut self, token: &str) -> PayloadResult<&mut Self> {
        require_non_blank("token", token)?;
        if self.token.is_some() || self.voip_token.is_some() {
            return Err(PushError::already_set("destination token"));
        }
        if self.push_type == PushType::Voip {
            return Err(PushError::invalid_state(
                "voip pushes take a voip token, not a device token",
            ));
        }
        self.token = Some(token.to_string());
        Ok(self)
    }

    pub fn add_voip_token(&mut self, voip_token: &str) -> PayloadResult<&mut Self> {
        require_non_blank("voip token", voip_token)?;
        if self.token.is_some() || self.voip_token.is_some() {
            return Err(PushError::already_set("destination token"));
        }
        if self.push_type != PushType::Voip {
            return Err(PushError::invalid_state(
                "voip token is only valid for voip pushes",
            ));
        }
        self.voip_token = Some(voip_token.to_string());
        Ok(self)
    }

    pub fn add_custom_property(
        &mut self,
        key: &str,
        value: impl Into<PayloadValue>,
    ) -> PayloadResult<&mut Self> {
        let properties = self.custom_properties.get_or_insert_with(PayloadMap::new);
        if properties.contains_key(key) {
            return Err(PushError::duplicate_key(format!(
                "custom property {} is already present",
                key
            )));
        }
        properties.insert(key.to_string(), value.into());
        Ok(self)
    }

    /// Assembles the gateway payload from the current state.
    ///
    /// File-provider pushes carry only the container identifier; every other
    /// type gets an `aps` mapping with custom properties merged in as
    /// top-level siblings. Fields that were never set never appear.
    pub fn generate_payload(&self) -> PayloadResult<PayloadMap> {
        if self.push_type == PushType::FileProvider {
            let identifier = self.container_identifier.as_ref().ok_or_else(|| {
                PushError::missing_field("file-provider push without container identifier")
            })?;

            let mut payload = PayloadMap::new();
            payload.insert(
                "container-identifier".to_string(),
                PayloadValue::from(identifier.clone()),
            );
            return Ok(payload);
        }

        let mut aps = PayloadMap::new();

        if self.content_available {
            // The gateway expects the string "1" here, not the number 1.
            aps.insert("content-available".to_string(), PayloadValue::from("1"));
        }
        if self.mutable_content {
            aps.insert("mutable-content".to_string(), PayloadValue::from("1"));
        }

        if let Some(alert) = &self.alert {
            if self.send_alert_as_text {
                if let Some(body) = &alert.body {
                    aps.insert("alert".to_string(), PayloadValue::from(body.clone()));
                }
            } else {
                let mut alert_map = PayloadMap::new();
                if let Some(title) = &alert.title {
                    alert_map.insert("title".to_string(), PayloadValue::from(title.clone()));
                }
                if let Some(body) = &alert.body {
                    alert_map.insert("body".to_string(), PayloadValue::from(body.clone()));
                }
                aps.insert("alert".to_string(), PayloadValue::Object(alert_map));
            }
        }

        if let Some(badge) = self.badge {
            aps.insert("badge".to_string(), PayloadValue::from(badge));
        }
        if let Some(sound) = &self.sound {
            aps.insert("sound".to_string(), PayloadValue::from(sound.clone()));
        }
        if let Some(location) = &self.location {
            // Capitalized key kept for compatibility with existing consumers.
            aps.insert("Location".to_string(), PayloadValue::from(location.clone()));
        }

        let mut payload = PayloadMap::new();
        payload.insert("aps".to_string(), PayloadValue::Object(aps));

        if let Some(properties) = &self.custom_properties {
            for (key, value) in properties {
                payload.insert(key.clone(), value.clone());
            }
        }

        debug!(
            push_type = self.push_type.header_value(),
            keys = payload.len(),
            "generated payload"
        );

        Ok(payload)
    }

    /// The payload serialized to the JSON the transport sends.
    pub fn payload_json(&self) -> PayloadResult<String> {
        let payload = self.generate_payload()?;
        Ok(serde_json::to_string(&payload)?)
    }

    /// Bundles everything the transport collaborator needs: serialized
    /// payload, destination token, derived priority and push type.
    pub fn delivery_request(&self) -> PayloadResult<DeliveryRequest> {
        let token = self
            .destination_token()
            .ok_or_else(|| PushError::missing_field("notification has no destination token"))?
            .to_string();
        let payload = self.payload_json()?.into_bytes();

        Ok(DeliveryRequest {
            token,
            payload,
            priority: self.effective_priority(),
            push_type: self.push_type,
        })
    }
}
