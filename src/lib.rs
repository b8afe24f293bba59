pub mod common;
pub mod gateway;
pub mod payload;

pub use common::error::{PayloadResult, PushError};
pub use gateway::{DeliveryRequest, DeliveryResult, GatewayConfig, PushTransport};
pub use payload::alert::PushAlert;
pub use payload::notification::{PushNotification, PushType};
pub use payload::value::{PayloadMap, PayloadValue};
