pub mod alert;
pub mod notification;
pub mod value;

pub use alert::PushAlert;
pub use notification::{PushNotification, PushType};
pub use value::{PayloadMap, PayloadValue};
