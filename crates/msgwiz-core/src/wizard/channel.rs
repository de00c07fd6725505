//! Delivery channels.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Delivery medium of a generated message.
///
/// Serialized (and parsed) in the wire form used by the generation backend:
/// `APP_PUSH`, `SMS`, `KAKAO`, `EMAIL`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Channel {
    AppPush,
    Sms,
    Kakao,
    Email,
}

impl Channel {
    /// Human-readable name for menus.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::AppPush => "App push notification",
            Channel::Sms => "SMS",
            Channel::Kakao => "KakaoTalk message",
            Channel::Email => "Email",
        }
    }
}
