//! Outbound message requests, one struct per Viber message kind, plus the
//! shared send response.
//!
//! Every request validates itself before it is allowed near the transport:
//! `validate()` walks the required fields in a fixed order and names the first
//! one that is missing or blank, so a caller always gets the same diagnosis
//! for the same broken request.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VibotError};
use crate::types::{Contact, Location, Sender, Status};

/// Rejects `value` when it is empty or whitespace-only.
fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VibotError::InvalidArgument(field));
    }
    Ok(())
}

/// Rejects a zero byte count; Viber refuses sizeless media anyway.
fn require_size(field: &'static str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(VibotError::InvalidArgument(field));
    }
    Ok(())
}

/// Plain text message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendTextRequest {
    pub receiver: String,
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendTextRequest {
    pub fn new(receiver: String, sender: Sender, text: String) -> Self {
        Self {
            receiver,
            sender,
            text,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)?;
        require("text", &self.text)
    }
}

/// Picture message: image url plus a mandatory description shown under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendPictureRequest {
    pub receiver: String,
    pub sender: Sender,
    /// Caption under the picture; Viber rejects picture messages without one.
    pub text: String,
    /// Image url (jpeg/png, direct link).
    pub media: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendPictureRequest {
    pub fn new(receiver: String, sender: Sender, text: String, media: String) -> Self {
        Self {
            receiver,
            sender,
            text,
            media,
            thumbnail: None,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)?;
        require("text", &self.text)?;
        require("media", &self.media)
    }
}

/// Video message: video url and its size in bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendVideoRequest {
    pub receiver: String,
    pub sender: Sender,
    pub media: String,
    /// Size in bytes; zero is rejected before the request leaves the process.
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendVideoRequest {
    pub fn new(receiver: String, sender: Sender, media: String, size: u64) -> Self {
        Self {
            receiver,
            sender,
            media,
            size,
            duration: None,
            thumbnail: None,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)?;
        require("media", &self.media)?;
        require_size("size", self.size)
    }
}

/// File message: download url, size in bytes, and the name shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendFileRequest {
    pub receiver: String,
    pub sender: Sender,
    pub media: String,
    pub size: u64,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendFileRequest {
    pub fn new(receiver: String, sender: Sender, media: String, size: u64, file_name: String) -> Self {
        Self {
            receiver,
            sender,
            media,
            size,
            file_name,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)?;
        require("media", &self.media)?;
        require_size("size", self.size)?;
        require("file name", &self.file_name)
    }
}

/// Contact card message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendContactRequest {
    pub receiver: String,
    pub sender: Sender,
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendContactRequest {
    pub fn new(receiver: String, sender: Sender, contact: Contact) -> Self {
        Self {
            receiver,
            sender,
            contact,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)?;
        require("contact name", &self.contact.name)?;
        require("contact phone number", &self.contact.phone_number)
    }
}

/// Location pin message. Coordinates are plain numbers, so only the shared
/// fields can be malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendLocationRequest {
    pub receiver: String,
    pub sender: Sender,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendLocationRequest {
    pub fn new(receiver: String, sender: Sender, location: Location) -> Self {
        Self {
            receiver,
            sender,
            location,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)
    }
}

/// Url message; the target link travels in `media`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendUrlRequest {
    pub receiver: String,
    pub sender: Sender,
    pub media: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendUrlRequest {
    pub fn new(receiver: String, sender: Sender, media: String) -> Self {
        Self {
            receiver,
            sender,
            media,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)?;
        require("media", &self.media)
    }
}

/// Sticker message, by numeric sticker id from the Viber catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendStickerRequest {
    pub receiver: String,
    pub sender: Sender,
    pub sticker_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<u16>,
}

impl SendStickerRequest {
    pub fn new(receiver: String, sender: Sender, sticker_id: u32) -> Self {
        Self {
            receiver,
            sender,
            sticker_id,
            tracking_data: None,
            min_api_version: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require("receiver", &self.receiver)?;
        require("sender name", &self.sender.name)
    }
}

/// Response to any `/pa/send_message` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub status: Status,
    pub status_message: String,
    /// Delivery token assigned by Viber; absent on rejection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_token: Option<i64>,
}
