use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A notification addressed to a vehicle owner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i32,
    pub cpf: Option<String>,
    pub imei: Option<String>,
    pub message_type_id: i32,
    pub message: String,
    pub message_html: Option<String>,
    pub timestamp: NaiveDateTime,
    pub read: bool,
}
