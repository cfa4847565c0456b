use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Online,
    Offline,
    Blocked,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Online => "online",
            VehicleStatus::Offline => "offline",
            VehicleStatus::Blocked => "blocked",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: i32,
    pub imei: String,
    pub cpf: Option<String>,
    pub plate: Option<String>,
    pub ignition: Option<bool>,
    pub blocked: bool,
    pub block_command_pending: bool,
    pub block_warning_sent: bool,
    pub tracker_model: Option<String>,
    pub tracker_password: Option<String>,
    pub status: VehicleStatus,
    pub last_seen: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl VehicleDto {
    /// Plate when registered, otherwise a label derived from the IMEI suffix
    pub fn display_name(&self) -> String {
        match &self.plate {
            Some(plate) if !plate.is_empty() => plate.clone(),
            _ => {
                let start = self
                    .imei
                    .char_indices()
                    .rev()
                    .nth(3)
                    .map_or(0, |(index, _)| index);
                format!("Device {}", &self.imei[start..])
            }
        }
    }

    /// Case-insensitive match against the IMEI or plate
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        self.imei.to_lowercase().contains(&term)
            || self
                .plate
                .as_ref()
                .is_some_and(|plate| plate.to_lowercase().contains(&term))
    }
}

/// A telemetry sample reported by a tracker
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct VehicleDataDto {
    pub id: i32,
    pub imei: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub altitude: Option<String>,
    pub speed: Option<String>,
    pub ignition: Option<bool>,
    pub timestamp: NaiveDateTime,
    pub device_time: Option<String>,
    pub raw_data: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn vehicle(imei: &str, plate: Option<&str>) -> VehicleDto {
        VehicleDto {
            id: 1,
            imei: imei.to_string(),
            cpf: None,
            plate: plate.map(str::to_string),
            ignition: None,
            blocked: false,
            block_command_pending: false,
            block_warning_sent: false,
            tracker_model: None,
            tracker_password: None,
            status: VehicleStatus::Offline,
            last_seen: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn display_name_prefers_plate() {
        assert_eq!(
            vehicle("864696060123456", Some("ABC1D23")).display_name(),
            "ABC1D23"
        );
        assert_eq!(
            vehicle("864696060123456", None).display_name(),
            "Device 3456"
        );
        assert_eq!(vehicle("12", Some("")).display_name(), "Device 12");
    }

    /// Expect the IMEI suffix to be cut on character boundaries
    #[test]
    fn display_name_handles_multibyte_imei() {
        assert_eq!(vehicle("ééa", None).display_name(), "Device ééa");
        assert_eq!(vehicle("12ééab", None).display_name(), "Device ééab");
        assert_eq!(vehicle("", None).display_name(), "Device ");
    }

    #[test]
    fn search_matches_imei_or_plate() {
        let v = vehicle("864696060123456", Some("ABC1D23"));

        assert!(v.matches_search("0123"));
        assert!(v.matches_search("abc1"));
        assert!(v.matches_search("  "));
        assert!(!v.matches_search("xyz"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&VehicleStatus::Blocked).unwrap();

        assert_eq!(json, "\"blocked\"");
    }
}
