//! Tracker command encoder.
//!
//! Formats operator intent into the ASCII AT-command syntax understood by the tracker firmware.
//! Every function here is pure: identical inputs always produce identical strings and nothing is
//! read from or written to the network or database. The module is shared between the server,
//! which stores the encoded string on the command row, and the client, which renders a live
//! preview of the command before it is submitted.
//!
//! # Framing
//! Commands are comma-delimited and terminated by `$`. Field values are embedded verbatim, so a
//! password or APN containing `,` or `$` produces a string the device will mis-frame. Callers can
//! detect such values with [`has_framing_chars`]; the encoder itself never rejects or escapes them.

use std::fmt;

/// Command code for output control (vehicle block/unblock).
pub const GTOUT: &str = "GTOUT";
/// Command code for the server address settings.
pub const GTSRI: &str = "GTSRI";
/// Command code for the bearer (APN) settings.
pub const GTBSI: &str = "GTBSI";

/// Message index placeholder appended to server and APN commands.
const FIXED_COUNTER: &str = "0001";

/// Field separator of the AT-command wire format.
pub const FIELD_SEPARATOR: char = ',';
/// Terminating sentinel of the AT-command wire format.
pub const TERMINATOR: char = '$';

/// Hardware model of a tracker, which selects the field layout of the `GTOUT` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackerModel {
    Gmt200,
    Gv300,
    #[default]
    Gv50,
}

impl TrackerModel {
    /// All supported models, in the order they are offered to operators.
    pub const ALL: [TrackerModel; 3] = [TrackerModel::Gv50, TrackerModel::Gv300, TrackerModel::Gmt200];

    /// Resolves a model name as reported by operators or stored on the vehicle.
    ///
    /// Matching ignores surrounding whitespace and case. Unknown names resolve to the default
    /// GV50 layout.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "GMT200" => TrackerModel::Gmt200,
            "GV300" => TrackerModel::Gv300,
            _ => TrackerModel::Gv50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerModel::Gmt200 => "GMT200",
            TrackerModel::Gv300 => "GV300",
            TrackerModel::Gv50 => "GV50",
        }
    }
}

impl fmt::Display for TrackerModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encodes a `GTOUT` block or unblock command for the given tracker model.
///
/// The output bit is `1` to block and `0` to unblock. The trailing counter is `000` followed by the
/// same bit. All layouts start with the password and carry the bit in the second field; they only
/// differ in the number and placement of reserved fields.
///
/// # Example
/// ```
/// use trackhub::protocol::{encode_block, TrackerModel};
///
/// assert_eq!(
///     encode_block(true, TrackerModel::Gv50, "gv50"),
///     "AT+GTOUT=gv50,1,,,,,,0,,,,,,,0001$"
/// );
/// ```
pub fn encode_block(block: bool, model: TrackerModel, password: &str) -> String {
    let bit = if block { "1" } else { "0" };
    let counter = format!("000{}", bit);

    match model {
        TrackerModel::Gmt200 => {
            format!("AT+GTOUT={password},{bit},0,0,0,,,,,,,,,,{counter}$")
        }
        TrackerModel::Gv300 => {
            format!("AT+GTOUT={password},{bit},,,0,0,0,0,5,1,0,,1,1,,,{counter}$")
        }
        TrackerModel::Gv50 => {
            format!("AT+GTOUT={password},{bit},,,,,,0,,,,,,,{counter}$")
        }
    }
}

/// Encodes a `GTSRI` command pointing the tracker at a new server endpoint.
///
/// Neither the address nor the port is validated.
pub fn encode_server_config(server_ip: &str, server_port: i32, password: &str) -> String {
    format!("AT+GTSRI={password},{server_ip},{server_port},,,{FIXED_COUNTER}$")
}

/// Encodes a `GTBSI` command with the cellular APN settings.
///
/// `apn_username` and `apn_password` may be empty, leaving their fields blank.
pub fn encode_apn_config(
    apn_name: &str,
    apn_username: &str,
    apn_password: &str,
    device_password: &str,
) -> String {
    format!(
        "AT+GTBSI={device_password},{apn_name},{apn_username},{apn_password},,,{FIXED_COUNTER}$"
    )
}

/// Returns true when the value contains a character that breaks AT-command framing.
pub fn has_framing_chars(value: &str) -> bool {
    value.contains(FIELD_SEPARATOR) || value.contains(TERMINATOR) || value.contains(['\r', '\n'])
}
