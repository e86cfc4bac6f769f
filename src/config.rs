//! Generator configuration.

use serde::Deserialize;

/// Settings for [`TimetableService`](crate::service::TimetableService).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Lowest accepted semester.
    #[serde(default = "default_min_semester")]
    pub min_semester: u8,

    /// Highest accepted semester.
    #[serde(default = "default_max_semester")]
    pub max_semester: u8,

    /// Prefix of the date-stamped name used when a request has none.
    #[serde(default = "default_name_prefix")]
    pub default_name_prefix: String,

    /// Honour faculty and classroom availability windows.
    ///
    /// Off by default: any resource is bookable at any cell unless this
    /// run already committed it.
    #[serde(default)]
    pub enforce_availability: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_semester: default_min_semester(),
            max_semester: default_max_semester(),
            default_name_prefix: default_name_prefix(),
            enforce_availability: false,
        }
    }
}

fn default_min_semester() -> u8 {
    1
}

fn default_max_semester() -> u8 {
    8
}

fn default_name_prefix() -> String {
    "Timetable".to_string()
}
