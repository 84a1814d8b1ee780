//! Request parameter set for the Street View node.

use serde::Deserialize;
use std::fmt;

pub(crate) const DEFAULT_SIZE: &str = "600x400";
pub(crate) const DEFAULT_FOV: i32 = 90;
pub(crate) const DEFAULT_PITCH: i32 = 0;
pub(crate) const DEFAULT_RADIUS: i32 = 50;

/// Imagery source restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Default,
    /// Outdoor imagery only, no indoor panoramas
    Outdoor,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::Outdoor => write!(f, "outdoor"),
        }
    }
}

/// Parameters for one Street View request.
///
/// Ranges mirror the Static API: size dimensions up to 640x640 (free tier),
/// heading 0-360, fov 10-120, pitch -90-90, radius 1-1000 meters. The host's
/// visual editor enforces the integer ranges; this node validates the fields
/// that break a request outright (address, size).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestParameters {
    /// Street address or `lat,lng` coordinates
    #[serde(default)]
    pub address: String,

    /// Image size in pixels as `widthxheight`
    #[serde(default = "default_size")]
    pub size: String,

    /// Compass heading of the camera; auto-selected when absent
    #[serde(default)]
    pub heading: Option<i32>,

    /// Field of view in degrees; lower means more zoom
    #[serde(default = "default_fov")]
    pub fov: i32,

    /// Up/down angle; 0 is horizontal
    #[serde(default)]
    pub pitch: i32,

    /// Search radius in meters for finding imagery
    #[serde(default = "default_radius")]
    pub radius: i32,

    /// Imagery source restriction
    #[serde(default)]
    pub source: Source,

    /// Return an error status instead of the generic "no imagery" image
    #[serde(default = "default_return_error_code")]
    pub return_error_code: bool,
}

fn default_size() -> String {
    DEFAULT_SIZE.to_string()
}

fn default_fov() -> i32 {
    DEFAULT_FOV
}

fn default_radius() -> i32 {
    DEFAULT_RADIUS
}

fn default_return_error_code() -> bool {
    true
}

impl Default for RequestParameters {
    fn default() -> Self {
        Self {
            address: String::new(),
            size: default_size(),
            heading: None,
            fov: DEFAULT_FOV,
            pitch: DEFAULT_PITCH,
            radius: DEFAULT_RADIUS,
            source: Source::Default,
            return_error_code: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_applies_defaults() {
        let params: RequestParameters =
            serde_yaml::from_str("address: 1600 Amphitheatre Pkwy\n").unwrap();
        assert_eq!(params.address, "1600 Amphitheatre Pkwy");
        assert_eq!(params.size, "600x400");
        assert_eq!(params.heading, None);
        assert_eq!(params.fov, 90);
        assert_eq!(params.pitch, 0);
        assert_eq!(params.radius, 50);
        assert_eq!(params.source, Source::Default);
        assert!(params.return_error_code);
    }

    #[test]
    fn deserialize_full_parameter_set() {
        let yaml = "\
address: Times Square, NYC
size: 640x640
heading: 180
fov: 60
pitch: -10
radius: 100
source: outdoor
return_error_code: false
";
        let params: RequestParameters = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(params.heading, Some(180));
        assert_eq!(params.fov, 60);
        assert_eq!(params.pitch, -10);
        assert_eq!(params.radius, 100);
        assert_eq!(params.source, Source::Outdoor);
        assert!(!params.return_error_code);
    }

    #[test]
    fn source_rejects_unknown_variant() {
        let result: Result<Source, _> = serde_yaml::from_str("indoor");
        assert!(result.is_err());
    }

    #[test]
    fn source_display_is_lowercase() {
        assert_eq!(Source::Default.to_string(), "default");
        assert_eq!(Source::Outdoor.to_string(), "outdoor");
    }
}
