//! Per-vehicle-type geometry and tuning.
//!
//! A [`CartProfile`] describes the static shape of one kind of cart: how far
//! its front and back attachment points reach, how large its wheels are and
//! how far it trails behind its driver. Profiles come from the built-in
//! presets or from JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{DEFAULT_CART_WIDTH, DEFAULT_HOLD_OFFSET};

/// Static geometry of a cart type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProfile {
    /// Human readable identifier, used by the CLI and in log output.
    pub name: String,
    /// Reach of the front attachment point from the axle.
    pub first_point: f32,
    /// Reach of the back attachment point from the axle.
    pub last_point: f32,
    /// Radius of the wheels.
    pub wheel_radius: f32,
    /// Distance kept behind the driver while towed.
    #[serde(default = "default_hold_offset")]
    pub hold_offset: f64,
    /// Bounding box width; bounds the wheel particle footprint.
    #[serde(default = "default_width")]
    pub width: f64,
    /// Item spawned when the cart breaks.
    pub drop_item: String,
}

const fn default_hold_offset() -> f64 {
    DEFAULT_HOLD_OFFSET
}

const fn default_width() -> f64 {
    DEFAULT_CART_WIDTH
}

/// Errors raised while loading or validating a [`CartProfile`].
#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("failed to read cart profile {path}")]
    Read {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The profile is not valid JSON for [`CartProfile`].
    #[error("malformed cart profile")]
    Parse(#[from] serde_json::Error),
    /// A length is zero, negative or not finite.
    #[error("cart profile `{profile}` has invalid {field}: {value}")]
    InvalidLength {
        /// Profile name.
        profile: String,
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// An attachment point sits inside the wheel, leaving the slope undefined.
    #[error("cart profile `{profile}` has {field} {reach} shorter than the wheel offset {offset}")]
    PointInsideWheel {
        /// Profile name.
        profile: String,
        /// Offending field.
        field: &'static str,
        /// Reach of the attachment point.
        reach: f32,
        /// Vertical wheel offset it must exceed.
        offset: f32,
    },
    /// No preset carries the requested name.
    #[error("unknown cart preset `{0}`")]
    UnknownPreset(String),
}

impl CartProfile {
    /// The two-wheeled supply cart.
    #[must_use]
    pub fn supply_cart() -> Self {
        Self {
            name: "supply_cart".to_owned(),
            first_point: 2.0,
            last_point: 1.5,
            wheel_radius: 0.8,
            hold_offset: DEFAULT_HOLD_OFFSET,
            width: 1.5,
            drop_item: "farm_and_charm:supply_cart".to_owned(),
        }
    }

    /// The horse-drawn plow.
    #[must_use]
    pub fn plow() -> Self {
        Self {
            name: "plow".to_owned(),
            first_point: 1.8,
            last_point: 1.2,
            wheel_radius: 0.5,
            hold_offset: DEFAULT_HOLD_OFFSET,
            width: 1.2,
            drop_item: "farm_and_charm:plow".to_owned(),
        }
    }

    /// Look up a built-in preset by name.
    ///
    /// # Errors
    /// Returns [`ProfileError::UnknownPreset`] for names other than
    /// `supply_cart` and `plow`.
    pub fn preset(name: &str) -> Result<Self, ProfileError> {
        match name {
            "supply_cart" => Ok(Self::supply_cart()),
            "plow" => Ok(Self::plow()),
            other => Err(ProfileError::UnknownPreset(other.to_owned())),
        }
    }

    /// Parse and validate a profile from JSON text.
    ///
    /// # Errors
    /// Returns [`ProfileError::Parse`] for malformed JSON and the validation
    /// errors described on [`CartProfile::validate`].
    ///
    /// # Examples
    /// ```
    /// use cartwright::CartProfile;
    /// let json = r#"{
    ///     "name": "barrow",
    ///     "first_point": 1.0,
    ///     "last_point": 1.0,
    ///     "wheel_radius": 0.4,
    ///     "drop_item": "farm_and_charm:barrow"
    /// }"#;
    /// let profile = CartProfile::from_json_str(json).unwrap();
    /// assert!((profile.hold_offset - 2.0).abs() < f64::EPSILON);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read, parse and validate a profile file.
    ///
    /// # Errors
    /// Returns [`ProfileError::Read`] when the file cannot be read, otherwise
    /// the errors of [`CartProfile::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Check that every length is usable by the solvers.
    ///
    /// # Errors
    /// Returns [`ProfileError::InvalidLength`] for non-positive or non-finite
    /// lengths and [`ProfileError::PointInsideWheel`] when an attachment point
    /// is shorter than [`CartProfile::wheel_y_offset`].
    pub fn validate(&self) -> Result<(), ProfileError> {
        let lengths = [
            ("first_point", f64::from(self.first_point)),
            ("last_point", f64::from(self.last_point)),
            ("wheel_radius", f64::from(self.wheel_radius)),
            ("hold_offset", self.hold_offset),
            ("width", self.width),
        ];
        if let Some(&(field, value)) = lengths
            .iter()
            .find(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            return Err(ProfileError::InvalidLength {
                profile: self.name.clone(),
                field,
                value,
            });
        }

        let offset = self.wheel_y_offset();
        for (field, reach) in [
            ("first_point", self.first_point),
            ("last_point", self.last_point),
        ] {
            if reach < offset {
                return Err(ProfileError::PointInsideWheel {
                    profile: self.name.clone(),
                    field,
                    reach,
                    offset,
                });
            }
        }
        Ok(())
    }

    /// Height of the axle above the wheel contact point used by the balance
    /// query.
    #[must_use]
    pub fn wheel_y_offset(&self) -> f32 {
        self.wheel_radius / 2.0
    }
}

impl Default for CartProfile {
    fn default() -> Self {
        Self::supply_cart()
    }
}
