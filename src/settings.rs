//! Game settings
//!
//! Gameplay constants plus the knobs that distinguish the desktop and touch
//! flavors of the game. Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Direction;

/// How the horse is pointed when a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitialDirection {
    Fixed(Direction),
    Random,
}

impl Default for InitialDirection {
    fn default() -> Self {
        InitialDirection::Fixed(Direction::Right)
    }
}

/// Which part of the horse has to leave the arena to count as a wall hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallCheck {
    /// Only the top-left corner is tested; the body can clip past a wall
    #[default]
    Corner,
    /// The whole body must stay inside the arena
    FullExtent,
}

/// How a finished swipe becomes a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwipeMode {
    /// Longer axis of the swipe wins
    #[default]
    DominantAxis,
    /// Swipe always turns across the horse's current axis
    CrossAxis,
}

/// Named bundles of the knobs above
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Classic,
    Touch,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Touch => "Touch",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "desktop" => Some(Variant::Classic),
            "touch" | "mobile" => Some(Variant::Touch),
            _ => None,
        }
    }
}

/// Invalid settings
#[derive(Debug)]
pub enum SettingsError {
    Parse(serde_json::Error),
    NonPositive { field: &'static str },
    NotFinite { field: &'static str },
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Parse(e) => write!(f, "Settings parse error: {}", e),
            SettingsError::NonPositive { field } => write!(f, "Setting `{}` must be positive", field),
            SettingsError::NotFinite { field } => write!(f, "Setting `{}` must be a finite number", field),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Horse ===
    /// Travel speed (pixels/second)
    pub speed: f32,
    /// Body length along the travel axis
    pub actor_length: i32,
    /// Body width across the travel axis
    pub actor_width: i32,
    pub initial_direction: InitialDirection,

    // === Items ===
    /// Side of the food and poison squares
    pub item_size: i32,
    /// Food keeps this far from every wall
    pub food_inset: i32,
    /// Food keeps this far from every poison
    pub food_margin: i32,
    /// Poison keeps this far from the horse, on both axes
    pub poison_clearance: i32,
    /// Rejection-sampling budget per item
    pub max_placement_attempts: u32,

    // === Rules ===
    pub wall_check: WallCheck,

    // === Input ===
    /// Minimum swipe travel (pixels)
    pub swipe_threshold: f32,
    pub swipe_mode: SwipeMode,

    // === Platform ===
    /// Pixels kept free around the arena
    pub viewport_margin: i32,
    /// Longest frame the simulation will integrate in one step (None = no cap).
    /// `Some(MAX_STEP_SECS)` keeps a stalled tab from moving the horse across a wall.
    pub max_step_secs: Option<f32>,
    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: ACTOR_SPEED,
            actor_length: ACTOR_LENGTH,
            actor_width: ACTOR_WIDTH,
            initial_direction: InitialDirection::default(),

            item_size: ITEM_SIZE,
            food_inset: ACTOR_LENGTH,
            food_margin: ACTOR_LENGTH,
            poison_clearance: 2 * ACTOR_LENGTH,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            wall_check: WallCheck::Corner,

            swipe_threshold: SWIPE_THRESHOLD,
            swipe_mode: SwipeMode::DominantAxis,

            viewport_margin: VIEWPORT_MARGIN,
            max_step_secs: None,
            seed: None,
        }
    }
}

impl Settings {
    /// Create settings for a variant (applies its knob defaults)
    pub fn from_variant(variant: Variant) -> Self {
        let mut settings = Self::default();
        settings.apply_variant(variant);
        settings
    }

    /// Switch the variant-dependent knobs
    pub fn apply_variant(&mut self, variant: Variant) {
        match variant {
            Variant::Classic => {
                self.initial_direction = InitialDirection::Fixed(Direction::Right);
                self.swipe_mode = SwipeMode::DominantAxis;
            }
            Variant::Touch => {
                self.initial_direction = InitialDirection::Random;
                self.swipe_mode = SwipeMode::CrossAxis;
            }
        }
    }

    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let sizes = [
            ("actor_length", self.actor_length),
            ("actor_width", self.actor_width),
            ("item_size", self.item_size),
        ];
        for (field, value) in sizes {
            if value <= 0 {
                return Err(SettingsError::NonPositive { field });
            }
        }
        if self.max_placement_attempts == 0 {
            return Err(SettingsError::NonPositive {
                field: "max_placement_attempts",
            });
        }
        if !self.speed.is_finite() {
            return Err(SettingsError::NotFinite { field: "speed" });
        }
        if !self.swipe_threshold.is_finite() {
            return Err(SettingsError::NotFinite {
                field: "swipe_threshold",
            });
        }
        if let Some(cap) = self.max_step_secs {
            if !cap.is_finite() {
                return Err(SettingsError::NotFinite {
                    field: "max_step_secs",
                });
            }
            if cap <= 0.0 {
                return Err(SettingsError::NonPositive {
                    field: "max_step_secs",
                });
            }
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "horse_dash_settings";

    #[cfg(not(target_arch = "wasm32"))]
    const ENV_VAR: &'static str = "HORSE_DASH_SETTINGS";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the `HORSE_DASH_SETTINGS` environment variable
    /// (a JSON object), falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from ${}", Self::ENV_VAR);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring ${}: {}", Self::ENV_VAR, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_game() {
        let s = Settings::default();
        assert_eq!(s.speed, 260.0);
        assert_eq!(s.actor_length, 40);
        assert_eq!(s.actor_width, 20);
        assert_eq!(s.item_size, 20);
        assert_eq!(s.poison_clearance, 80);
        assert_eq!(s.food_margin, 40);
        assert_eq!(s.food_inset, 40);
        assert_eq!(s.swipe_threshold, 80.0);
        assert_eq!(s.viewport_margin, 60);
        assert_eq!(s.wall_check, WallCheck::Corner);
        assert_eq!(s.max_step_secs, None);
        assert_eq!(s.initial_direction, InitialDirection::Fixed(Direction::Right));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_touch_variant() {
        let s = Settings::from_variant(Variant::Touch);
        assert_eq!(s.initial_direction, InitialDirection::Random);
        assert_eq!(s.swipe_mode, SwipeMode::CrossAxis);
        assert_eq!(Variant::from_name("mobile"), Some(Variant::Touch));
        assert_eq!(Variant::from_name("nope"), None);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let s = Settings::from_json(r#"{ "speed": 300.0, "wall_check": "FullExtent" }"#).unwrap();
        assert_eq!(s.speed, 300.0);
        assert_eq!(s.wall_check, WallCheck::FullExtent);
        assert_eq!(s.item_size, ITEM_SIZE);
    }

    #[test]
    fn test_json_round_trip_keeps_direction_policy() {
        let mut s = Settings::default();
        s.initial_direction = InitialDirection::Fixed(Direction::Up);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "item_size": 0 }"#),
            Err(SettingsError::NonPositive { field: "item_size" })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "max_step_secs": -1.0 }"#),
            Err(SettingsError::NonPositive { .. })
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(SettingsError::Parse(_))
        ));
    }
}
