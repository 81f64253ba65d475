use serde::{Deserialize, Serialize};

/// Coarse display-size bucket driving layout choice.
///
/// Ordered by implied physical size, so `Small < Medium < Large <
/// ExtraLarge`. Serialized with the same literals the persisted
/// override file uses (`small`, `medium`, `large`, `extra-large`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceCategory {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl DeviceCategory {
    /// The persisted literal for this category.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::ExtraLarge => "extra-large",
        }
    }

    /// Parse a persisted literal. Returns `None` for anything that is
    /// not one of the four recognized category strings.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "extra-large" => Some(Self::ExtraLarge),
            _ => None,
        }
    }

    /// Human-readable description shown next to the override radios.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Small => "phones, small tablets",
            Self::Medium => "laptops, monitors",
            Self::Large => "large monitors, small TVs",
            Self::ExtraLarge => "large TVs, digital signage",
        }
    }

    /// All categories, smallest first.
    pub fn all() -> &'static [DeviceCategory] {
        &[Self::Small, Self::Medium, Self::Large, Self::ExtraLarge]
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Map a diagonal (inches) to its device category.
///
/// Boundaries are half-open: `[13, 27)` is medium, `[27, 40)` is
/// large, everything from 40" up is extra-large.
pub fn classify(diagonal: f64) -> DeviceCategory {
    if diagonal < 13.0 {
        DeviceCategory::Small
    } else if diagonal < 27.0 {
        DeviceCategory::Medium
    } else if diagonal < 40.0 {
        DeviceCategory::Large
    } else {
        DeviceCategory::ExtraLarge
    }
}
