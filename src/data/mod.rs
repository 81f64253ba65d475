//! Already-shaped signage data: mosque metadata, daily prayer times
//! and jummah times, loaded from a local JSON file. Failures degrade
//! to a bundled sample so the screen always renders something; the
//! data layer never blocks screen detection.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use tracing::warn;

use crate::app::error::Result;

/// One prayer's start and congregation time, preformatted (e.g.
/// "5:32 AM") the way the signage shows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerEntry {
    pub start: String,
    pub jamaah: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrayerTimes {
    pub fajr: PrayerEntry,
    pub sunrise: String,
    pub zuhr: PrayerEntry,
    pub asr: PrayerEntry,
    pub maghrib: PrayerEntry,
    pub isha: PrayerEntry,
}

impl DailyPrayerTimes {
    /// The five classified rows in display order, named.
    pub fn rows(&self) -> [(&'static str, &PrayerEntry); 5] {
        [
            ("Fajr", &self.fajr),
            ("Zuhr", &self.zuhr),
            ("Asr", &self.asr),
            ("Maghrib", &self.maghrib),
            ("Isha", &self.isha),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MosqueMetadata {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignageData {
    pub metadata: MosqueMetadata,
    pub today: DailyPrayerTimes,
    pub tomorrow: DailyPrayerTimes,
    #[serde(default)]
    pub jummah: Vec<String>,
    #[serde(default)]
    pub notice: String,
}

impl SignageData {
    /// Load signage data from disk, or fall back to the bundled
    /// sample if the file is absent or malformed.
    pub fn load() -> Self {
        let path = Self::data_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse signage data, using sample");
                    Self::sample()
                }
            },
            Err(_) => {
                // File doesn't exist; write the sample so operators
                // have a template to edit.
                let sample = Self::sample();
                if let Err(e) = sample.save_to(&path) {
                    warn!(error = %e, "could not write sample signage data");
                }
                sample
            }
        }
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Data file path (cross-platform): `config_dir/minbar/mosque.json`.
    pub fn data_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("minbar");
        path.push("mosque.json");
        path
    }

    /// Placeholder data shown until the operator edits `mosque.json`.
    pub fn sample() -> Self {
        fn entry(start: &str, jamaah: &str) -> PrayerEntry {
            PrayerEntry {
                start: start.to_string(),
                jamaah: jamaah.to_string(),
            }
        }
        Self {
            metadata: MosqueMetadata {
                name: "Masjid As-Salam".to_string(),
                address: "12 High Street".to_string(),
            },
            today: DailyPrayerTimes {
                fajr: entry("5:32 AM", "6:00 AM"),
                sunrise: "6:58 AM".to_string(),
                zuhr: entry("12:14 PM", "1:00 PM"),
                asr: entry("3:47 PM", "4:15 PM"),
                maghrib: entry("6:21 PM", "6:26 PM"),
                isha: entry("7:45 PM", "8:15 PM"),
            },
            tomorrow: DailyPrayerTimes {
                fajr: entry("5:33 AM", "6:00 AM"),
                sunrise: "6:59 AM".to_string(),
                zuhr: entry("12:14 PM", "1:00 PM"),
                asr: entry("3:46 PM", "4:15 PM"),
                maghrib: entry("6:19 PM", "6:24 PM"),
                isha: entry("7:43 PM", "8:15 PM"),
            },
            jummah: vec!["1:15 PM".to_string(), "2:00 PM".to_string()],
            notice: "Please switch phones to silent".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_round_trip() {
        let data = SignageData::sample();
        let json = serde_json::to_string(&data).unwrap();
        let loaded: SignageData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_rows_in_display_order() {
        let data = SignageData::sample();
        let names: Vec<&str> = data.today.rows().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Fajr", "Zuhr", "Asr", "Maghrib", "Isha"]);
    }

    #[test]
    fn test_optional_fields_default() {
        // Older data files without jummah/notice still parse.
        let mut data = SignageData::sample();
        data.jummah.clear();
        data.notice.clear();
        let mut value = serde_json::to_value(&data).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("jummah");
        obj.remove("notice");
        let loaded: SignageData = serde_json::from_value(value).unwrap();
        assert!(loaded.jummah.is_empty());
        assert!(loaded.notice.is_empty());
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mosque.json");
        let data = SignageData::sample();
        data.save_to(&path).unwrap();
        let loaded = SignageData::load_from(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_load_from_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mosque.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(SignageData::load_from(&path).is_err());
    }
}
