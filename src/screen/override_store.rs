use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use tracing::warn;

use crate::app::error::Result;

use super::category::DeviceCategory;

/// Well-known name of the persisted override entry. Every view
/// attached to the same display reads and writes this entry.
pub const OVERRIDE_KEY: &str = "screenSizeOverride";

/// Persisted operator-selected category override.
///
/// `get` returns `None` both when no override is set and when the
/// stored value is unrecognized. `set(None)` clears the entry rather
/// than writing a null marker. Writes are last-write-wins; views
/// converge by re-reading (see the sync timer in the binary).
pub trait OverrideStore {
    fn get(&self) -> Option<DeviceCategory>;
    fn set(&self, category: Option<DeviceCategory>) -> Result<()>;
}

/// Override store backed by a file under the per-user config dir,
/// shared by every minbar process on the device and surviving
/// restarts. The file holds the bare category literal, nothing else.
pub struct FileOverrideStore {
    path: PathBuf,
}

impl FileOverrideStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location: `config_dir/minbar/screenSizeOverride`.
    pub fn at_default_path() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("minbar");
        path.push(OVERRIDE_KEY);
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl OverrideStore for FileOverrideStore {
    fn get(&self) -> Option<DeviceCategory> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let label = contents.trim();
        if label.is_empty() {
            return None;
        }
        match DeviceCategory::from_label(label) {
            Some(category) => Some(category),
            None => {
                warn!(label, "ignoring unrecognized screen size override");
                None
            }
        }
    }

    fn set(&self, category: Option<DeviceCategory>) -> Result<()> {
        match category {
            Some(category) => {
                if let Some(parent) = self.path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&self.path, category.as_label())?;
            }
            None => {
                if self.path.exists() {
                    fs::remove_file(&self.path)?;
                }
            }
        }
        Ok(())
    }
}

/// In-memory override scope for tests. Clones share the underlying
/// value, modelling independent views attached to the same storage
/// scope.
#[derive(Clone, Default)]
pub struct MemoryOverrideStore {
    value: Rc<RefCell<Option<DeviceCategory>>>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn get(&self) -> Option<DeviceCategory> {
        *self.value.borrow()
    }

    fn set(&self, category: Option<DeviceCategory>) -> Result<()> {
        *self.value.borrow_mut() = category;
        Ok(())
    }
}
