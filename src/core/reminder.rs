//! Persistence of the "reminder acknowledged" flag.

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Single boolean key-value entry, kept outside the session.
pub trait FlagStore {
    fn is_acknowledged(&self) -> AppResult<bool>;
    fn acknowledge(&mut self) -> AppResult<()>;
    fn reset(&mut self) -> AppResult<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct FlagFile {
    #[serde(default)]
    reminder_acknowledged: bool,
}

/// Flag stored as YAML next to the config file.
#[derive(Debug, Clone)]
pub struct YamlFlagStore {
    path: PathBuf,
}

impl YamlFlagStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, value: bool) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(&FlagFile {
            reminder_acknowledged: value,
        })?;
        let mut file = fs::File::create(&self.path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

impl FlagStore for YamlFlagStore {
    /// A missing file means the reminder was never acknowledged.
    fn is_acknowledged(&self) -> AppResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(false);
        }
        let flag: FlagFile = serde_yaml::from_str(&content)?;
        Ok(flag.reminder_acknowledged)
    }

    fn acknowledge(&mut self) -> AppResult<()> {
        self.write(true)
    }

    fn reset(&mut self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-process flag, for tests and for runs that must not touch disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryFlagStore {
    acknowledged: bool,
    pub writes: usize,
}

impl MemoryFlagStore {
    pub fn new(acknowledged: bool) -> Self {
        Self {
            acknowledged,
            writes: 0,
        }
    }
}

impl FlagStore for MemoryFlagStore {
    fn is_acknowledged(&self) -> AppResult<bool> {
        Ok(self.acknowledged)
    }

    fn acknowledge(&mut self) -> AppResult<()> {
        self.acknowledged = true;
        self.writes += 1;
        Ok(())
    }

    fn reset(&mut self) -> AppResult<()> {
        self.acknowledged = false;
        self.writes += 1;
        Ok(())
    }
}
