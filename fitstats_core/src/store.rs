//! Profile persistence with file locking.
//!
//! The profile lives in a single JSON file under the data directory.
//! Reads take a shared lock; writes go through a locked temp file that is
//! renamed over the original so a crash never leaves a half-written
//! profile behind.

use crate::{Error, Profile, Result};
use chrono::Utc;
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl Profile {
    /// Load the profile from a file with shared locking.
    ///
    /// A missing file is a new user and yields an empty profile. A file
    /// that exists but does not parse is a hard error: stored profile
    /// data is canonical and must not be silently discarded.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No profile file found at {:?}, starting empty", path);
            return Ok(Self::default());
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            return Err(e.into());
        }
        file.unlock()?;

        let profile = serde_json::from_str::<Profile>(&contents).map_err(|e| {
            Error::Profile(format!("malformed profile file {:?}: {}", path, e))
        })?;
        tracing::debug!("Loaded profile from {:?}", path);
        Ok(profile)
    }

    /// Save the profile to a file with exclusive locking.
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file in the same directory
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "profile path missing parent")
        })?)?;

        // Exclusive lock on the temp file serializes concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string_pretty(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved profile to {:?}", path);
        Ok(())
    }

    /// Load the profile, modify it, stamp `updated_at`, and save it back.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut Profile) -> Result<()>,
    {
        let mut profile = Self::load(path)?;
        f(&mut profile)?;
        profile.updated_at = Some(Utc::now());
        profile.save(path)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sex;
    use chrono::NaiveDate;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let profile = Profile {
            date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 2),
            sex: Some(Sex::Female),
            height_cm: Some(165.0),
            weight_kg: Some(60.0),
            waist_cm: Some(72.5),
            ..Profile::default()
        };

        profile.save(&path).unwrap();
        let loaded = Profile::load(&path).unwrap();

        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let profile = Profile::load(&path).unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_corrupt_profile_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("corrupt.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let result = Profile::load(&path);
        assert!(matches!(result, Err(Error::Profile(_))));
    }

    #[test]
    fn test_update_stamps_updated_at() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let updated = Profile::update(&path, |p| {
            p.height_cm = Some(180.0);
            Ok(())
        })
        .unwrap();

        assert_eq!(updated.height_cm, Some(180.0));
        assert!(updated.updated_at.is_some());

        let loaded = Profile::load(&path).unwrap();
        assert_eq!(loaded, updated);
    }

    #[test]
    fn test_atomic_save_leaves_no_stray_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        Profile::default().save(&path).unwrap();

        assert!(path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "profile.json")
            .collect();
        assert!(extras.is_empty(), "unexpected stray files: {:?}", extras);
    }
}
