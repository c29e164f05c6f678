//! Settings loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::domain::ports::{FileSystem, FsError};
use crate::domain::value_objects::ConfigWarning;
use crate::infrastructure::fs::LocalFs;

use super::types::Settings;

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access settings at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML, wrong types, or a malformed asset identifier
    #[error("invalid settings in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize settings: {message}")]
    Serialize { message: String },

    #[error(transparent)]
    Write(#[from] FsError),

    /// Another writer saved since these settings were loaded
    #[error("settings at {} changed on disk (expected revision {expected}, found {found})", .path.display())]
    Conflict {
        path: PathBuf,
        expected: u64,
        found: u64,
    },
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Parse settings from TOML text, collecting unknown keys as warnings.
pub fn parse_with_warnings(content: &str, path: &Path) -> ConfigResult<(Settings, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let settings: Settings = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str());
            let warning = ConfigWarning {
                line: find_line_number(content, leaf),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            };
            log::warn!("{}", warning);
            warning
        })
        .collect();

    Ok((settings, warnings))
}

/// Load settings and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfigResult<(Settings, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    parse_with_warnings(&content, path)
}

/// Load from `path` with env overrides, or defaults if it does not exist.
///
/// Unlike [`load_or_default`], a file that exists but does not parse is an
/// error, so a malformed asset identifier never reads as "nothing selected".
pub fn load_effective(path: &Path) -> ConfigResult<Settings> {
    if !path.exists() {
        return Ok(with_env_overrides(Settings::default()));
    }

    let (settings, _) = load_with_warnings(path)?;
    Ok(with_env_overrides(settings))
}

/// Load from `path`, or defaults if it is missing or unreadable
pub fn load_or_default(path: &Path) -> Settings {
    if !path.exists() {
        return with_env_overrides(Settings::default());
    }

    match load_with_warnings(path) {
        Ok((settings, _)) => with_env_overrides(settings),
        Err(err) => {
            log::warn!("falling back to default settings: {}", err);
            with_env_overrides(Settings::default())
        }
    }
}

/// Apply environment variable overrides (LOOKATME_* prefix)
pub fn with_env_overrides(mut settings: Settings) -> Settings {
    // LOOKATME_VIBRATION_AMPLITUDE
    if let Some(amplitude) = env_number::<u8>("LOOKATME_VIBRATION_AMPLITUDE") {
        settings.vibration.amplitude = amplitude;
    }

    // LOOKATME_CRACK_DELAY (seconds)
    if let Some(delay) = env_number::<u32>("LOOKATME_CRACK_DELAY") {
        settings.crack.delay_seconds = delay;
    }

    // LOOKATME_SOUND_DELAY (seconds)
    if let Some(delay) = env_number::<u32>("LOOKATME_SOUND_DELAY") {
        settings.sound.delay_seconds = delay;
    }

    settings
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring {}={:?}: not a valid number", name, raw);
            None
        }
    }
}

/// Save `settings` if the file is still at `settings.revision`.
///
/// Returns the new revision on disk.
pub fn save(path: &Path, settings: &Settings) -> ConfigResult<u64> {
    with_exclusive_lock(path, || {
        let found = revision_on_disk(path)?;
        if found != settings.revision {
            return Err(ConfigError::Conflict {
                path: path.to_path_buf(),
                expected: settings.revision,
                found,
            });
        }

        let mut next = settings.clone();
        next.revision = found + 1;
        write_settings(path, &next)?;
        Ok(next.revision)
    })
}

/// Read, modify and write the settings file under one lock.
pub fn update<F>(path: &Path, apply: F) -> ConfigResult<Settings>
where
    F: FnOnce(&mut Settings),
{
    with_exclusive_lock(path, || {
        let mut settings = if path.exists() {
            load_with_warnings(path)?.0
        } else {
            Settings::default()
        };

        apply(&mut settings);
        settings.revision += 1;
        write_settings(path, &settings)?;
        Ok(settings)
    })
}

fn revision_on_disk(path: &Path) -> ConfigResult<u64> {
    if !path.exists() {
        return Ok(0);
    }
    Ok(load_with_warnings(path)?.0.revision)
}

fn write_settings(path: &Path, settings: &Settings) -> ConfigResult<()> {
    let content = toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize {
        message: e.to_string(),
    })?;

    LocalFs::new().write(path, &content)?;
    log::debug!("saved settings revision {} to {}", settings.revision, path.display());
    Ok(())
}

fn with_exclusive_lock<T>(path: &Path, body: impl FnOnce() -> ConfigResult<T>) -> ConfigResult<T> {
    let lock_path = path.with_extension("lock");
    if let Some(parent) = lock_path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
    }

    let lock_file = fs::File::create(&lock_path).map_err(|e| ConfigError::io(&lock_path, e))?;
    lock_file
        .lock_exclusive()
        .map_err(|e| ConfigError::io(&lock_path, e))?;

    let result = body();

    let _ = lock_file.unlock();
    result
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|index| index + 1)
}

const SECTION_FIELDS: &[(&str, &[&str])] = &[
    ("text", &["enabled", "content", "size", "font", "transform"]),
    ("image", &["enabled", "source", "transform"]),
    (
        "sound",
        &["enabled", "source", "delay_seconds", "loop_mode", "repeat_count"],
    ),
    ("vibration", &["enabled", "amplitude"]),
    ("crack", &["enabled", "delay_seconds"]),
];

const TRANSFORM_FIELDS: &[&str] = &[
    "position_x_percent",
    "position_y_percent",
    "scale_percent",
    "rotation_degrees",
];

/// Every valid key as a dotted path, sections included
fn known_keys() -> Vec<String> {
    let mut keys = vec!["revision".to_string()];
    for (section, fields) in SECTION_FIELDS {
        keys.push(section.to_string());
        for field in *fields {
            keys.push(format!("{section}.{field}"));
        }
        if fields.contains(&"transform") {
            keys.extend(
                TRANSFORM_FIELDS
                    .iter()
                    .map(|field| format!("{section}.transform.{field}")),
            );
        }
    }
    keys
}

/// Closest known dotted key within two edits of `unknown`
fn suggest_key(unknown: &str) -> Option<String> {
    known_keys()
        .into_iter()
        .map(|candidate| (edit_distance(unknown, &candidate), candidate))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, candidate)| candidate)
}

/// Single-row Levenshtein distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
