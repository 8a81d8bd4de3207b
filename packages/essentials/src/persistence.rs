use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Extension of the files read by [`load_database()`].
const DATA_EXTENSION: &str = "toml";

/// Writes `data` to `path` as TOML, replacing any existing file.
///
/// TOML documents are tables, so `T` must serialize as a struct or map.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as TOML or the file cannot be written.
///
/// # Example
///
/// ```rust
/// use essentials::{load_data, save_data};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Deserialize, PartialEq, Serialize)]
/// struct Settings {
///     volume: u8,
///     fullscreen: bool,
/// }
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("settings.toml");
///
/// let settings = Settings { volume: 80, fullscreen: true };
/// save_data(&settings, &path).unwrap();
///
/// let loaded: Option<Settings> = load_data(&path).unwrap();
/// assert_eq!(loaded, Some(settings));
/// ```
pub fn save_data<T>(data: &T, path: impl AsRef<Path>) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();

    let text = toml::to_string_pretty(data).map_err(|source| Error::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("saved {}", path.display());

    Ok(())
}

/// Reads a value of type `T` from the TOML file at `path`.
///
/// Returns `Ok(None)` if the file does not exist, so that callers can fall back to defaults.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or does not contain a valid `T`.
pub fn load_data<T>(path: impl AsRef<Path>) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} does not exist, nothing to load", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse(path, &text).map(Some)
}

/// Reads every `*.toml` file in `dir` as a `T`, keyed by file name without the extension.
///
/// Other files and subdirectories are ignored.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed, or if any of the data files cannot be
/// read or does not contain a valid `T`.
///
/// # Example
///
/// ```rust
/// use essentials::{load_database, save_data};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Deserialize, Serialize)]
/// struct Weapon {
///     damage: u32,
/// }
///
/// let dir = tempfile::tempdir().unwrap();
/// save_data(&Weapon { damage: 12 }, dir.path().join("dagger.toml")).unwrap();
/// save_data(&Weapon { damage: 40 }, dir.path().join("axe.toml")).unwrap();
///
/// let weapons = load_database::<Weapon>(dir.path()).unwrap();
/// assert_eq!(weapons.len(), 2);
/// assert_eq!(weapons["axe"].damage, 40);
/// ```
pub fn load_database<T>(dir: impl AsRef<Path>) -> Result<HashMap<String, T>>
where
    T: DeserializeOwned,
{
    let dir = dir.as_ref();
    let io_error = |source: io::Error| Error::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut database = HashMap::new();

    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();

        if !path.is_file() || path.extension() != Some(OsStr::new(DATA_EXTENSION)) {
            continue;
        }

        let Some(key) = path.file_stem().and_then(OsStr::to_str) else {
            log::warn!("skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };
        let key = key.to_owned();

        let text = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        database.insert(key, parse(&path, &text)?);
    }

    log::debug!("loaded {} entries from {}", database.len(), dir.display());

    Ok(database)
}

fn parse<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T> {
    toml::from_str(text).map_err(|source| Error::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}
