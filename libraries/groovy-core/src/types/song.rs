/// Song domain type
use crate::error::{GroovyError, Result};
use crate::types::SongId;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// One track in the library
///
/// Immutable after creation: the library owns the only copy and playlists
/// refer to it by `id`. Field names match the persisted library document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier
    pub id: SongId,

    /// Song title
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Artist name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist: String,

    /// Genre
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genre: String,

    /// Album name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub album: String,

    /// Release year
    #[serde(default, deserialize_with = "lenient_year")]
    pub year: Option<i32>,

    /// Duration as `m:ss` text
    pub duration: Option<String>,

    /// Path to the audio file (may be missing or invalid)
    pub file_path: Option<String>,
}

impl Song {
    /// Create a song with the mandatory descriptive fields
    pub fn new(
        id: SongId,
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            album: album.into(),
            year: None,
            duration: None,
            file_path: None,
        }
    }

    /// Set the release year
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Set the `m:ss` duration text
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Set the audio file path
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Duration in whole seconds, if the duration text is `M:SS`
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration.as_deref().and_then(parse_duration)
    }

    /// Case-insensitive match of an already lower-cased keyword against
    /// title, artist and genre
    pub fn matches_keyword(&self, lowered_keyword: &str) -> bool {
        self.title.to_lowercase().contains(lowered_keyword)
            || self.artist.to_lowercase().contains(lowered_keyword)
            || self.genre.to_lowercase().contains(lowered_keyword)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {} ({})",
            self.id, self.title, self.artist, self.genre
        )
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a year stored as a number or numeric text; anything else is unknown
fn lenient_year<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i64),
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<RawYear>::deserialize(deserializer)? {
        Some(RawYear::Number(year)) => i32::try_from(year).ok(),
        Some(RawYear::Text(text)) => text.trim().parse().ok(),
        Some(RawYear::Other(_)) | None => None,
    })
}

/// Raw add-song form input, before validation
///
/// Every field is free text exactly as typed by the admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub album: String,
    pub year: String,
    pub duration: String,
    pub file_path: String,
}

impl NewSong {
    /// Title after trimming and defaulting
    pub fn title(&self) -> String {
        or_default(&self.title, "Unknown Title")
    }

    /// Artist after trimming and defaulting
    pub fn artist(&self) -> String {
        or_default(&self.artist, "Unknown Artist")
    }

    /// File path after trimming; blank means absent
    pub fn file_path(&self) -> Option<String> {
        non_blank(&self.file_path)
    }

    /// Validate the form and build the song under the given identifier
    ///
    /// Blank descriptive fields fall back to `Unknown ...` placeholders and
    /// blank optional fields become absent. A year that is present but not
    /// an integer is rejected.
    pub fn into_song(self, id: SongId) -> Result<Song> {
        let year = match non_blank(&self.year) {
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| GroovyError::invalid_input("Year must be a number"))?,
            ),
            None => None,
        };

        Ok(Song {
            id,
            title: self.title(),
            artist: self.artist(),
            genre: or_default(&self.genre, "Unknown Genre"),
            album: or_default(&self.album, "Unknown Album"),
            year,
            duration: non_blank(&self.duration),
            file_path: self.file_path(),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn or_default(value: &str, fallback: &str) -> String {
    non_blank(value).unwrap_or_else(|| fallback.to_string())
}

/// Parse `M:SS` duration text into seconds
///
/// Both parts must be plain ASCII digits; anything else yields `None`.
pub fn parse_duration(text: &str) -> Option<u64> {
    let (minutes, seconds) = text.trim().split_once(':')?;
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(minutes) || !is_digits(seconds) {
        return None;
    }
    minutes
        .parse::<u64>()
        .ok()?
        .checked_mul(60)?
        .checked_add(seconds.parse::<u64>().ok()?)
}

/// Lexically normalize a file path for duplicate comparison
///
/// Collapses repeated separators, drops `.` segments and folds `..` into
/// the preceding segment. On Windows the result is also lower-cased.
/// Returns `None` for blank input.
pub fn normalize_path(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in Path::new(raw).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `..` directly under the root stays at the root
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    let normalized: PathBuf = parts.iter().collect();
    let text = if normalized.as_os_str().is_empty() {
        ".".to_string()
    } else {
        normalized.to_string_lossy().into_owned()
    };

    if cfg!(windows) {
        Some(text.to_lowercase())
    } else {
        Some(text)
    }
}
