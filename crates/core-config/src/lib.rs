//! Preference loading and the custom dictionary format.
//!
//! Preferences live in `oxshift.toml` (or an override path supplied by the
//! binary / host). The file is read fresh for every shift session so live
//! edits take effect on the next shift; nothing here caches across calls.
//!
//! Layout:
//! ```toml
//! [shift]
//! preserve_case = true
//! sort_case_sensitive = false
//! timestamp_unit = "seconds"      # or "milliseconds"
//!
//! [quotes]
//! convert_single = true           # allow ' -> "
//! convert_double = true           # allow " -> '
//!
//! [php]
//! array_long_to_short = true      # array( ) -> [ ]
//! array_short_to_long = true      # [ ] -> array( )
//!
//! [dictionary]
//! path = "my-terms.txt"           # optional; read at load time
//! text = "(|*|) { foo|bar }"      # optional inline dictionary
//! ```
//! Unknown fields are ignored. A file that fails to parse falls back to
//! defaults with a warning; a missing file is silently the defaults.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub mod dictionary;

pub use dictionary::{DEFAULT_DICTIONARY, Dictionary, LookupScope};

/// Unit a long integer is interpreted in when shifted as a UNIX timestamp.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimestampUnit {
    /// Multiplier from seconds to this unit.
    pub const fn multiplier(self) -> i64 {
        match self {
            TimestampUnit::Seconds => 1,
            TimestampUnit::Milliseconds => 1000,
        }
    }
}

/// Flattened, immutable view of the preferences for one shift session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
    pub preserve_case: bool,
    pub convert_single_quotes: bool,
    pub convert_double_quotes: bool,
    pub convert_php_array_long_to_short: bool,
    pub convert_php_array_short_to_long: bool,
    pub sort_case_sensitive: bool,
    pub timestamp_unit: TimestampUnit,
    /// Custom dictionary text; `None` selects [`DEFAULT_DICTIONARY`].
    pub dictionary: Option<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            preserve_case: true,
            convert_single_quotes: true,
            convert_double_quotes: true,
            convert_php_array_long_to_short: true,
            convert_php_array_short_to_long: true,
            sort_case_sensitive: false,
            timestamp_unit: TimestampUnit::Seconds,
            dictionary: None,
        }
    }
}

impl UserPreferences {
    /// Dictionary text in effect (custom or bundled default).
    pub fn dictionary_text(&self) -> &str {
        self.dictionary.as_deref().unwrap_or(DEFAULT_DICTIONARY)
    }

    /// Parse the dictionary in effect. Parsed on demand, never cached.
    pub fn dictionary(&self) -> Dictionary {
        Dictionary::parse(self.dictionary_text())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShiftSection {
    #[serde(default = "ShiftSection::default_true")]
    pub preserve_case: bool,
    #[serde(default)]
    pub sort_case_sensitive: bool,
    #[serde(default)]
    pub timestamp_unit: TimestampUnit,
}

impl ShiftSection {
    const fn default_true() -> bool {
        true
    }
}

impl Default for ShiftSection {
    fn default() -> Self {
        Self {
            preserve_case: true,
            sort_case_sensitive: false,
            timestamp_unit: TimestampUnit::Seconds,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuotesSection {
    #[serde(default = "ShiftSection::default_true")]
    pub convert_single: bool,
    #[serde(default = "ShiftSection::default_true")]
    pub convert_double: bool,
}

impl Default for QuotesSection {
    fn default() -> Self {
        Self {
            convert_single: true,
            convert_double: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PhpSection {
    #[serde(default = "ShiftSection::default_true")]
    pub array_long_to_short: bool,
    #[serde(default = "ShiftSection::default_true")]
    pub array_short_to_long: bool,
}

impl Default for PhpSection {
    fn default() -> Self {
        Self {
            array_long_to_short: true,
            array_short_to_long: true,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct DictionarySection {
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub shift: ShiftSection,
    #[serde(default)]
    pub quotes: QuotesSection,
    #[serde(default)]
    pub php: PhpSection,
    #[serde(default)]
    pub dictionary: DictionarySection,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>,               // original file string (optional)
    pub file: ConfigFile,                  // parsed (or default) data
    pub dictionary_text: Option<String>,   // resolved custom dictionary, if any
}

impl Config {
    /// Flatten into the per-session preference snapshot.
    pub fn preferences(&self) -> UserPreferences {
        UserPreferences {
            preserve_case: self.file.shift.preserve_case,
            convert_single_quotes: self.file.quotes.convert_single,
            convert_double_quotes: self.file.quotes.convert_double,
            convert_php_array_long_to_short: self.file.php.array_long_to_short,
            convert_php_array_short_to_long: self.file.php.array_short_to_long,
            sort_case_sensitive: self.file.shift.sort_case_sensitive,
            timestamp_unit: self.file.shift.timestamp_unit,
            dictionary: self.dictionary_text.clone(),
        }
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from("oxshift.toml");
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("oxshift").join("oxshift.toml");
    }
    PathBuf::from("oxshift.toml")
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    let file = match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => file,
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            return Ok(Config::default());
        }
    };
    let dictionary_text = resolve_dictionary(&file.dictionary, &path);
    info!(
        target: "config",
        path = %path.display(),
        custom_dictionary = dictionary_text.is_some(),
        "config_loaded"
    );
    Ok(Config {
        raw: Some(content),
        file,
        dictionary_text,
    })
}

/// Inline text wins over a dictionary file. Relative paths resolve against
/// the config file's directory.
fn resolve_dictionary(section: &DictionarySection, config_path: &std::path::Path) -> Option<String> {
    if let Some(text) = &section.text {
        return Some(text.clone());
    }
    let rel = section.path.as_ref()?;
    let full = if rel.is_relative() {
        config_path
            .parent()
            .map(|dir| dir.join(rel))
            .unwrap_or_else(|| rel.clone())
    } else {
        rel.clone()
    };
    match fs::read_to_string(&full) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!(target: "config", path = %full.display(), error = %e, "dictionary_file_unreadable");
            None
        }
    }
}
