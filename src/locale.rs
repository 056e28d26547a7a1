//! Locale identifiers derived from catalog file names.
//!
//! A catalog named `de_AT.po` belongs to the locale tag `de_AT`. The tag is kept
//! verbatim (it is the identity of the locale) and, when it is well-formed, also
//! parsed into a [`LanguageIdentifier`] so a human-readable display name can be
//! produced for reports.

use std::{fmt, path::Path};

use unic_langid::LanguageIdentifier;

/// Locale of a single catalog file.
///
/// Equality is by raw tag: `de_AT` and `de-AT` are different locales here,
/// because they come from different files.
#[derive(Debug, Clone)]
pub struct Locale {
    tag: String,
    langid: Option<LanguageIdentifier>,
}

impl Locale {
    /// Build a locale from a raw tag. Never fails; a tag that does not parse
    /// keeps only its raw text.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let langid = tag.parse::<LanguageIdentifier>().ok();
        if langid.is_none() {
            tracing::debug!(tag = %tag, "Locale tag is not a valid language identifier");
        }
        Self { tag, langid }
    }

    /// Derive the locale from a file name such as `de_AT.po`.
    ///
    /// The tag is everything before the last `.`. A name without any `.` is
    /// used as-is.
    pub fn from_file_name(file_name: &str) -> Self {
        let base = match file_name.rfind('.') {
            Some(idx) => &file_name[..idx],
            None => file_name,
        };
        Self::new(base)
    }

    /// The raw tag, exactly as it appeared in the file name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Parsed identifier, if the tag was well-formed.
    pub fn language_identifier(&self) -> Option<&LanguageIdentifier> {
        self.langid.as_ref()
    }

    /// English display name, e.g. `German (Austria)`.
    ///
    /// Unknown language or region subtags are shown as the subtag itself; an
    /// unparseable tag is shown as the raw tag.
    pub fn display_name(&self) -> String {
        let Some(langid) = &self.langid else {
            return self.tag.clone();
        };

        let language = langid.language.as_str();
        let language = language_name(language).unwrap_or(language);

        let mut qualifiers: Vec<&str> = Vec::new();
        if let Some(script) = &langid.script {
            qualifiers.push(script.as_str());
        }
        if let Some(region) = &langid.region {
            let region = region.as_str();
            qualifiers.push(region_name(region).unwrap_or(region));
        }
        for variant in langid.variants() {
            qualifiers.push(variant.as_str());
        }

        if qualifiers.is_empty() {
            language.to_string()
        } else {
            format!("{} ({})", language, qualifiers.join(", "))
        }
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Locale {}

impl std::hash::Hash for Locale {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}

/// Resolve the locale of a catalog from its path.
pub fn resolve(path: &Path) -> Locale {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    Locale::from_file_name(&file_name)
}

fn language_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "ar" => "Arabic",
        "be" => "Belarusian",
        "bg" => "Bulgarian",
        "bn" => "Bangla",
        "ca" => "Catalan",
        "cs" => "Czech",
        "cy" => "Welsh",
        "da" => "Danish",
        "de" => "German",
        "el" => "Greek",
        "en" => "English",
        "eo" => "Esperanto",
        "es" => "Spanish",
        "et" => "Estonian",
        "eu" => "Basque",
        "fa" => "Persian",
        "fi" => "Finnish",
        "fr" => "French",
        "ga" => "Irish",
        "gl" => "Galician",
        "he" => "Hebrew",
        "hi" => "Hindi",
        "hr" => "Croatian",
        "hu" => "Hungarian",
        "id" => "Indonesian",
        "is" => "Icelandic",
        "it" => "Italian",
        "ja" => "Japanese",
        "ka" => "Georgian",
        "kk" => "Kazakh",
        "ko" => "Korean",
        "lt" => "Lithuanian",
        "lv" => "Latvian",
        "mk" => "Macedonian",
        "ms" => "Malay",
        "nb" => "Norwegian Bokmål",
        "nl" => "Dutch",
        "nn" => "Norwegian Nynorsk",
        "pl" => "Polish",
        "pt" => "Portuguese",
        "ro" => "Romanian",
        "ru" => "Russian",
        "sk" => "Slovak",
        "sl" => "Slovenian",
        "sq" => "Albanian",
        "sr" => "Serbian",
        "sv" => "Swedish",
        "ta" => "Tamil",
        "th" => "Thai",
        "tr" => "Turkish",
        "uk" => "Ukrainian",
        "vi" => "Vietnamese",
        "zh" => "Chinese",
        _ => return None,
    };
    Some(name)
}

fn region_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "AR" => "Argentina",
        "AT" => "Austria",
        "AU" => "Australia",
        "BE" => "Belgium",
        "BR" => "Brazil",
        "CA" => "Canada",
        "CH" => "Switzerland",
        "CN" => "China",
        "DE" => "Germany",
        "DK" => "Denmark",
        "ES" => "Spain",
        "FR" => "France",
        "GB" => "United Kingdom",
        "HK" => "Hong Kong",
        "IE" => "Ireland",
        "IN" => "India",
        "IT" => "Italy",
        "JP" => "Japan",
        "KR" => "South Korea",
        "LU" => "Luxembourg",
        "MX" => "Mexico",
        "NL" => "Netherlands",
        "NZ" => "New Zealand",
        "PT" => "Portugal",
        "RU" => "Russia",
        "SE" => "Sweden",
        "TW" => "Taiwan",
        "US" => "United States",
        _ => return None,
    };
    Some(name)
}
