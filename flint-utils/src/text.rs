//! Translatable text messages and their localization.
//!
//! A [`Message`] names a translation key and carries its arguments as
//! separate components. [`Translations`] substitutes them into the `%s` /
//! `%N$s` placeholders of the translated format string.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A translatable message. Rendering is deferred to the localization layer
/// so each receiver can see it in their own language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    translate: Cow<'static, str>,
    with: Vec<String>,
}

impl Message {
    /// Creates a message for `key` without arguments.
    #[must_use]
    pub fn translate(key: impl Into<Cow<'static, str>>) -> Self {
        Self {
            translate: key.into(),
            with: Vec::new(),
        }
    }

    /// Appends a plain text argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.with.push(arg.into());
        self
    }

    /// The templating key, `key,arg1,arg2,...`.
    #[must_use]
    pub fn key(&self) -> String {
        let mut key = self.translate.to_string();
        for arg in &self.with {
            key.push(',');
            key.push_str(arg);
        }
        key
    }

    /// The translation key, without arguments.
    #[must_use]
    pub fn translation_key(&self) -> &str {
        &self.translate
    }

    /// The arguments substituted into the translation.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.with
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{@{}}}", self.key())
    }
}

/// A plain text argument component, `{"text": "..."}`.
struct TextArg<'a>(&'a str);

impl Serialize for TextArg<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("text", self.0)?;
        map.end()
    }
}

struct TextArgs<'a>(&'a [String]);

impl Serialize for TextArgs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for arg in self.0 {
            seq.serialize_element(&TextArg(arg))?;
        }
        seq.end()
    }
}

/// Serializes to a translatable chat component:
/// `{"translate": "...", "with": [{"text": "..."}, ...]}`.
impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(if self.with.is_empty() { 1 } else { 2 }))?;
        map.serialize_entry("translate", &self.translate)?;
        if !self.with.is_empty() {
            map.serialize_entry("with", &TextArgs(&self.with))?;
        }
        map.end()
    }
}

// `%s`, `%N$s` or an escaped `%%`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:(\d+)\$)?s|%%").expect("valid regex"));

static ENGLISH: LazyLock<Translations> = LazyLock::new(|| {
    match serde_json::from_str(include_str!("../assets/en_us.json")) {
        Ok(entries) => Translations { entries },
        Err(e) => {
            log::error!("Embedded en_us translations are malformed: {e}");
            Translations::default()
        }
    }
});

/// A translation table from keys to format strings.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: FxHashMap<String, String>,
}

impl Translations {
    /// The embedded English table.
    #[must_use]
    pub fn english() -> &'static Self {
        &ENGLISH
    }

    /// Adds or replaces a translation.
    pub fn insert(&mut self, key: impl Into<String>, format: impl Into<String>) {
        self.entries.insert(key.into(), format.into());
    }

    /// Returns the format string for `key`, if known.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Renders a message to plain text. Unknown translation keys render as the
    /// raw templating key, placeholders without a matching argument render
    /// empty.
    #[must_use]
    pub fn render(&self, message: &Message) -> String {
        let Some(format) = self.get(message.translation_key()) else {
            return message.key();
        };

        let args = message.args();
        let mut next_arg = 0usize;
        PLACEHOLDER
            .replace_all(format, |caps: &Captures<'_>| {
                if &caps[0] == "%%" {
                    return "%".to_owned();
                }
                let index = match caps.get(1) {
                    Some(position) => position
                        .as_str()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1)),
                    None => {
                        next_arg += 1;
                        Some(next_arg - 1)
                    }
                };
                index
                    .and_then(|i| args.get(i))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }
}
