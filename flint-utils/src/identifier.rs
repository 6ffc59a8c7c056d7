//! Namespaced resource identifiers (`namespace:path`).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An error produced when parsing an [`Identifier`] from a string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The namespace or path was empty.
    #[error("Identifier `{0}` has an empty namespace or path")]
    Empty(String),
    /// The namespace contained a character outside `[a-z0-9_.-]`.
    #[error("Invalid character `{1}` in namespace of `{0}`")]
    InvalidNamespace(String, char),
    /// The path contained a character outside `[a-z0-9_.-/]`.
    #[error("Invalid character `{1}` in path of `{0}`")]
    InvalidPath(String, char),
}

/// A namespaced key such as `minecraft:entity.player.hurt`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path inside the namespace.
    pub path: Cow<'static, str>,
}

impl Identifier {
    /// The namespace used by vanilla content and by unqualified identifiers.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates a vanilla identifier usable in `const`/`static` context.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Creates an identifier without validating it.
    #[must_use]
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        path: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    const fn valid_namespace_char(c: char) -> bool {
        matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
    }

    const fn valid_path_char(c: char) -> bool {
        Self::valid_namespace_char(c) || c == '/'
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = s
            .split_once(':')
            .unwrap_or((Self::VANILLA_NAMESPACE, s));

        if namespace.is_empty() || path.is_empty() {
            return Err(IdentifierError::Empty(s.to_owned()));
        }
        if let Some(c) = namespace.chars().find(|c| !Self::valid_namespace_char(*c)) {
            return Err(IdentifierError::InvalidNamespace(s.to_owned(), c));
        }
        if let Some(c) = path.chars().find(|c| !Self::valid_path_char(*c)) {
            return Err(IdentifierError::InvalidPath(s.to_owned(), c));
        }

        Ok(Self::new(namespace.to_owned(), path.to_owned()))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults_to_vanilla_namespace() {
        let id: Identifier = "on_fire".parse().expect("valid identifier");
        assert_eq!(id, Identifier::vanilla_static("on_fire"));
    }

    #[test]
    fn parse_custom_namespace() {
        let id: Identifier = "arena:spike_trap".parse().expect("valid identifier");
        assert_eq!(id.namespace, "arena");
        assert_eq!(id.path, "spike_trap");
        assert_eq!(id.to_string(), "arena:spike_trap");
    }

    #[test]
    fn parse_rejects_uppercase_namespace() {
        assert_eq!(
            "Arena:trap".parse::<Identifier>(),
            Err(IdentifierError::InvalidNamespace("Arena:trap".to_owned(), 'A'))
        );
    }

    #[test]
    fn parse_rejects_empty_path() {
        assert!(matches!(
            "arena:".parse::<Identifier>(),
            Err(IdentifierError::Empty(_))
        ));
    }

    #[test]
    fn serde_uses_string_form() {
        let id: Identifier =
            serde_json::from_str("\"minecraft:entity.player.hurt\"").expect("valid json");
        assert_eq!(id, Identifier::vanilla_static("entity.player.hurt"));
        assert_eq!(
            serde_json::to_string(&id).expect("serializable"),
            "\"minecraft:entity.player.hurt\""
        );
    }
}
