//! Accessor kinds.
//!
//! Kinds serialize as their kebab-case tag (`string-required`, `integer`, ...).
//! An accessor method that is not in the known table is kept as
//! [`AccessorKind::Unknown`] and serializes as the method name verbatim, so it
//! stays visible in generated documentation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The accessor variant used at a call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    String,
    StringRequired,
    StringOptions,
    StringOptional,
    StringList,
    Boolean,
    Integer,
    IntegerRequired,
    /// Unrecognized accessor method, carrying the member name as written.
    Unknown(String),
}

/// Accessor member names and the kind each one maps to.
const MEMBERS: &[(&str, AccessorKind)] = &[
    ("envString", AccessorKind::String),
    ("envStringRequired", AccessorKind::StringRequired),
    ("envStringOptions", AccessorKind::StringOptions),
    ("envStringOptional", AccessorKind::StringOptional),
    ("envStringList", AccessorKind::StringList),
    ("envBool", AccessorKind::Boolean),
    ("envInt", AccessorKind::Integer),
    ("envIntRequired", AccessorKind::IntegerRequired),
];

impl AccessorKind {
    /// Map an accessor member name (`envInt`) to its kind.
    ///
    /// Never fails: unrecognized members become [`AccessorKind::Unknown`].
    #[must_use]
    pub fn from_member(member: &str) -> Self {
        MEMBERS
            .iter()
            .find(|(name, _)| *name == member)
            .map_or_else(|| Self::Unknown(member.to_string()), |(_, kind)| kind.clone())
    }

    /// Tag used in rendered output.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::StringRequired => "string-required",
            Self::StringOptions => "string-options",
            Self::StringOptional => "string-optional",
            Self::StringList => "string-list",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::IntegerRequired => "integer-required",
            Self::Unknown(member) => member,
        }
    }

    /// Whether the accessor throws when the variable is unset.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::StringRequired | Self::IntegerRequired)
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessorKind {
    type Err = Infallible;

    /// Accepts both kind tags (`string-required`) and member names
    /// (`envStringRequired`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let by_tag = match s {
            "string" => Some(Self::String),
            "string-required" => Some(Self::StringRequired),
            "string-options" => Some(Self::StringOptions),
            "string-optional" => Some(Self::StringOptional),
            "string-list" => Some(Self::StringList),
            "boolean" => Some(Self::Boolean),
            "integer" => Some(Self::Integer),
            "integer-required" => Some(Self::IntegerRequired),
            _ => None,
        };
        Ok(by_tag.unwrap_or_else(|| Self::from_member(s)))
    }
}

impl Serialize for AccessorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AccessorKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let Ok(kind) = raw.parse();
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("envString", AccessorKind::String)]
    #[case("envStringRequired", AccessorKind::StringRequired)]
    #[case("envStringOptions", AccessorKind::StringOptions)]
    #[case("envStringOptional", AccessorKind::StringOptional)]
    #[case("envStringList", AccessorKind::StringList)]
    #[case("envBool", AccessorKind::Boolean)]
    #[case("envInt", AccessorKind::Integer)]
    #[case("envIntRequired", AccessorKind::IntegerRequired)]
    fn known_members_map_to_kinds(#[case] member: &str, #[case] expected: AccessorKind) {
        assert_eq!(AccessorKind::from_member(member), expected);
    }

    #[test]
    fn unknown_member_is_preserved() {
        let kind = AccessorKind::from_member("envFloat");
        assert_eq!(kind, AccessorKind::Unknown("envFloat".to_string()));
        assert_eq!(kind.as_str(), "envFloat");
        assert!(kind.is_unknown());
    }

    #[rstest]
    #[case(AccessorKind::String, false)]
    #[case(AccessorKind::StringRequired, true)]
    #[case(AccessorKind::StringOptions, false)]
    #[case(AccessorKind::StringOptional, false)]
    #[case(AccessorKind::StringList, false)]
    #[case(AccessorKind::Boolean, false)]
    #[case(AccessorKind::Integer, false)]
    #[case(AccessorKind::IntegerRequired, true)]
    #[case(AccessorKind::Unknown("envIntRequiredish".to_string()), false)]
    fn required_only_for_required_kinds(#[case] kind: AccessorKind, #[case] required: bool) {
        assert_eq!(kind.is_required(), required);
    }

    #[test]
    fn from_str_accepts_tags_and_members() {
        let Ok(from_tag) = "integer-required".parse::<AccessorKind>();
        let Ok(from_member) = "envIntRequired".parse::<AccessorKind>();
        assert_eq!(from_tag, AccessorKind::IntegerRequired);
        assert_eq!(from_member, AccessorKind::IntegerRequired);
    }

    #[test]
    fn serializes_as_tag() {
        let json = serde_json::to_string(&AccessorKind::StringList).unwrap();
        assert_eq!(json, "\"string-list\"");
        let back: AccessorKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AccessorKind::StringList);
    }
}
