//! Validated member names.

use std::fmt;

use crate::ReflectError;

/// The name of a field or method.
///
/// A member name is a Unicode identifier: XID_Start (or `_` followed by
/// XID_Continue), then XID_Continue. Names are compared exactly.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberName(String);

impl MemberName {
    /// Validate and wrap a member name.
    pub fn parse(name: &str) -> Result<Self, ReflectError> {
        Self::validate(name)?;
        Ok(MemberName(name.to_string()))
    }

    fn validate(name: &str) -> Result<(), ReflectError> {
        let invalid = |message: String| ReflectError::InvalidName {
            name: name.to_string(),
            message,
        };

        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return Err(invalid("empty name".to_string()));
        };

        let valid_start = unicode_ident::is_xid_start(first)
            || (first == '_'
                && chars
                    .clone()
                    .next()
                    .is_some_and(unicode_ident::is_xid_continue));

        if !valid_start {
            return Err(invalid(
                "must start with a letter or underscore followed by letter/digit".to_string(),
            ));
        }

        for c in chars {
            if !unicode_ident::is_xid_continue(c) {
                return Err(invalid(format!("invalid character '{}' in identifier", c)));
            }
        }

        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for MemberName {
    type Err = ReflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MemberName::parse(s)
    }
}
