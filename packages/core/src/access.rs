//! Per-property access policy.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Which conversion directions a property takes part in.
///
/// `ReadOnly` properties are read from the original object into the DTO
/// only; `WriteOnly` properties are written from the DTO into the original
/// object only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AccessType {
    #[default]
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl AccessType {
    /// Raw code of `ReadWrite`.
    pub const ACCESS_RW: u8 = 0;
    /// Raw code of `ReadOnly`.
    pub const ACCESS_READ: u8 = 1;
    /// Raw code of `WriteOnly`.
    pub const ACCESS_WRITE: u8 = 2;

    pub fn can_read(self) -> bool {
        self != AccessType::WriteOnly
    }

    pub fn can_write(self) -> bool {
        self != AccessType::ReadOnly
    }

    /// Raw code of this policy.
    pub fn code(self) -> u8 {
        match self {
            AccessType::ReadWrite => Self::ACCESS_RW,
            AccessType::ReadOnly => Self::ACCESS_READ,
            AccessType::WriteOnly => Self::ACCESS_WRITE,
        }
    }
}

impl TryFrom<u8> for AccessType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            Self::ACCESS_RW => Ok(AccessType::ReadWrite),
            Self::ACCESS_READ => Ok(AccessType::ReadOnly),
            Self::ACCESS_WRITE => Ok(AccessType::WriteOnly),
            other => Err(Error::InvalidAccessType {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for AccessType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rw" | "read_write" => Ok(AccessType::ReadWrite),
            "read" | "read_only" => Ok(AccessType::ReadOnly),
            "write" | "write_only" => Ok(AccessType::WriteOnly),
            _ => Err(Error::InvalidAccessType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccessType::ReadWrite => "rw",
            AccessType::ReadOnly => "read",
            AccessType::WriteOnly => "write",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissions_follow_policy() {
        assert_eq!(
            (AccessType::ReadWrite.can_read(), AccessType::ReadWrite.can_write()),
            (true, true)
        );
        assert_eq!(
            (AccessType::ReadOnly.can_read(), AccessType::ReadOnly.can_write()),
            (true, false)
        );
        assert_eq!(
            (AccessType::WriteOnly.can_read(), AccessType::WriteOnly.can_write()),
            (false, true)
        );
    }

    #[test]
    fn default_is_read_write() {
        assert_eq!(AccessType::default(), AccessType::ReadWrite);
    }

    #[test]
    fn raw_codes_round_trip() {
        for access in [
            AccessType::ReadWrite,
            AccessType::ReadOnly,
            AccessType::WriteOnly,
        ] {
            assert_eq!(AccessType::try_from(access.code()).unwrap(), access);
        }
    }

    #[test]
    fn unknown_code_rejected() {
        let err = AccessType::try_from(3u8).unwrap_err();
        assert!(matches!(err, Error::InvalidAccessType { ref value } if value == "3"));
    }

    #[test]
    fn parse_names() {
        assert_eq!("RW".parse::<AccessType>().unwrap(), AccessType::ReadWrite);
        assert_eq!("read".parse::<AccessType>().unwrap(), AccessType::ReadOnly);
        assert_eq!(
            "write_only".parse::<AccessType>().unwrap(),
            AccessType::WriteOnly
        );
        assert!(matches!(
            "some".parse::<AccessType>(),
            Err(Error::InvalidAccessType { .. })
        ));
    }

    #[test]
    fn display_parses_back() {
        for access in [
            AccessType::ReadWrite,
            AccessType::ReadOnly,
            AccessType::WriteOnly,
        ] {
            assert_eq!(access.to_string().parse::<AccessType>().unwrap(), access);
        }
    }
}
