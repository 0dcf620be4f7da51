//! Ascon Errors

use alloc::string::String;

use thiserror_no_std::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Configuration errors are caller bugs and are raised before any state is built.
/// [`Error::BadTag`] is the only error a well-formed call can produce.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown {0} variant '{1}'")]
    UnknownVariant(&'static str, String),

    #[error("{0} key must be {1} bytes long, but is {2} bytes long instead")]
    KeyLength(&'static str, usize, usize),

    #[error("nonce must be {0} bytes long, but is {1} bytes long instead")]
    NonceLength(usize, usize),

    #[error("{0} produces exactly {1} bytes of output, {2} bytes were requested")]
    OutputLength(&'static str, usize, usize),

    #[error("ciphertext must be at least {0} bytes long to hold the tag, but is {1} bytes long")]
    CiphertextTooShort(usize, usize),

    #[error("size of buffer does not match (expected: {0}, found: {1})")]
    LengthMismatch(usize, usize),

    #[error("integrity violation: bad tag")]
    BadTag,
}

impl Error {
    /// Whether this is a tag mismatch rather than a malformed call.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Error::BadTag)
    }
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            if $crate::LOCATION_LOG {
                $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!());
            }
            return ::core::result::Result::Err($err);
        }
    }};
}

#[macro_export]
macro_rules! err {
    ($err:expr) => {{
        if $crate::LOCATION_LOG {
            $crate::println!("\n!!! Error occurred @ {}, {}", file!(), line!());
        }
        ::core::result::Result::Err($err)
    }};
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn positive(x: i32) -> Result<i32> {
        ensure!(x > 0, Error::LengthMismatch(1, 0));
        Ok(x)
    }

    #[test]
    fn ensure_returns_the_given_error() {
        assert_eq!(positive(3), Ok(3));
        assert_eq!(positive(-3), Err(Error::LengthMismatch(1, 0)));
    }

    #[test]
    fn only_bad_tag_is_an_authentication_failure() {
        assert!(Error::BadTag.is_authentication_failure());
        assert!(!Error::NonceLength(16, 15).is_authentication_failure());
        assert!(!Error::CiphertextTooShort(16, 3).is_authentication_failure());
    }

    #[test]
    fn messages_name_the_offending_sizes() {
        assert_eq!(
            Error::KeyLength("Ascon-80pq", 20, 16).to_string(),
            "Ascon-80pq key must be 20 bytes long, but is 16 bytes long instead"
        );
    }
}
