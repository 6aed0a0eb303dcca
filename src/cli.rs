//! Argument handling for the `hash_password` binary.
//! Usage: cargo run --bin hash_password [password]

use std::ffi::OsString;

/// Password hashed when no argument is given.
pub const DEFAULT_PASSWORD: &str = "admin123";

/// Picks the password from a full argument list (program name first).
///
/// Only the first positional argument is looked at; anything after it is
/// ignored. An empty argument counts as missing.
pub fn password_from_args<I>(args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .nth(1)
        .filter(|arg| !arg.is_empty())
        .unwrap_or_else(|| DEFAULT_PASSWORD.to_string())
}

/// Converts raw process arguments to strings, replacing invalid UTF-8
/// sequences with U+FFFD instead of failing.
pub fn lossy_args<I>(args: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter().map(|arg| arg.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn uses_default_without_argument() {
        assert_eq!(password_from_args(args(&["hash_password"])), "admin123");
    }

    #[test]
    fn uses_first_argument() {
        assert_eq!(
            password_from_args(args(&["hash_password", "s3cret", "ignored"])),
            "s3cret"
        );
    }

    #[test]
    fn empty_argument_falls_back() {
        assert_eq!(password_from_args(args(&["hash_password", ""])), DEFAULT_PASSWORD);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_converted_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let raw = vec![
            OsString::from("hash_password"),
            OsString::from_vec(b"caf\xe9".to_vec()),
        ];
        assert_eq!(password_from_args(lossy_args(raw)), "caf\u{FFFD}");
    }

    #[test]
    fn keeps_argument_verbatim() {
        assert_eq!(
            password_from_args(args(&["hash_password", " it's --raw "])),
            " it's --raw "
        );
    }
}
