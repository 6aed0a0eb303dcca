/*!
 * Data produced by one generator run.
 *
 * Both values live only for the duration of the process; nothing here is
 * persisted.
 */

/// Table, column and account targeted by the printed `UPDATE` statement.
pub const USERS_TABLE: &str = "users";
pub const PASSWORD_HASH_COLUMN: &str = "password_hash";
pub const ADMIN_USERNAME: &str = "admin";

/// A password and the encoded hash generated for it.
///
/// The hash is opaque to this crate: it is printed and embedded, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashReport {
    pub password: String,
    pub hash: String,
}

impl HashReport {
    pub fn new(password: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            hash: hash.into(),
        }
    }

    /// `UPDATE` statement that stores the hash for the admin account.
    ///
    /// The hash is interpolated as-is, without quoting or escaping.
    pub fn sql_update(&self) -> String {
        format!(
            "UPDATE {} SET {} = '{}' WHERE username = '{}';",
            USERS_TABLE, PASSWORD_HASH_COLUMN, self.hash, ADMIN_USERNAME
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_update_embeds_hash_single_quoted() {
        let report = HashReport::new("admin123", "$2b$10$abcdefghijklmnopqrstuv");
        assert_eq!(
            report.sql_update(),
            "UPDATE users SET password_hash = '$2b$10$abcdefghijklmnopqrstuv' WHERE username = 'admin';"
        );
    }

    #[test]
    fn sql_update_does_not_escape() {
        let report = HashReport::new("p", "a'b");
        assert!(report.sql_update().contains("= 'a'b' WHERE"));
    }
}
