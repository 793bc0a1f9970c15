//! Credential redaction for log and error output.

use crate::models::connection::REDACTED;

/// Replaces every occurrence of `secret` in `message` with `***`.
///
/// Driver errors can echo back parts of the connection string, so messages
/// derived from them pass through here before being logged or returned.
pub fn scrub_secret(message: &str, secret: &str) -> String {
    if secret.is_empty() {
        return message.to_string();
    }
    message.replace(secret, REDACTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrubs_every_occurrence() {
        let msg = "invalid uri mongodb://admin:hunter2@h:1/db (hunter2)";
        assert_eq!(
            scrub_secret(msg, "hunter2"),
            "invalid uri mongodb://admin:***@h:1/db (***)"
        );
    }

    #[test]
    fn test_empty_secret_leaves_message() {
        assert_eq!(scrub_secret("port out of range", ""), "port out of range");
    }

    #[test]
    fn test_message_without_secret_unchanged() {
        assert_eq!(scrub_secret("host not found", "hunter2"), "host not found");
    }
}
