/// Opaque identifier of the user owning a cart.
/// Every cart operation is keyed by it; two carts never share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_expose_inner_identifier() {
        let user_id = UserId::new("u1");
        assert_eq!(user_id.as_str(), "u1");
        assert_eq!(user_id.to_string(), "u1");
    }

    #[test]
    fn should_detect_blank_identifier() {
        assert!(UserId::new("").is_blank());
        assert!(UserId::new("  \t").is_blank());
        assert!(!UserId::new("u1").is_blank());
    }

    #[test]
    fn should_compare_by_value() {
        let from_str: UserId = "same-user".into();
        let from_string: UserId = "same-user".to_string().into();

        assert_eq!(from_str, from_string);
        assert_ne!(from_str, UserId::new("other-user"));
    }
}
