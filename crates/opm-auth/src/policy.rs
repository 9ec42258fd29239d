//! # Admin Policy
//!
//! The injectable predicate deciding which logins carry the admin flag.

use std::collections::BTreeSet;

/// Decides whether a login is an administrator.
pub trait AdminPolicy: Send + Sync {
    /// Whether the login is an administrator. Exactness semantics are the
    /// implementation's concern; [`AdminList`] matches case-sensitively.
    fn is_admin(&self, login: &str) -> bool;
}

/// A fixed allow-list of admin logins, matched exactly and
/// case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct AdminList {
    logins: BTreeSet<String>,
}

impl AdminList {
    /// Build an allow-list from login names.
    pub fn new(logins: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            logins: logins.into_iter().map(Into::into).collect(),
        }
    }

    /// An allow-list with no admins.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl AdminPolicy for AdminList {
    fn is_admin(&self, login: &str) -> bool {
        self.logins.contains(login)
    }
}
