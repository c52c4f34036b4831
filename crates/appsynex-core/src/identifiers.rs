//! Strongly-typed identifiers for roles, modules, and actions.
//!
//! All three are opaque, case-sensitive strings. The known values are exposed
//! as constants in [`crate::permissions`]; any other string is still a valid
//! identifier, it simply matches nothing in the role table.
//!
//! # Example
//!
//! ```ignore
//! use appsynex_core::identifiers::{Action, Module, Permission, Role};
//!
//! let role = Role::new("MANAGER");
//! let permission = Permission::new(Module::new("SAMPLE"), Action::new("VIEW"));
//! assert_eq!(permission.to_string(), "SAMPLE_VIEW");
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Macro to define a string identifier newtype.
///
/// Identifiers built from `&'static str` stay borrowed, so the known values
/// can be declared as `const` items.
macro_rules! define_identifier {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Create an identifier from any string.
            #[inline]
            pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
                Self(value.into())
            }

            /// Create an identifier from a static string (usable in `const`).
            #[inline]
            pub const fn from_static(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&'static str> for $name {
            fn from(value: &'static str) -> Self {
                Self::from_static(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_identifier!(
    /// A role assigned to a user at login.
    Role
);

define_identifier!(
    /// A protected resource domain (e.g. `SAMPLE`, `USER`).
    Module
);

define_identifier!(
    /// An operation on a module (e.g. `VIEW`, `DELETE`).
    Action
);

/// The atomic unit a role either grants or does not: a `(module, action)` pair.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Permission {
    pub module: Module,
    pub action: Action,
}

impl Permission {
    pub const fn new(module: Module, action: Action) -> Self {
        Self { module, action }
    }

    /// Whether this permission is exactly `(module, action)`.
    pub fn matches(&self, module: &Module, action: &Action) -> bool {
        self.module == *module && self.action == *action
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permission({}:{})", self.module, self.action)
    }
}

/// Flat `MODULE_ACTION` form, e.g. `SAMPLE_VIEW`.
impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.module, self.action)
    }
}
