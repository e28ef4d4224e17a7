//! Typed identifier newtypes backed by database-generated integers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row id.
            #[must_use]
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the raw row id.
            #[must_use]
            pub const fn as_raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Counter`](crate::counter::Counter) row.
    CounterId
);

define_id!(
    /// Identifier of a [`Greeting`](crate::greeting::Greeting) row.
    GreetingId
);

define_id!(
    /// Identifier of a [`User`](crate::user::User) row.
    UserId
);

impl CounterId {
    /// The fixed id of the one counter row every deployment owns.
    pub const SEED: Self = Self(1);
}
