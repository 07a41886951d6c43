//! Strongly-typed ID wrappers for history entries and vault records
//!
//! IDs are integers derived from the creation time in milliseconds. Minting
//! goes past the largest ID already in use, so IDs stay unique and strictly
//! increasing even when several are created in the same millisecond.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// The ID the clock would hand out right now
            pub fn now() -> Self {
                Self(Utc::now().timestamp_millis().max(0) as u64)
            }

            /// Mint a new ID that is not in `taken`
            ///
            /// Starts one past the largest taken ID that is not ahead of the
            /// clock (or at the clock, if that is later), then moves past any
            /// run of taken IDs. IDs ahead of the clock never push the start
            /// forward, so a stray huge ID cannot exhaust the range. If the
            /// run reaches `u64::MAX`, the lowest free ID is used instead.
            pub fn fresh(taken: &BTreeSet<Self>) -> Self {
                let now = Self::now();
                let start = match taken.range(..=now).next_back() {
                    Some(prev) => prev.0.checked_add(1).map_or(now.0, |next| next.max(now.0)),
                    None => now.0,
                };

                let mut candidate = start;
                for id in taken.range(Self(start)..) {
                    if id.0 > candidate {
                        break;
                    }
                    match candidate.checked_add(1) {
                        Some(next) => candidate = next,
                        None => return Self::lowest_free(taken),
                    }
                }
                Self(candidate)
            }

            fn lowest_free(taken: &BTreeSet<Self>) -> Self {
                let mut candidate = 0u64;
                for id in taken {
                    if id.0 != candidate {
                        break;
                    }
                    candidate += 1;
                }
                Self(candidate)
            }

            /// Whether this ID lies ahead of the clock
            pub fn is_ahead_of_clock(&self) -> bool {
                *self > Self::now()
            }

            /// Create an ID from a raw value
            pub fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix('#').unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(HistoryId);
define_id!(CredentialId);
