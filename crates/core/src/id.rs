//! String-backed business identifiers used across the domain.
//!
//! These are opaque: the value is carried verbatim, without trimming, case folding
//! or format validation. Checking that an identifier refers to something real is
//! the job of whoever resolves it.

use serde::{Deserialize, Serialize};

/// Business key of a cargo shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingId(String);

/// Business key of a scheduled voyage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoyageNumber(String);

/// UN/LOCODE identifying a port or other location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnLocode(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// `true` for the zero value (the empty string).
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

    };
}

impl_string_newtype!(TrackingId);
impl_string_newtype!(VoyageNumber);
impl_string_newtype!(UnLocode);
