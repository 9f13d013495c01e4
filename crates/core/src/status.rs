//! Product status lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Where a shortage item stands: recorded, on order, or arrived.
///
/// `Delivered` is tolerated as a stored value but is policy-transient:
/// confirmed delivery is expressed as a delete, so no product is expected
/// to rest in this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Pending,
    Ordered,
    Delivered,
}

impl ProductStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProductStatus::Pending => "pending",
            ProductStatus::Ordered => "ordered",
            ProductStatus::Delivered => "delivered",
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Pending
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ProductStatus::Pending),
            "ordered" => Ok(ProductStatus::Ordered),
            "delivered" => Ok(ProductStatus::Delivered),
            other => Err(CoreError::Validation(format!("Invalid status: {other}"))),
        }
    }
}

impl TryFrom<String> for ProductStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
