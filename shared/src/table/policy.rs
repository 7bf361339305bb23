//! Configurable seating policies
//!
//! Two behaviours around group dissolution are deployment choices rather
//! than fixed rules. Exactly one variant of each is active at a time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether active orders on member tables block `ungroup`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UngroupPolicy {
    /// Dissolve regardless of order status
    #[default]
    Unrestricted,
    /// Refuse while any member has a COOKING or MEAL order
    BlockActiveOrders,
}

/// What happens to a table's empty flag when its group is dissolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseEmptiness {
    /// Force the table to non-empty
    #[default]
    Occupied,
    /// Leave the flag as it was. Tables grouped through `TableGroup::create`
    /// are always occupied at release; only restored state can differ.
    Preserve,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPolicy {
    pub ungroup: UngroupPolicy,
    pub release: ReleaseEmptiness,
}

/// Unrecognised policy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} policy: {value}")]
pub struct InvalidPolicy {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for UngroupPolicy {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unrestricted" => Ok(Self::Unrestricted),
            "block_active_orders" => Ok(Self::BlockActiveOrders),
            _ => Err(InvalidPolicy {
                kind: "ungroup",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ReleaseEmptiness {
    type Err = InvalidPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "occupied" => Ok(Self::Occupied),
            "preserve" => Ok(Self::Preserve),
            _ => Err(InvalidPolicy {
                kind: "release",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for UngroupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrestricted => write!(f, "unrestricted"),
            Self::BlockActiveOrders => write!(f, "block_active_orders"),
        }
    }
}

impl fmt::Display for ReleaseEmptiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied => write!(f, "occupied"),
            Self::Preserve => write!(f, "preserve"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = SeatingPolicy::default();
        assert_eq!(policy.ungroup, UngroupPolicy::Unrestricted);
        assert_eq!(policy.release, ReleaseEmptiness::Occupied);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "BLOCK_ACTIVE_ORDERS".parse::<UngroupPolicy>().unwrap(),
            UngroupPolicy::BlockActiveOrders
        );
        assert_eq!(
            " preserve ".parse::<ReleaseEmptiness>().unwrap(),
            ReleaseEmptiness::Preserve
        );

        let err = "strict".parse::<UngroupPolicy>().unwrap_err();
        assert_eq!(err.to_string(), "unknown ungroup policy: strict");
    }

    #[test]
    fn test_display_parses_back() {
        for policy in [UngroupPolicy::Unrestricted, UngroupPolicy::BlockActiveOrders] {
            assert_eq!(policy.to_string().parse::<UngroupPolicy>().unwrap(), policy);
        }
    }
}
