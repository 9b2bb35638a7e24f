//! Tracking protection policy
//!
//! Mirrors the policy object engines accept when tracking protection is
//! switched on for a session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingCategory {
    Ad,
    Analytic,
    Social,
    Content,
    Cryptomining,
    Fingerprinting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookiePolicy {
    #[default]
    AcceptAll,
    AcceptNonTrackers,
    AcceptOnlyFirstParty,
    AcceptNone,
}

/// Defaults to blocking nothing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingProtectionPolicy {
    pub tracking_categories: Vec<TrackingCategory>,
    pub cookie_policy: CookiePolicy,
    pub strict_social_tracking_protection: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_blocks_nothing() {
        let policy = TrackingProtectionPolicy::default();
        assert!(policy.tracking_categories.is_empty());
        assert_eq!(policy.cookie_policy, CookiePolicy::AcceptAll);
    }

    #[test]
    fn test_policy_json_shape() {
        let policy = TrackingProtectionPolicy {
            tracking_categories: vec![TrackingCategory::Ad, TrackingCategory::Cryptomining],
            cookie_policy: CookiePolicy::AcceptNonTrackers,
            strict_social_tracking_protection: false,
        };
        let json = serde_json::to_value(&policy).unwrap();
        assert_eq!(json["tracking_categories"], serde_json::json!(["ad", "cryptomining"]));
        assert_eq!(json["cookie_policy"], "accept_non_trackers");
    }
}
