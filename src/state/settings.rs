// Pull-to-refresh tuning, persisted to localStorage as JSON.
use serde::{Deserialize, Serialize};

use crate::util::{load_item, store_item};

pub const PULL_CONFIG_KEY: &str = "mc_pull_config";

const DEFAULT_ARM_THRESHOLD: f64 = 80.0;
const DEFAULT_CAP: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullConfig {
    /// Pull distance a release must exceed to request a refresh.
    pub arm_threshold: f64,
    /// Maximum visual travel of the pull, independent of the threshold.
    pub cap: f64,
}

impl Default for PullConfig {
    fn default() -> Self {
        Self {
            arm_threshold: DEFAULT_ARM_THRESHOLD,
            cap: DEFAULT_CAP,
        }
    }
}

impl PullConfig {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<Self>(raw).ok().map(Self::sanitized)
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// Replaces unusable values with defaults and keeps `cap >= arm_threshold`
    /// so an armed pull always has visible travel.
    pub fn sanitized(self) -> Self {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        let arm_threshold = if valid(self.arm_threshold) {
            self.arm_threshold
        } else {
            DEFAULT_ARM_THRESHOLD
        };
        let cap = if valid(self.cap) { self.cap } else { DEFAULT_CAP };
        Self {
            arm_threshold,
            cap: cap.max(arm_threshold),
        }
    }

    pub fn load() -> Option<Self> {
        load_item(PULL_CONFIG_KEY).and_then(|raw| Self::from_json(&raw))
    }

    pub fn save(&self) {
        if let Some(s) = self.to_json() {
            store_item(PULL_CONFIG_KEY, &s);
        }
    }
}
