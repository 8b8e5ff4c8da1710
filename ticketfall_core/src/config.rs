use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::{CubicBezier, Motion};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub spinning: String,
    pub result: String, // `{total}` is replaced with the backend's total label
    pub network_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            spinning: "Крутим...".into(),
            result: "🎉 Выпало: {total}".into(),
            network_error: "Ошибка сети".into(),
        }
    }
}

impl Messages {
    pub fn result_text(&self, total_label: &str) -> String {
        self.result.replace("{total}", total_label)
    }
}

/// Geometry and timing of the reels. Offsets are `translateY` pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    pub ticket_height: f64,
    pub gap: f64,
    pub base_offset: f64,
    pub idle_len: usize,
    /// Index shown in the viewport at rest; also the winner's index on a spin strip.
    pub focus_index: usize,
    pub filler_base: usize,
    pub filler_step: usize,
    pub start_backoff: usize,
    pub stagger_ms: u64,
    pub base_duration_ms: u64,
    pub duration_step_ms: u64,
    pub easing: CubicBezier,
    pub messages: Messages,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            ticket_height: 80.0,
            gap: 10.0,
            base_offset: 110.0,
            idle_len: 30,
            focus_index: 2,
            filler_base: 30,
            filler_step: 10,
            start_backoff: 2,
            stagger_ms: 500,
            base_duration_ms: 3000,
            duration_step_ms: 1000,
            easing: CubicBezier::FALL,
            messages: Messages::default(),
        }
    }
}

impl AnimatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.item_size() <= 0.0 || !self.item_size().is_finite() {
            return Err(ConfigError::ItemSize(self.item_size()));
        }
        if self.idle_len <= self.focus_index {
            return Err(ConfigError::IdleTooShort {
                len: self.idle_len,
                focus: self.focus_index,
            });
        }
        if self.start_backoff > self.filler_base {
            return Err(ConfigError::BackoffTooLarge {
                backoff: self.start_backoff,
                filler: self.filler_base,
            });
        }
        let unit = 0.0..=1.0;
        if !unit.contains(&self.easing.x1) || !unit.contains(&self.easing.x2) {
            return Err(ConfigError::Easing);
        }
        Ok(())
    }

    pub fn item_size(&self) -> f64 {
        self.ticket_height + self.gap
    }

    /// Offset that centers `index` in the viewport.
    pub fn offset_for(&self, index: usize) -> f64 {
        self.base_offset - index as f64 * self.item_size()
    }

    /// Index centered by `offset`, rounded to the nearest ticket.
    pub fn index_at(&self, offset: f64) -> isize {
        ((self.base_offset - offset) / self.item_size()).round() as isize
    }

    pub fn idle_offset(&self) -> f64 {
        self.offset_for(self.focus_index)
    }

    pub fn filler_len(&self, reel: usize) -> usize {
        self.filler_base + reel * self.filler_step
    }

    pub fn strip_len(&self, reel: usize) -> usize {
        self.focus_index + 1 + self.filler_len(reel)
    }

    /// Index the fall starts from, `start_backoff` items above the last ticket.
    pub fn start_index(&self, reel: usize) -> usize {
        (self.strip_len(reel) - 1).saturating_sub(self.start_backoff)
    }

    pub fn start_delay(&self, reel: usize) -> Duration {
        Duration::from_millis(self.stagger_ms.saturating_mul(reel as u64))
    }

    pub fn motion(&self, reel: usize) -> Motion {
        Motion {
            duration_ms: self
                .base_duration_ms
                .saturating_add(self.duration_step_ms.saturating_mul(reel as u64)),
            easing: self.easing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let config = AnimatorConfig::default();
        assert_eq!(config.item_size(), 90.0);
        assert_eq!(config.idle_offset(), 110.0 - 2.0 * 90.0);
        assert_eq!(config.index_at(config.idle_offset()), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn per_reel_schedule() {
        let config = AnimatorConfig::default();
        for reel in 0..3 {
            assert_eq!(config.filler_len(reel), 30 + reel * 10);
            assert_eq!(config.strip_len(reel), 33 + reel * 10);
            assert_eq!(config.start_index(reel), 30 + reel * 10);
            assert_eq!(config.start_delay(reel), Duration::from_millis(500 * reel as u64));
            assert_eq!(config.motion(reel).duration(), Duration::from_secs(3 + reel as u64));
        }
    }

    #[test]
    fn huge_timings_saturate() {
        let config: AnimatorConfig = serde_json::from_str(
            r#"{"stagger_ms": 18446744073709551615, "base_duration_ms": 18446744073709551000, "duration_step_ms": 18446744073709551615}"#,
        )
        .unwrap();
        assert_eq!(config.start_delay(2), Duration::from_millis(u64::MAX));
        assert_eq!(config.motion(2).duration_ms, u64::MAX);
        assert_eq!(config.motion(0).duration_ms, 18446744073709551000);
    }

    #[test]
    fn result_text_embeds_total() {
        let messages = Messages::default();
        assert_eq!(messages.result_text("104.5"), "🎉 Выпало: 104.5");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: AnimatorConfig =
            serde_json::from_str(r#"{"stagger_ms": 100, "messages": {"network_error": "offline"}}"#)
                .unwrap();
        assert_eq!(config.stagger_ms, 100);
        assert_eq!(config.ticket_height, 80.0);
        assert_eq!(config.messages.network_error, "offline");
        assert_eq!(config.messages.spinning, "Крутим...");
    }

    #[test]
    fn rejects_bad_configs() {
        let zero = AnimatorConfig {
            ticket_height: 0.0,
            gap: 0.0,
            ..Default::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::ItemSize(0.0)));

        let short = AnimatorConfig {
            idle_len: 2,
            ..Default::default()
        };
        assert!(matches!(short.validate(), Err(ConfigError::IdleTooShort { .. })));

        let backoff = AnimatorConfig {
            start_backoff: 31,
            ..Default::default()
        };
        assert!(matches!(backoff.validate(), Err(ConfigError::BackoffTooLarge { .. })));

        let easing = AnimatorConfig {
            easing: CubicBezier::new(1.5, 0.0, 0.2, 1.0),
            ..Default::default()
        };
        assert_eq!(easing.validate(), Err(ConfigError::Easing));
    }
}
