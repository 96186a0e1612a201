//! Experience curve
//!
//! Maps cumulative XP to a level and back. The step from level `L` to
//! `L + 1` costs `floor(base_xp * L^exponent)`, and the threshold for a
//! level is the running sum of the truncated steps below it.

use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use super::cache::ThresholdCache;
use super::level::Level;
use super::titles::LevelTitle;

/// XP cost of the first level-up
pub const BASE_XP: u64 = 100;

/// Growth exponent of the step cost
pub const EXPONENT: f64 = 1.5;

/// Curve shape parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveParams {
    pub base_xp: u64,
    pub exponent: f64,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            base_xp: BASE_XP,
            exponent: EXPONENT,
        }
    }
}

impl CurveParams {
    /// Check that the parameters give a usable curve.
    ///
    /// With `base_xp >= 1` and `exponent >= 1` consecutive real-valued steps
    /// differ by at least 1, so their floors differ too. This holds while
    /// thresholds fit in a `u64`; past that, steps saturate at `u64::MAX`.
    ///
    /// The curve must also run out of `u64` XP before the last `Level`,
    /// otherwise the largest XP totals would overflow their level band.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.base_xp == 0 {
            return Err(LevelError::InvalidCurve("base_xp must be at least 1".into()));
        }
        if !self.exponent.is_finite() || self.exponent < 1.0 {
            return Err(LevelError::InvalidCurve(format!(
                "exponent must be a finite number >= 1.0, got {}",
                self.exponent
            )));
        }
        if !self.overflows_before_max_level() {
            return Err(LevelError::InvalidCurve(format!(
                "curve (base_xp {}, exponent {}) never exceeds u64 XP within {} levels",
                self.base_xp,
                self.exponent,
                u32::MAX
            )));
        }
        Ok(())
    }

    /// Whether the threshold of the last `Level` is beyond `u64::MAX`.
    ///
    /// Uses `sum(floor(b * k^e), k < n + 1) >= b * n^(e+1) / (e+1) - n`.
    fn overflows_before_max_level(&self) -> bool {
        let n = (u32::MAX - 1) as f64;
        let e = self.exponent;
        let lower_bound = self.base_xp as f64 * n.powf(e + 1.0) / (e + 1.0) - n;
        // margin for float rounding
        lower_bound > u64::MAX as f64 * (1.0 + 1e-9)
    }
}

/// A level curve with memoized thresholds
#[derive(Debug)]
pub struct LevelCurve {
    params: CurveParams,
    cache: ThresholdCache,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::with_valid_params(CurveParams::default())
    }
}

impl LevelCurve {
    /// Build a curve from validated parameters
    pub fn new(params: CurveParams) -> Result<Self, LevelError> {
        params.validate()?;
        Ok(Self::with_valid_params(params))
    }

    fn with_valid_params(params: CurveParams) -> Self {
        Self {
            params,
            cache: ThresholdCache::new(),
        }
    }

    /// Shared curve with the default parameters
    pub fn standard() -> &'static LevelCurve {
        static STANDARD: OnceLock<LevelCurve> = OnceLock::new();
        STANDARD.get_or_init(LevelCurve::default)
    }

    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// XP needed to go from `level` to the next one
    pub fn step_cost(&self, level: Level) -> u64 {
        let raw = self.params.base_xp as f64 * (level.get() as f64).powf(self.params.exponent);
        // float-to-int casts truncate and saturate
        raw as u64
    }

    /// Cumulative XP needed to reach `level`.
    ///
    /// Saturates at `u64::MAX` for levels whose threshold does not fit.
    pub fn threshold_for_level(&self, level: Level) -> u64 {
        self.cache
            .threshold(level, |l| self.step_cost(l))
            .unwrap_or(u64::MAX)
    }

    /// Reference threshold: sums every step below `level` on each call
    pub fn threshold_for_level_linear(&self, level: Level) -> u64 {
        (1..level.get())
            .filter_map(|l| Level::new(l).ok())
            .fold(0u64, |total, l| total.saturating_add(self.step_cost(l)))
    }

    /// Largest level whose threshold is `<= total_xp`
    pub fn level_for_xp(&self, total_xp: u64) -> Level {
        self.cache.level_for_xp(total_xp, |l| self.step_cost(l))
    }

    /// Reference lookup: scans upward from level 1
    pub fn level_for_xp_linear(&self, total_xp: u64) -> Level {
        let mut level = Level::FIRST;
        let mut threshold = 0u64;
        while level < Level::MAX {
            match threshold.checked_add(self.step_cost(level)) {
                Some(next) if total_xp >= next => {
                    threshold = next;
                    level = level.next();
                }
                _ => break,
            }
        }
        level
    }

    /// XP earned since entering the current level
    pub fn progress_in_level(&self, total_xp: u64) -> u64 {
        let level = self.level_for_xp(total_xp);
        total_xp - self.threshold_for_level(level)
    }

    /// Full width of the current level band.
    ///
    /// This is the step cost of the current level, not the XP still missing;
    /// see [`LevelCurve::xp_to_next_level`] for that.
    pub fn xp_needed_for_next_level(&self, total_xp: u64) -> u64 {
        self.step_cost(self.level_for_xp(total_xp))
    }

    /// XP still missing before the next level
    pub fn xp_to_next_level(&self, total_xp: u64) -> u64 {
        let next = self.level_for_xp(total_xp).next();
        self.threshold_for_level(next).saturating_sub(total_xp)
    }

    /// Progress through the current band, 0..=100
    pub fn progress_percentage(&self, total_xp: u64) -> u8 {
        let progress = self.progress_in_level(total_xp);
        let needed = self.xp_needed_for_next_level(total_xp);
        percentage(progress, needed)
    }

    /// Text like `Level 5 | 150/1118 XP`
    pub fn format_level_info(&self, total_xp: u64) -> String {
        self.snapshot(total_xp).to_string()
    }

    /// True when `new_xp` sits in a higher level than `old_xp`
    pub fn did_level_up(&self, old_xp: u64, new_xp: u64) -> bool {
        self.level_for_xp(new_xp) > self.level_for_xp(old_xp)
    }

    /// Number of levels gained between two totals (0 if none)
    pub fn levels_gained(&self, old_xp: u64, new_xp: u64) -> u32 {
        self.level_for_xp(new_xp)
            .get()
            .saturating_sub(self.level_for_xp(old_xp).get())
    }

    /// Everything a progress display needs, from one level lookup
    pub fn snapshot(&self, total_xp: u64) -> LevelInfo {
        let level = self.level_for_xp(total_xp);
        let progress = total_xp - self.threshold_for_level(level);
        let needed = self.step_cost(level);
        LevelInfo {
            total_xp,
            level,
            title: LevelTitle::for_level(level),
            progress,
            needed,
            percentage: percentage(progress, needed),
        }
    }
}

fn percentage(progress: u64, needed: u64) -> u8 {
    if needed == 0 {
        return 100;
    }
    let pct = (progress as u128 * 100) / needed as u128;
    pct.min(100) as u8
}

/// Level summary for a given XP total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub total_xp: u64,
    pub level: Level,
    pub title: LevelTitle,
    /// XP earned inside the current band
    pub progress: u64,
    /// Width of the current band
    pub needed: u64,
    pub percentage: u8,
}

impl LevelInfo {
    /// XP still missing before the next level
    pub fn remaining(&self) -> u64 {
        self.needed.saturating_sub(self.progress)
    }
}

impl fmt::Display for LevelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {} | {}/{} XP", self.level, self.progress, self.needed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lvl(n: u32) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn test_step_cost() {
        let curve = LevelCurve::default();
        assert_eq!(curve.step_cost(lvl(1)), 100);
        assert_eq!(curve.step_cost(lvl(2)), 282);
        assert_eq!(curve.step_cost(lvl(3)), 519);
    }

    #[test]
    fn test_thresholds() {
        let curve = LevelCurve::default();
        assert_eq!(curve.threshold_for_level(lvl(1)), 0);
        assert_eq!(curve.threshold_for_level(lvl(2)), 100);
        assert_eq!(curve.threshold_for_level(lvl(3)), 382);
        assert_eq!(curve.threshold_for_level(lvl(4)), 901);
    }

    #[test]
    fn test_level_for_xp_boundaries() {
        let curve = LevelCurve::default();
        assert_eq!(curve.level_for_xp(0).get(), 1);
        assert_eq!(curve.level_for_xp(99).get(), 1);
        assert_eq!(curve.level_for_xp(100).get(), 2);
        assert_eq!(curve.level_for_xp(381).get(), 2);
        assert_eq!(curve.level_for_xp(382).get(), 3);
    }

    #[test]
    fn test_scenarios() {
        let curve = LevelCurve::default();

        let info = curve.snapshot(0);
        assert_eq!((info.level.get(), info.progress, info.needed, info.percentage), (1, 0, 100, 0));
        assert_eq!(info.title, LevelTitle::Beginner);

        let info = curve.snapshot(100);
        assert_eq!((info.level.get(), info.progress, info.needed, info.percentage), (2, 0, 282, 0));

        assert_eq!(curve.level_for_xp(150).get(), 2);
        assert_eq!(curve.progress_in_level(150), 50);
        assert_eq!(curve.xp_needed_for_next_level(150), 282);
        assert_eq!(curve.progress_percentage(150), 17);
        assert_eq!(curve.format_level_info(150), "Level 2 | 50/282 XP");
    }

    #[test]
    fn test_needed_is_band_width_not_remaining() {
        let curve = LevelCurve::default();
        assert_eq!(curve.xp_needed_for_next_level(150), 282);
        assert_eq!(curve.xp_to_next_level(150), 232);
        assert_eq!(curve.snapshot(150).remaining(), 232);
    }

    #[test]
    fn test_did_level_up() {
        let curve = LevelCurve::default();
        assert!(!curve.did_level_up(0, 0));
        assert!(!curve.did_level_up(0, 99));
        assert!(curve.did_level_up(0, 100));
        assert!(!curve.did_level_up(500, 100));
        assert_eq!(curve.levels_gained(0, 901), 3);
        assert_eq!(curve.levels_gained(901, 0), 0);
    }

    #[test]
    fn test_invalid_params() {
        let zero_base = CurveParams { base_xp: 0, exponent: 1.5 };
        assert!(matches!(LevelCurve::new(zero_base), Err(LevelError::InvalidCurve(_))));

        let flat = CurveParams { base_xp: 100, exponent: 0.5 };
        assert!(LevelCurve::new(flat).is_err());

        let nan = CurveParams { base_xp: 100, exponent: f64::NAN };
        assert!(LevelCurve::new(nan).is_err());

        let linear = CurveParams { base_xp: 3, exponent: 1.0 };
        assert!(LevelCurve::new(linear).is_ok());
    }

    #[test]
    fn test_curve_must_outgrow_u64_before_last_level() {
        // threshold(u32::MAX) is about 9.2e18 here, so XP near u64::MAX
        // would sit past the end of the last level's band
        let shallow = CurveParams { base_xp: 1, exponent: 1.0 };
        assert!(matches!(LevelCurve::new(shallow), Err(LevelError::InvalidCurve(_))));

        let two = CurveParams { base_xp: 2, exponent: 1.0 };
        assert!(LevelCurve::new(two).is_err());

        assert!(CurveParams::default().validate().is_ok());
        assert!(CurveParams { base_xp: 1, exponent: 1.5 }.validate().is_ok());
    }

    #[test]
    fn test_linear_reference_matches() {
        let curve = LevelCurve::default();
        for level in 1..60 {
            assert_eq!(curve.threshold_for_level(lvl(level)), curve.threshold_for_level_linear(lvl(level)));
        }
        for xp in (0..20_000).step_by(37) {
            assert_eq!(curve.level_for_xp(xp), curve.level_for_xp_linear(xp));
        }
    }

    #[test]
    fn test_max_xp_terminates() {
        let curve = LevelCurve::new(CurveParams { base_xp: u64::MAX / 4, exponent: 1.0 }).unwrap();
        let level = curve.level_for_xp(u64::MAX);
        // thresholds 0, 2^62, 3 * 2^62, then overflow
        assert_eq!(level.get(), 3);
        assert_eq!(level, curve.level_for_xp_linear(u64::MAX));
        assert!(curve.progress_percentage(u64::MAX) <= 100);
    }

    #[test]
    fn test_percentage_guard() {
        assert_eq!(percentage(5, 0), 100);
        assert_eq!(percentage(50, 282), 17);
        assert_eq!(percentage(500, 100), 100);
    }
}
