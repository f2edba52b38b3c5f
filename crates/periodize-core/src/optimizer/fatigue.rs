//! Fatigue scoring from recent training history.

use serde::Serialize;

use super::OptimizerTuning;
use crate::models::{AthleteProfile, CompletedSession, DAY_MS};

/// Coarse fatigue band derived from the score.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum FatigueLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl FatigueLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            FatigueLevel::Low
        } else if score < 50.0 {
            FatigueLevel::Moderate
        } else if score < 75.0 {
            FatigueLevel::High
        } else {
            FatigueLevel::VeryHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FatigueLevel::Low => "low",
            FatigueLevel::Moderate => "moderate",
            FatigueLevel::High => "high",
            FatigueLevel::VeryHigh => "very-high",
        }
    }
}

/// Breakdown of the fatigue score.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FatigueAssessment {
    /// Bounded to `[0, 100]`
    pub score: f64,
    pub level: FatigueLevel,
    pub recent_sessions: u32,
    pub acute_sessions: u32,
    /// Acute tonnage over the baseline average for a window of the same
    /// length; absent without baseline history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tonnage_ratio: Option<f64>,
    /// Acute working sets over the baseline average, computed like
    /// `tonnage_ratio`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_ratio: Option<f64>,
    pub hard_session_streak: u32,
    pub poor_sleep: bool,
    /// Human-readable contributors, in scoring order
    pub factors: Vec<String>,
}

impl FatigueAssessment {
    /// Assessment for an athlete with no history and no sleep signal.
    pub fn rested() -> Self {
        Self {
            score: 0.0,
            level: FatigueLevel::Low,
            recent_sessions: 0,
            acute_sessions: 0,
            tonnage_ratio: None,
            set_ratio: None,
            hard_session_streak: 0,
            poor_sleep: false,
            factors: Vec::new(),
        }
    }
}

/// Scores accumulated fatigue as of `now_ms`.
///
/// Sessions completed after `now_ms` are ignored. An empty history always
/// scores zero; a poor-sleep report is still flagged but adds no points.
pub fn assess_fatigue(
    history: &[CompletedSession],
    profile: &AthleteProfile,
    now_ms: i64,
    tuning: &OptimizerTuning,
) -> FatigueAssessment {
    let poor_sleep = profile
        .sleep_quality
        .is_some_and(|quality| quality <= tuning.poor_sleep_max);

    if history.is_empty() {
        return FatigueAssessment {
            poor_sleep,
            ..FatigueAssessment::rested()
        };
    }

    let mut past: Vec<&CompletedSession> = history
        .iter()
        .filter(|s| s.completed_at <= now_ms)
        .collect();
    past.sort_by_key(|s| std::cmp::Reverse(s.completed_at));

    let recent_sessions = count_within(&past, now_ms, tuning.recent_window_days);
    let acute_sessions = count_within(&past, now_ms, tuning.acute_window_days);

    let mut score = 0.0;
    let mut factors = Vec::new();

    if recent_sessions >= tuning.dense_recent_sessions {
        score += tuning.dense_recent_points;
        factors.push(format!(
            "{recent_sessions} sessions in the last {} days",
            tuning.recent_window_days
        ));
    } else if recent_sessions >= tuning.busy_recent_sessions {
        score += tuning.busy_recent_points;
        factors.push(format!(
            "{recent_sessions} sessions in the last {} days",
            tuning.recent_window_days
        ));
    }

    if acute_sessions > tuning.acute_session_limit {
        score += tuning.acute_session_points;
        factors.push(format!(
            "{acute_sessions} sessions in the last {} days",
            tuning.acute_window_days
        ));
    }

    let tonnage_ratio = acute_ratio(&past, now_ms, tuning, |s| s.tonnage);
    if let Some(ratio) = tonnage_ratio {
        if ratio > tuning.tonnage_spike_ratio {
            score += tuning.tonnage_spike_points;
            factors.push(format!("tonnage spike ({ratio:.2}x baseline)"));
        } else if ratio > tuning.tonnage_elevated_ratio {
            score += tuning.tonnage_elevated_points;
            factors.push(format!("elevated tonnage ({ratio:.2}x baseline)"));
        }
    }

    let set_ratio = acute_ratio(&past, now_ms, tuning, |s| f64::from(s.total_sets));
    if let Some(ratio) = set_ratio {
        if ratio > tuning.set_spike_ratio {
            score += tuning.set_spike_points;
            factors.push(format!("set count spike ({ratio:.2}x baseline)"));
        }
    }

    let hard_session_streak = past
        .iter()
        .take_while(|s| s.session_rpe.is_some_and(|rpe| rpe >= tuning.hard_session_rpe))
        .count() as u32;
    if hard_session_streak > 0 {
        score += (f64::from(hard_session_streak) * tuning.hard_streak_points)
            .min(tuning.hard_streak_cap);
        factors.push(format!("{hard_session_streak} hard sessions in a row"));
    }

    if poor_sleep {
        score += tuning.poor_sleep_points;
        factors.push("poor sleep".to_string());
    }

    let score = if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    };

    FatigueAssessment {
        score,
        level: FatigueLevel::from_score(score),
        recent_sessions,
        acute_sessions,
        tonnage_ratio,
        set_ratio,
        hard_session_streak,
        poor_sleep,
        factors,
    }
}

fn count_within(past: &[&CompletedSession], now_ms: i64, days: u32) -> u32 {
    let horizon = i64::from(days) * DAY_MS;
    past.iter()
        .filter(|s| now_ms.saturating_sub(s.completed_at) < horizon)
        .count() as u32
}

/// Acute total of `measure` over the baseline average for a window of the
/// same length.
fn acute_ratio(
    past: &[&CompletedSession],
    now_ms: i64,
    tuning: &OptimizerTuning,
    measure: impl Fn(&CompletedSession) -> f64,
) -> Option<f64> {
    if tuning.acute_window_days == 0 || tuning.baseline_window_days == 0 {
        return None;
    }

    let acute_end = i64::from(tuning.acute_window_days) * DAY_MS;
    let baseline_end = acute_end + i64::from(tuning.baseline_window_days) * DAY_MS;

    let mut acute = 0.0;
    let mut baseline = 0.0;
    for &session in past {
        let value = measure(session);
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let age = now_ms.saturating_sub(session.completed_at);
        if age < acute_end {
            acute += value;
        } else if age < baseline_end {
            baseline += value;
        }
    }

    let windows = f64::from(tuning.baseline_window_days) / f64::from(tuning.acute_window_days);
    let baseline_avg = baseline / windows;
    (baseline_avg > 0.0).then(|| acute / baseline_avg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_706_745_600_000; // 2024-02-01T00:00:00Z

    fn session(days_ago: f64, tonnage: f64, rpe: Option<f64>) -> CompletedSession {
        CompletedSession {
            completed_at: NOW - (days_ago * DAY_MS as f64) as i64,
            tonnage,
            total_sets: 15,
            session_rpe: rpe,
        }
    }

    #[test]
    fn test_empty_history_is_rested() {
        let assessment = assess_fatigue(
            &[],
            &AthleteProfile::default(),
            NOW,
            &OptimizerTuning::default(),
        );
        assert_eq!(assessment, FatigueAssessment::rested());
    }

    #[test]
    fn test_dense_recent_training() {
        let history = vec![
            session(0.5, 0.0, None),
            session(1.5, 0.0, None),
            session(2.5, 0.0, None),
        ];
        let assessment =
            assess_fatigue(&history, &AthleteProfile::default(), NOW, &OptimizerTuning::default());
        assert_eq!(assessment.recent_sessions, 3);
        assert_eq!(assessment.score, 20.0);
    }

    #[test]
    fn test_future_sessions_are_ignored() {
        let history = vec![session(-1.0, 5000.0, Some(10.0))];
        let assessment =
            assess_fatigue(&history, &AthleteProfile::default(), NOW, &OptimizerTuning::default());
        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.acute_sessions, 0);
    }

    #[test]
    fn test_tonnage_spike() {
        // baseline: 3 sessions of 1000 over 21 days -> 1000 per 7 days
        // acute: 1400 -> ratio 1.4
        let history = vec![
            session(1.0, 1400.0, None),
            session(10.0, 1000.0, None),
            session(17.0, 1000.0, None),
            session(24.0, 1000.0, None),
        ];
        let assessment =
            assess_fatigue(&history, &AthleteProfile::default(), NOW, &OptimizerTuning::default());
        let ratio = assessment.tonnage_ratio.unwrap();
        assert!((ratio - 1.4).abs() < 1e-9);
        assert_eq!(assessment.score, 20.0);
    }

    #[test]
    fn test_no_baseline_means_no_ratio() {
        let history = vec![session(1.0, 5000.0, None)];
        let assessment =
            assess_fatigue(&history, &AthleteProfile::default(), NOW, &OptimizerTuning::default());
        assert!(assessment.tonnage_ratio.is_none());
    }

    #[test]
    fn test_hard_streak_is_capped_and_breaks() {
        let tuning = OptimizerTuning::default();
        let history: Vec<_> = (0..5)
            .map(|i| session(f64::from(i) * 4.0 + 3.5, 0.0, Some(9.0)))
            .collect();
        let assessment = assess_fatigue(&history, &AthleteProfile::default(), NOW, &tuning);
        assert_eq!(assessment.hard_session_streak, 5);
        assert_eq!(assessment.score, tuning.hard_streak_cap);

        let broken = vec![
            session(3.5, 0.0, Some(9.0)),
            session(8.0, 0.0, Some(6.0)),
            session(12.0, 0.0, Some(9.5)),
        ];
        let assessment = assess_fatigue(&broken, &AthleteProfile::default(), NOW, &tuning);
        assert_eq!(assessment.hard_session_streak, 1);
    }

    #[test]
    fn test_poor_sleep() {
        let profile = AthleteProfile {
            sleep_quality: Some(2),
            ..Default::default()
        };
        // outside every window, so sleep is the only signal
        let history = vec![session(40.0, 1000.0, Some(9.0))];
        let assessment = assess_fatigue(&history, &profile, NOW, &OptimizerTuning::default());
        assert!(assessment.poor_sleep);
        assert_eq!(assessment.score, 15.0);
        assert_eq!(assessment.factors, vec!["poor sleep".to_string()]);
    }

    #[test]
    fn test_poor_sleep_without_history_is_not_scored() {
        let profile = AthleteProfile {
            sleep_quality: Some(1),
            ..Default::default()
        };
        let assessment = assess_fatigue(&[], &profile, NOW, &OptimizerTuning::default());
        assert!(assessment.poor_sleep);
        assert_eq!(assessment.score, 0.0);
        assert_eq!(assessment.level, FatigueLevel::Low);
        assert!(assessment.factors.is_empty());
    }

    #[test]
    fn test_set_count_spike() {
        let with_sets = |days_ago: f64, total_sets: u32| CompletedSession {
            total_sets,
            ..session(days_ago, 0.0, None)
        };
        // baseline: 30 sets over 21 days -> 10 per 7 days; acute: 15 -> 1.5
        let history = vec![
            with_sets(1.0, 15),
            with_sets(10.0, 10),
            with_sets(17.0, 10),
            with_sets(24.0, 10),
        ];
        let assessment =
            assess_fatigue(&history, &AthleteProfile::default(), NOW, &OptimizerTuning::default());
        let ratio = assessment.set_ratio.unwrap();
        assert!((ratio - 1.5).abs() < 1e-9);
        assert!(assessment.tonnage_ratio.is_none());
        assert_eq!(assessment.score, 10.0);
        assert_eq!(assessment.factors, vec!["set count spike (1.50x baseline)".to_string()]);
    }

    #[test]
    fn test_score_is_bounded() {
        let mut tuning = OptimizerTuning::default();
        tuning.poor_sleep_points = 500.0;
        let profile = AthleteProfile {
            sleep_quality: Some(1),
            ..Default::default()
        };
        let history = vec![session(40.0, 0.0, None)];
        let assessment = assess_fatigue(&history, &profile, NOW, &tuning);
        assert_eq!(assessment.score, 100.0);
        assert_eq!(assessment.level, FatigueLevel::VeryHigh);
    }
}
