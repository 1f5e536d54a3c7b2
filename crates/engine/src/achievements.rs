//! Achievement catalog and evaluation

use common::models::{AchievementStatus, DiagnosisRecord, LedgerStats};

/// Achievement ids
pub mod defs {
    pub const FIRST_DIAGNOSIS: &str = "first-diagnosis";
    pub const STREAK_7: &str = "streak-7";
    pub const HEALTHY_PLANTS: &str = "healthy-plants";
    pub const PLANT_DOCTOR: &str = "plant-doctor";
    pub const PROBLEM_SOLVER: &str = "problem-solver";
    pub const ACCURACY_MASTER: &str = "accuracy-master";
}

fn status(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    unlocked: bool,
) -> AchievementStatus {
    AchievementStatus {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        unlocked,
        unlocked_date: None,
        progress: None,
        max_progress: None,
    }
}

fn with_progress(mut s: AchievementStatus, progress: f64, max_progress: f64) -> AchievementStatus {
    s.progress = Some(progress);
    s.max_progress = Some(max_progress);
    s
}

/// Evaluate the fixed achievement catalog against a ledger snapshot.
///
/// Pure and idempotent; unlock state is derived on every call, never
/// stored. `records` must be the same newest-first snapshot `stats`
/// was computed from.
pub fn evaluate(records: &[DiagnosisRecord], stats: &LedgerStats) -> Vec<AchievementStatus> {
    let avg_pct = stats.average_confidence * 100.0;

    let mut first = status(
        defs::FIRST_DIAGNOSIS,
        "First Steps",
        "Complete your first plant diagnosis",
        "🌱",
        stats.total_diagnoses >= 1,
    );
    // Oldest record's timestamp, shown once the achievement is unlocked
    first.unlocked_date = records.last().map(|r| r.timestamp);

    vec![
        first,
        with_progress(
            status(
                defs::STREAK_7,
                "Weekly Warrior",
                "Check on your plants for 7 days straight",
                "🔥",
                stats.streak_days >= 7,
            ),
            f64::from(stats.streak_days.min(7)),
            7.0,
        ),
        with_progress(
            status(
                defs::HEALTHY_PLANTS,
                "Green Thumb",
                "Have 5 healthy plant diagnoses",
                "💚",
                stats.healthy_count >= 5,
            ),
            stats.healthy_count.min(5) as f64,
            5.0,
        ),
        with_progress(
            status(
                defs::PLANT_DOCTOR,
                "Plant Doctor",
                "Complete 25 plant diagnoses",
                "🩺",
                stats.total_diagnoses >= 25,
            ),
            stats.total_diagnoses.min(25) as f64,
            25.0,
        ),
        with_progress(
            status(
                defs::PROBLEM_SOLVER,
                "Problem Solver",
                "Identify and treat 10 plant issues",
                "🔍",
                stats.problem_count >= 10,
            ),
            stats.problem_count.min(10) as f64,
            10.0,
        ),
        with_progress(
            status(
                defs::ACCURACY_MASTER,
                "Accuracy Master",
                "Maintain 95%+ average diagnosis accuracy",
                "🎯",
                avg_pct >= 95.0,
            ),
            avg_pct.min(95.0),
            95.0,
        ),
    ]
}
