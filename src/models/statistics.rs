use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length of the trailing statistics window in days.
pub const STATISTICS_WINDOW_DAYS: i64 = 28;

/// Display name used when a performed set points at a deleted exercise type.
pub const UNKNOWN_EXERCISE_TYPE: &str = "Unknown";

/// Per-exercise-type aggregate over the statistics window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseStat {
    pub exercise_type_id: i64,
    pub exercise_type_name: String,
    pub times_performed: i64,
    pub total_repetitions: i64,
    pub average_weight: f64,
    pub max_weight: f64,
}

/// JSON shape served by `GET /statistics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsEntry {
    pub exercise_type: String,
    pub times_performed: i64,
    pub total_repetitions: i64,
    pub average_weight: f64,
    pub max_weight: f64,
}

impl From<ExerciseStat> for StatisticsEntry {
    fn from(stat: ExerciseStat) -> Self {
        Self {
            exercise_type: stat.exercise_type_name,
            times_performed: stat.times_performed,
            total_repetitions: stat.total_repetitions,
            average_weight: stat.average_weight,
            max_weight: stat.max_weight,
        }
    }
}

/// View-model for the statistics page: window bounds plus preformatted rows.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsOverview {
    pub window_days: i64,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub total_exercises: usize,
    pub total_repetitions: i64,
    pub rows: Vec<StatisticsRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatisticsRow {
    pub exercise_type: String,
    pub times_performed: i64,
    pub total_repetitions: i64,
    /// Average weight rounded to one decimal, e.g. "55.0 kg"
    pub average_weight: String,
    pub max_weight: String,
}

impl StatisticsOverview {
    pub fn new(window_start: DateTime<Utc>, window_end: DateTime<Utc>, stats: Vec<ExerciseStat>) -> Self {
        let total_repetitions = stats.iter().map(|s| s.total_repetitions).sum();
        let rows: Vec<StatisticsRow> = stats
            .into_iter()
            .map(|s| StatisticsRow {
                exercise_type: s.exercise_type_name,
                times_performed: s.times_performed,
                total_repetitions: s.total_repetitions,
                average_weight: format_weight(s.average_weight),
                max_weight: format_weight(s.max_weight),
            })
            .collect();

        Self {
            window_days: STATISTICS_WINDOW_DAYS,
            window_start,
            window_end,
            total_exercises: rows.len(),
            total_repetitions,
            rows,
        }
    }
}

fn format_weight(kg: f64) -> String {
    format!("{:.1} kg", kg)
}
