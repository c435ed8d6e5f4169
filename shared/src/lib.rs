use serde::{Deserialize, Serialize};

/// A savings goal as served by `GET /api/savings-plans`.
///
/// The frontend treats these as read-only; joining a plan copies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPlan {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Target amount in Ksh
    pub goal: f64,
    /// Amount saved so far in Ksh
    pub current: f64,
    /// Free-form label such as "6 months"
    pub duration: String,
}

impl SavingsPlan {
    /// Share of the goal already saved, as a percentage. Not clamped.
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current, self.goal)
    }

    /// Rounded percentage label, e.g. "25%".
    pub fn progress_label(&self) -> String {
        format_percent(self.progress_percent())
    }
}

/// `current / goal * 100` with no guard for overflow past 100% or a zero goal.
pub fn progress_percent(current: f64, goal: f64) -> f64 {
    (current / goal) * 100.0
}

/// Round half away from zero and render as a whole percentage.
/// Non-finite values print as `Infinity%`, `-Infinity%` or `NaN%`.
pub fn format_percent(percent: f64) -> String {
    if percent.is_nan() {
        "NaN%".to_string()
    } else if percent.is_infinite() {
        let sign = if percent < 0.0 { "-" } else { "" };
        format!("{}Infinity%", sign)
    } else {
        format!("{:.0}%", percent.round())
    }
}

/// Render an amount the way the dashboard prints money: "Ksh 30000", "Ksh 2.5".
pub fn format_ksh(amount: f64) -> String {
    format!("Ksh {}", amount)
}

/// Numeric coercion for free-text inputs. Anything unparseable becomes 0.
pub fn coerce_number(input: &str) -> f64 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Log line relayed from the browser to the backend via `POST /api/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
