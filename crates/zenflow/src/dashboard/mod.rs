//! Server-rendered dashboard page.
//!
//! The chart payload is a fixed placeholder; there is no data pipeline behind
//! it. The page also hosts the check-in form that posts to `/stress`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/dashboard.html");

/// Series rendered by the dashboard bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub allocated: Vec<u32>,
    pub actual: Vec<u32>,
}

impl ChartData {
    pub fn placeholder() -> Self {
        Self {
            labels: ["😭", "🥰", "😐", "😡", " 😮"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            allocated: vec![80, 90, 70, 85, 60],
            actual: vec![70, 95, 60, 75, 50],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("chart payload could not be serialized: {0}")]
    ChartPayload(#[from] serde_json::Error),
}

pub fn render_dashboard(
    data: &ChartData,
    rendered_at: DateTime<Utc>,
) -> Result<String, DashboardError> {
    let payload = script_safe(&serde_json::to_string(data)?);
    let timestamp = rendered_at.to_rfc3339_opts(SecondsFormat::Secs, true);

    Ok(DASHBOARD_TEMPLATE
        .replace("{{rendered_at}}", &timestamp)
        .replace("{{chart_data}}", &payload))
}

// Keeps `</script>` inside string values from closing the data block early.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}
