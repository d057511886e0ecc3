//! Endpoint handlers

use super::AppState;
use axum::{Json, extract::State};
use serde::Serialize;
use std::time::Duration;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub up_time: String,
    pub build_date: String,
    pub build_tag: String,
}

/// Liveness probe reporting uptime and build details
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        up_time: format_uptime(state.started.elapsed()),
        build_date: state.build.date.clone(),
        build_tag: state.build.tag.clone(),
    })
}

/// Render a duration as `1h2m3.5s`, `4.25s` or `250ms`
pub fn format_uptime(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    if total_ms < 1000 {
        return format!("{total_ms}ms");
    }

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = format_seconds(total_ms % 60_000);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

fn format_seconds(millis: u128) -> String {
    let whole = millis / 1000;
    let frac = millis % 1000;
    if frac == 0 {
        return whole.to_string();
    }

    format!("{whole}.{frac:03}")
        .trim_end_matches('0')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_millis(250)), "250ms");
        assert_eq!(format_uptime(Duration::from_millis(4_250)), "4.25s");
        assert_eq!(format_uptime(Duration::from_secs(120)), "2m0s");
        assert_eq!(format_uptime(Duration::from_millis(3_723_500)), "1h2m3.5s");
        assert_eq!(format_uptime(Duration::from_millis(61_001)), "1m1.001s");
    }
}
