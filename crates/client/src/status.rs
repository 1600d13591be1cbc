//! Status rendering for the periodic refresh.
use game_core::{HeroSnapshot, Status};

use crate::config::StatusFormat;

/// Renders `snapshot` in the requested format.
pub fn render(snapshot: &HeroSnapshot, format: StatusFormat) -> anyhow::Result<String> {
    match format {
        StatusFormat::Text => Ok(render_text(snapshot)),
        StatusFormat::Json => Ok(serde_json::to_string(snapshot)?),
    }
}

fn render_text(snapshot: &HeroSnapshot) -> String {
    let mut lines = vec![
        format!("Hero name: {}", snapshot.name),
        format!("Hero status: {}", snapshot.status),
        format!("Hero level: {}", snapshot.level),
        format!("Hero experience: {:.1}", snapshot.experience),
    ];

    if snapshot.status == Status::Training
        && let Some(expedition) = &snapshot.expedition
    {
        lines.push(format!("Currently on expedition: {expedition}"));
    }

    lines.join("\n")
}
