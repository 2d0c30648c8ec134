use chrono::{DateTime, Utc};
use std::path::Path;
use tiklens_providers::{ImportedRelationships, SectionReport};

use crate::presentation::formatters::{format_date, pluralize};
use crate::presentation::view_models::{
    CheckViewModel, CommandResultViewModel, EntryErrorViewModel, Guidance, SectionCheckViewModel,
    StatusBadge,
};

pub fn present_check(
    path: &Path,
    imported: &ImportedRelationships,
    export_date: Option<DateTime<Utc>>,
) -> CommandResultViewModel<CheckViewModel> {
    let content = CheckViewModel {
        path: path.display().to_string(),
        export_date: export_date.map(format_date),
        followers: present_section(&imported.report.followers),
        following: present_section(&imported.report.following),
        mutuals: imported.followers.iter().filter(|f| f.is_mutual).count(),
    };

    let errors = content.error_count();
    let result = CommandResultViewModel::new(content);

    if errors == 0 {
        result
            .with_badge(StatusBadge::success("Export looks good"))
            .with_suggestion(Guidance::new("Browse your followers").with_command("tiklens browse"))
    } else {
        result.with_badge(StatusBadge::warning(format!(
            "{} could not be read and left out",
            pluralize(errors, "entry", "entries")
        )))
    }
}

fn present_section(report: &SectionReport) -> SectionCheckViewModel {
    SectionCheckViewModel {
        found: report.found,
        imported: report.imported,
        skipped: report.skipped,
        errors: report
            .errors
            .iter()
            .map(|e| EntryErrorViewModel {
                index: e.index,
                reason: e.reason.clone(),
            })
            .collect(),
    }
}
