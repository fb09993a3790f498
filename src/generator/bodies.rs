use crate::catalog::{Archetype, ArchetypeKind};

const ISSUE_TRIAGE_BODY: &str = include_str!("assets/bodies/issue_triage.md");
const STATUS_REPORT_BODY: &str = include_str!("assets/bodies/status_report.md");
const CODE_IMPROVEMENT_BODY: &str = include_str!("assets/bodies/code_improvement.md");
const PR_REVIEW_BODY: &str = include_str!("assets/bodies/pr_review.md");
const DOCUMENTATION_UPDATER_BODY: &str = include_str!("assets/bodies/documentation_updater.md");
const UPSTREAM_MONITOR_BODY: &str = include_str!("assets/bodies/upstream_monitor.md");
const DEPENDENCY_MONITOR_BODY: &str = include_str!("assets/bodies/dependency_monitor.md");
const CONTENT_MODERATION_BODY: &str = include_str!("assets/bodies/content_moderation.md");
const CUSTOM_BODY: &str = include_str!("assets/bodies/custom.md");

/// Instruction body for an archetype. Unrecognized archetypes get a skeleton
/// built from their own label and description.
pub fn instruction_body(archetype: &Archetype) -> String {
    match archetype.kind() {
        ArchetypeKind::IssueTriage => ISSUE_TRIAGE_BODY.to_string(),
        ArchetypeKind::StatusReport => STATUS_REPORT_BODY.to_string(),
        ArchetypeKind::CodeImprovement => CODE_IMPROVEMENT_BODY.to_string(),
        ArchetypeKind::PrReview => PR_REVIEW_BODY.to_string(),
        ArchetypeKind::DocumentationUpdater => DOCUMENTATION_UPDATER_BODY.to_string(),
        ArchetypeKind::UpstreamMonitor => UPSTREAM_MONITOR_BODY.to_string(),
        ArchetypeKind::DependencyMonitor => DEPENDENCY_MONITOR_BODY.to_string(),
        ArchetypeKind::ContentModeration => CONTENT_MODERATION_BODY.to_string(),
        ArchetypeKind::Custom => CUSTOM_BODY.to_string(),
        ArchetypeKind::Other => generic_body(archetype),
    }
}

fn generic_body(archetype: &Archetype) -> String {
    format!(
        "# {}\n\n{}\n\n## Steps\n1. ...\n2. ...\n\n## DO NOT\n- ...\n",
        archetype.label, archetype.description
    )
}
