//! Renders a completed wizard selection into a workflow document.
//!
//! The document is front matter (`---` fenced, YAML-shaped declarations)
//! followed by a markdown instruction body. Rendering is a single pass of
//! string concatenation and depends on nothing but its inputs.

pub mod bodies;

use crate::catalog::{Archetype, ArchetypeKind, TriggerKind, ALL_TRIGGER_KINDS};
use sha2::{Digest, Sha256};

pub const DEFAULT_TIMEOUT_MINUTES: u32 = 30;
pub const PROJECT_CONTEXT_HEADING: &str = "## Project Context";

const GITHUB_TOOLSETS: &str = "repos, issues, pull_requests, actions, code_security, discussions";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowRequest<'a> {
    pub archetype: &'a Archetype,
    pub triggers: Vec<TriggerKind>,
    pub project_context: &'a str,
    pub use_memory: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub bash: bool,
    pub github_toolsets: bool,
    pub pre_steps: bool,
}

pub fn capabilities_for(kind: ArchetypeKind) -> Capabilities {
    match kind {
        ArchetypeKind::StatusReport => Capabilities {
            pre_steps: true,
            github_toolsets: true,
            ..Capabilities::default()
        },
        ArchetypeKind::DependencyMonitor | ArchetypeKind::UpstreamMonitor => Capabilities {
            pre_steps: true,
            bash: true,
            ..Capabilities::default()
        },
        ArchetypeKind::CodeImprovement | ArchetypeKind::DocumentationUpdater => Capabilities {
            bash: true,
            ..Capabilities::default()
        },
        ArchetypeKind::PrReview | ArchetypeKind::IssueTriage => Capabilities {
            github_toolsets: true,
            ..Capabilities::default()
        },
        ArchetypeKind::ContentModeration | ArchetypeKind::Custom | ArchetypeKind::Other => {
            Capabilities::default()
        }
    }
}

pub fn generate(request: &WorkflowRequest<'_>) -> String {
    let archetype = request.archetype;
    let mut out = String::new();

    out.push_str("---\n");
    out.push_str(&format!(
        "description: \"{} — {}\"\n",
        archetype.label, archetype.description
    ));

    out.push_str("on:\n");
    for kind in ALL_TRIGGER_KINDS {
        if request.triggers.contains(&kind) {
            out.push_str(&trigger_block(kind));
        }
    }

    let caps = capabilities_for(archetype.kind());
    out.push_str("tools:\n");
    out.push_str("  edit:\n");
    if caps.bash {
        out.push_str("  bash: [\":*\"]\n");
    }
    if caps.github_toolsets {
        out.push_str("  github:\n");
        out.push_str(&format!("    toolsets: [{GITHUB_TOOLSETS}]\n"));
    }
    if request.use_memory {
        out.push_str("  cache-memory:\n");
    }

    if !archetype.recommended_safe_outputs.is_empty() {
        out.push_str("safe-outputs:\n");
        for output in &archetype.recommended_safe_outputs {
            out.push_str(&format!("  - {output}\n"));
        }
    }

    out.push_str(&format!(
        "timeout-minutes: {}\n",
        effective_timeout(archetype)
    ));

    if caps.pre_steps {
        out.push_str("steps:\n");
        out.push_str("  - name: Gather data\n");
        out.push_str("    run: |\n");
        out.push_str(pre_step_script(archetype.kind()));
    }

    out.push_str("---\n\n");
    out.push_str(&bodies::instruction_body(archetype));

    if !request.project_context.trim().is_empty() {
        out.push_str(&format!("\n\n{PROJECT_CONTEXT_HEADING}\n\n"));
        out.push_str(request.project_context);
        out.push('\n');
    }

    out
}

pub fn effective_timeout(archetype: &Archetype) -> u32 {
    if archetype.timeout_minutes == 0 {
        DEFAULT_TIMEOUT_MINUTES
    } else {
        archetype.timeout_minutes
    }
}

pub fn trigger_block(kind: TriggerKind) -> String {
    match kind {
        TriggerKind::Schedule => "  schedule:\n    - cron: '0 9 * * 1'\n".to_string(),
        TriggerKind::Issues => "  issues:\n    types: [opened, edited]\n".to_string(),
        TriggerKind::PullRequest => "  pull_request:\n    types: [opened, synchronize]\n".to_string(),
        TriggerKind::IssueComment => "  issue_comment:\n    types: [created]\n".to_string(),
        TriggerKind::Push => "  push:\n    branches: [main]\n".to_string(),
        TriggerKind::WorkflowDispatch | TriggerKind::Discussion | TriggerKind::Release => {
            format!("  {}:\n", kind.as_str())
        }
    }
}

fn pre_step_script(kind: ArchetypeKind) -> &'static str {
    match kind {
        ArchetypeKind::StatusReport => concat!(
            "      gh issue list --state open --json number,title,labels,assignees,createdAt > open_issues.json\n",
            "      gh pr list --state open --json number,title,author,createdAt > open_prs.json\n",
        ),
        ArchetypeKind::DependencyMonitor => {
            "      cat package.json go.mod requirements.txt 2>/dev/null > deps_snapshot.txt\n"
        }
        ArchetypeKind::UpstreamMonitor => "      git log --oneline -20 > recent_commits.txt\n",
        ArchetypeKind::IssueTriage
        | ArchetypeKind::CodeImprovement
        | ArchetypeKind::PrReview
        | ArchetypeKind::DocumentationUpdater
        | ArchetypeKind::ContentModeration
        | ArchetypeKind::Custom
        | ArchetypeKind::Other => "      echo 'Gathering data...'\n",
    }
}

/// Lines between `on:` and `tools:` in a rendered document.
pub fn trigger_section(document: &str) -> Vec<&str> {
    document
        .lines()
        .skip_while(|line| *line != "on:")
        .skip(1)
        .take_while(|line| *line != "tools:")
        .collect()
}

/// SHA-256 of the rendered document, lower-case hex.
pub fn document_digest(document: &str) -> String {
    format!("{:x}", Sha256::digest(document.as_bytes()))
}
