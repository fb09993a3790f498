pub mod error;

pub use error::CatalogError;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("assets/patterns.yaml");
pub const EMBEDDED_CATALOG_SOURCE: &str = "<embedded patterns.yaml>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    Issues,
    PullRequest,
    Push,
    Schedule,
    WorkflowDispatch,
    IssueComment,
    Discussion,
    Release,
}

/// Canonical display and selection order of trigger kinds.
pub const ALL_TRIGGER_KINDS: [TriggerKind; 8] = [
    TriggerKind::Issues,
    TriggerKind::PullRequest,
    TriggerKind::Push,
    TriggerKind::Schedule,
    TriggerKind::WorkflowDispatch,
    TriggerKind::IssueComment,
    TriggerKind::Discussion,
    TriggerKind::Release,
];

impl TriggerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TriggerKind::Issues => "issues",
            TriggerKind::PullRequest => "pull_request",
            TriggerKind::Push => "push",
            TriggerKind::Schedule => "schedule",
            TriggerKind::WorkflowDispatch => "workflow_dispatch",
            TriggerKind::IssueComment => "issue_comment",
            TriggerKind::Discussion => "discussion",
            TriggerKind::Release => "release",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TriggerKind::Issues => "When issues are opened or edited",
            TriggerKind::PullRequest => "When PRs are opened or updated",
            TriggerKind::Push => "When code is pushed to a branch",
            TriggerKind::Schedule => "Run on a cron schedule",
            TriggerKind::WorkflowDispatch => "Manual trigger from Actions tab",
            TriggerKind::IssueComment => "When issue comments are posted",
            TriggerKind::Discussion => "When discussions are created",
            TriggerKind::Release => "When releases are published",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, String> {
        ALL_TRIGGER_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| format!("unknown trigger kind `{raw}`"))
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archetypes with hand-authored generation rules. Anything else falls into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchetypeKind {
    IssueTriage,
    CodeImprovement,
    StatusReport,
    UpstreamMonitor,
    DependencyMonitor,
    PrReview,
    DocumentationUpdater,
    ContentModeration,
    Custom,
    Other,
}

impl ArchetypeKind {
    pub fn from_id(id: &str) -> Self {
        match id {
            "issue-triage" => ArchetypeKind::IssueTriage,
            "code-improvement" => ArchetypeKind::CodeImprovement,
            "status-report" => ArchetypeKind::StatusReport,
            "upstream-monitor" => ArchetypeKind::UpstreamMonitor,
            "dependency-monitor" => ArchetypeKind::DependencyMonitor,
            "pr-review" => ArchetypeKind::PrReview,
            "documentation-updater" => ArchetypeKind::DocumentationUpdater,
            "content-moderation" => ArchetypeKind::ContentModeration,
            "custom" => ArchetypeKind::Custom,
            _ => ArchetypeKind::Other,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ArchetypeKind::IssueTriage => "🏷️",
            ArchetypeKind::CodeImprovement => "🔧",
            ArchetypeKind::StatusReport => "📊",
            ArchetypeKind::UpstreamMonitor => "🔭",
            ArchetypeKind::DependencyMonitor => "📦",
            ArchetypeKind::PrReview => "👀",
            ArchetypeKind::DocumentationUpdater => "📝",
            ArchetypeKind::ContentModeration => "🛡️",
            ArchetypeKind::Custom => "⚡",
            ArchetypeKind::Other => "📋",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TriggerConfig {
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Archetype {
    pub id: String,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub recommended_triggers: Vec<TriggerConfig>,
    #[serde(default)]
    pub recommended_safe_outputs: Vec<String>,
    #[serde(default)]
    pub timeout_minutes: u32,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Archetype {
    pub fn kind(&self) -> ArchetypeKind {
        ArchetypeKind::from_id(&self.id)
    }

    pub fn recommends(&self, kind: TriggerKind) -> bool {
        self.recommended_triggers
            .iter()
            .any(|trigger| trigger.kind == kind)
    }

    /// File stem for the generated document: lower-cased label, spaces as hyphens.
    pub fn slug(&self) -> String {
        self.label.to_lowercase().replace(' ', "-")
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    archetypes: Vec<Archetype>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub archetypes: Vec<Archetype>,
    pub source: String,
}

impl Catalog {
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_yaml_str(EMBEDDED_CATALOG, EMBEDDED_CATALOG_SOURCE)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&raw, &path.display().to_string())
    }

    pub fn from_yaml_str(raw: &str, source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(raw).map_err(|source_err| CatalogError::Parse {
                path: source.to_string(),
                source: source_err,
            })?;
        let catalog = Self {
            archetypes: file.archetypes,
            source: source.to_string(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.archetypes.is_empty() {
            return Err(CatalogError::Empty {
                path: self.source.clone(),
            });
        }
        let mut seen = std::collections::BTreeSet::new();
        for archetype in &self.archetypes {
            if archetype.id.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    path: self.source.clone(),
                    field: "id",
                });
            }
            if archetype.label.trim().is_empty() {
                return Err(CatalogError::MissingField {
                    path: self.source.clone(),
                    field: "label",
                });
            }
            if archetype.label.contains(['/', '\\']) || archetype.label.contains("..") {
                return Err(CatalogError::UnsafeLabel {
                    path: self.source.clone(),
                    id: archetype.id.clone(),
                    label: archetype.label.clone(),
                });
            }
            if !seen.insert(archetype.id.as_str()) {
                return Err(CatalogError::DuplicateArchetype {
                    path: self.source.clone(),
                    id: archetype.id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Archetype> {
        self.archetypes.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|archetype| archetype.id == id)
    }
}
