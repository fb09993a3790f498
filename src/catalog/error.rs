#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid yaml in catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("catalog {path} defines no archetypes")]
    Empty { path: String },
    #[error("catalog {path} defines archetype `{id}` more than once")]
    DuplicateArchetype { path: String, id: String },
    #[error("catalog {path} archetype `{id}` has label `{label}`, which cannot name a file")]
    UnsafeLabel {
        path: String,
        id: String,
        label: String,
    },
    #[error("catalog {path} has an archetype with an empty {field}")]
    MissingField { path: String, field: &'static str },
}
