/// PartRecord value object: one entry of a snapcraft `parts` mapping
///
/// `name` is the declared build-step identifier, which is not necessarily the
/// name of the upstream package. Optional fields are `None` when the manifest
/// does not declare them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRecord {
    name: String,
    source: String,
    source_type: Option<String>,
    source_tag: Option<String>,
    source_branch: Option<String>,
    source_commit: Option<String>,
    source_depth: Option<String>,
    plugin: Option<String>,
}

impl PartRecord {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            source_type: None,
            source_tag: None,
            source_branch: None,
            source_commit: None,
            source_depth: None,
            plugin: None,
        }
    }

    pub fn with_source_type(mut self, source_type: Option<String>) -> Self {
        self.source_type = non_empty(source_type);
        self
    }

    pub fn with_source_tag(mut self, source_tag: Option<String>) -> Self {
        self.source_tag = non_empty(source_tag);
        self
    }

    pub fn with_source_branch(mut self, source_branch: Option<String>) -> Self {
        self.source_branch = non_empty(source_branch);
        self
    }

    pub fn with_source_commit(mut self, source_commit: Option<String>) -> Self {
        self.source_commit = non_empty(source_commit);
        self
    }

    pub fn with_source_depth(mut self, source_depth: Option<String>) -> Self {
        self.source_depth = non_empty(source_depth);
        self
    }

    pub fn with_plugin(mut self, plugin: Option<String>) -> Self {
        self.plugin = non_empty(plugin);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_type(&self) -> Option<&str> {
        self.source_type.as_deref()
    }

    pub fn source_tag(&self) -> Option<&str> {
        self.source_tag.as_deref()
    }

    pub fn source_branch(&self) -> Option<&str> {
        self.source_branch.as_deref()
    }

    pub fn source_commit(&self) -> Option<&str> {
        self.source_commit.as_deref()
    }

    pub fn source_depth(&self) -> Option<&str> {
        self.source_depth.as_deref()
    }

    pub fn plugin(&self) -> Option<&str> {
        self.plugin.as_deref()
    }
}

// An empty declared value carries no signal and is treated as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
