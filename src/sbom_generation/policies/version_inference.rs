use crate::sbom_generation::domain::PartRecord;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Length of an abbreviated commit hash
const SHORT_COMMIT_LEN: usize = 7;

static LEADING_V: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[vV](\d)").expect("static regex"));

static ARCHIVE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(?:tar|gz|bz2|xz|zip).*$").expect("static regex"));

static HAS_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("static regex"));

// At most one `[.-]\w+` qualifier after the numeric components.
static EMBEDDED_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[/-]v?(\d+(?:\.\d+)+(?:[.-]\w+)?)").expect("static regex")
});

/// The manifest field a version was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSignal {
    Tag,
    Branch,
    Commit,
    SourceUrl,
}

impl VersionSignal {
    /// Signals in the order they are trusted
    pub const PRECEDENCE: [VersionSignal; 4] = [
        VersionSignal::Tag,
        VersionSignal::Branch,
        VersionSignal::Commit,
        VersionSignal::SourceUrl,
    ];

    /// Extracts a version from this signal alone, if it yields one
    pub fn extract(self, part: &PartRecord) -> Option<String> {
        let version = match self {
            VersionSignal::Tag => part.source_tag().map(from_tag),
            VersionSignal::Branch => part.source_branch().and_then(from_branch),
            VersionSignal::Commit => part.source_commit().map(short_commit),
            VersionSignal::SourceUrl => from_source(part.source()),
        };
        version.filter(|v| !v.is_empty())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VersionSignal::Tag => "source-tag",
            VersionSignal::Branch => "source-branch",
            VersionSignal::Commit => "source-commit",
            VersionSignal::SourceUrl => "source",
        }
    }
}

impl fmt::Display for VersionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// VersionInference policy for choosing a best-effort version for a part
///
/// Priority order:
/// 1. `source-tag`
/// 2. `source-branch`, only when it contains a digit
/// 3. `source-commit`, abbreviated to 7 characters
/// 4. a version embedded in the source URL (file name first, then the whole URL)
///
/// A higher signal always wins, even when a lower one looks cleaner.
pub struct VersionInference;

impl VersionInference {
    pub fn infer(part: &PartRecord) -> Option<String> {
        Self::infer_with_signal(part).map(|(_, version)| version)
    }

    /// Like `infer`, also reporting which signal produced the version
    pub fn infer_with_signal(part: &PartRecord) -> Option<(VersionSignal, String)> {
        VersionSignal::PRECEDENCE
            .iter()
            .find_map(|signal| signal.extract(part).map(|version| (*signal, version)))
    }
}

/// Drops a `v`/`V` prefix only when a digit follows (`v1.2` -> `1.2`, `vendor` stays)
fn strip_v_prefix(value: &str) -> String {
    LEADING_V.replace(value, "${1}").into_owned()
}

fn strip_archive_suffix(value: &str) -> String {
    ARCHIVE_SUFFIX.replace(value, "").into_owned()
}

fn from_tag(tag: &str) -> String {
    strip_archive_suffix(&strip_v_prefix(tag))
}

fn from_branch(branch: &str) -> Option<String> {
    HAS_DIGIT
        .is_match(branch)
        .then(|| strip_v_prefix(branch))
}

fn short_commit(commit: &str) -> String {
    commit.chars().take(SHORT_COMMIT_LEN).collect()
}

fn from_source(source: &str) -> Option<String> {
    let filename = source.rsplit('/').next().unwrap_or(source);

    [filename, source].into_iter().find_map(|haystack| {
        EMBEDDED_VERSION
            .captures(haystack)
            .and_then(|caps| caps.get(1))
            .map(|m| strip_v_prefix(&strip_archive_suffix(m.as_str())))
    })
}
