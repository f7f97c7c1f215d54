use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Sources outside these schemes are never mined for a name
const NAME_SCHEMES: [&str; 4] = ["http://", "https://", "git://", "git@"];

/// Build-source markers dropped from archive names (`lib-src-1.0` -> `lib-1.0`)
const SOURCE_MARKERS: [&str; 3] = ["src", "source", "sources"];

static SSH_SHORTHAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"git@[^:]+:([^/]+)/([^/.]+)").expect("static regex"));

static GIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.git$").expect("static regex"));

static ARCHIVE_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(?:tar|zip|tgz|tbz2|txz|gz|bz2|xz).*$").expect("static regex")
});

/// Name patterns, tried in order; the first capture wins.
///
/// 1. name, optional `-v?<version>...`, optional `-<platform/arch>...`
/// 2. name, optional `[-_]v?<version>...`
static NAME_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(
            r"^([a-zA-Z][\w-]*?)(?:-v?\d+[\d.].*)?(?:-(?:x86_64|aarch64|arm|i686|linux|windows|darwin|macos|unknown|musl|gnu).*)?$",
        )
        .expect("static regex"),
        Regex::new(r"^([a-zA-Z][\w-]*?)(?:[-_]v?\d+[\d.].*)?$").expect("static regex"),
    ]
});

/// PackageNameInference policy for deriving a package name from a part source
///
/// Repository URLs yield the repository name, archive URLs yield the archive
/// base name with version, platform and `-src` noise removed. Anything that
/// cannot be interpreted yields the caller's fallback, so the result is
/// never empty.
pub struct PackageNameInference;

impl PackageNameInference {
    /// Infers the package name for `source`, or returns `fallback`
    ///
    /// # Arguments
    /// * `source` - The part's `source` value
    /// * `fallback` - Returned for local or unrecognised sources (usually the part name)
    pub fn infer(source: &str, fallback: &str) -> String {
        if source == "." || source == ".." || !NAME_SCHEMES.iter().any(|s| source.starts_with(s))
        {
            return fallback.to_string();
        }

        let inferred = if source.starts_with("git@") {
            Self::from_ssh_shorthand(source)
        } else {
            Self::from_url(source)
        };

        inferred
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// `git@host:owner/repo.git` -> `repo`
    fn from_ssh_shorthand(source: &str) -> Option<String> {
        SSH_SHORTHAND
            .captures(source)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    fn from_url(source: &str) -> Option<String> {
        let url = Url::parse(source).ok()?;
        let path =
            String::from_utf8_lossy(&urlencoding::decode_binary(url.path().as_bytes())).into_owned();
        let path = GIT_SUFFIX.replace(&path, "");

        let segment = path.trim_matches('/').rsplit('/').next().unwrap_or_default();
        if segment.is_empty() {
            return None;
        }

        Some(Self::clean_segment(segment))
    }

    /// Reduces a final path segment to a bare package name
    fn clean_segment(segment: &str) -> String {
        let name = ARCHIVE_SUFFIX.replace(segment, "");
        let name = strip_source_markers(&name);

        NAME_PATTERNS
            .iter()
            .find_map(|pattern| {
                pattern
                    .captures(&name)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
            })
            .unwrap_or(name)
    }
}

/// Removes every `-src`, `_source`, `-sources` (any case) token that is
/// followed by `-`, `_` or the end of the name. The trailing separator is kept
/// so consecutive markers are all removed.
fn strip_source_markers(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;

    'scan: while let Some(c) = rest.chars().next() {
        if c == '-' || c == '_' {
            let after = &rest[1..];
            for marker in SOURCE_MARKERS {
                let Some(tail) = strip_prefix_ignore_ascii_case(after, marker) else {
                    continue;
                };
                if tail.is_empty() || tail.starts_with(['-', '_']) {
                    rest = tail;
                    continue 'scan;
                }
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

fn strip_prefix_ignore_ascii_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &text[prefix.len()..])
}
