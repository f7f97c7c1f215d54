/// Source prefixes that denote a fetchable remote reference
pub const REMOTE_PREFIXES: [&str; 6] = [
    "http://",
    "https://",
    "git://",
    "git@",
    "ftp://",
    "ftps://",
];

/// RemoteSourcePolicy decides whether a part source points at the network
///
/// This is a literal prefix test: no URL parsing, no DNS. Anything else
/// (`.`, `..`, relative or absolute paths, empty strings) is local.
pub struct RemoteSourcePolicy;

impl RemoteSourcePolicy {
    pub fn is_remote(source: &str) -> bool {
        !source.is_empty()
            && REMOTE_PREFIXES
                .iter()
                .any(|prefix| source.starts_with(prefix))
    }
}
