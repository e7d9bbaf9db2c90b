use std::path::{Component, Path, PathBuf};

/// Resolves analyzer-reported paths against the working directory and keeps
/// only those nested under a scan base.
#[derive(Debug, Clone)]
pub struct PathScope {
    /// Directory relative paths are resolved against
    root: PathBuf,
    /// Resolved scan base
    base: PathBuf,
}

impl PathScope {
    pub fn new(root: &Path, base: &Path) -> Self {
        let root = lexical_normalize(root);
        let base = resolve(&root, &to_forward_slashes(&base.to_string_lossy()));
        Self { root, base }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Rewrite `raw` relative to the scan base.
    ///
    /// Backslashes become forward slashes and leading slashes are stripped
    /// before resolving, so `/src/a.ts` and `src\a.ts` both name `src/a.ts`
    /// under the root. Returns `None` for paths outside the base.
    pub fn relative_to_base(&self, raw: &str) -> Option<String> {
        let cleaned = to_forward_slashes(raw);
        let cleaned = cleaned.trim_start_matches('/');
        let resolved = resolve(&self.root, cleaned);
        nested_relative(&resolved, &self.base)
    }

    /// Rewrite `raw` relative to the root, dropping it when it falls outside
    /// the scan base.
    ///
    /// Paths are kept as the analyzer reported them relative to the working
    /// directory; absolute paths under the base but outside the root are
    /// rewritten relative to the base instead.
    pub fn relative_to_root(&self, raw: &str) -> Option<String> {
        let cleaned = to_forward_slashes(raw);
        let resolved = resolve(&self.root, &cleaned);

        if resolved != self.base {
            nested_relative(&resolved, &self.base)?;
        }

        nested_relative(&resolved, &self.root).or_else(|| nested_relative(&resolved, &self.base))
    }
}

/// Replace Windows separators
pub fn to_forward_slashes(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Join `raw` onto `root` and normalize `.` and `..` without touching the
/// filesystem.
fn resolve(root: &Path, raw: &str) -> PathBuf {
    let raw = raw.strip_prefix("./").unwrap_or(raw);
    let path = Path::new(raw);
    if path.is_absolute() {
        lexical_normalize(path)
    } else {
        lexical_normalize(&root.join(path))
    }
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Relative forward-slash path of `path` under `base`, `None` unless `path`
/// is strictly nested under `base`.
fn nested_relative(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}
