//! Source filename normalization and propagation.
//!
//! Documents loaded through a `file://` URI are shown to the user as a
//! path relative to the working directory. Any other name is shown as-is.

use std::path::{Component, Path, PathBuf};

use crate::Node;

/// URI scheme stripped from source names before display.
pub const FILE_SCHEME: &str = "file://";

/// Normalize `source` for display, relative to the current directory.
///
/// Falls back to the bare path when the current directory is unavailable.
pub fn relative_name(source: &str) -> String {
    match std::env::current_dir() {
        Ok(cwd) => relative_name_from(source, &cwd),
        Err(_) => source
            .strip_prefix(FILE_SCHEME)
            .unwrap_or(source)
            .to_owned(),
    }
}

/// Normalize `source` for display, relative to `base`.
///
/// Idempotent: the output never carries the `file://` scheme, so a second
/// pass returns it unchanged.
///
/// ```
/// use std::path::Path;
/// use salad_ir::relative_name_from;
///
/// let base = Path::new("/home/user");
/// assert_eq!(relative_name_from("file:///home/user/doc.yml", base), "doc.yml");
/// assert_eq!(relative_name_from("doc.yml", base), "doc.yml");
/// ```
pub fn relative_name_from(source: &str, base: &Path) -> String {
    let Some(stripped) = source.strip_prefix(FILE_SCHEME) else {
        return source.to_owned();
    };
    let target = base.join(stripped);
    relative_path(&target, base).map_or_else(
        || stripped.to_owned(),
        |path| path.to_string_lossy().into_owned(),
    )
}

/// Lexical `target` relative to `base`; `None` if they share no root.
fn relative_path(target: &Path, base: &Path) -> Option<PathBuf> {
    let target = normalize(target);
    let base = normalize(base);

    let common = target
        .iter()
        .zip(&base)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 && (target.first().is_some_and(is_root) || base.first().is_some_and(is_root)) {
        return None;
    }

    let mut relative: PathBuf = base[common..]
        .iter()
        .map(|_| Component::ParentDir)
        .chain(target[common..].iter().copied())
        .collect();
    if relative.as_os_str().is_empty() {
        relative.push(Component::CurDir);
    }
    Some(relative)
}

fn is_root(component: &Component<'_>) -> bool {
    matches!(component, Component::Prefix(_) | Component::RootDir)
}

/// Drop `.` segments and fold `..` into the preceding segment.
fn normalize(path: &Path) -> Vec<Component<'_>> {
    let mut out = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            _ => out.push(component),
        }
    }
    out
}

/// Normalize `source` once and record it on every locatable node under
/// `root`, `root` included.
pub fn annotate_filename(root: &mut Node, source: &str) {
    set_filename(root, &relative_name(source));
}

/// Record an already-normalized `filename` on every locatable node under
/// `root`.
///
/// Nodes without location metadata are skipped but still descended into.
pub fn set_filename(root: &mut Node, filename: &str) {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if let Some(location) = node.location_mut() {
            location.filename = Some(filename.to_owned());
        }
        pending.extend(node.children_mut());
    }
}
