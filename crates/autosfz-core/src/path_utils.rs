use std::path::{Component, Path, PathBuf};

/// Separator used in `sample=` opcodes.
///
/// Players embedded in hardware and most Windows hosts expect a backslash,
/// and the common desktop players accept it on every platform.
pub const SFZ_PATH_SEPARATOR: char = '\\';

/// Value of the `sample` opcode for a file in the instrument's subfolder
///
/// # Example
///
/// ```
/// use autosfz_core::path_utils::sfz_sample_reference;
///
/// let reference = sfz_sample_reference("MyPiano", "MyPiano-C3-064-AB12.aif");
/// assert_eq!(reference, "MyPiano\\MyPiano-C3-064-AB12.aif");
/// ```
pub fn sfz_sample_reference(folder: &str, file_name: &str) -> String {
    format!("{folder}{SFZ_PATH_SEPARATOR}{file_name}")
}

/// Lexically normalize a path
///
/// Removes `.` components, trailing separators and resolves `..` against
/// preceding normal components, without touching the filesystem.
///
/// # Example
///
/// ```
/// use autosfz_core::path_utils::normalize_path;
/// use std::path::PathBuf;
///
/// assert_eq!(normalize_path("./samples/piano/"), PathBuf::from("samples/piano"));
/// assert_eq!(normalize_path("samples/../piano"), PathBuf::from("piano"));
/// ```
pub fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Name of the last directory in `path`
///
/// Falls back to the canonical path when the lexical form has no final
/// name, as with `.` or `..`.
pub fn dir_base_name(path: impl AsRef<Path>) -> Option<String> {
    let normalized = normalize_path(path.as_ref());
    let name = match normalized.file_name() {
        Some(name) => name.to_owned(),
        None => std::fs::canonicalize(path.as_ref())
            .ok()?
            .file_name()?
            .to_owned(),
    };
    name.to_str().map(String::from)
}
