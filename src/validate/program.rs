//! PATH lookup for external programs.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Find `program` the way a shell would.
///
/// A program containing a path separator is checked as-is; a bare name is
/// searched for in each directory of `search_path`. Only executable regular
/// files match.
pub fn locate_program(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let search_path = search_path?;
    std::env::split_paths(search_path).find_map(|dir| {
        executable_names(program)
            .into_iter()
            .map(|name| dir.join(name))
            .find(|path| is_executable(path))
    })
}

fn executable_names(program: &str) -> Vec<String> {
    let suffix = std::env::consts::EXE_SUFFIX;
    if suffix.is_empty() || program.ends_with(suffix) {
        vec![program.to_string()]
    } else {
        vec![program.to_string(), format!("{}{}", program, suffix)]
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
