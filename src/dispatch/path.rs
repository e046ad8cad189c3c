use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::config::models::BareNameResolution;
use crate::extensions::string::ReplaceFileName;

/// `invocation` with its last component replaced by `name`, or `None`
/// when `invocation` carries no directory component.
pub fn sibling_path(invocation: &OsStr, name: &str) -> Option<PathBuf> {
    match invocation.to_str() {
        Some(s) => s.replace_file_name(name).map(PathBuf::from),
        // Non UTF-8 argv[0]: only the native separator can be trusted here.
        None => Path::new(invocation)
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(name)),
    }
}

/// Where the target lives, given how the wrapper itself was invoked.
pub fn resolve_target_path(
    invocation: &OsStr,
    target_name: &str,
    bare: BareNameResolution,
) -> PathBuf {
    sibling_path(invocation, target_name).unwrap_or_else(|| match bare {
        BareNameResolution::SearchPath => PathBuf::from(target_name),
        BareNameResolution::CurrentDir => Path::new(".").join(target_name),
    })
}

/// `[target] + forwarded + exclusions`, in that order.
pub fn build_argv<I, A>(target: &Path, forwarded: I, exclusions: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = A>,
    A: Into<OsString>,
{
    let forwarded = forwarded.into_iter();
    let mut argv = Vec::with_capacity(1 + forwarded.size_hint().0 + exclusions.len());
    argv.push(target.as_os_str().to_os_string());
    argv.extend(forwarded.map(Into::into));
    argv.extend(exclusions.iter().map(OsString::from));
    argv
}
