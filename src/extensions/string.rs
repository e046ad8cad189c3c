/// Separators tried, in order, when looking for the last path component.
/// The native one wins; `\` and `/` are accepted on every platform.
pub const PATH_SEPARATORS: [char; 3] = [std::path::MAIN_SEPARATOR, '\\', '/'];

pub trait ReplaceFileName {
    /// Returns a copy with everything after the rightmost path separator
    /// replaced by `name`, or `None` when the string has no separator.
    fn replace_file_name(&self, name: &str) -> Option<String>;
}

impl ReplaceFileName for str {
    fn replace_file_name(&self, name: &str) -> Option<String> {
        let cut = PATH_SEPARATORS.iter().find_map(|sep| self.rfind(*sep))?;
        let mut out = String::with_capacity(cut + 1 + name.len());
        out.push_str(&self[..=cut]);
        out.push_str(name);
        Some(out)
    }
}

impl ReplaceFileName for String {
    fn replace_file_name(&self, name: &str) -> Option<String> {
        self.as_str().replace_file_name(name)
    }
}
