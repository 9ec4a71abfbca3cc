//! Fixed rule sets for folder classification and string package lookup

/// Top-level folders of a Sims 4 install that are always hashed.
pub const TARGET_FOLDERS: &[&str] = &["__Installer", "Data", "Delta", "Game", "Support"];

/// Pack folder prefixes (expansion, game, stuff and free packs).
pub const TARGET_PREFIXES: &[&str] = &["EP", "GP", "SP", "FP"];

/// Directory listed to discover installed languages.
pub const CLIENT_DIR: &str = "Data/Client";

/// Directories searched recursively for a language's string packages.
pub const STRING_SEARCH_DIRS: &[&str] = &["Data/Client", "Delta"];

pub const STRINGS_PREFIX: &str = "Strings_";
pub const PACKAGE_EXTENSION: &str = ".package";

/// Decides which top-level folders of a scan root are in scope.
///
/// Matching is case-sensitive with no trimming: a name is in scope when it
/// equals an allow-list entry or starts with one of the prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRules {
    exact: Vec<String>,
    prefixes: Vec<String>,
}

impl FolderRules {
    pub fn new<S: Into<String>>(
        exact: impl IntoIterator<Item = S>,
        prefixes: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            exact: exact.into_iter().map(Into::into).collect(),
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The Sims 4 install layout.
    pub fn sims4() -> Self {
        Self::new(TARGET_FOLDERS.iter().copied(), TARGET_PREFIXES.iter().copied())
    }

    pub fn is_target_folder(&self, name: &str) -> bool {
        self.exact.iter().any(|e| e == name)
            || self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

impl Default for FolderRules {
    fn default() -> Self {
        Self::sims4()
    }
}

/// Where language string packages live and how they are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRules {
    pub client_dir: String,
    pub search_dirs: Vec<String>,
    pub prefix: String,
    pub extension: String,
}

impl StringRules {
    pub fn sims4() -> Self {
        Self {
            client_dir: CLIENT_DIR.to_string(),
            search_dirs: STRING_SEARCH_DIRS.iter().map(|s| s.to_string()).collect(),
            prefix: STRINGS_PREFIX.to_string(),
            extension: PACKAGE_EXTENSION.to_string(),
        }
    }

    /// File name of the package for `code`, e.g. `Strings_ENG_US.package`.
    pub fn package_name(&self, code: &str) -> String {
        format!("{}{}{}", self.prefix, code, self.extension)
    }

    /// Language code encoded in `file_name`, if it matches `<prefix>*<extension>`.
    pub fn language_code<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.extension.as_str())
    }
}

impl Default for StringRules {
    fn default() -> Self {
        Self::sims4()
    }
}
