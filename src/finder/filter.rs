//! Name filtering functionality
//!
//! This module decides, per directory entry, whether the entry is reported.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;

use super::options::SearchOptions;

/// Kind of a directory entry, as reported by the listing (links are not followed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory
    Directory,
    /// Regular file
    File,
    /// Symbolic link, device, socket, fifo or unknown
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Trait for entry filters
pub trait FileFilter {
    /// Check if an entry with this name and kind should be reported
    fn matches(&self, name: &OsStr, kind: EntryKind) -> bool;

    /// Get the filter description
    fn description(&self) -> String;
}

/// Returns true for names starting with '.'
pub fn is_hidden(name: &OsStr) -> bool {
    name_bytes(name).first() == Some(&b'.')
}

// Names are compared byte for byte on unix, so non-UTF-8 names are never
// rewritten before matching.
#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(name.as_bytes())
}

// Names that are not valid Unicode can only match the empty term.
#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    match name.to_str() {
        Some(name) => Cow::Borrowed(name.as_bytes()),
        None => Cow::Owned(vec![0xFF]),
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

/// Filter combining the search term with the visibility options
#[derive(Debug, Clone, Copy)]
pub struct SearchFilter<'a> {
    term: &'a str,
    options: &'a SearchOptions,
}

impl<'a> SearchFilter<'a> {
    /// Create a new SearchFilter for the given term
    pub fn new(term: &'a str, options: &'a SearchOptions) -> Self {
        Self { term, options }
    }

    // Directories always match partially; exact matching and the hidden
    // filter only apply to files.
    fn matches_dir(&self, name: &OsStr) -> bool {
        self.options.show_dirs && contains_bytes(&name_bytes(name), self.term.as_bytes())
    }

    fn matches_file(&self, name: &OsStr) -> bool {
        if !self.options.show_files {
            return false;
        }
        if !self.options.show_hidden && is_hidden(name) {
            return false;
        }
        let name = name_bytes(name);
        if !contains_bytes(&name, self.term.as_bytes()) {
            return false;
        }
        !self.options.exact_match || *name == *self.term.as_bytes()
    }
}

impl FileFilter for SearchFilter<'_> {
    fn matches(&self, name: &OsStr, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Directory => self.matches_dir(name),
            EntryKind::File => self.matches_file(name),
            EntryKind::Other => false,
        }
    }

    fn description(&self) -> String {
        let mode = if self.options.exact_match { "equals" } else { "contains" };
        let mut kinds = Vec::new();
        if self.options.show_dirs {
            kinds.push("directories");
        }
        if self.options.show_files {
            kinds.push(if self.options.show_hidden {
                "files (including hidden)"
            } else {
                "files"
            });
        }
        if kinds.is_empty() {
            return "nothing is reported".to_string();
        }
        format!("{} where name {} '{}'", kinds.join(" and "), mode, self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    const NAMES: &[&str] = &["hello", "hello.txt", "hello_world.txt", "other.txt", ".hello", ""];
    const TERMS: &[&str] = &["", "hello", "hello.txt", "txt", "zzz"];

    #[test]
    fn test_partial_match_on_files() {
        let options = SearchOptions::new().with_show_hidden(true);
        for term in TERMS {
            let filter = SearchFilter::new(term, &options);
            for name in NAMES {
                assert_eq!(
                    filter.matches(OsStr::new(name), EntryKind::File),
                    name.contains(term),
                    "name {:?} term {:?}",
                    name,
                    term
                );
            }
        }
    }

    #[test]
    fn test_exact_match_on_files() {
        let options = SearchOptions::new()
            .with_show_hidden(true)
            .with_exact_match(true);
        for term in TERMS {
            let filter = SearchFilter::new(term, &options);
            for name in NAMES {
                assert_eq!(
                    filter.matches(OsStr::new(name), EntryKind::File),
                    name == term,
                    "name {:?} term {:?}",
                    name,
                    term
                );
            }
        }
    }

    #[test]
    fn test_exact_match_is_full_name_not_stem() {
        let options = SearchOptions::new().with_exact_match(true);
        let filter = SearchFilter::new("hello", &options);
        assert!(!filter.matches(OsStr::new("hello.txt"), EntryKind::File));
        assert!(filter.matches(OsStr::new("hello"), EntryKind::File));
    }

    #[test]
    fn test_directories_ignore_exact_match() {
        let options = SearchOptions::new().with_exact_match(true);
        let filter = SearchFilter::new("src", &options);
        assert!(filter.matches(OsStr::new("src_old"), EntryKind::Directory));
        assert!(!filter.matches(OsStr::new("lib"), EntryKind::Directory));
    }

    #[test]
    fn test_hidden_files() {
        let options = SearchOptions::new();
        let filter = SearchFilter::new("config", &options);
        assert!(!filter.matches(OsStr::new(".config"), EntryKind::File));
        // hidden directories are still reported
        assert!(filter.matches(OsStr::new(".config"), EntryKind::Directory));

        let options = SearchOptions::new().with_show_hidden(true);
        let filter = SearchFilter::new("config", &options);
        assert!(filter.matches(OsStr::new(".config"), EntryKind::File));
    }

    #[test]
    fn test_kind_toggles() {
        let options = SearchOptions::new().with_show_dirs(false);
        let filter = SearchFilter::new("", &options);
        assert!(!filter.matches(OsStr::new("dir"), EntryKind::Directory));
        assert!(filter.matches(OsStr::new("file"), EntryKind::File));

        let options = SearchOptions::new().with_show_files(false);
        let filter = SearchFilter::new("", &options);
        assert!(filter.matches(OsStr::new("dir"), EntryKind::Directory));
        assert!(!filter.matches(OsStr::new("file"), EntryKind::File));
    }

    #[test]
    fn test_other_kinds_never_match() {
        let options = SearchOptions::new().with_show_hidden(true);
        let filter = SearchFilter::new("", &options);
        assert!(!filter.matches(OsStr::new("link"), EntryKind::Other));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_names_match_on_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"bad\xFF.bin");
        let options = SearchOptions::new().with_exact_match(true);

        // the lossy form of the name must not count as equal
        let filter = SearchFilter::new("bad\u{FFFD}.bin", &options);
        assert!(!filter.matches(name, EntryKind::File));
        assert!(!filter.matches(name, EntryKind::Directory));

        let options = SearchOptions::new();
        let filter = SearchFilter::new(".bin", &options);
        assert!(filter.matches(name, EntryKind::File));
        assert!(filter.matches(name, EntryKind::Directory));
        let filter = SearchFilter::new("\u{FFFD}", &options);
        assert!(!filter.matches(name, EntryKind::File));
    }

    #[test]
    fn test_entry_kind_from_file_type() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        File::create(temp_dir.path().join("file.txt"))?;
        std::fs::create_dir(temp_dir.path().join("dir"))?;
        #[cfg(unix)]
        std::os::unix::fs::symlink(temp_dir.path().join("dir"), temp_dir.path().join("link"))?;

        for entry in std::fs::read_dir(temp_dir.path())? {
            let entry = entry?;
            let kind = EntryKind::from(entry.file_type()?);
            match entry.file_name().to_str() {
                Some("file.txt") => assert_eq!(kind, EntryKind::File),
                Some("dir") => assert_eq!(kind, EntryKind::Directory),
                Some("link") => assert_eq!(kind, EntryKind::Other),
                other => panic!("unexpected entry {:?}", other),
            }
        }

        Ok(())
    }

    #[test]
    fn test_description() {
        let options = SearchOptions::new();
        let filter = SearchFilter::new("foo", &options);
        assert_eq!(filter.description(), "directories and files where name contains 'foo'");

        let options = SearchOptions::new()
            .with_show_dirs(false)
            .with_show_files(false);
        let filter = SearchFilter::new("foo", &options);
        assert_eq!(filter.description(), "nothing is reported");
    }
}
