// src/policy/words.rs
// =============================================================================
// Word lists that drive URL classification.
//
// Six lists are loaded once at start-up and never change afterwards:
//
//   ignore_words      - vocabulary ignored by keyword consumers
//   keywords          - keyword vocabulary for keyword_match()
//   excluded_landing  - substrings that disqualify a landing page
//   ends_with         - suffixes (file extensions etc.) that disqualify any page
//   excluded_blog     - substrings that disqualify a blog page
//   excluded_full     - substrings that take a URL out of scope entirely
//
// On disk each list is a CSV file: a header row followed by one entry per
// row. Only the first column is used; quoting follows normal CSV rules.
//
// A list that is missing is an error here, at construction time, so that
// classification never runs against partial data.
// =============================================================================

use crate::error::PolicyError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Names of every list a policy needs, in load order.
pub const REQUIRED_LISTS: [&str; 6] = [
    "ignore_words",
    "keywords",
    "excluded_landing",
    "ends_with",
    "excluded_blog",
    "excluded_full",
];

/// The loaded, immutable word lists.
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    pub ignore_words: Vec<String>,
    pub keywords: Vec<String>,
    pub excluded_landing: Vec<String>,
    pub ends_with: Vec<String>,
    pub excluded_blog: Vec<String>,
    pub excluded_full: Vec<String>,
}

impl WordLists {
    // Builds the lists from a name -> entries mapping
    //
    // Every name in REQUIRED_LISTS must be present. Extra names are ignored.
    // Entries are lower-cased and trimmed; empty entries are dropped because
    // an empty substring would match every URL.
    pub fn from_map(mut lists: HashMap<String, Vec<String>>) -> Result<Self, PolicyError> {
        let mut take = |name: &'static str| -> Result<Vec<String>, PolicyError> {
            lists
                .remove(name)
                .map(normalize_entries)
                .ok_or(PolicyError::MissingList { name })
        };

        Ok(Self {
            ignore_words: take("ignore_words")?,
            keywords: take("keywords")?,
            excluded_landing: take("excluded_landing")?,
            ends_with: take("ends_with")?,
            excluded_blog: take("excluded_blog")?,
            excluded_full: take("excluded_full")?,
        })
    }

    // Loads every required list from `<dir>/<name>.csv`
    pub fn load_dir(dir: &Path) -> Result<Self, PolicyError> {
        let mut lists = HashMap::new();

        for name in REQUIRED_LISTS {
            let path = dir.join(format!("{name}.csv"));
            let content = fs::read_to_string(&path).map_err(|source| PolicyError::Unreadable {
                name,
                path: path.clone(),
                source,
            })?;

            let entries =
                parse_first_column(&content).map_err(|source| PolicyError::Malformed {
                    name,
                    path: path.clone(),
                    source,
                })?;
            debug!(list = name, count = entries.len(), "loaded word list");
            lists.insert(name.to_string(), entries);
        }

        Self::from_map(lists)
    }
}

// Pulls the first column out of a headed CSV document
//
// Rows may have any number of columns; blank rows and empty first cells are
// skipped.
fn parse_first_column(content: &str) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let first = record.get(0).unwrap_or("").trim();
        if !first.is_empty() {
            entries.push(first.to_string());
        }
    }

    Ok(entries)
}

fn normalize_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_lowercase())
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map() -> HashMap<String, Vec<String>> {
        REQUIRED_LISTS
            .iter()
            .map(|name| (name.to_string(), vec![format!("{name}-entry")]))
            .collect()
    }

    #[test]
    fn test_from_map_with_all_lists() {
        let lists = WordLists::from_map(full_map()).unwrap();
        assert_eq!(lists.keywords, vec!["keywords-entry"]);
        assert_eq!(lists.excluded_full, vec!["excluded_full-entry"]);
    }

    #[test]
    fn test_from_map_missing_list_is_an_error() {
        let mut map = full_map();
        map.remove("ends_with");

        let err = WordLists::from_map(map).unwrap_err();
        assert!(matches!(err, PolicyError::MissingList { name: "ends_with" }));
    }

    #[test]
    fn test_entries_are_normalized() {
        let mut map = full_map();
        map.insert(
            "excluded_landing".to_string(),
            vec!["  /Blog ".to_string(), "".to_string(), "/News".to_string()],
        );

        let lists = WordLists::from_map(map).unwrap();
        assert_eq!(lists.excluded_landing, vec!["/blog", "/news"]);
    }

    #[test]
    fn test_parse_first_column_skips_header() {
        let csv = "word,notes\n/login,auth pages\n\"/cart\",\n\n/tag/\n";
        assert_eq!(parse_first_column(csv).unwrap(), vec!["/login", "/cart", "/tag/"]);
    }

    #[test]
    fn test_parse_first_column_honours_quoting() {
        let csv = "word,notes\n\"sign in, register\",auth\n\"say \"\"hi\"\"\",x\n";
        assert_eq!(
            parse_first_column(csv).unwrap(),
            vec!["sign in, register", "say \"hi\""]
        );
    }

    #[test]
    fn test_load_dir_non_utf8_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        for name in REQUIRED_LISTS {
            fs::write(dir.path().join(format!("{name}.csv")), "word\nok\n").unwrap();
        }
        fs::write(dir.path().join("keywords.csv"), b"word\n\xff\xfe\n").unwrap();

        let err = WordLists::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, PolicyError::Unreadable { name: "keywords", .. }));
    }

    #[test]
    fn test_load_dir_reads_every_list() {
        let dir = tempfile::tempdir().unwrap();
        for name in REQUIRED_LISTS {
            fs::write(dir.path().join(format!("{name}.csv")), format!("word\n{name}\n")).unwrap();
        }

        let lists = WordLists::load_dir(dir.path()).unwrap();
        assert_eq!(lists.ignore_words, vec!["ignore_words"]);
        assert_eq!(lists.excluded_blog, vec!["excluded_blog"]);
    }

    #[test]
    fn test_load_dir_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ignore_words.csv"), "word\nthe\n").unwrap();

        let err = WordLists::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, PolicyError::Unreadable { name: "keywords", .. }));
    }
}
