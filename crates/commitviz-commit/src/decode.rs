//! Line-oriented commit decoder.

use commitviz_object::ObjectId;

use crate::{CommitError, CommitRecord, CommitResult};

/// Which part of the commit object a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Header lines up to the first empty line.
    Header,
    /// Everything after the first empty line.
    Message,
}

/// Decodes the text of a commit object.
///
/// Every line is checked in order: a `parent` line adds a parent wherever it
/// appears, the first empty line starts the message, and later non-empty
/// lines are appended to the message. Empty lines are never part of the
/// message. Other lines before the message (the type marker, `tree`,
/// `author`, `committer`) are skipped.
///
/// # Errors
///
/// Returns [`CommitError::MalformedParent`] if a `parent` line has no
/// identifier.
pub fn decode_commit(text: &str) -> CommitResult<CommitRecord> {
    let mut section = Section::Header;
    let mut parents = Vec::new();
    let mut message: Vec<&str> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if let Some(rest) = parent_line(line) {
            let id = rest
                .split_whitespace()
                .next()
                .ok_or_else(|| CommitError::MalformedParent {
                    line_number: index + 1,
                    line: line.to_string(),
                })?;
            parents.push(ObjectId::new(id));
        } else if line.is_empty() {
            section = Section::Message;
        } else if section == Section::Message {
            message.push(line);
        }
    }

    Ok(CommitRecord::new(parents, message.join("\n")))
}

/// Returns the remainder of a `parent` line, if `line` is one.
fn parent_line(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("parent")?;
    (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(record: &CommitRecord) -> Vec<&str> {
        record.parents.iter().map(ObjectId::as_str).collect()
    }

    #[test]
    fn test_single_parent() {
        let record = decode_commit("commit\ntree T\nparent P\n\nMsg line\n").unwrap();
        assert_eq!(ids(&record), vec!["P"]);
        assert_eq!(record.message, "Msg line");
    }

    #[test]
    fn test_full_hashes() {
        let text = "commit\ntree 1234567890abcdef\nparent abcdef1234567890\n\nTest commit message\n";
        let record = decode_commit(text).unwrap();
        assert_eq!(ids(&record), vec!["abcdef1234567890"]);
        assert_eq!(record.message, "Test commit message");
    }

    #[test]
    fn test_root_commit() {
        let record = decode_commit("commit\ntree T\n\nInitial commit\n").unwrap();
        assert!(record.parents.is_empty());
        assert!(record.is_root());
        assert_eq!(record.message, "Initial commit");
    }

    #[test]
    fn test_merge_commit_keeps_order() {
        let text = "commit\ntree T\nparent aaa111\nparent bbb222\nparent ccc333\n\nMerge\n";
        let record = decode_commit(text).unwrap();
        assert_eq!(ids(&record), vec!["aaa111", "bbb222", "ccc333"]);
        assert!(record.is_merge());
    }

    #[test]
    fn test_duplicate_parents_preserved() {
        let text = "commit\nparent aaa111\nparent aaa111\n\nodd\n";
        let record = decode_commit(text).unwrap();
        assert_eq!(ids(&record), vec!["aaa111", "aaa111"]);
    }

    #[test]
    fn test_no_empty_line_means_no_message() {
        let record = decode_commit("commit\ntree T\nparent P1\nparent P2").unwrap();
        assert_eq!(ids(&record), vec!["P1", "P2"]);
        assert_eq!(record.message, "");
    }

    #[test]
    fn test_multiline_message() {
        let text = "commit\ntree T\n\nSubject\nBody line one\nBody line two\n";
        let record = decode_commit(text).unwrap();
        assert_eq!(record.message, "Subject\nBody line one\nBody line two");
    }

    #[test]
    fn test_blank_message_lines_dropped() {
        let record = decode_commit("commit\ntree T\n\nSubject\n\nBody\n\n").unwrap();
        assert_eq!(record.message, "Subject\nBody");
    }

    #[test]
    fn test_message_lines_kept_verbatim() {
        let record = decode_commit("commit\n\n  indented\ttext \nparents are fine\n").unwrap();
        assert!(record.parents.is_empty());
        assert_eq!(record.message, "  indented\ttext \nparents are fine");
    }

    #[test]
    fn test_parent_line_in_message_region() {
        let record = decode_commit("commit\ntree T\n\nparent X\n").unwrap();
        assert_eq!(ids(&record), vec!["X"]);
        assert_eq!(record.message, "");
    }

    #[test]
    fn test_malformed_parent_in_message_region() {
        let result = decode_commit("commit\ntree T\n\nSubject\nparent\n");
        match result {
            Err(CommitError::MalformedParent { line_number, .. }) => assert_eq!(line_number, 5),
            other => panic!("Expected MalformedParent, got {other:?}"),
        }
    }

    #[test]
    fn test_author_and_committer_ignored() {
        let text = "commit 230\0tree 4b825dc642cb6eb9a060e54bf8d69288fbee4904\n\
                    parent 1111111111111111111111111111111111111111\n\
                    author A U Thor <a@example.com> 1700000000 +0000\n\
                    committer A U Thor <a@example.com> 1700000000 +0000\n\
                    \n\
                    feat: add thing\n";
        let record = decode_commit(text).unwrap();
        assert_eq!(
            ids(&record),
            vec!["1111111111111111111111111111111111111111"]
        );
        assert_eq!(record.message, "feat: add thing");
    }

    #[test]
    fn test_signature_continuation_ignored() {
        let text = "commit\ntree T\nparent P\ngpgsig -----BEGIN PGP SIGNATURE-----\n \n parent X\n -----END PGP SIGNATURE-----\n\nSigned\n";
        let record = decode_commit(text).unwrap();
        assert_eq!(ids(&record), vec!["P"]);
        assert_eq!(record.message, "Signed");
    }

    #[test]
    fn test_crlf_line_endings() {
        let record = decode_commit("commit\r\nparent P\r\n\r\nMsg\r\n").unwrap();
        assert_eq!(ids(&record), vec!["P"]);
        assert_eq!(record.message, "Msg");
    }

    #[test]
    fn test_parent_prefix_without_whitespace_ignored() {
        let record = decode_commit("commit\nparents P\n\nMsg\n").unwrap();
        assert!(record.parents.is_empty());
    }

    #[test]
    fn test_malformed_parent() {
        let result = decode_commit("commit\ntree T\nparent\n\nMsg\n");
        match result {
            Err(CommitError::MalformedParent { line_number, line }) => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "parent");
            }
            other => panic!("Expected MalformedParent, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_parent_whitespace_only() {
        let result = decode_commit("commit\nparent   \n\nMsg\n");
        assert!(matches!(result, Err(CommitError::MalformedParent { .. })));
    }

    #[test]
    fn test_empty_input() {
        let record = decode_commit("").unwrap();
        assert!(record.parents.is_empty());
        assert_eq!(record.message, "");
    }
}
