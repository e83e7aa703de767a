//! Line classification for `.tide` files.
//!
//! Responsibilities:
//! - Classify one line as skippable, import, block-open, block-close or assignment.
//!
//! Does NOT handle:
//! - Key construction or storage (see `document.rs`).
//! - Validating assignment literals (see `validate.rs`).
//!
//! Invariants:
//! - Lines are trimmed before classification.
//! - Classification is tried in order: blank/comment, import, block-open,
//!   block-close, assignment.
//! - Lines that fit no form are `Line::Skip`, never an error.

use crate::constants::{BLOCK_CLOSE, BLOCK_OPEN_SUFFIX, COMMENT_PREFIX, IMPORT_KEYWORD};

/// One classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank, comment, or malformed line.
    Skip,
    /// `import target`, with surrounding `"` removed from the target.
    Import(&'a str),
    /// `name {`; the name is trimmed and is one key segment even if it
    /// contains dots.
    BlockOpen(&'a str),
    BlockClose,
    /// `field: type = literal`, each part trimmed.
    Assignment {
        field: &'a str,
        type_tag: &'a str,
        raw: &'a str,
    },
}

pub fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Line::Skip;
    }

    if let Some(target) = import_target(line) {
        return Line::Import(target);
    }

    if let Some(name) = line.strip_suffix(BLOCK_OPEN_SUFFIX) {
        return Line::BlockOpen(name.trim());
    }

    if line == BLOCK_CLOSE {
        return Line::BlockClose;
    }

    assignment(line).unwrap_or(Line::Skip)
}

fn import_target(line: &str) -> Option<&str> {
    let mut fields = line.split_whitespace();
    if fields.next()? != IMPORT_KEYWORD {
        return None;
    }
    let target = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some(target.trim_matches('"'))
}

fn assignment(line: &str) -> Option<Line<'_>> {
    let (lhs, raw) = line.split_once('=')?;
    let (field, type_tag) = lhs.split_once(':')?;
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    Some(Line::Assignment {
        field,
        type_tag: type_tag.trim(),
        raw: raw.trim(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_comment_lines() {
        assert_eq!(classify(""), Line::Skip);
        assert_eq!(classify("    "), Line::Skip);
        assert_eq!(classify("# a comment"), Line::Skip);
        assert_eq!(classify("   # indented: string = x"), Line::Skip);
    }

    #[test]
    fn test_import_lines() {
        assert_eq!(
            classify("import \"shared.logging\""),
            Line::Import("shared.logging")
        );
        assert_eq!(classify("  import base.tide "), Line::Import("base.tide"));
    }

    #[test]
    fn test_import_needs_exactly_one_argument() {
        assert_eq!(classify("import"), Line::Skip);
        assert_eq!(classify("import a b"), Line::Skip);
    }

    #[test]
    fn test_import_keyword_must_be_whole_token() {
        assert_eq!(
            classify("imports: string=x"),
            Line::Assignment {
                field: "imports",
                type_tag: "string",
                raw: "x"
            }
        );
    }

    #[test]
    fn test_block_lines() {
        assert_eq!(classify("database {"), Line::BlockOpen("database"));
        assert_eq!(classify("  a.b {  "), Line::BlockOpen("a.b"));
        assert_eq!(classify("}"), Line::BlockClose);
        assert_eq!(classify("  }  "), Line::BlockClose);
    }

    #[test]
    fn test_block_name_padding_is_trimmed() {
        assert_eq!(classify("name   {"), Line::BlockOpen("name"));
    }

    #[test]
    fn test_assignment_splits_on_first_separators() {
        assert_eq!(
            classify("port: integer = 5432"),
            Line::Assignment {
                field: "port",
                type_tag: "integer",
                raw: "5432"
            }
        );
        assert_eq!(
            classify("url: string = \"a=b:c\""),
            Line::Assignment {
                field: "url",
                type_tag: "string",
                raw: "\"a=b:c\""
            }
        );
    }

    #[test]
    fn test_malformed_assignments_are_skipped() {
        assert_eq!(classify("port = 5432"), Line::Skip);
        assert_eq!(classify("port: integer"), Line::Skip);
        assert_eq!(classify(": integer = 1"), Line::Skip);
        assert_eq!(classify("just some words"), Line::Skip);
    }
}
