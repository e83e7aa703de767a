//! Block nesting state for one scan.

use crate::constants::KEY_SEPARATOR;

/// Names of the currently open blocks, outermost first.
///
/// Owned by a single scan; every load starts with a fresh stack.
#[derive(Debug, Default, Clone)]
pub struct ContextStack {
    segments: Vec<String>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str) {
        self.segments.push(name.to_string());
    }

    /// Close the innermost block. Returns `false` when nothing was open.
    pub fn pop(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Fully qualified key for `field` at the current nesting.
    ///
    /// Leading and trailing separators are trimmed from the result.
    pub fn qualify(&self, field: &str) -> String {
        let mut key = String::new();
        for segment in &self.segments {
            key.push_str(segment);
            key.push(KEY_SEPARATOR);
        }
        key.push_str(field);
        key.trim_matches(KEY_SEPARATOR).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualify_at_top_level() {
        assert_eq!(ContextStack::new().qualify("port"), "port");
    }

    #[test]
    fn test_qualify_nested() {
        let mut stack = ContextStack::new();
        stack.push("database");
        stack.push("credentials");
        assert_eq!(stack.qualify("password"), "database.credentials.password");
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn test_dotted_segment_kept_literally() {
        let mut stack = ContextStack::new();
        stack.push("a.b");
        assert_eq!(stack.qualify("c"), "a.b.c");
    }

    #[test]
    fn test_separators_trimmed() {
        let mut stack = ContextStack::new();
        stack.push(".outer");
        assert_eq!(stack.qualify("k."), "outer.k");
    }

    #[test]
    fn test_pop_empty_is_noop() {
        let mut stack = ContextStack::new();
        assert!(!stack.pop());
        stack.push("a");
        assert!(stack.pop());
        assert!(stack.is_empty());
    }
}
