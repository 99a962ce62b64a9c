use super::{node::XmlNode, tags};

/// Depth-first, document-order search for `testsuite` elements.
///
/// A suite is yielded without descending into it; suites nested inside it
/// belong to the suite builder. Every other element is descended into,
/// whatever its name, so suites wrapped in `testsuites` (or anything else, or
/// nothing) are found alike.
#[derive(Debug, Clone)]
pub struct SuiteScanner<'a> {
    pending: Vec<&'a XmlNode>,
}

impl<'a> SuiteScanner<'a> {
    pub fn new(root: &'a XmlNode) -> Self {
        Self { pending: vec![root] }
    }
}

impl<'a> Iterator for SuiteScanner<'a> {
    type Item = &'a XmlNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.pending.pop() {
            if node.is(tags::TEST_SUITE) {
                return Some(node);
            }
            self.pending.extend(node.nodes.iter().rev());
        }
        None
    }
}
