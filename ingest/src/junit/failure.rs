use super::{attrs, node::XmlNode, types::TestError};

pub fn ingest_error(root: &XmlNode) -> TestError {
    TestError {
        body: root.content.clone(),
        error_type: root.attr_or_default(attrs::TYPE),
        message: root.attr_or_default(attrs::MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_body_type_and_message() {
        let node = XmlNode::new("failure")
            .with_attr("type", "AssertionError")
            .with_attr("message", "expected 1, got 2")
            .with_content("at foo.rs:12");

        assert_eq!(
            ingest_error(&node),
            TestError {
                body: String::from("at foo.rs:12"),
                error_type: String::from("AssertionError"),
                message: String::from("expected 1, got 2"),
            }
        );
    }

    #[test]
    fn missing_fields_are_empty() {
        assert_eq!(ingest_error(&XmlNode::new("error")), TestError::default());
    }
}
