use super::{
    attrs,
    duration::parse_duration,
    failure::ingest_error,
    node::XmlNode,
    properties::{attr_properties, ingest_properties, merge_properties, overwrite_text},
    tags,
    types::{Status, Test},
};

pub fn ingest_test_case(root: &XmlNode) -> Test {
    let mut test = Test {
        name: root.attr_or_default(attrs::NAME),
        classname: root.attr_or_default(attrs::CLASSNAME),
        duration: parse_duration(root.attr(attrs::TIME).unwrap_or_default()),
        status: Status::Passed,
        properties: attr_properties(root),
        ..Default::default()
    };

    let mut status_seen = false;
    for node in &root.nodes {
        match node.local_name() {
            tags::TEST_CASE_STATUS_SKIPPED
            | tags::TEST_CASE_STATUS_FAILURE
            | tags::TEST_CASE_STATUS_ERROR => {
                if status_seen {
                    tracing::debug!(
                        "Test case {:?} has more than one status, keeping `{}`",
                        test.name,
                        node.local_name()
                    );
                }
                set_test_case_status(&mut test, node);
                status_seen = true;
            }
            tags::SYSTEM_OUT => overwrite_text(&mut test.system_out, &node.content),
            tags::SYSTEM_ERR => overwrite_text(&mut test.system_err, &node.content),
            tags::PROPERTIES => merge_properties(&mut test.properties, ingest_properties(node)),
            _ => (),
        }
    }

    test
}

fn set_test_case_status(test: &mut Test, node: &XmlNode) {
    test.message = node.attr_or_default(attrs::MESSAGE);
    match node.local_name() {
        tags::TEST_CASE_STATUS_SKIPPED => {
            test.status = Status::Skipped;
            test.error = None;
        }
        tags::TEST_CASE_STATUS_FAILURE => {
            test.status = Status::Failed;
            test.error = Some(ingest_error(node));
        }
        _ => {
            test.status = Status::Error;
            test.error = Some(ingest_error(node));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::junit::types::TestError;

    fn test_case() -> XmlNode {
        XmlNode::new("testcase")
            .with_attr("name", "adds")
            .with_attr("classname", "math.Add")
            .with_attr("time", "0.5")
    }

    #[test]
    fn passes_without_status_child() {
        let test = ingest_test_case(&test_case());

        assert_eq!(test.name, "adds");
        assert_eq!(test.classname, "math.Add");
        assert_eq!(test.duration, Duration::from_millis(500));
        assert_eq!(test.status, Status::Passed);
        assert_eq!(test.message, "");
        assert_eq!(test.error, None);
    }

    #[test]
    fn attributes_seed_properties() {
        let test = ingest_test_case(&test_case().with_attr("file", "add.rs"));

        assert_eq!(test.properties["file"], "add.rs");
        assert_eq!(test.properties["name"], "adds");
        assert_eq!(test.properties["time"], "0.5");
    }

    #[test]
    fn skipped_sets_message() {
        let test = ingest_test_case(
            &test_case().with_node(XmlNode::new("skipped").with_attr("message", "flaky")),
        );

        assert_eq!(test.status, Status::Skipped);
        assert_eq!(test.message, "flaky");
        assert_eq!(test.error, None);
    }

    #[test]
    fn failure_and_error_carry_detail() {
        let failure = XmlNode::new("failure")
            .with_attr("type", "AssertionError")
            .with_attr("message", "boom")
            .with_content("trace");

        let test = ingest_test_case(&test_case().with_node(failure));
        assert_eq!(test.status, Status::Failed);
        assert_eq!(test.message, "boom");
        assert_eq!(
            test.error,
            Some(TestError {
                body: String::from("trace"),
                error_type: String::from("AssertionError"),
                message: String::from("boom"),
            })
        );

        let test = ingest_test_case(
            &test_case().with_node(XmlNode::new("error").with_attr("message", "panic")),
        );
        assert_eq!(test.status, Status::Error);
        assert_eq!(test.message, "panic");
        assert!(test.error.is_some());
    }

    #[test]
    fn last_status_child_wins() {
        let test = ingest_test_case(
            &test_case()
                .with_node(XmlNode::new("failure").with_attr("message", "first"))
                .with_node(XmlNode::new("error").with_attr("message", "second")),
        );
        assert_eq!(test.status, Status::Error);
        assert_eq!(test.message, "second");
        assert_eq!(test.error.map(|e| e.message), Some(String::from("second")));
    }

    #[test]
    fn skipped_after_failure_drops_error_record() {
        // An error record only accompanies a Failed or Error status.
        let test = ingest_test_case(
            &test_case()
                .with_node(XmlNode::new("failure").with_attr("message", "first"))
                .with_node(XmlNode::new("skipped")),
        );
        assert_eq!(test.status, Status::Skipped);
        assert_eq!(test.message, "");
        assert_eq!(test.error, None);
    }

    #[test]
    fn repeated_output_keeps_later_text() {
        let test = ingest_test_case(
            &test_case()
                .with_node(XmlNode::new("system-out").with_content("one"))
                .with_node(XmlNode::new("system-err").with_content("err"))
                .with_node(XmlNode::new("system-out").with_content("two")),
        );
        assert_eq!(test.system_out, "two");
        assert_eq!(test.system_err, "err");
    }

    #[test]
    fn properties_blocks_merge_later_wins() {
        let block = |value: &str| {
            XmlNode::new("properties").with_node(
                XmlNode::new("property")
                    .with_attr("name", "name")
                    .with_attr("value", value),
            )
        };
        let test = ingest_test_case(&test_case().with_node(block("b")).with_node(block("c")));

        assert_eq!(test.name, "adds");
        assert_eq!(test.properties["name"], "c");
    }

    #[test]
    fn unparsable_time_is_zero() {
        let test = ingest_test_case(&test_case().with_attr("time", "soon"));
        assert_eq!(test.duration, Duration::ZERO);

        let test = ingest_test_case(&XmlNode::new("testcase"));
        assert_eq!(test.duration, Duration::ZERO);
        assert_eq!(test.name, "");
    }
}
