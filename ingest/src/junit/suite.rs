use super::{
    attrs,
    date_parser::parse_timestamp,
    node::XmlNode,
    properties::{attr_properties, ingest_properties, merge_properties, overwrite_text},
    tags,
    test_case::ingest_test_case,
    types::Suite,
};

/// Builds a suite and everything nested under it, then aggregates it.
///
/// Nested suites are built (and aggregated) before their parent finishes, so
/// totals always flow bottom-up.
pub fn ingest_suite(root: &XmlNode) -> Suite {
    let mut suite = Suite {
        name: root.attr_or_default(attrs::NAME),
        package: root.attr_or_default(attrs::PACKAGE),
        timestamp: root.attr(attrs::TIMESTAMP).and_then(parse_timestamp),
        properties: attr_properties(root),
        ..Default::default()
    };

    for node in &root.nodes {
        match node.local_name() {
            tags::TEST_SUITE => suite.suites.push(ingest_suite(node)),
            tags::TEST_CASE => suite.tests.push(ingest_test_case(node)),
            tags::PROPERTIES => merge_properties(&mut suite.properties, ingest_properties(node)),
            tags::SYSTEM_OUT => overwrite_text(&mut suite.system_out, &node.content),
            tags::SYSTEM_ERR => overwrite_text(&mut suite.system_err, &node.content),
            _ => (),
        }
    }

    suite.aggregate();

    suite
}
