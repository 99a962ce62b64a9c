use super::{attrs, node::XmlNode, tags, types::Properties};

/// Collects the `name`/`value` pairs of every `property` child.
pub fn ingest_properties(root: &XmlNode) -> Properties {
    root.nodes
        .iter()
        .filter(|node| node.is(tags::PROPERTY))
        .map(|node| {
            (
                node.attr_or_default(attrs::NAME),
                node.attr_or_default(attrs::VALUE),
            )
        })
        .collect()
}

/// Every attribute of an element, used to seed its properties.
pub fn attr_properties(root: &XmlNode) -> Properties {
    root.attrs()
        .map(|(name, value)| (String::from(name), String::from(value)))
        .collect()
}

/// Later-wins merge of `source` into `target`.
pub fn merge_properties(target: &mut Properties, source: Properties) {
    target.extend(source);
}

/// Later-wins overwrite for repeated text elements such as `system-out`.
pub fn overwrite_text(target: &mut String, source: &str) {
    source.clone_into(target);
}
