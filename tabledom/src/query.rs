use crate::element::{Content, Element, Tag};

/// Collect the IDs of every element with the given tag, in tree order.
/// The element itself is included when its tag matches.
pub fn collect_by_tag(element: &Element, tag: Tag) -> Vec<String> {
    let mut result = Vec::new();
    collect_by_tag_recursive(element, tag, &mut result);
    result
}

fn collect_by_tag_recursive(element: &Element, tag: Tag, result: &mut Vec<String>) {
    if element.tag == tag {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_tag_recursive(child, tag, result);
        }
    }
}
