use tabledom::{decorate_all_tables, dispatch, Document, Element, Event, EventResult, HoverState};

fn decorated_table() -> Element {
    let table = Element::table()
        .id("table")
        .child(
            Element::row()
                .id("header-row")
                .child(Element::header_cell().child(Element::link("Name"))),
        )
        .child(Element::row().id("row-1").child(Element::cell()))
        .child(Element::row().id("row-2").child(Element::cell()));

    let mut doc = Document::new().root(table);
    decorate_all_tables(&mut doc);
    doc.roots.remove(0)
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn test_hover_enter_sets_ruled() {
    let mut root = decorated_table();

    let result = dispatch(
        &mut root,
        &Event::HoverEnter {
            target: "row-1".to_string(),
        },
    );

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(
        tabledom::find_element(&root, "row-1").unwrap().class_name,
        "ruled"
    );
}

#[test]
fn test_hover_round_trip_restores_baseline() {
    let mut root = decorated_table();

    dispatch(
        &mut root,
        &Event::HoverEnter {
            target: "row-1".to_string(),
        },
    );
    let result = dispatch(
        &mut root,
        &Event::HoverLeave {
            target: "row-1".to_string(),
        },
    );

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(tabledom::find_element(&root, "row-1").unwrap().class_name, "");
}

#[test]
fn test_dispatch_without_handler_is_ignored() {
    let mut root = decorated_table();

    // The header row never gets hover handlers.
    let result = dispatch(
        &mut root,
        &Event::HoverEnter {
            target: "header-row".to_string(),
        },
    );

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(
        tabledom::find_element(&root, "header-row").unwrap().class_name,
        ""
    );
}

#[test]
fn test_dispatch_unknown_target_is_ignored() {
    let mut root = decorated_table();

    let result = dispatch(
        &mut root,
        &Event::HoverEnter {
            target: "no-such-row".to_string(),
        },
    );

    assert_eq!(result, EventResult::Ignored);
}

// ============================================================================
// Hover State
// ============================================================================

#[test]
fn test_hover_state_transitions() {
    let mut hover = HoverState::new();

    assert_eq!(hover.hovered(), None);

    let events = hover.update(Some("row-1"));
    assert_eq!(
        events,
        vec![Event::HoverEnter {
            target: "row-1".to_string()
        }]
    );
    assert_eq!(hover.hovered(), Some("row-1"));

    // Same target - no events
    assert!(hover.update(Some("row-1")).is_empty());

    // Moving to another element leaves the old one first
    let events = hover.update(Some("row-2"));
    assert_eq!(
        events,
        vec![
            Event::HoverLeave {
                target: "row-1".to_string()
            },
            Event::HoverEnter {
                target: "row-2".to_string()
            },
        ]
    );

    // Pointer leaves everything
    let events = hover.update(None);
    assert_eq!(
        events,
        vec![Event::HoverLeave {
            target: "row-2".to_string()
        }]
    );
    assert_eq!(hover.hovered(), None);
}

#[test]
fn test_hover_state_none_when_idle() {
    let mut hover = HoverState::new();
    assert!(hover.update(None).is_empty());
}

#[test]
fn test_hover_moves_between_rows() {
    let mut root = decorated_table();
    let mut hover = HoverState::new();

    for target in [Some("row-1"), Some("row-2")] {
        for event in hover.update(target) {
            dispatch(&mut root, &event);
        }
    }

    assert_eq!(tabledom::find_element(&root, "row-1").unwrap().class_name, "");
    assert_eq!(
        tabledom::find_element(&root, "row-2").unwrap().class_name,
        "ruled"
    );
}
