//! Directory-listing table decoration: sort tooltips on header links,
//! alternating row stripes, and hover highlighting on data rows.

use std::rc::Rc;

use log::{debug, warn};

use crate::document::Document;
use crate::element::{find_element, find_element_mut, Element, Tag};
use crate::event::EventResult;
use crate::query::collect_by_tag;
use crate::types::Color;

/// Class marker set on a data row while the pointer is over it.
pub const RULED_CLASS: &str = "ruled";

/// Background for odd data rows (1st, 3rd, ...): white.
pub fn even_color() -> Color {
    Color::rgb(255, 255, 255)
}

/// Background for even data rows (2nd, 4th, ...): a slightly darker
/// near-white derived from the even color.
pub fn odd_color() -> Color {
    even_color().darken(0.07)
}

/// Stripe color for the data row at table-row-index `index` (`index >= 1`;
/// row 0 is the header and is never striped). Pure function of position,
/// so re-striping can never drift.
pub fn stripe_color(index: usize) -> Color {
    if index % 2 == 1 {
        even_color()
    } else {
        odd_color()
    }
}

/// Decorate every table in the document: header tooltips first, then row
/// stripes. A host without tag lookup gets a silent no-op. Tables are
/// processed independently, so an empty table never blocks its siblings.
pub fn decorate_all_tables(doc: &mut Document) {
    if !doc.supports_tag_lookup() {
        return;
    }

    for root_index in 0..doc.roots.len() {
        let tables = collect_by_tag(&doc.roots[root_index], Tag::Table);
        debug!("decorating {} table(s)", tables.len());
        for table_id in &tables {
            if let Some(table) = find_element_mut(&mut doc.roots[root_index], table_id) {
                add_header_tooltips(table);
                add_row_stripes(table);
            }
        }
    }
}

/// Set a "Sort by <label>" tooltip on every link inside a header cell.
/// Header cells are matched structurally anywhere in the table, not just
/// in the first row. A link with no text label is skipped with a warning.
pub fn add_header_tooltips(table: &mut Element) {
    for cell_id in collect_by_tag(table, Tag::HeaderCell) {
        let links = match find_element(table, &cell_id) {
            Some(cell) => collect_by_tag(cell, Tag::Link),
            None => continue,
        };

        for link_id in links {
            let Some(link) = find_element_mut(table, &link_id) else {
                continue;
            };
            let Some(label) = link.label_text().map(str::to_lowercase) else {
                warn!("link {link_id} has no text label, skipping tooltip");
                continue;
            };
            link.title = Some(format!("Sort by {label}"));
        }
    }
}

/// Stripe the data rows of a table and attach hover highlighting.
/// Row 0 is the header and is left alone; the first data row gets the
/// even color. Existing handlers and backgrounds are overwritten.
pub fn add_row_stripes(table: &mut Element) {
    let rows = collect_by_tag(table, Tag::Row);

    // 1-based because we're skipping the header row
    for (index, row_id) in rows.iter().enumerate().skip(1) {
        let Some(row) = find_element_mut(table, row_id) else {
            continue;
        };

        row.on_hover_enter = Some(Rc::new(|row: &mut Element| {
            row.class_name = RULED_CLASS.to_string();
            EventResult::Consumed
        }));
        row.on_hover_leave = Some(Rc::new(|row: &mut Element| {
            row.class_name = String::new();
            EventResult::Consumed
        }));
        row.style.background = Some(stripe_color(index));
    }
}
