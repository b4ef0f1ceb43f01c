pub mod decor;
pub mod document;
pub mod element;
pub mod event;
pub mod query;
pub mod types;

pub use decor::{add_header_tooltips, add_row_stripes, decorate_all_tables, stripe_color};
pub use document::{Capabilities, Document};
pub use element::{find_element, find_element_mut, Content, Element, HoverHandler, Tag};
pub use event::{dispatch, Event, EventResult, HoverState};
pub use query::collect_by_tag;
pub use types::*;
