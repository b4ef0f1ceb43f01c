use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{
    collect_by_tag, decorate_all_tables, dispatch, Capabilities, Document, Element, HoverState, Tag,
};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("listing.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new()
        .capabilities(Capabilities::default())
        .root(listing());
    decorate_all_tables(&mut doc);

    // Dump the decorated listing
    let rows = collect_by_tag(&doc.roots[0], Tag::Row);
    for row_id in &rows {
        let row = doc.find(row_id).expect("row exists");
        let background = row.style.background.as_ref().map(|c| c.to_rgb());
        println!("{row_id}: background={background:?}");
    }
    for link_id in collect_by_tag(&doc.roots[0], Tag::Link) {
        let link = doc.find(&link_id).expect("link exists");
        println!("{link_id}: title={:?}", link.title);
    }

    // Simulate the pointer moving over the first data row and away again
    let mut hover = HoverState::new();
    for target in [Some(rows[1].as_str()), None] {
        for event in hover.update(target) {
            let result = dispatch(&mut doc.roots[0], &event);
            println!("{event:?} -> {result:?}");
        }
    }

    Ok(())
}

fn listing() -> Element {
    Element::table()
        .id("listing")
        .child(
            Element::row().id("header-row").children([
                Element::header_cell().child(Element::link("Name")),
                Element::header_cell().child(Element::link("Size")),
                Element::header_cell().child(Element::link("Modified")),
            ]),
        )
        .children((1..=5).map(|i| {
            Element::row().id(format!("file-row-{i}")).children([
                Element::cell().child(Element::text(format!("file-{i}.txt"))),
                Element::cell().child(Element::text(format!("{} KB", i * 4))),
                Element::cell().child(Element::text("2026-08-29")),
            ])
        }))
}
