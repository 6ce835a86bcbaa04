// src/core/html.rs
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

static TABLE: LazyLock<Selector> = LazyLock::new(|| sel("table"));
static TR: LazyLock<Selector> = LazyLock::new(|| sel("tr"));
static A: LazyLock<Selector> = LazyLock::new(|| sel("a"));

fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// Where a page keeps its player table(s).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locator {
    /// First `<table>` in the document.
    FirstTable,
    /// First table carrying this CSS class.
    Class(&'static str),
    /// Tables by id, in the listed order. Missing ids are skipped.
    Ids(&'static [&'static str]),
}

impl Locator {
    pub fn describe(&self) -> String {
        match self {
            Locator::FirstTable => s!("table"),
            Locator::Class(c) => format!("table.{c}"),
            Locator::Ids(ids) => ids
                .iter()
                .map(|id| format!("table#{id}"))
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Tables matched by `loc`. Empty when nothing matches.
pub fn locate_tables<'a>(doc: &'a Html, loc: &Locator) -> Vec<ElementRef<'a>> {
    match loc {
        Locator::FirstTable => doc.select(&TABLE).take(1).collect(),
        Locator::Class(class) => doc
            .select(&TABLE)
            .filter(|t| t.value().classes().any(|c| c == *class))
            .take(1)
            .collect(),
        Locator::Ids(ids) => ids
            .iter()
            .filter_map(|id| doc.select(&TABLE).find(|t| t.value().id() == Some(*id)))
            .collect(),
    }
}

/// Rows of every table, concatenated. `skip_header` drops the first row of each.
pub fn table_rows<'a>(tables: &[ElementRef<'a>], skip_header: bool) -> Vec<ElementRef<'a>> {
    let skip = usize::from(skip_header);
    tables
        .iter()
        .flat_map(|t| t.select(&TR).skip(skip))
        .collect()
}

/// Direct `<td>` children only; nested tables don't leak cells.
pub fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name().eq_ignore_ascii_case("td"))
        .collect()
}

pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Text of every anchor inside `el`, in document order.
pub fn link_texts(el: ElementRef<'_>) -> Vec<String> {
    el.select(&A).map(text_of).collect()
}

/// Anchor text when the cell has a link, the cell's own text otherwise.
pub fn link_or_text(el: ElementRef<'_>) -> String {
    match el.select(&A).next() {
        Some(a) => text_of(a),
        None => text_of(el),
    }
}
