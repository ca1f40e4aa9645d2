//! Indented tree rendering.
//!
//! Elements are listed per category, each with the elements it depends on
//! and, in two-way mode, the elements that use it:
//!
//! ```text
//! Resources:
//!   Api:
//!     DependsOn:
//!       Parameters:
//!         - Stage
//!       Resources:
//!         - Role
//!     UsedBy:
//!       Outputs:
//!         - Url
//!
//! ```
//!
//! Only direct links are shown. By default an element without any shown link
//! is omitted, and a category without any shown element is omitted entirely.

use std::fmt::Write as _;

use stacktree_core::{Category, DependencyGraph, Element, filter};

use super::Exporter;

/// Options controlling which elements and links the tree shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeOptions {
    show_all: bool,
    two_way: bool,
}

impl TreeOptions {
    /// Creates tree options.
    ///
    /// # Arguments
    ///
    /// * `show_all` - Show every element, with an empty `DependsOn: []` (and
    ///   `UsedBy: []`) block when it has no links.
    /// * `two_way` - Also show each element's dependents under `UsedBy`.
    pub fn new(show_all: bool, two_way: bool) -> Self {
        Self { show_all, two_way }
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn two_way(&self) -> bool {
        self.two_way
    }
}

/// [`Exporter`] for the tree format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeExporter {
    options: TreeOptions,
}

impl TreeExporter {
    pub fn new(options: TreeOptions) -> Self {
        Self { options }
    }
}

impl Exporter for TreeExporter {
    fn export(&self, graph: &DependencyGraph) -> String {
        render(graph, &self.options)
    }
}

/// Links of one element, as shown in the tree.
struct Entry {
    element: Element,
    forward: Vec<Element>,
    reverse: Vec<Element>,
}

impl Entry {
    fn new(graph: &DependencyGraph, element: Element, options: &TreeOptions) -> Self {
        let reverse = if options.two_way {
            graph.get_reverse(element).collect()
        } else {
            Vec::new()
        };

        Self {
            element,
            forward: graph.get(element).collect(),
            reverse,
        }
    }

    fn is_visible(&self, options: &TreeOptions) -> bool {
        options.show_all
            || !self.forward.is_empty()
            || (options.two_way && !self.reverse.is_empty())
    }
}

/// Renders `graph` as an indented tree.
pub fn render(graph: &DependencyGraph, options: &TreeOptions) -> String {
    let mut out = String::new();

    for category in Category::ALL {
        let entries: Vec<Entry> = graph
            .nodes()
            .filter(|node| node.category() == category)
            .map(|node| Entry::new(graph, node, options))
            .filter(|entry| entry.is_visible(options))
            .collect();

        if entries.is_empty() {
            continue;
        }

        let _ = writeln!(out, "{category}:");
        for entry in &entries {
            write_entry(&mut out, entry, options);
        }
        out.push('\n');
    }

    out
}

/// The element name with line breaks escaped, so each entry stays on one line.
fn display_name(element: Element) -> String {
    element
        .name()
        .as_string()
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

fn write_entry(out: &mut String, entry: &Entry, options: &TreeOptions) {
    let _ = writeln!(out, "  {}:", display_name(entry.element));

    if options.show_all || !entry.forward.is_empty() {
        write_links(out, "DependsOn", &entry.forward);
    }

    if options.two_way && (options.show_all || !entry.reverse.is_empty()) {
        write_links(out, "UsedBy", &entry.reverse);
    }
}

fn write_links(out: &mut String, title: &str, links: &[Element]) {
    if links.is_empty() {
        let _ = writeln!(out, "    {title}: []");
        return;
    }

    let _ = writeln!(out, "    {title}:");
    for (category, group) in filter::group_by_category(links) {
        let _ = writeln!(out, "      {category}:");
        for link in group {
            let _ = writeln!(out, "        - {}", display_name(link));
        }
    }
}
