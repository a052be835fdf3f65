//! Textual tree dump
//!
//! Renders one line per node with box-drawing connectors:
//!
//! ```text
//! └── ε Labels:[INITIAL, BIVALENT, CRITICAL] value: (-)
//!     ├── A Labels:[UNIVALENT] value: (-)
//!     │   └── AB Labels:[FINAL] value: (0)
//!     └── B Labels:[UNIVALENT] value: (-)
//!         └── BA Labels:[FINAL] value: (1)
//! ```

use std::fmt::{self, Write};

use crate::execution::Node;

/// Rendering options for [`render_tree`].
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Include each node's label set
    pub show_labels: bool,
    /// Stop descending below this depth
    pub max_depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            max_depth: None,
        }
    }
}

/// Write the subtree rooted at `root` to `out`.
pub fn render_tree<W: Write>(root: &Node, options: RenderOptions, out: &mut W) -> fmt::Result {
    render_node(root, "", true, options, out)
}

/// Render the subtree rooted at `root` into a string with default options.
pub fn dump(root: &Node) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = render_tree(root, RenderOptions::default(), &mut out);
    out
}

fn render_node<W: Write>(
    node: &Node,
    prefix: &str,
    is_tail: bool,
    options: RenderOptions,
    out: &mut W,
) -> fmt::Result {
    let connector = if is_tail { "└── " } else { "├── " };
    let path = node.path();
    if path.is_root() {
        write!(out, "{prefix}{connector}ε")?;
    } else {
        write!(out, "{prefix}{connector}{path}")?;
    }
    if options.show_labels {
        write!(out, " Labels:{}", node.labels())?;
    }
    match node.outcome() {
        Some(outcome) => writeln!(out, " value: ({outcome})")?,
        None => writeln!(out, " value: (-)")?,
    }

    if options.max_depth.is_some_and(|max| path.depth() >= max) {
        return Ok(());
    }

    let child_prefix = format!("{prefix}{}", if is_tail { "    " } else { "│   " });
    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        render_node(child, &child_prefix, i + 1 == children.len(), options, out)?;
    }
    Ok(())
}
