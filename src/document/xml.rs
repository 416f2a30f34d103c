use crate::document::tree::{Document, NodeId, NodeKind};
use crate::foundation::error::SplitResult;

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse SVG text into a [`Document`].
///
/// Namespace declarations become `xmlns`/`xmlns:*` attributes on the element that introduces
/// them. Documents with a doctype are accepted. The doctype and any comments or processing
/// instructions are not kept.
pub fn parse(text: &str) -> SplitResult<Document> {
    let opts = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };
    let xml = roxmltree::Document::parse_with_options(text, opts)?;
    let src_root = xml.root_element();

    let mut doc = Document::new(qualified_name(
        src_root,
        src_root.tag_name().namespace(),
        src_root.tag_name().name(),
        false,
    ));
    let root = doc.root();
    for (k, v) in element_attrs(src_root) {
        doc.set_attr(root, &k, v);
    }
    copy_children(&mut doc, root, src_root)?;
    Ok(doc)
}

fn copy_children(
    doc: &mut Document,
    parent: NodeId,
    src: roxmltree::Node<'_, '_>,
) -> SplitResult<()> {
    for child in src.children() {
        if child.is_element() {
            let tag = child.tag_name();
            let name = qualified_name(child, tag.namespace(), tag.name(), false);
            let id = doc.create_element(name, element_attrs(child));
            doc.append_child(parent, id)?;
            copy_children(doc, id, child)?;
        } else if child.is_text() {
            let text = child.text().unwrap_or_default();
            if !text.is_empty() {
                let id = doc.create_text(text);
                doc.append_child(parent, id)?;
            }
        }
    }
    Ok(())
}

fn element_attrs(node: roxmltree::Node<'_, '_>) -> Vec<(String, String)> {
    let mut attrs = Vec::new();

    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();
    for ns in node.namespaces() {
        if ns.name() == Some("xml") || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        let key = match ns.name() {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_owned(),
        };
        attrs.push((key, ns.uri().to_owned()));
    }

    for a in node.attributes() {
        attrs.push((
            qualified_name(node, a.namespace(), a.name(), true),
            a.value().to_owned(),
        ));
    }
    attrs
}

// Attributes never pick up the default namespace, so they need an explicit prefix.
fn qualified_name(
    node: roxmltree::Node<'_, '_>,
    ns: Option<&str>,
    local: &str,
    is_attr: bool,
) -> String {
    let Some(uri) = ns else {
        return local.to_owned();
    };
    if uri == XML_NS {
        return format!("xml:{local}");
    }
    let prefixes: Vec<Option<&str>> = node
        .namespaces()
        .filter(|n| n.uri() == uri)
        .map(|n| n.name())
        .collect();
    if !is_attr && prefixes.contains(&None) {
        return local.to_owned();
    }
    match prefixes.into_iter().flatten().next() {
        Some(prefix) => format!("{prefix}:{local}"),
        None => local.to_owned(),
    }
}

impl Document {
    /// Serialize attached nodes back to SVG markup.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(self.root(), &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match self.kind(id) {
            NodeKind::Text(t) => escape_into(t, false, out),
            NodeKind::Element(e) => {
                out.push('<');
                out.push_str(&e.name);
                for (k, v) in &e.attrs {
                    out.push(' ');
                    out.push_str(k);
                    out.push_str("=\"");
                    escape_into(v, true, out);
                    out.push('"');
                }
                let children = self.children(id);
                if children.is_empty() {
                    out.push_str("/>");
                    return;
                }
                out.push('>');
                for &c in children {
                    self.write_node(c, out);
                }
                out.push_str("</");
                out.push_str(&e.name);
                out.push('>');
            }
        }
    }
}

fn escape_into(s: &str, attr: bool, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attr => out.push_str("&quot;"),
            '\n' if attr => out.push_str("&#10;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/xml.rs"]
mod tests;
