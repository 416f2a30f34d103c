use crate::config::AnalyzeOpts;
use crate::document::ids::IdAllocator;
use crate::document::tree::{Document, NodeId};
use crate::foundation::error::{SplitError, SplitResult};
use crate::path::decompose::decompose;

impl Document {
    /// Replace a compound `<path>` with one `<path>` per shape.
    ///
    /// The new elements are inserted where the original stood, in decomposition order. Each
    /// copies every attribute except `d` and `id`, then gets its own `d` and a fresh `path-<n>`
    /// id from `ids`. The original is detached. Returns the new nodes, or an empty list when the
    /// path has no `d` or describes a single shape (the document is left untouched).
    pub fn separate_compound_path(
        &mut self,
        node: NodeId,
        ids: &mut IdAllocator,
    ) -> SplitResult<Vec<NodeId>> {
        let Some(el) = self.element(node) else {
            return Err(SplitError::document(format!(
                "node {} is not an element",
                node.0
            )));
        };
        if el.name != "path" {
            return Err(SplitError::document(format!(
                "node {} is <{}>, not <path>",
                node.0, el.name
            )));
        }
        if self.parent(node).is_none() {
            return Err(SplitError::document(format!(
                "node {} is detached or the root",
                node.0
            )));
        }
        let Some(d) = el.attr("d") else {
            return Ok(Vec::new());
        };

        let parts = decompose(d);
        if parts.len() <= 1 {
            return Ok(Vec::new());
        }

        let name = el.name.clone();
        let shared: Vec<(String, String)> = el
            .attrs
            .iter()
            .filter(|(k, _)| k != "d" && k != "id")
            .cloned()
            .collect();

        let mut created = Vec::with_capacity(parts.len());
        for part in parts {
            let mut attrs = shared.clone();
            attrs.push(("d".to_owned(), part));
            attrs.push(("id".to_owned(), ids.next("path")));
            let id = self.create_element(name.clone(), attrs);
            self.insert_before(node, id)?;
            created.push(id);
        }
        self.detach(node);

        tracing::debug!(node = node.0, shapes = created.len(), "separated compound path");
        Ok(created)
    }

    /// Split every compound path, then label unlabeled drawables.
    ///
    /// Returns the number of changes: one per path that was split plus one per id assigned.
    pub fn smart_analyze(&mut self, opts: &AnalyzeOpts) -> SplitResult<usize> {
        opts.validate()?;
        let mut ids = IdAllocator::from_document(self);
        let mut changes = 0usize;

        if opts.split_paths {
            for path in self.elements_by_tag("path") {
                if !self.separate_compound_path(path, &mut ids)?.is_empty() {
                    changes += 1;
                }
            }
        }
        if opts.assign_ids {
            changes += self.assign_missing_ids(opts, &mut ids);
        }

        tracing::debug!(changes, "smart analyze finished");
        Ok(changes)
    }

    /// Give every unlabeled element whose tag is in `opts.id_tags` a generated id.
    ///
    /// Returns how many ids were assigned.
    pub fn add_ids_to_elements(&mut self, opts: &AnalyzeOpts) -> SplitResult<usize> {
        opts.validate()?;
        let mut ids = IdAllocator::from_document(self);
        Ok(self.assign_missing_ids(opts, &mut ids))
    }

    fn assign_missing_ids(&mut self, opts: &AnalyzeOpts, ids: &mut IdAllocator) -> usize {
        let targets: Vec<(NodeId, String)> = self
            .descendants()
            .filter_map(|n| {
                let tag = self.tag(n)?;
                let unlabeled = self.attr(n, "id").is_none_or(str::is_empty);
                (unlabeled && opts.is_id_tag(tag)).then(|| (n, tag.to_ascii_lowercase()))
            })
            .collect();

        for (node, prefix) in &targets {
            let id = ids.next(prefix);
            self.set_attr(*node, "id", id);
        }
        targets.len()
    }

    /// Id of the `index`-th `tag` element in document order, assigning one if it has none.
    pub fn inject_id(&mut self, tag: &str, index: usize) -> Option<String> {
        let node = *self.elements_by_tag(tag).get(index)?;
        if let Some(existing) = self.attr(node, "id").filter(|id| !id.is_empty()) {
            return Some(existing.to_owned());
        }
        let id = IdAllocator::from_document(self).next(&tag.to_ascii_lowercase());
        self.set_attr(node, "id", id.clone());
        Some(id)
    }

    /// Set attributes on the element with the given id.
    ///
    /// An inline `style` rule for the same property (a camelCase key maps to its kebab-case CSS
    /// name) is removed so the attribute takes effect; an emptied `style` is dropped. Returns
    /// `false` when no element has that id.
    pub fn update_element<'k>(
        &mut self,
        id: &str,
        attrs: impl IntoIterator<Item = (&'k str, &'k str)>,
    ) -> bool {
        let Some(node) = self.element_by_id(id) else {
            return false;
        };
        for (key, value) in attrs {
            self.set_attr(node, key, value);
            let Some(style) = self.attr(node, "style") else {
                continue;
            };
            let prop = format!("{}:", css_property_name(key));
            let rules: Vec<&str> = style
                .split(';')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .collect();
            let kept: Vec<&str> = rules
                .iter()
                .copied()
                .filter(|r| !r.starts_with(&prop))
                .collect();
            if kept.len() == rules.len() {
                continue;
            }
            if kept.is_empty() {
                self.remove_attr(node, "style");
            } else {
                let joined = kept.join("; ");
                self.set_attr(node, "style", joined);
            }
        }
        true
    }
}

fn css_property_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/document/ops.rs"]
mod tests;
