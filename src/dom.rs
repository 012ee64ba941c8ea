//! Document and style access seam
//!
//! The generator never talks to a rendering engine directly. Everything it
//! needs from the outside world is behind [`StyleDocument`]: resolve a
//! selector to the first matching element, set an inline custom property, and
//! append a node carrying stylesheet text. Real hosts implement the trait over
//! their own document; [`MemoryDocument`] is the in-crate implementation used
//! by tests and the command-line tool.

/// Opaque handle to an element inside a [`StyleDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// The element/style/stylesheet collaborator.
///
/// Mutations are applied in place with no rollback; a property written before
/// a later failure stays written. `query_selector` returns the first match in
/// document order, or `None` when nothing matches.
pub trait StyleDocument {
  /// First element matching `selector`, in document order.
  fn query_selector(&self, selector: &str) -> Option<ElementId>;

  /// Sets (or overwrites) an inline custom property on the element.
  fn set_custom_property(&mut self, element: ElementId, name: &str, value: &str);

  /// Appends a style node containing `css` as a child of the element.
  fn append_style_text(&mut self, element: ElementId, css: &str) -> ElementId;
}

#[derive(Debug, Clone, Default)]
struct NodeData {
  tag: String,
  id: Option<String>,
  classes: Vec<String>,
  text: Option<String>,
  children: Vec<usize>,
  // Insertion-ordered; overwriting keeps the original position.
  properties: Vec<(String, String)>,
}

/// An in-memory element tree implementing [`StyleDocument`].
///
/// Selector support covers what the generator's callers use: compound
/// selectors of tag, `#id`, `.class` and `*`, combined by descent. Matching is
/// first-in-document-order over a preorder walk from the root.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
  nodes: Vec<NodeData>,
  root: usize,
}

impl Default for MemoryDocument {
  fn default() -> Self {
    Self::new()
  }
}

impl MemoryDocument {
  /// A document holding a single `html` root element.
  pub fn new() -> Self {
    Self::with_root("html")
  }

  /// A document whose root element has the given tag.
  pub fn with_root(tag: &str) -> Self {
    let root = NodeData {
      tag: tag.to_string(),
      ..NodeData::default()
    };
    MemoryDocument {
      nodes: vec![root],
      root: 0,
    }
  }

  pub fn root(&self) -> ElementId {
    ElementId(self.root)
  }

  /// Appends a child element and returns its handle.
  pub fn append_element(&mut self, parent: ElementId, tag: &str) -> ElementId {
    self.append_child(
      parent,
      NodeData {
        tag: tag.to_string(),
        ..NodeData::default()
      },
    )
  }

  /// Appends a child element carrying an id and classes.
  pub fn append_element_with(
    &mut self,
    parent: ElementId,
    tag: &str,
    id: Option<&str>,
    classes: &[&str],
  ) -> ElementId {
    self.append_child(
      parent,
      NodeData {
        tag: tag.to_string(),
        id: id.map(str::to_string),
        classes: classes.iter().map(|c| c.to_string()).collect(),
        ..NodeData::default()
      },
    )
  }

  fn append_child(&mut self, parent: ElementId, node: NodeData) -> ElementId {
    let index = self.nodes.len();
    self.nodes.push(node);
    self.nodes[parent.0].children.push(index);
    ElementId(index)
  }

  /// Value of an inline custom property, if set.
  pub fn custom_property(&self, element: ElementId, name: &str) -> Option<&str> {
    self.nodes[element.0]
      .properties
      .iter()
      .find(|(key, _)| key == name)
      .map(|(_, value)| value.as_str())
  }

  /// All inline custom properties in insertion order.
  pub fn custom_properties(&self, element: ElementId) -> &[(String, String)] {
    &self.nodes[element.0].properties
  }

  /// Text content of every `style` child of the element, in order.
  pub fn style_texts(&self, element: ElementId) -> Vec<&str> {
    self.nodes[element.0]
      .children
      .iter()
      .filter_map(|&child| {
        let node = &self.nodes[child];
        if node.tag == "style" {
          node.text.as_deref()
        } else {
          None
        }
      })
      .collect()
  }

  pub fn tag(&self, element: ElementId) -> &str {
    &self.nodes[element.0].tag
  }

  fn find_match(
    &self,
    node: usize,
    ancestors: &mut Vec<usize>,
    compounds: &[Compound],
  ) -> Option<usize> {
    let (last, prefix) = compounds.split_last()?;
    if compound_matches(&self.nodes[node], last) && self.ancestors_match(ancestors, prefix) {
      return Some(node);
    }
    ancestors.push(node);
    for &child in &self.nodes[node].children {
      if let Some(found) = self.find_match(child, ancestors, compounds) {
        ancestors.pop();
        return Some(found);
      }
    }
    ancestors.pop();
    None
  }

  fn ancestors_match(&self, ancestors: &[usize], compounds: &[Compound]) -> bool {
    let mut remaining = compounds.iter();
    let mut next = remaining.next();
    for &ancestor in ancestors {
      let Some(compound) = next else {
        return true;
      };
      if compound_matches(&self.nodes[ancestor], compound) {
        next = remaining.next();
      }
    }
    next.is_none()
  }
}

impl StyleDocument for MemoryDocument {
  fn query_selector(&self, selector: &str) -> Option<ElementId> {
    let compounds = parse_selector(selector)?;
    let mut ancestors = Vec::new();
    self
      .find_match(self.root, &mut ancestors, &compounds)
      .map(ElementId)
  }

  fn set_custom_property(&mut self, element: ElementId, name: &str, value: &str) {
    let properties = &mut self.nodes[element.0].properties;
    if let Some(entry) = properties.iter_mut().find(|(key, _)| key == name) {
      entry.1 = value.to_string();
    } else {
      properties.push((name.to_string(), value.to_string()));
    }
  }

  fn append_style_text(&mut self, element: ElementId, css: &str) -> ElementId {
    self.append_child(
      element,
      NodeData {
        tag: "style".to_string(),
        text: Some(css.to_string()),
        ..NodeData::default()
      },
    )
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Compound {
  tag: Option<String>,
  id: Option<String>,
  classes: Vec<String>,
}

fn compound_matches(node: &NodeData, compound: &Compound) -> bool {
  if let Some(tag) = &compound.tag {
    if tag != "*" && !node.tag.eq_ignore_ascii_case(tag) {
      return false;
    }
  }
  if let Some(id) = &compound.id {
    if node.id.as_deref() != Some(id.as_str()) {
      return false;
    }
  }
  compound
    .classes
    .iter()
    .all(|class| node.classes.iter().any(|c| c == class))
}

/// Parses a descendant chain of compound selectors. Returns `None` for
/// anything the document cannot match (empty input, dangling `#` or `.`).
fn parse_selector(selector: &str) -> Option<Vec<Compound>> {
  let parts: Vec<&str> = selector.split_whitespace().collect();
  if parts.is_empty() {
    return None;
  }
  parts.into_iter().map(parse_compound).collect()
}

fn parse_compound(part: &str) -> Option<Compound> {
  let mut compound = Compound::default();
  let bytes = part.as_bytes();
  let mut i = 0;
  while i < bytes.len() {
    let (marker, name_start) = match bytes[i] {
      b'#' | b'.' => (bytes[i], i + 1),
      // A bare leading name is the tag (or `*`); only valid at the start.
      _ if i == 0 => (b' ', 0),
      _ => return None,
    };
    let mut end = name_start;
    while end < bytes.len() && bytes[end] != b'#' && bytes[end] != b'.' {
      end += 1;
    }
    let name = &part[name_start..end];
    if name.is_empty() {
      return None;
    }
    match marker {
      b' ' => compound.tag = Some(name.to_string()),
      b'#' => {
        if compound.id.is_some() {
          return None;
        }
        compound.id = Some(name.to_string());
      }
      _ => compound.classes.push(name.to_string()),
    }
    i = end;
  }
  if compound == Compound::default() {
    return None;
  }
  Some(compound)
}
