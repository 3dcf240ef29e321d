//! Layer-based rendering system for SVG output.
//!
//! Primitives are appended to a canvas in draw order, but not every kind of
//! primitive stacks the same way: filled patches always sit below lines, and
//! text and arrows always sit on top. Each drawable therefore tags its SVG
//! nodes with a [`RenderLayer`]; draw order only decides stacking within one
//! layer.
//!
//! # Overview
//!
//! - [`RenderLayer`]: An enum defining available rendering layers in order
//! - [`LayeredOutput`]: A structure for collecting SVG nodes by layer
//!
//! # Example
//!
//! ```
//! # use tecm_figures_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//!
//! let mut output = LayeredOutput::new();
//!
//! let label = svg::node::element::Text::new("Task Parser");
//! output.add_to_layer(RenderLayer::Annotation, Box::new(label));
//!
//! let fill = Rectangle::new().set("fill", "#FFF3E0");
//! output.add_to_layer(RenderLayer::Patch, Box::new(fill));
//!
//! // The patch group is emitted before the annotation group.
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers are rendered from bottom to top in the order defined by variant declaration.
/// The `Ord` derive uses declaration order, so the first variant renders first (bottom),
/// and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Filled shapes: boxes, panels, title badges, color swatches
    Patch,
    /// Free-standing lines such as legend line swatches
    Line,
    /// Text and arrows
    Annotation,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Line => "line",
            Self::Annotation => "annotation",
        }
    }
}

/// SVG nodes tagged with the layer they render to.
///
/// Nodes keep their insertion order within a layer; [`render`](Self::render)
/// groups them into one `<g data-layer="...">` per non-empty layer, bottom
/// layer first.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node of `other`, keeping its per-layer order after the
    /// nodes already collected here.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of collected nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// The sort is stable, so the draw order inside each layer survives.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg::node::element::{Rectangle, Text as SvgText};

    fn render_to_string(output: LayeredOutput) -> String {
        output.render().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_layered_output_new_is_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert_eq!(output.len(), 0);
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_merge_counts_nodes() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Patch, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Annotation, Box::new(SvgText::new("label")));

        output1.merge(output2);
        assert_eq!(output1.len(), 2);
        assert_eq!(output1.render().len(), 2);
    }

    #[test]
    fn test_patches_render_below_annotations_regardless_of_order() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Annotation, Box::new(SvgText::new("first")));
        output.add_to_layer(RenderLayer::Patch, Box::new(Rectangle::new().set("id", "late")));

        let rendered = render_to_string(output);
        let patch = rendered.find("data-layer=\"patch\"").unwrap();
        let annotation = rendered.find("data-layer=\"annotation\"").unwrap();
        assert!(patch < annotation);
    }

    #[test]
    fn test_draw_order_preserved_within_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Patch, Box::new(Rectangle::new().set("id", "a")));
        output.add_to_layer(RenderLayer::Line, Box::new(Rectangle::new().set("id", "line")));
        output.add_to_layer(RenderLayer::Patch, Box::new(Rectangle::new().set("id", "b")));

        let rendered = render_to_string(output);
        let a = rendered.find("id=\"a\"").unwrap();
        let b = rendered.find("id=\"b\"").unwrap();
        let line = rendered.find("id=\"line\"").unwrap();
        assert!(a < b);
        assert!(b < line);
    }

    #[test]
    fn test_same_layer_merges_into_single_group() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Line, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Line, Box::new(Rectangle::new()));

        assert_eq!(output.render().len(), 1);
    }
}
