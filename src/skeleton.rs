use bevy_math::bounding::Aabb2d;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A unique identifier for a segment in a [`Skeleton`] arena.
/// Ids are dense indices issued in emission order; id `0` is the root.
pub type SegmentId = u32;

/// A single drawn line segment.
///
/// Segments are immutable once emitted: the interpreter never revisits or
/// mutates one after appending it to the output structure.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// World-space start point (the turtle position before the step).
    pub start: Vec2,

    /// World-space end point (the turtle position after the step).
    pub end: Vec2,

    /// The turtle heading (radians) when the segment was drawn. Heading 0
    /// points "up" (toward -y); positive headings rotate toward +x.
    pub heading: f32,
}

impl Segment {
    /// Euclidean length of the segment.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// One node of the skeleton arena: a [`Segment`] plus its topology.
///
/// Parent/child relations are plain index data, not ownership edges. The
/// arena owns every node exclusively.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentNode {
    /// The drawn geometry.
    pub segment: Segment,

    /// The node this one grew from. `None` only for the synthetic root.
    pub parent: Option<SegmentId>,

    /// Nodes that grew from this one, in emission order.
    pub children: Vec<SegmentId>,

    /// Ancestor count: the root is 0, every drawn segment is one more than
    /// its parent. Renderers use this for per-age styling (older growth is
    /// closer to the root).
    pub depth: u32,
}

/// The complete branching structure produced by one interpretation pass.
///
/// This is the "Phenotype" grown from an L-System string: an arena of
/// [`SegmentNode`]s rooted at a synthetic zero-length node placed at the
/// start coordinate. The arena is append-only; ids returned by
/// [`push_segment`](Self::push_segment) stay valid for the skeleton's
/// lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Skeleton {
    nodes: Vec<SegmentNode>,
}

impl Skeleton {
    /// Creates a skeleton containing only the synthetic root: a zero-length
    /// segment at `origin` carrying the initial `heading`.
    pub fn new(origin: Vec2, heading: f32) -> Self {
        Self {
            nodes: vec![SegmentNode {
                segment: Segment {
                    start: origin,
                    end: origin,
                    heading,
                },
                parent: None,
                children: Vec::new(),
                depth: 0,
            }],
        }
    }

    /// Id of the synthetic root node.
    pub fn root(&self) -> SegmentId {
        0
    }

    /// Appends a segment as a child of `parent` and returns its id.
    ///
    /// A parent id this skeleton never issued degrades to the root instead
    /// of corrupting the arena.
    pub fn push_segment(&mut self, parent: SegmentId, segment: Segment) -> SegmentId {
        let id = self.nodes.len() as SegmentId;
        let parent = if (parent as usize) < self.nodes.len() {
            Some(parent)
        } else if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        };
        let depth = match parent {
            Some(p) => self.nodes[p as usize].depth + 1,
            None => 0,
        };
        self.nodes.push(SegmentNode {
            segment,
            parent,
            children: Vec::new(),
            depth,
        });
        if let Some(p) = parent {
            self.nodes[p as usize].children.push(id);
        }
        id
    }

    /// Looks up a node by id.
    pub fn get(&self, id: SegmentId) -> Option<&SegmentNode> {
        self.nodes.get(id as usize)
    }

    /// Looks up just the geometry of a node.
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.get(id).map(|node| &node.segment)
    }

    /// The parent of `id`, if it has one (the root and unknown ids have none).
    pub fn parent(&self, id: SegmentId) -> Option<SegmentId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// The children of `id`, in emission order. Empty for unknown ids.
    pub fn children(&self, id: SegmentId) -> &[SegmentId] {
        self.get(id).map_or(&[], |node| node.children.as_slice())
    }

    /// The whole arena in emission order, root included at index 0.
    pub fn nodes(&self) -> &[SegmentNode] {
        &self.nodes
    }

    /// Number of drawn segments (the synthetic root is not counted).
    pub fn segment_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// `true` when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.segment_count() == 0
    }

    /// Iterates over the drawn segments in emission order, skipping the root.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &SegmentNode)> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, node)| (index as SegmentId, node))
    }

    /// Walks the tree depth-first from the root's children, visiting each
    /// branch to its tip before the next sibling.
    ///
    /// For skeletons built by the interpreter this pre-order coincides with
    /// emission order (bracketed strings are pre-order encodings); the walk
    /// matters for renderers that style nodes from their ancestors while
    /// descending.
    pub fn iter_depth_first(&self) -> impl Iterator<Item = (SegmentId, &SegmentNode)> {
        let mut stack: Vec<SegmentId> = self.children(self.root()).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let node = self.nodes.get(id as usize)?;
            stack.extend(node.children.iter().rev());
            Some((id, node))
        })
    }

    /// Flattens the skeleton into its drawn segments in emission order,
    /// discarding the hierarchy and the synthetic root.
    pub fn into_trace(self) -> Vec<Segment> {
        self.nodes
            .into_iter()
            .skip(1)
            .map(|node| node.segment)
            .collect()
    }

    /// Axis-aligned bounding box over every endpoint, the root included.
    ///
    /// An empty skeleton yields the degenerate box at its origin. Renderers
    /// use this to fit the structure to a viewport.
    pub fn bounds(&self) -> Aabb2d {
        let first = self
            .nodes
            .first()
            .map_or(Vec2::ZERO, |node| node.segment.start);
        let mut min = first;
        let mut max = first;
        for node in &self.nodes {
            min = min.min(node.segment.start).min(node.segment.end);
            max = max.max(node.segment.start).max(node.segment.end);
        }
        Aabb2d { min, max }
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }
}
