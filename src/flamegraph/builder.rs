//! The flamegraph builder: three layout policies over one interval set.
//!
//! A call-order layout keeps real timestamps and depths; the two
//! aggregated layouts (left heavy, alphabetical) rebuild the call tree
//! and repack every parent's children from offset zero. All three emit
//! nodes in depth-first pre-order, so a parent always precedes its
//! descendants in the output array.

use crate::flamegraph::formatter::DurationFormatter;
use crate::flamegraph::rect::Rect;
use crate::ingest::{build_intervals, Interval};
use crate::profile::{FrameTable, Profile, ProfileType, ProfileUnit};
use crate::utils::error::FlamegraphError;
use log::debug;
use std::fmt;

/// Layout policy for sibling ordering and node placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlamegraphSort {
    /// Chronological: nodes keep their real timestamps
    CallOrder,
    /// Aggregated: heaviest subtree leftmost
    LeftHeavy,
    /// Aggregated: siblings ordered by frame name
    Alphabetical,
}

impl FlamegraphSort {
    /// The sort/profile-type compatibility table, consulted once at
    /// construction entry. Call order needs real occurrence positions;
    /// the aggregated sorts need merged call-path intervals.
    pub fn is_valid_for(self, profile_type: ProfileType) -> bool {
        matches!(
            (self, profile_type),
            (Self::CallOrder, ProfileType::Flamechart)
                | (Self::LeftHeavy, ProfileType::Flamegraph)
                | (Self::Alphabetical, ProfileType::Flamegraph)
        )
    }
}

impl fmt::Display for FlamegraphSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CallOrder => "call order",
            Self::LeftHeavy => "left heavy",
            Self::Alphabetical => "alphabetical",
        };
        write!(f, "{}", name)
    }
}

/// Flamegraph construction configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlamegraphConfig {
    /// Render leaf-to-root instead of root-to-leaf. A directive for the
    /// renderer only; geometry is untouched.
    pub inverted: bool,
    pub sort: FlamegraphSort,
}

impl Default for FlamegraphConfig {
    fn default() -> Self {
        Self {
            inverted: false,
            sort: FlamegraphSort::CallOrder,
        }
    }
}

impl FlamegraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort: FlamegraphSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }
}

/// One rendered occurrence
///
/// **Public** - consumed by the renderer. Exclusively owned by the
/// `Flamegraph` that created it; rebuilding produces a disjoint set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlameNode {
    /// Index into the frame table
    pub frame: usize,

    /// Left edge in config space
    pub start: f64,

    /// Right edge in config space (always > start)
    pub end: f64,

    /// Stack depth, root = 0
    pub depth: u32,

    /// Index of the parent node in the same `frames` array.
    /// Parents always precede their children, so `parent < own index`.
    pub parent: Option<usize>,
}

impl FlameNode {
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// A built flamegraph: the ordered node list plus its domain
///
/// Immutable after construction except for the two explicit alignment
/// mutators (`apply_offset`, `set_config_space`). A layout-policy change
/// replaces the instance wholesale via `relayout`.
#[derive(Debug, Clone)]
pub struct Flamegraph {
    frames: Vec<FlameNode>,
    depth: u32,
    config_space: Rect,
    inverted: bool,
    sort: FlamegraphSort,
    formatter: DurationFormatter,

    // Retained inputs so relayout can rebuild under a new config
    intervals: Vec<Interval>,
    profile_type: ProfileType,
    unit: ProfileUnit,
}

impl Flamegraph {
    /// Build a flamegraph from closed intervals
    ///
    /// **Public** - main entry point for construction
    ///
    /// # Errors
    /// * `FlamegraphError::IncompatibleSort` - the sort/profile-type
    ///   pairing is invalid; raised before any layout work
    pub fn build(
        intervals: Vec<Interval>,
        frames: &FrameTable,
        config: FlamegraphConfig,
        profile_type: ProfileType,
        unit: ProfileUnit,
    ) -> Result<Self, FlamegraphError> {
        if !config.sort.is_valid_for(profile_type) {
            return Err(FlamegraphError::IncompatibleSort {
                sort: config.sort,
                profile_type,
            });
        }

        let nodes = match config.sort {
            FlamegraphSort::CallOrder => layout_call_order(&intervals),
            FlamegraphSort::LeftHeavy | FlamegraphSort::Alphabetical => {
                layout_packed(&intervals, frames, config.sort)
            }
        };

        let depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let config_space = if nodes.is_empty() {
            Rect::placeholder()
        } else {
            let max_end = nodes.iter().map(|n| n.end).fold(f64::MIN, f64::max);
            Rect::new(0.0, 0.0, max_end, depth as f64)
        };

        debug!(
            "Built '{}' flamegraph: {} nodes, depth {}",
            config.sort,
            nodes.len(),
            depth
        );

        Ok(Self {
            frames: nodes,
            depth,
            config_space,
            inverted: config.inverted,
            sort: config.sort,
            formatter: DurationFormatter::new(unit),
            intervals,
            profile_type,
            unit,
        })
    }

    /// Run the full pipeline: ingest a profile's events, then build
    ///
    /// Widens the config space to the profile's declared `end_value`
    /// when it extends past the last node.
    ///
    /// # Errors
    /// * `FlamegraphError::Ingest` - the event stream is unbalanced
    /// * `FlamegraphError::IncompatibleSort` - invalid sort pairing
    pub fn from_profile(
        profile: &Profile,
        frames: &FrameTable,
        config: FlamegraphConfig,
    ) -> Result<Self, FlamegraphError> {
        let intervals = build_intervals(&profile.events, frames)?;
        let mut fg = Self::build(intervals, frames, config, profile.profile_type, profile.unit)?;
        if !fg.frames.is_empty() && profile.end_value > fg.config_space.width {
            fg.config_space.width = profile.end_value;
        }
        Ok(fg)
    }

    /// A flamegraph with no nodes and the placeholder config space
    ///
    /// The caller's fallback when construction fails or before data
    /// loads.
    pub fn empty() -> Self {
        Self {
            frames: Vec::new(),
            depth: 0,
            config_space: Rect::placeholder(),
            inverted: false,
            sort: FlamegraphSort::CallOrder,
            formatter: DurationFormatter::new(ProfileUnit::Milliseconds),
            intervals: Vec::new(),
            profile_type: ProfileType::Flamechart,
            unit: ProfileUnit::Milliseconds,
        }
    }

    /// Rebuild from the same intervals under a different config
    ///
    /// The result's config space is copied from this instance: the
    /// domain reflects total profiled duration, not a particular layout
    /// arrangement, and any `set_config_space` override survives. The
    /// rebuilt node array never aliases this one.
    ///
    /// # Errors
    /// * `FlamegraphError::IncompatibleSort` - the new sort is invalid
    ///   for the retained profile type
    pub fn relayout(
        &self,
        frames: &FrameTable,
        config: FlamegraphConfig,
    ) -> Result<Self, FlamegraphError> {
        let mut fg = Self::build(
            self.intervals.clone(),
            frames,
            config,
            self.profile_type,
            self.unit,
        )?;
        fg.config_space = self.config_space;
        Ok(fg)
    }

    /// Shift every node by `delta` along the time axis, in place
    ///
    /// Durations are preserved exactly. Used to align several
    /// flamegraphs (e.g. one per thread) on a shared timeline.
    pub fn apply_offset(&mut self, delta: f64) {
        for node in &mut self.frames {
            node.start += delta;
            node.end += delta;
        }
    }

    /// Override the bounding rectangle directly
    ///
    /// Used when a parent view forces a shared scale across several
    /// flamegraphs.
    pub fn set_config_space(&mut self, rect: Rect) {
        self.config_space = rect;
    }

    pub fn frames(&self) -> &[FlameNode] {
        &self.frames
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn config_space(&self) -> Rect {
        self.config_space
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn sort(&self) -> FlamegraphSort {
        self.sort
    }

    pub fn formatter(&self) -> &DurationFormatter {
        &self.formatter
    }

    pub fn unit(&self) -> ProfileUnit {
        self.unit
    }

    pub fn profile_type(&self) -> ProfileType {
        self.profile_type
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Drop zero-width intervals and order by (start asc, depth asc)
///
/// With stack discipline this is depth-first pre-order: a parent opens
/// no later than its children and sits one level above them.
fn chronological(intervals: &[Interval]) -> Vec<&Interval> {
    let mut sorted: Vec<&Interval> = intervals.iter().filter(|iv| iv.width() > 0.0).collect();
    sorted.sort_by(|a, b| a.start.total_cmp(&b.start).then(a.depth.cmp(&b.depth)));
    sorted
}

/// Call-order layout: real timestamps, ingestion depths
///
/// Parent links are recovered with a sweep stack of still-open output
/// indices. Popping everything at the new node's depth or deeper leaves
/// its enclosing frame on top.
fn layout_call_order(intervals: &[Interval]) -> Vec<FlameNode> {
    let sorted = chronological(intervals);
    let mut nodes: Vec<FlameNode> = Vec::with_capacity(sorted.len());
    let mut open: Vec<usize> = Vec::new();

    for iv in sorted {
        while matches!(open.last(), Some(&top) if nodes[top].depth >= iv.depth) {
            open.pop();
        }
        nodes.push(FlameNode {
            frame: iv.frame,
            start: iv.start,
            end: iv.end,
            depth: iv.depth,
            parent: open.last().copied(),
        });
        open.push(nodes.len() - 1);
    }

    nodes
}

/// A call-tree node during aggregated packing
struct TreeNode {
    frame: usize,
    /// Interval width: in a merged profile, the cumulative weight of
    /// this call path
    weight: f64,
    /// Child tree indices in encounter order
    children: Vec<usize>,
}

/// Children reordered per policy; stable sort keeps encounter order on
/// ties
fn ordered_children(
    children: &[usize],
    tree: &[TreeNode],
    frames: &FrameTable,
    sort: FlamegraphSort,
) -> Vec<usize> {
    let mut out = children.to_vec();
    match sort {
        FlamegraphSort::LeftHeavy => {
            out.sort_by(|&a, &b| tree[b].weight.total_cmp(&tree[a].weight));
        }
        FlamegraphSort::Alphabetical => {
            out.sort_by(|&a, &b| frames.name(tree[a].frame).cmp(frames.name(tree[b].frame)));
        }
        FlamegraphSort::CallOrder => {}
    }
    out
}

/// Aggregated layouts: rebuild the call tree, then pack depth-first
///
/// Each parent's children are reordered per policy and packed
/// left-to-right from the parent's packed start; roots pack as children
/// of a virtual root at offset zero. Emission is pre-order with an
/// explicit work stack, never recursion.
fn layout_packed(
    intervals: &[Interval],
    frames: &FrameTable,
    sort: FlamegraphSort,
) -> Vec<FlameNode> {
    let sorted = chronological(intervals);

    // Rebuild the tree with the same open-stack sweep as call order
    let mut tree: Vec<TreeNode> = Vec::with_capacity(sorted.len());
    let mut roots: Vec<usize> = Vec::new();
    let mut open: Vec<(u32, usize)> = Vec::new();

    for iv in sorted {
        while matches!(open.last(), Some(&(d, _)) if d >= iv.depth) {
            open.pop();
        }
        let idx = tree.len();
        tree.push(TreeNode {
            frame: iv.frame,
            weight: iv.width(),
            children: Vec::new(),
        });
        match open.last() {
            Some(&(_, parent)) => tree[parent].children.push(idx),
            None => roots.push(idx),
        }
        open.push((iv.depth, idx));
    }

    let mut nodes: Vec<FlameNode> = Vec::with_capacity(tree.len());

    // Work items: (tree index, packed start, depth, parent node index)
    let mut work: Vec<(usize, f64, u32, Option<usize>)> = Vec::new();
    let mut offset = 0.0;
    let seed: Vec<(usize, f64, u32, Option<usize>)> = ordered_children(&roots, &tree, frames, sort)
        .into_iter()
        .map(|root| {
            let item = (root, offset, 0, None);
            offset += tree[root].weight;
            item
        })
        .collect();
    work.extend(seed.into_iter().rev());

    while let Some((idx, start, depth, parent)) = work.pop() {
        let node = &tree[idx];
        nodes.push(FlameNode {
            frame: node.frame,
            start,
            end: start + node.weight,
            depth,
            parent,
        });
        let out_idx = nodes.len() - 1;

        let mut child_start = start;
        let items: Vec<(usize, f64, u32, Option<usize>)> =
            ordered_children(&node.children, &tree, frames, sort)
                .into_iter()
                .map(|child| {
                    let item = (child, child_start, depth + 1, Some(out_idx));
                    child_start += tree[child].weight;
                    item
                })
                .collect();
        // Reverse push keeps pre-order left-to-right
        work.extend(items.into_iter().rev());
    }

    nodes
}
