// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region-splitting bintree over a fixed world volume.
//!
//! The world is halved recursively along x, y, z, x, ... by depth. Records live in
//! leaves and are routed into every child region their box overlaps, so a record that
//! straddles a split is held by more than one leaf. Node regions are never stored;
//! every traversal recomputes them from the world box and the path taken.
//!
//! A leaf splits once it holds more than three records, unless all of their boxes
//! share a common volume or the region cannot be halved further along the active
//! axis. Removal coalesces a subtree back into one leaf when it shrinks to three
//! records or fewer.
//!
//! ## Attribution
//!
//! Because records are duplicated across leaves, collisions and query matches are
//! reported only by the leaf whose region contains the origin corner (the minimum
//! corner) of the overlap volume. Every overlap is therefore reported exactly once.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::mem;

use crate::record::{Record, cmp_names};
use crate::types::{Aabb3D, Axis, Sides};

/// Records a leaf holds before it tries to split.
pub const LEAF_CAPACITY: usize = 3;

enum Node<R> {
    Empty,
    Leaf(Leaf<R>),
    Internal(Box<Internal<R>>),
}

impl<R> Default for Node<R> {
    fn default() -> Self {
        Self::Empty
    }
}

/// Name-ordered records, unique by `Rc` identity.
struct Leaf<R> {
    records: Vec<Rc<R>>,
}

struct Internal<R> {
    axis: Axis,
    low: Node<R>,
    high: Node<R>,
}

impl<R: Record> Leaf<R> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert after any records with the same name. Returns `false` if already held.
    fn add(&mut self, record: Rc<R>) -> bool {
        if self.records.iter().any(|r| Rc::ptr_eq(r, &record)) {
            return false;
        }
        let at = self
            .records
            .partition_point(|r| cmp_names(&**r, &*record) != Ordering::Greater);
        self.records.insert(at, record);
        true
    }

    fn remove(&mut self, record: &Rc<R>) -> bool {
        match self.records.iter().position(|r| Rc::ptr_eq(r, record)) {
            Some(at) => {
                self.records.remove(at);
                true
            }
            None => false,
        }
    }

    fn share_common_volume(&self) -> bool {
        let mut boxes = self.records.iter().map(|r| r.bounds());
        let Some(first) = boxes.next() else {
            return true;
        };
        boxes
            .try_fold(first, |common, b| common.intersection(&b))
            .is_some()
    }

    fn should_split(&self, region: &Aabb3D, depth: usize) -> bool {
        self.len() > LEAF_CAPACITY
            && !self.share_common_volume()
            && region.width(Axis::at_depth(depth)) > 1
    }

    /// Pairs whose overlap starts inside `region`.
    fn collisions(&self, region: &Aabb3D) -> Vec<(Rc<R>, Rc<R>)> {
        let mut pairs = Vec::new();
        for (i, a) in self.records.iter().enumerate() {
            let a_bounds = a.bounds();
            for b in &self.records[i + 1..] {
                if let Some(overlap) = a_bounds.intersection(&b.bounds())
                    && region.contains_point(overlap.origin())
                {
                    pairs.push((Rc::clone(a), Rc::clone(b)));
                }
            }
        }
        pairs
    }

    /// Records whose overlap with `query` starts inside `region`.
    fn matches(&self, query: &Aabb3D, region: &Aabb3D) -> Vec<Rc<R>> {
        self.records
            .iter()
            .filter(|r| {
                r.bounds()
                    .intersection(query)
                    .is_some_and(|overlap| region.contains_point(overlap.origin()))
            })
            .cloned()
            .collect()
    }
}

impl<R: Record> Internal<R> {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            low: Node::Empty,
            high: Node::Empty,
        }
    }

    fn insert(&mut self, record: Rc<R>, region: Aabb3D, depth: usize) {
        let (low, high) = region.split(self.axis);
        let sides = Sides::route(&low, &high, &record.bounds());
        if sides.contains(Sides::LOW) {
            self.low = mem::take(&mut self.low).insert(Rc::clone(&record), low, depth + 1);
        }
        if sides.contains(Sides::HIGH) {
            self.high = mem::take(&mut self.high).insert(record, high, depth + 1);
        }
    }

    fn remove(&mut self, record: &Rc<R>, region: Aabb3D, depth: usize) -> bool {
        let (low, high) = region.split(self.axis);
        let sides = Sides::route(&low, &high, &record.bounds());
        let mut removed = false;
        if sides.contains(Sides::LOW) {
            let (node, hit) = mem::take(&mut self.low).remove(record, low, depth + 1);
            self.low = node;
            removed |= hit;
        }
        if sides.contains(Sides::HIGH) {
            let (node, hit) = mem::take(&mut self.high).remove(record, high, depth + 1);
            self.high = node;
            removed |= hit;
        }
        removed
    }

    /// Replace a node whose subtree became small with an empty node or a single leaf.
    fn collapse(self: Box<Self>, region: Aabb3D, depth: usize) -> Node<R> {
        if matches!((&self.low, &self.high), (Node::Empty, Node::Empty)) {
            return Node::Empty;
        }
        let mut merged = Leaf::new();
        if gather(&self.low, &mut merged, LEAF_CAPACITY)
            && gather(&self.high, &mut merged, LEAF_CAPACITY)
            && !merged.is_empty()
            && !merged.should_split(&region, depth)
        {
            log::trace!("merging {} records into one leaf at {region} {depth}", merged.len());
            return Node::Leaf(merged);
        }
        Node::Internal(self)
    }
}

/// Collect the distinct records below `node` into `into`.
///
/// Stops early and returns `false` once more than `limit` records were found.
fn gather<R: Record>(node: &Node<R>, into: &mut Leaf<R>, limit: usize) -> bool {
    match node {
        Node::Empty => true,
        Node::Leaf(leaf) => {
            for record in &leaf.records {
                into.add(Rc::clone(record));
                if into.len() > limit {
                    return false;
                }
            }
            true
        }
        Node::Internal(internal) => {
            gather(&internal.low, into, limit) && gather(&internal.high, into, limit)
        }
    }
}

impl<R: Record> Node<R> {
    fn insert(self, record: Rc<R>, region: Aabb3D, depth: usize) -> Self {
        match self {
            Self::Empty => {
                let mut leaf = Leaf::new();
                leaf.add(record);
                Self::Leaf(leaf)
            }
            Self::Leaf(mut leaf) => {
                if !leaf.add(record) || !leaf.should_split(&region, depth) {
                    return Self::Leaf(leaf);
                }
                log::trace!("splitting leaf of {} records at {region} {depth}", leaf.len());
                let mut internal = Box::new(Internal::new(Axis::at_depth(depth)));
                for held in leaf.records {
                    internal.insert(held, region, depth);
                }
                Self::Internal(internal)
            }
            Self::Internal(mut internal) => {
                internal.insert(record, region, depth);
                Self::Internal(internal)
            }
        }
    }

    fn remove(self, record: &Rc<R>, region: Aabb3D, depth: usize) -> (Self, bool) {
        match self {
            Self::Empty => (Self::Empty, false),
            Self::Leaf(mut leaf) => {
                let removed = leaf.remove(record);
                if leaf.is_empty() {
                    (Self::Empty, removed)
                } else {
                    (Self::Leaf(leaf), removed)
                }
            }
            Self::Internal(mut internal) => {
                let removed = internal.remove(record, region, depth);
                (internal.collapse(region, depth), removed)
            }
        }
    }
}

/// A spatial index that partitions a fixed world box.
pub struct Bintree<R> {
    world: Aabb3D,
    root: Node<R>,
}

impl<R> fmt::Debug for Bintree<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root {
            Node::Empty => "empty",
            Node::Leaf(_) => "leaf",
            Node::Internal(_) => "internal",
        };
        f.debug_struct("Bintree")
            .field("world", &self.world)
            .field("root", &root)
            .finish()
    }
}

impl<R> Bintree<R> {
    /// Create an empty tree over `world`.
    pub fn new(world: Aabb3D) -> Self {
        Self {
            world,
            root: Node::Empty,
        }
    }

    /// The partitioned volume.
    pub fn world(&self) -> Aabb3D {
        self.world
    }

    /// True if the tree holds no records.
    pub fn is_empty(&self) -> bool {
        matches!(self.root, Node::Empty)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.root = Node::Empty;
    }
}

impl<R: Record> Bintree<R> {
    /// Insert a record into every leaf its box overlaps.
    ///
    /// Inserting an `Rc` that is already held is a no-op.
    pub fn insert(&mut self, record: Rc<R>) {
        self.root = mem::take(&mut self.root).insert(record, self.world, 0);
    }

    /// Remove this exact `Rc` (by identity). Returns `true` if any leaf held it.
    pub fn remove(&mut self, record: &Rc<R>) -> bool {
        let (root, removed) = mem::take(&mut self.root).remove(record, self.world, 0);
        self.root = root;
        removed
    }

    /// Preorder listing of every node with its region and depth, then a node count.
    pub fn print(&self) -> String {
        TreeDump(self).to_string()
    }

    /// Every colliding pair, grouped by the leaf it is attributed to.
    pub fn collisions(&self) -> CollisionReport<R> {
        let mut leaves = Vec::new();
        collect_collisions(&self.root, self.world, 0, &mut leaves);
        CollisionReport { leaves }
    }

    /// Text form of [`Bintree::collisions`].
    pub fn collision_report(&self) -> String {
        self.collisions().to_string()
    }

    /// Walk the nodes whose regions overlap `query` and collect matching records.
    pub fn query(&self, query: &Aabb3D) -> IntersectReport<R> {
        let mut visits = Vec::new();
        if self.is_empty() {
            visits.push(Visit {
                kind: NodeKind::Empty,
                region: self.world,
                depth: 0,
                hits: Vec::new(),
            });
        } else {
            visit(&self.root, query, self.world, 0, &mut visits);
        }
        IntersectReport {
            query: *query,
            visits,
        }
    }

    /// Text form of [`Bintree::query`].
    pub fn intersect(&self, query: &Aabb3D) -> String {
        self.query(query).to_string()
    }
}

fn collect_collisions<R: Record>(
    node: &Node<R>,
    region: Aabb3D,
    depth: usize,
    out: &mut Vec<LeafCollisions<R>>,
) {
    match node {
        Node::Empty => {}
        Node::Leaf(leaf) => out.push(LeafCollisions {
            region,
            depth,
            pairs: leaf.collisions(&region),
        }),
        Node::Internal(internal) => {
            let (low, high) = region.split(internal.axis);
            collect_collisions(&internal.low, low, depth + 1, out);
            collect_collisions(&internal.high, high, depth + 1, out);
        }
    }
}

fn visit<R: Record>(
    node: &Node<R>,
    query: &Aabb3D,
    region: Aabb3D,
    depth: usize,
    out: &mut Vec<Visit<R>>,
) {
    match node {
        // Only an empty root counts as visited.
        Node::Empty => {}
        Node::Leaf(leaf) => out.push(Visit {
            kind: NodeKind::Leaf,
            region,
            depth,
            hits: leaf.matches(query, &region),
        }),
        Node::Internal(internal) => {
            out.push(Visit {
                kind: NodeKind::Internal,
                region,
                depth,
                hits: Vec::new(),
            });
            let (low, high) = region.split(internal.axis);
            let sides = Sides::route(&low, &high, query);
            if sides.contains(Sides::LOW) {
                visit(&internal.low, query, low, depth + 1, out);
            }
            if sides.contains(Sides::HIGH) {
                visit(&internal.high, query, high, depth + 1, out);
            }
        }
    }
}

/// The kind of a visited node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// The empty root of an empty tree.
    Empty,
    /// A leaf holding records.
    Leaf,
    /// An internal node with two children.
    Internal,
}

/// One node visited by [`Bintree::query`].
#[derive(Clone, Debug)]
pub struct Visit<R> {
    /// Node kind.
    pub kind: NodeKind,
    /// Region covered by the node.
    pub region: Aabb3D,
    /// Depth below the root.
    pub depth: usize,
    /// Records attributed to this node (leaves only).
    pub hits: Vec<Rc<R>>,
}

/// Result of [`Bintree::query`]: every visited node in preorder.
#[derive(Clone, Debug)]
pub struct IntersectReport<R> {
    /// The query box.
    pub query: Aabb3D,
    /// Visited nodes, preorder.
    pub visits: Vec<Visit<R>>,
}

impl<R> IntersectReport<R> {
    /// Number of nodes visited.
    pub fn visited(&self) -> usize {
        self.visits.len()
    }

    /// Every matching record, each reported once.
    pub fn hits(&self) -> impl Iterator<Item = &Rc<R>> + '_ {
        self.visits.iter().flat_map(|v| v.hits.iter())
    }
}

impl<R: Record> fmt::Display for IntersectReport<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.query.origin();
        let [xw, yw, zw] = self.query.extent();
        writeln!(f, "The following objects intersect ({x} {y} {z} {xw} {yw} {zw}):")?;
        for visit in &self.visits {
            match visit.kind {
                NodeKind::Empty => {}
                NodeKind::Internal => {
                    writeln!(f, "In Internal node {} {}", visit.region, visit.depth)?;
                }
                NodeKind::Leaf => {
                    writeln!(f, "In leaf node {} {}", visit.region, visit.depth)?;
                    for record in &visit.hits {
                        writeln!(f, "{record}")?;
                    }
                }
            }
        }
        writeln!(f, "{} nodes were visited in the bintree", self.visited())
    }
}

/// Collisions attributed to one leaf.
#[derive(Clone, Debug)]
pub struct LeafCollisions<R> {
    /// Region covered by the leaf.
    pub region: Aabb3D,
    /// Depth of the leaf.
    pub depth: usize,
    /// Colliding pairs, in leaf (name) order.
    pub pairs: Vec<(Rc<R>, Rc<R>)>,
}

/// Result of [`Bintree::collisions`]: one entry per leaf, preorder.
#[derive(Clone, Debug)]
pub struct CollisionReport<R> {
    /// Leaves in preorder, including those without collisions.
    pub leaves: Vec<LeafCollisions<R>>,
}

impl<R> CollisionReport<R> {
    /// Every colliding pair, each reported once.
    pub fn pairs(&self) -> impl Iterator<Item = &(Rc<R>, Rc<R>)> + '_ {
        self.leaves.iter().flat_map(|l| l.pairs.iter())
    }
}

impl<R: Record> fmt::Display for CollisionReport<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The following collisions exist in the database:")?;
        for leaf in &self.leaves {
            writeln!(f, "In leaf node {} {}", leaf.region, leaf.depth)?;
            for (a, b) in &leaf.pairs {
                writeln!(f, "({a}) and ({b})")?;
            }
        }
        Ok(())
    }
}

struct TreeDump<'a, R>(&'a Bintree<R>);

impl<R: Record> fmt::Display for TreeDump<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = write_node(f, &self.0.root, self.0.world, 0)?;
        writeln!(f, "{count} Bintree nodes printed")
    }
}

/// Writes `node` and its subtree; returns the number of nodes written.
fn write_node<R: Record>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<R>,
    region: Aabb3D,
    depth: usize,
) -> Result<usize, fmt::Error> {
    let pad = depth * 2;
    match node {
        Node::Empty => {
            writeln!(f, "{:pad$}E {region} {depth}", "")?;
            Ok(1)
        }
        Node::Leaf(leaf) => {
            writeln!(f, "{:pad$}Leaf with {} objects {region} {depth}", "", leaf.len())?;
            for record in &leaf.records {
                writeln!(f, "{:inner$}({record})", "", inner = pad + 2)?;
            }
            Ok(1)
        }
        Node::Internal(internal) => {
            writeln!(f, "{:pad$}I {region} {depth}", "")?;
            let (low, high) = region.split(internal.axis);
            let below = write_node(f, &internal.low, low, depth + 1)?
                + write_node(f, &internal.high, high, depth + 1)?;
            Ok(1 + below)
        }
    }
}
