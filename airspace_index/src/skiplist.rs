// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-ordered skip list over shared records.
//!
//! Nodes live in an arena with a free list; forward links are arena slots and slot 0
//! is the head sentinel. Node heights come from coin flips drawn from a caller-supplied
//! [`RngCore`], so a seeded generator reproduces the exact same structure.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use rand::RngCore;

use crate::record::Record;

/// Maximum number of levels a node can occupy.
pub const MAX_LEVEL: usize = 32;

const HEAD: usize = 0;

struct Node<R> {
    value: Option<Rc<R>>,
    forward: Vec<Option<usize>>,
}

impl<R> Node<R> {
    fn head() -> Self {
        Self {
            value: None,
            forward: vec![None; MAX_LEVEL],
        }
    }

    fn vacant() -> Self {
        Self {
            value: None,
            forward: Vec::new(),
        }
    }

    /// Highest level this node is linked into.
    fn level(&self) -> usize {
        self.forward.len().saturating_sub(1)
    }
}

/// A probabilistic ordered index keyed by record name.
///
/// Expected `O(log n)` insert, search, and remove, with ascending traversal over all
/// records or an inclusive name range.
pub struct SkipList<R, G> {
    nodes: Vec<Node<R>>, // slot 0 is the head
    free_list: Vec<usize>,
    level: usize,
    len: usize,
    rng: G,
}

impl<R, G> fmt::Debug for SkipList<R, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.len)
            .field("level", &self.level)
            .field("slots", &self.nodes.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<R, G> SkipList<R, G> {
    /// Create an empty list that draws node heights from `rng`.
    pub fn new(rng: G) -> Self {
        Self {
            nodes: vec![Node::head()],
            free_list: Vec::new(),
            level: 0,
            len: 0,
            rng,
        }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no records are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current top level (0 for an empty or flat list).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Drop every record. The random source keeps its state.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(Node::head());
        self.free_list.clear();
        self.level = 0;
        self.len = 0;
    }

    fn next(&self, idx: usize, level: usize) -> Option<usize> {
        self.nodes[idx].forward.get(level).copied().flatten()
    }
}

impl<R: Record, G> SkipList<R, G> {
    /// Look up a record by name.
    pub fn search(&self, name: &str) -> Option<&Rc<R>> {
        let (_, pred) = self.descend(name);
        let idx = self.next(pred, 0).filter(|&idx| self.key(idx) == Some(name))?;
        self.nodes[idx].value.as_ref()
    }

    /// Unlink and return the record with this name.
    pub fn remove(&mut self, name: &str) -> Option<Rc<R>> {
        let (update, pred) = self.descend(name);
        let target = self.next(pred, 0).filter(|&idx| self.key(idx) == Some(name))?;
        let height = self.nodes[target].level();
        for (level, &pred) in update.iter().enumerate().take(height + 1) {
            if self.next(pred, level) != Some(target) {
                break;
            }
            let after = self.next(target, level);
            self.nodes[pred].forward[level] = after;
        }
        while self.level > 0 && self.next(HEAD, self.level).is_none() {
            self.level -= 1;
        }
        let node = core::mem::replace(&mut self.nodes[target], Node::vacant());
        self.free_list.push(target);
        self.len -= 1;
        node.value
    }

    /// Records in ascending name order.
    pub fn iter(&self) -> Iter<'_, R, G> {
        Iter {
            list: self,
            cursor: self.next(HEAD, 0),
            high: None,
        }
    }

    /// Records whose names fall in `[low, high]`, ascending. Empty if `low > high`.
    pub fn range<'a>(&'a self, low: &str, high: &'a str) -> Iter<'a, R, G> {
        if low > high {
            return Iter {
                list: self,
                cursor: None,
                high: None,
            };
        }
        let (_, pred) = self.descend(low);
        Iter {
            list: self,
            cursor: self.next(pred, 0),
            high: Some(high),
        }
    }

    /// Visit every record in ascending name order.
    pub fn traverse(&self, mut visitor: impl FnMut(&Rc<R>)) {
        for record in self.iter() {
            visitor(record);
        }
    }

    /// Visit the records in `[low, high]` in ascending order.
    ///
    /// Does nothing if either bound is missing or `low > high`.
    pub fn traverse_range(
        &self,
        low: Option<&str>,
        high: Option<&str>,
        mut visitor: impl FnMut(&Rc<R>),
    ) {
        let (Some(low), Some(high)) = (low, high) else {
            return;
        };
        for record in self.range(low, high) {
            visitor(record);
        }
    }

    /// Height (number of levels) of every node in ascending name order.
    pub fn heights(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.next(HEAD, 0);
        while let Some(idx) = cursor {
            out.push(self.nodes[idx].level() + 1);
            cursor = self.next(idx, 0);
        }
        out
    }

    /// Listing of the head and every node with its height, then a node count.
    pub fn dump(&self) -> String {
        NameDump(self).to_string()
    }

    fn key(&self, idx: usize) -> Option<&str> {
        self.nodes[idx].value.as_deref().and_then(|r| r.name())
    }

    /// Move right while the next key is below `key`.
    fn walk_forward(&self, from: usize, level: usize, key: &str) -> usize {
        let mut current = from;
        while let Some(next) = self.next(current, level)
            && self.key(next) < Some(key)
        {
            current = next;
        }
        current
    }

    /// Returns the per-level predecessors of `key` and the level-0 predecessor.
    fn descend(&self, key: &str) -> ([usize; MAX_LEVEL], usize) {
        let mut update = [HEAD; MAX_LEVEL];
        let mut current = HEAD;
        for level in (0..=self.level).rev() {
            current = self.walk_forward(current, level, key);
            update[level] = current;
        }
        (update, current)
    }
}

impl<R: Record, G: RngCore> SkipList<R, G> {
    /// Insert a record. Returns `false` if it has no name or the name is taken.
    pub fn insert(&mut self, record: Rc<R>) -> bool {
        let Some(key) = record.name() else {
            return false;
        };
        let (update, pred) = self.descend(key);
        if let Some(next) = self.next(pred, 0)
            && self.key(next) == Some(key)
        {
            return false;
        }
        let height = self.random_level();
        if height > self.level {
            log::trace!("skip list grows from level {} to {height} for {key:?}", self.level);
            self.level = height;
        }
        let forward = (0..=height).map(|level| self.next(update[level], level)).collect();
        let idx = self.alloc(Node {
            value: Some(record),
            forward,
        });
        for (level, &pred) in update.iter().enumerate().take(height + 1) {
            self.nodes[pred].forward[level] = Some(idx);
        }
        self.len += 1;
        true
    }

    fn random_level(&mut self) -> usize {
        let mut level = 0;
        while level < MAX_LEVEL - 1 && (self.rng.next_u32() & 1) == 0 {
            level += 1;
        }
        level
    }

    fn alloc(&mut self, node: Node<R>) -> usize {
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }
}

/// Ascending iterator over a [`SkipList`], optionally bounded above.
pub struct Iter<'a, R, G> {
    list: &'a SkipList<R, G>,
    cursor: Option<usize>,
    high: Option<&'a str>,
}

impl<R, G> fmt::Debug for Iter<'_, R, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("cursor", &self.cursor)
            .field("high", &self.high)
            .finish_non_exhaustive()
    }
}

impl<'a, R: Record, G> Iterator for Iter<'a, R, G> {
    type Item = &'a Rc<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let value = self.list.nodes[idx].value.as_ref()?;
        if let Some(high) = self.high
            && value.name() > Some(high)
        {
            self.cursor = None;
            return None;
        }
        self.cursor = self.list.next(idx, 0);
        Some(value)
    }
}

struct NameDump<'a, R, G>(&'a SkipList<R, G>);

impl<R: Record, G> fmt::Display for NameDump<'_, R, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.0;
        if list.is_empty() {
            return f.write_str("SkipList is empty");
        }
        writeln!(f, "Node has depth {}, Value (null)", list.level + 1)?;
        for (record, height) in list.iter().zip(list.heights()) {
            writeln!(f, "Node has depth {height}, Value ({record})")?;
        }
        writeln!(f, "{} skiplist nodes printed", list.len)
    }
}
