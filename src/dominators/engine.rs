//! The three-phase immediate dominators engine.
//!
//! Records for all reachable nodes live in an arena, created in discovery order, so a
//! record's arena index doubles as its discovery id. Every id comparison in this module
//! relies on that: a record with a larger index was discovered later and therefore cannot
//! dominate a record with a smaller index.

use std::collections::VecDeque;

use crate::{
    dominators::sets::{IdSet, RecordSet},
    graph::{Graph, NodeState},
    progress::Progress,
};

/// Arena index of the root record. The root is always discovered first.
const ROOT: usize = 0;

/// Per-node computation state, one per reachable node.
struct Record<N> {
    /// Handle of the external node this record belongs to
    node: N,
    /// Largest id discovered while this record's subtree was being explored
    max_reachable: usize,
    /// Ids of all sources from which an edge into this node has been seen, in order
    in_refs: IdSet,
    /// Current candidate dominator. Only ever moves to smaller ids; equals the true
    /// immediate dominator once the worklist drains.
    dom: usize,
    /// Candidate dominator as of the last reconciliation. Differs from `dom` exactly
    /// while this record awaits a revisit.
    old_dom: usize,
    /// Records whose current candidate dominator is this record
    dominated: RecordSet,
    /// Records whose `old_dom` is this record but whose `dom` has since moved.
    /// Present exactly while this record sits on the revisit worklist.
    revisit: Option<RecordSet>,
}

/// A unit of pending traversal work.
enum Visit<N> {
    /// An edge from the record at `src` to the node `dst`, not yet examined
    Edge { src: usize, dst: N },
    /// Marker popped once everything below the record has been explored
    Finished(usize),
}

/// State for one dominators computation.
pub(crate) struct Engine<N> {
    /// All records, indexed by discovery id
    records: Vec<Record<N>>,
    /// Explicit traversal stack; replaces call-stack recursion so reference chains of
    /// arbitrary depth cannot overflow the stack
    dfs: Vec<Visit<N>>,
    /// FIFO of records with a pending revisit set
    worklist: VecDeque<usize>,
}

impl<N: Clone> Engine<N> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            dfs: Vec::new(),
            worklist: VecDeque::new(),
        }
    }

    /// Number of records created so far, which is also the number of reachable nodes
    /// discovered so far.
    pub(crate) fn node_count(&self) -> usize {
        self.records.len()
    }

    /// Creates a record for `node` with candidate dominator `dom`, returning its id.
    fn insert(&mut self, node: N, dom: usize) -> usize {
        let id = self.records.len();
        self.records.push(Record {
            node,
            max_reachable: id,
            in_refs: IdSet::new(),
            dom,
            old_dom: dom,
            dominated: RecordSet::new(),
            revisit: None,
        });
        id
    }

    /// Phase 1: depth-first discovery with initial candidate dominators.
    ///
    /// Labels every node reachable from `root` with a discovery id and an initial
    /// dominator estimate. Edges into already-discovered nodes tighten the estimate
    /// immediately where the discovery order allows it; harder corrections are queued
    /// for [`resolve`](Self::resolve).
    pub(crate) fn traverse<G, P>(&mut self, graph: &mut G, progress: &mut P, root: &N)
    where
        G: Graph<Node = N>,
        P: Progress,
    {
        let root_record = self.insert(root.clone(), ROOT);
        graph.set_state(root, Some(NodeState(root_record)));
        progress.advance();

        self.dfs.push(Visit::Finished(root_record));
        for child in graph.references(root) {
            self.dfs.push(Visit::Edge {
                src: root_record,
                dst: child,
            });
        }

        while let Some(step) = self.dfs.pop() {
            match step {
                Visit::Finished(record) => {
                    let last_discovered = self.records.len() - 1;
                    self.records[record].max_reachable = last_discovered;
                }
                Visit::Edge { src, dst } => match graph.state(&dst) {
                    Some(NodeState(seen)) => self.merge(src, seen),
                    None => {
                        let record = self.insert(dst.clone(), src);
                        self.records[record].in_refs.push(src);
                        self.records[src].dominated.push(record);
                        graph.set_state(&dst, Some(NodeState(record)));
                        progress.advance();

                        self.dfs.push(Visit::Finished(record));
                        for child in graph.references(&dst) {
                            self.dfs.push(Visit::Edge { src: record, dst: child });
                        }
                    }
                },
            }
        }
    }

    /// Handles an edge into the already-discovered record `dst`.
    ///
    /// Walks the dominator chain up from `src` to the nearest record whose id does not
    /// exceed the previously seen source of `dst`. If that meeting point lies above
    /// `dst`'s current candidate, the candidate is pulled up to it.
    fn merge(&mut self, src: usize, dst: usize) {
        let seen = self.records[dst].in_refs.last();
        self.records[dst].in_refs.push(src);

        let mut meet = src;
        while meet > seen {
            meet = self.records[meet].dom;
        }

        if meet < self.records[dst].dom {
            if self.records[dst].dom == self.records[dst].old_dom {
                self.schedule(dst);
            }
            let current = self.records[dst].dom;
            self.records[current].dominated.remove(dst);

            let mut dom = current;
            while dom > meet {
                dom = self.records[dom].dom;
            }
            self.records[dst].dom = dom;
            self.records[dom].dominated.push(dst);
        }
    }

    /// Queues `record` for revisit under its `old_dom`.
    ///
    /// The target record is enqueued on the worklist only when its revisit set is
    /// freshly created, keeping the enqueue idempotent.
    fn schedule(&mut self, record: usize) {
        let target = self.records[record].old_dom;
        let entry = &mut self.records[target];
        let newly_queued = entry.revisit.is_none();
        entry.revisit.get_or_insert_with(RecordSet::new).push(record);
        if newly_queued {
            self.worklist.push_back(target);
        }
    }

    /// Phase 2: iterative correction until every candidate dominator is final.
    ///
    /// Terminates because every re-homing moves some record's candidate to a strictly
    /// smaller id, and ids are bounded below by the root.
    pub(crate) fn resolve(&mut self) {
        while let Some(old_dom) = self.worklist.pop_front() {
            // Queued records always carry a pending set; enqueue and take are paired.
            let Some(pending) = self.records[old_dom].revisit.take() else {
                continue;
            };

            // Any record still filed under `old_dom` that a pending record can reach on
            // an ascending-id path is provably not dominated by `old_dom`; re-home it
            // beside the pending record. Swap-remove keeps the scan index in place so
            // the element moved into the slot is examined too.
            let mut index = 0;
            while index < self.records[old_dom].dominated.len() {
                let child = self.records[old_dom].dominated.get(index);
                let mut moved = false;
                for source in pending.iter() {
                    if self.reaches_ascending(source, child) {
                        if self.records[child].dom == self.records[child].old_dom {
                            self.schedule(child);
                        }
                        self.records[old_dom].dominated.swap_remove(index);
                        let dom = self.records[source].dom;
                        self.records[child].dom = dom;
                        self.records[dom].dominated.push(child);
                        moved = true;
                        break;
                    }
                }
                if !moved {
                    index += 1;
                }
            }

            // The pending records reconcile one level up the old dominator chain. Any
            // of them whose candidate has moved further must be revisited from there.
            let next_old_dom = self.records[old_dom].old_dom;
            for source in pending.iter() {
                self.records[source].old_dom = next_old_dom;
                if self.records[source].dom != next_old_dom {
                    self.schedule(source);
                }
            }
        }
    }

    /// Tests whether `dst` is reachable from `src` along a path of strictly ascending
    /// ids, not counting `dst` itself.
    ///
    /// If `dst` was discovered before `src`, such a path exists exactly when some edge
    /// into `dst` originates inside `src`'s subtree. Otherwise `dst` lies on such a path
    /// exactly when it is part of `src`'s subtree.
    fn reaches_ascending(&self, src: usize, dst: usize) -> bool {
        let max_reachable = self.records[src].max_reachable;
        if dst < src {
            self.records[dst].in_refs.any_in_range(src, max_reachable)
        } else {
            dst <= max_reachable
        }
    }

    /// Phase 3: reports the final dominator of every non-root record and detaches all
    /// engine state from the graph.
    pub(crate) fn report<G, P>(&mut self, graph: &mut G, progress: &mut P, root: &N)
    where
        G: Graph<Node = N>,
        P: Progress,
    {
        graph.set_state(root, None);
        progress.advance();

        let mut stack = vec![ROOT];
        while let Some(record) = stack.pop() {
            let dominated = std::mem::take(&mut self.records[record].dominated);
            for child in dominated.iter() {
                debug_assert_eq!(self.records[child].dom, record);
                debug_assert_eq!(self.records[child].old_dom, record);

                graph.set_dominator(&self.records[child].node, &self.records[record].node);
                graph.set_state(&self.records[child].node, None);
                progress.advance();
                stack.push(child);
            }
        }
    }
}
