//! Operation replays for the container playgrounds.
//!
//! Each request carries a list of operations; every operation yields one
//! step with the container contents afterwards. An operation the container
//! refuses (push onto a full stack, pop from an empty queue...) is recorded
//! with `ok: false` and the replay carries on. A requested size above
//! [`MAX_CAPACITY`] fails the whole request instead.

use serde::{Deserialize, Serialize};

use algovista::data_structures::{
    BinarySearchTree, LinkedList, MinHeap, Queue, Stack, UnionFind, DEFAULT_CAPACITY, MAX_CAPACITY,
};
use algovista::graph::{adj_list::default_label, Graph, VertexId};
use algovista::{StepError, StepResult, Trace};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaygroundStep<T> {
    /// Contents after the operation, in the container's natural order.
    pub contents: Vec<T>,
    /// Value produced by the operation (popped, peeked, found position...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<T>,
    /// Values visited by a tree search.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<T>,
    pub ok: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Playground<T> {
    pub steps: Trace<PlaygroundStep<T>>,
}

struct Replay<T> {
    steps: Trace<PlaygroundStep<T>>,
}

impl<T: Clone> Replay<T> {
    fn new() -> Self {
        Self { steps: Trace::new() }
    }

    fn ok(&mut self, contents: Vec<T>, output: Option<T>, description: String) {
        self.steps.push(PlaygroundStep { contents, output, path: Vec::new(), ok: true, description });
    }

    fn refused(&mut self, contents: Vec<T>, err: StepError) {
        tracing::debug!(%err, "operation refused");
        self.steps.push(PlaygroundStep {
            contents,
            output: None,
            path: Vec::new(),
            ok: false,
            description: err.to_string(),
        });
    }

    fn finish(self) -> Playground<T> {
        Playground { steps: self.steps }
    }
}

fn checked_size(container: &'static str, size: usize) -> StepResult<usize> {
    if size > MAX_CAPACITY {
        return Err(StepError::invalid(container, format!("size {size} exceeds the limit of {MAX_CAPACITY}")));
    }
    Ok(size)
}

// ---------------------------------------------------------------------------
// Stack / queue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StackOp {
    Push { value: i64 },
    Pop,
    Peek,
    Clear,
}

/// Contents are listed top first.
pub fn stack(capacity: Option<usize>, ops: &[StackOp]) -> StepResult<Playground<i64>> {
    let mut stack = Stack::bounded(checked_size("stack", capacity.unwrap_or(DEFAULT_CAPACITY))?);
    let mut replay = Replay::new();
    let contents = |s: &Stack<i64>| s.iter().copied().collect::<Vec<_>>();
    for op in ops {
        match *op {
            StackOp::Push { value } => match stack.push(value) {
                Ok(()) => replay.ok(contents(&stack), None, format!("Push {value}")),
                Err(err) => replay.refused(contents(&stack), err),
            },
            StackOp::Pop => match stack.pop() {
                Some(v) => replay.ok(contents(&stack), Some(v), format!("Pop {v}")),
                None => replay.refused(contents(&stack), StepError::Empty),
            },
            StackOp::Peek => match stack.peek().copied() {
                Some(v) => replay.ok(contents(&stack), Some(v), format!("Top is {v}")),
                None => replay.refused(contents(&stack), StepError::Empty),
            },
            StackOp::Clear => {
                stack.clear();
                replay.ok(Vec::new(), None, "Clear the stack".to_string());
            }
        }
    }
    Ok(replay.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QueueOp {
    Enqueue { value: i64 },
    Dequeue,
    Peek,
}

/// Contents are listed front first.
pub fn queue(capacity: Option<usize>, ops: &[QueueOp]) -> StepResult<Playground<i64>> {
    let mut queue = Queue::new(checked_size("queue", capacity.unwrap_or(DEFAULT_CAPACITY))?);
    let mut replay = Replay::new();
    let contents = |q: &Queue<i64>| q.iter().copied().collect::<Vec<_>>();
    for op in ops {
        match *op {
            QueueOp::Enqueue { value } => match queue.enqueue(value) {
                Ok(()) => replay.ok(contents(&queue), None, format!("Enqueue {value}")),
                Err(err) => replay.refused(contents(&queue), err),
            },
            QueueOp::Dequeue => match queue.dequeue() {
                Some(v) => replay.ok(contents(&queue), Some(v), format!("Dequeue {v}")),
                None => replay.refused(contents(&queue), StepError::Empty),
            },
            QueueOp::Peek => match queue.peek().copied() {
                Some(v) => replay.ok(contents(&queue), Some(v), format!("Front is {v}")),
                None => replay.refused(contents(&queue), StepError::Empty),
            },
        }
    }
    Ok(replay.finish())
}

// ---------------------------------------------------------------------------
// Linked list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ListOp {
    PushFront { value: i64 },
    PushBack { value: i64 },
    Insert { position: usize, value: i64 },
    Remove { value: i64 },
    PopFront,
    Search { value: i64 },
}

fn index(i: usize) -> i64 {
    i64::try_from(i).unwrap_or(i64::MAX)
}

pub fn linked_list(ops: &[ListOp]) -> Playground<i64> {
    let mut list = LinkedList::new();
    let mut replay = Replay::new();
    let contents = |l: &LinkedList<i64>| l.iter().copied().collect::<Vec<_>>();
    for op in ops {
        match *op {
            ListOp::PushFront { value } => {
                list.push_front(value);
                replay.ok(contents(&list), None, format!("Insert {value} at the head"));
            }
            ListOp::PushBack { value } => {
                list.push_back(value);
                replay.ok(contents(&list), None, format!("Append {value} at the tail"));
            }
            ListOp::Insert { position, value } => {
                let at = list.insert_at(position, value);
                replay.ok(contents(&list), Some(index(at)), format!("Insert {value} at position {at}"));
            }
            ListOp::Remove { value } => match list.remove(&value) {
                Some(at) => replay.ok(contents(&list), Some(index(at)), format!("Remove {value} from position {at}")),
                None => replay.refused(
                    contents(&list),
                    StepError::invalid("linked list", format!("{value} is not in the list")),
                ),
            },
            ListOp::PopFront => match list.pop_front() {
                Some(v) => replay.ok(contents(&list), Some(v), format!("Remove head {v}")),
                None => replay.refused(contents(&list), StepError::Empty),
            },
            ListOp::Search { value } => {
                let found = list.position(&value);
                let description = match found {
                    Some(at) => format!("Found {value} at position {at}"),
                    None => format!("{value} is not in the list"),
                };
                replay.ok(contents(&list), found.map(index), description);
            }
        }
    }
    replay.finish()
}

// ---------------------------------------------------------------------------
// Binary search tree
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TreeOp {
    Insert { value: i64 },
    Remove { value: i64 },
    Search { value: i64 },
}

/// Contents are the level order, which pins down the tree shape.
pub fn binary_search_tree(ops: &[TreeOp]) -> Playground<i64> {
    let mut tree = BinarySearchTree::new();
    let mut replay = Replay::new();
    let contents = |t: &BinarySearchTree<i64>| t.level_order().into_iter().copied().collect::<Vec<_>>();
    for op in ops {
        match *op {
            TreeOp::Insert { value } => {
                let description = if tree.insert(value) {
                    format!("Insert {value}")
                } else {
                    format!("{value} is already in the tree")
                };
                replay.ok(contents(&tree), None, description);
            }
            TreeOp::Remove { value } => {
                if tree.remove(&value) {
                    replay.ok(contents(&tree), None, format!("Remove {value}"));
                } else {
                    replay.refused(
                        contents(&tree),
                        StepError::invalid("binary search tree", format!("{value} is not in the tree")),
                    );
                }
            }
            TreeOp::Search { value } => {
                let path: Vec<i64> = tree.search_path(&value).into_iter().copied().collect();
                let found = path.last() == Some(&value);
                let description = if found {
                    format!("Found {value} after {} comparisons", path.len())
                } else {
                    format!("{value} is not in the tree")
                };
                replay.steps.push(PlaygroundStep {
                    contents: contents(&tree),
                    output: found.then_some(value),
                    path,
                    ok: true,
                    description,
                });
            }
        }
    }
    replay.finish()
}

// ---------------------------------------------------------------------------
// Union-find / min-heap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SetOp {
    Union { a: usize, b: usize },
    Find { x: usize },
    Connected { a: usize, b: usize },
}

/// Contents are the parent array.
pub fn union_find(size: usize, ops: &[SetOp]) -> StepResult<Playground<usize>> {
    let mut sets = UnionFind::new(checked_size("union-find", size)?);
    let mut replay = Replay::new();
    for op in ops {
        let out_of_range = match *op {
            SetOp::Union { a, b } | SetOp::Connected { a, b } => [a, b].into_iter().find(|&v| v >= size),
            SetOp::Find { x } => (x >= size).then_some(x),
        };
        if let Some(v) = out_of_range {
            replay.refused(
                sets.parents().to_vec(),
                StepError::invalid("union-find", format!("element {v} is outside 0..{size}")),
            );
            continue;
        }
        match *op {
            SetOp::Union { a, b } => {
                let description = if sets.union(a, b) {
                    format!("Union {a} and {b}")
                } else {
                    format!("{a} and {b} are already in the same set")
                };
                replay.ok(sets.parents().to_vec(), None, description);
            }
            SetOp::Find { x } => {
                let root = sets.find(x);
                replay.ok(sets.parents().to_vec(), Some(root), format!("Representative of {x} is {root}"));
            }
            SetOp::Connected { a, b } => {
                let same = sets.connected(a, b);
                let description = if same {
                    format!("{a} and {b} are connected")
                } else {
                    format!("{a} and {b} are in different sets")
                };
                replay.ok(sets.parents().to_vec(), None, description);
            }
        }
    }
    Ok(replay.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HeapOp {
    Push { value: i64 },
    Pop,
}

/// Contents are the heap array.
pub fn min_heap(ops: &[HeapOp]) -> Playground<i64> {
    let mut heap = MinHeap::new();
    let mut replay = Replay::new();
    let contents = |h: &MinHeap<i64>| h.iter().copied().collect::<Vec<_>>();
    for op in ops {
        match *op {
            HeapOp::Push { value } => {
                let slot = heap.push(value);
                replay.ok(contents(&heap), None, format!("Push {value}, settles at slot {slot}"));
            }
            HeapOp::Pop => match heap.pop_min() {
                Some(v) => replay.ok(contents(&heap), Some(v), format!("Pop minimum {v} and sift down")),
                None => replay.refused(contents(&heap), StepError::Empty),
            },
        }
    }
    replay.finish()
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum GraphOp {
    AddVertex {
        #[serde(default)]
        label: Option<String>,
    },
    AddEdge {
        from: VertexId,
        to: VertexId,
        #[serde(default)]
        weight: Option<i64>,
    },
    RemoveEdge { from: VertexId, to: VertexId },
    RemoveVertex { id: VertexId },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStep {
    pub graph: Graph,
    /// Id of an added vertex or index of an added edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<usize>,
    pub ok: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphPlayground {
    pub steps: Trace<GraphStep>,
}

/// Vertex and edge counts are both held to [`MAX_CAPACITY`].
pub fn graph(directed: bool, ops: &[GraphOp]) -> GraphPlayground {
    let mut g = Graph::new(directed);
    let mut steps = Trace::new();
    for op in ops {
        let applied: StepResult<(Option<usize>, String)> = match op {
            GraphOp::AddVertex { .. } if g.vertex_count() >= MAX_CAPACITY => {
                Err(StepError::CapacityExceeded { capacity: MAX_CAPACITY })
            }
            GraphOp::AddVertex { label } => {
                let label = label.clone().unwrap_or_else(|| default_label(g.vertex_count()));
                let id = g.add_vertex(label);
                Ok((Some(id), format!("Add vertex {}", g.label(id))))
            }
            GraphOp::AddEdge { .. } if g.edge_count() >= MAX_CAPACITY => {
                Err(StepError::CapacityExceeded { capacity: MAX_CAPACITY })
            }
            GraphOp::AddEdge { from, to, weight } => g.add_edge(*from, *to, *weight).map(|index| {
                let (a, b) = (g.label(*from), g.label(*to));
                let description = match weight {
                    Some(w) => format!("Add edge {a}-{b} weighing {w}"),
                    None => format!("Add edge {a}-{b}"),
                };
                (Some(index), description)
            }),
            GraphOp::RemoveEdge { from, to } => g.remove_edge(*from, *to).map(|e| {
                (None, format!("Remove edge {}-{}", g.label(e.from), g.label(e.to)))
            }),
            GraphOp::RemoveVertex { id } => {
                let before = g.edge_count();
                g.remove_vertex(*id).map(|v| {
                    let dropped = before - g.edge_count();
                    (None, format!("Remove vertex {} and its {dropped} edges", v.label))
                })
            }
        };
        let step = match applied {
            Ok((output, description)) => GraphStep { graph: g.clone(), output, ok: true, description },
            Err(err) => {
                tracing::debug!(%err, "operation refused");
                GraphStep { graph: g.clone(), output: None, ok: false, description: err.to_string() }
            }
        };
        steps.push(step);
    }
    GraphPlayground { steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last<T: Clone>(p: &Playground<T>) -> PlaygroundStep<T> {
        p.steps.last().unwrap().clone()
    }

    #[test]
    fn stack_overflow_is_recorded_not_fatal() {
        let ops = [StackOp::Push { value: 1 }, StackOp::Push { value: 2 }, StackOp::Push { value: 3 }, StackOp::Pop];
        let out = stack(Some(2), &ops).unwrap();
        assert_eq!(out.steps.len(), 4);
        let overflow = out.steps.get(2).unwrap();
        assert!(!overflow.ok);
        assert_eq!(overflow.contents, vec![2, 1]);
        assert_eq!(last(&out).output, Some(2));
        assert_eq!(last(&out).contents, vec![1]);
    }

    #[test]
    fn queue_is_fifo_and_reports_empty() {
        let ops = [
            QueueOp::Enqueue { value: 1 },
            QueueOp::Enqueue { value: 2 },
            QueueOp::Dequeue,
            QueueOp::Dequeue,
            QueueOp::Dequeue,
        ];
        let out = queue(None, &ops).unwrap();
        assert_eq!(out.steps.get(2).unwrap().output, Some(1));
        assert_eq!(out.steps.get(3).unwrap().output, Some(2));
        assert!(!last(&out).ok);
        assert_eq!(last(&out).description, StepError::Empty.to_string());
    }

    #[test]
    fn linked_list_insert_clamps() {
        let ops = [
            ListOp::PushBack { value: 1 },
            ListOp::PushBack { value: 3 },
            ListOp::Insert { position: 9, value: 4 },
            ListOp::Insert { position: 1, value: 2 },
        ];
        let out = linked_list(&ops);
        assert_eq!(out.steps.get(2).unwrap().output, Some(2));
        assert_eq!(last(&out).contents, vec![1, 2, 3, 4]);
    }

    #[test]
    fn tree_search_records_path() {
        let mut ops: Vec<TreeOp> = [50, 30, 70, 20, 40].iter().map(|&value| TreeOp::Insert { value }).collect();
        ops.push(TreeOp::Search { value: 40 });
        ops.push(TreeOp::Remove { value: 30 });
        let out = binary_search_tree(&ops);
        let search = out.steps.get(5).unwrap();
        assert_eq!(search.path, vec![50, 30, 40]);
        assert_eq!(search.output, Some(40));
        assert_eq!(last(&out).contents, vec![50, 40, 70, 20]);
    }

    #[test]
    fn union_find_rejects_out_of_range() {
        let ops = [SetOp::Union { a: 0, b: 1 }, SetOp::Union { a: 1, b: 5 }, SetOp::Connected { a: 0, b: 1 }];
        let out = union_find(3, &ops).unwrap();
        assert!(out.steps.get(0).unwrap().ok);
        assert!(!out.steps.get(1).unwrap().ok);
        assert_eq!(last(&out).description, "0 and 1 are connected");
    }

    #[test]
    fn heap_pops_in_order() {
        let ops = [HeapOp::Push { value: 5 }, HeapOp::Push { value: 1 }, HeapOp::Push { value: 3 }, HeapOp::Pop, HeapOp::Pop];
        let out = min_heap(&ops);
        assert_eq!(out.steps.get(3).unwrap().output, Some(1));
        assert_eq!(last(&out).output, Some(3));
        assert_eq!(last(&out).contents, vec![5]);
    }

    #[test]
    fn oversized_containers_are_rejected() {
        assert!(stack(Some(MAX_CAPACITY), &[]).is_ok());
        let err = stack(Some(usize::MAX / 2), &[]).unwrap_err();
        assert!(matches!(err, StepError::InvalidInput { algorithm: "stack", .. }));
        assert!(queue(Some(MAX_CAPACITY + 1), &[]).is_err());
        assert!(union_find(usize::MAX, &[SetOp::Find { x: 0 }]).is_err());
    }

    #[test]
    fn graph_replays_removals() {
        let ops = vec![
            GraphOp::AddVertex { label: None },
            GraphOp::AddVertex { label: Some("Hub".to_string()) },
            GraphOp::AddVertex { label: None },
            GraphOp::AddEdge { from: 0, to: 1, weight: Some(3) },
            GraphOp::AddEdge { from: 1, to: 2, weight: None },
            GraphOp::RemoveEdge { from: 9, to: 0 },
            GraphOp::RemoveVertex { id: 1 },
        ];
        let out = graph(false, &ops);
        assert_eq!(out.steps.len(), 7);
        assert_eq!(out.steps.get(1).unwrap().output, Some(1));
        assert_eq!(out.steps.get(3).unwrap().description, "Add edge A-Hub weighing 3");
        assert!(!out.steps.get(5).unwrap().ok);
        let last = out.steps.last().unwrap();
        assert_eq!(last.description, "Remove vertex Hub and its 2 edges");
        assert_eq!(last.graph.vertex_count(), 2);
        assert_eq!(last.graph.edge_count(), 0);
        assert_eq!(last.graph.label(1), "C");
    }

    #[test]
    fn graph_vertex_count_is_capped() {
        let ops = vec![GraphOp::AddVertex { label: None }; MAX_CAPACITY + 1];
        let out = graph(true, &ops);
        let last = out.steps.last().unwrap();
        assert!(!last.ok);
        assert_eq!(last.graph.vertex_count(), MAX_CAPACITY);
    }
}
