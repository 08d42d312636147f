pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod tree;
pub mod union_find;

/// Slot count used by the stack and queue playgrounds.
pub const DEFAULT_CAPACITY: usize = 8;

/// Largest size a playground may request for a container.
pub const MAX_CAPACITY: usize = 1_024;

pub use heap::MinHeap;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
pub use tree::BinarySearchTree;
pub use union_find::UnionFind;
