//! Singly-linked list with owned nodes.
//!
//! Variables:
//!   head : Option<Box<Node<T>>>  pointer to first node, None if empty
//!   N    : usize                 number of nodes
//!
//! Equations:
//!   push_front(x): new_node.next = head,  head = new_node,  N' = N+1  O(1)
//!   pop_front():   head = head.next,  N' = N-1                         O(1)
//!   push_back(x):  walk to tail, tail.next = new_node                  O(N)
//!   insert_at(p,x): p' = min(p, N), splice before node p'             O(p)
//!   remove(x):     unlink first node with val == x                     O(N)

struct Node<T> {
    val: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn push_front(&mut self, val: T) {
        let node = Box::new(Node { val, next: self.head.take() });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.val
        })
    }

    pub fn push_back(&mut self, val: T) {
        let new_node = Box::new(Node { val, next: None });
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(new_node);
        self.len += 1;
    }

    /// Insert so the new value ends up at `position`, clamped to the tail.
    /// Returns the position actually used.
    pub fn insert_at(&mut self, position: usize, val: T) -> usize {
        let position = position.min(self.len);
        let mut cur = &mut self.head;
        for _ in 0..position {
            match cur {
                Some(node) => cur = &mut node.next,
                None => break,
            }
        }
        let next = cur.take();
        *cur = Some(Box::new(Node { val, next }));
        self.len += 1;
        position
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.val)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.iter().last()
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }

    pub fn clear(&mut self) {
        // Unlink iteratively so long lists do not recurse in Drop.
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn position(&self, val: &T) -> Option<usize> {
        self.iter().position(|v| v == val)
    }

    pub fn contains(&self, val: &T) -> bool {
        self.position(val).is_some()
    }

    /// Unlink the first node holding `val`; returns its former position.
    pub fn remove(&mut self, val: &T) -> Option<usize> {
        let mut cur = &mut self.head;
        let mut index = 0;
        loop {
            match cur.take() {
                None => return None,
                Some(mut node) if node.val == *val => {
                    *cur = node.next.take();
                    self.len -= 1;
                    return Some(index);
                }
                Some(node) => {
                    cur = &mut cur.insert(node).next;
                    index += 1;
                }
            }
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        let mut tail = &mut list.head;
        for val in iter {
            let node = tail.insert(Box::new(Node { val, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}
