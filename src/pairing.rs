//! Pairing heap with forward-only links
//!
//! A heap-ordered multi-way tree in binary disguise: every node holds
//! `down` (the head of its child list) and `next` (its right sibling).
//!
//! - O(1) push and merge
//! - O(log n) amortized pop
//!
//! Pop rebuilds the orphaned child list with the two-pass pairing
//! phase: merge adjacent pairs left to right onto an internal stack,
//! then fold the stack right to left into one heap. The reversal comes
//! for free because the stack is threaded through the spare `next`
//! links.
//!
//! With only forward links there are no handles and no traversal; this
//! is the variant for plain least-N / top-K work. See
//! [`AddressablePairingHeap`](crate::addressable::AddressablePairingHeap)
//! for the three-link sibling that supports both.

use crate::pointer_set::PointerSet;
use crate::traits::{check, Compare, Heap, HeapError, NaturalOrder};
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<T> = Option<NonNull<Node<T>>>;

/// Internal node: sibling and child-list links.
struct Node<T> {
    /// right sibling in the parent's child list
    next: Link<T>,
    /// head of this node's child list
    down: Link<T>,
    value: T,
}

/// Pairing heap
///
/// # Example
///
/// ```rust
/// use meldable_heaps::{Heap, PairingHeap};
///
/// let mut heap = PairingHeap::<i32>::new();
/// heap.push(5);
/// heap.push(1);
/// heap.push(3);
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(3));
/// ```
pub struct PairingHeap<T, C = NaturalOrder> {
    root: Link<T>,
    len: usize,
    _marker: PhantomData<(T, C)>,
}

impl<T, C> PairingHeap<T, C> {
    fn new_node(value: T) -> NonNull<Node<T>> {
        let node = Box::into_raw(Box::new(Node {
            next: None,
            down: None,
            value,
        }));
        unsafe { NonNull::new_unchecked(node) }
    }

    /// Frees the node and hands back its payload. The node must be
    /// detached and uniquely referenced.
    unsafe fn destroy_node(node: NonNull<Node<T>>) -> T {
        let node = *Box::from_raw(node.as_ptr());
        node.value
    }

    /// Makes `b` the successor of `a`; tolerates either side missing.
    unsafe fn cons(a: Link<T>, b: Link<T>) -> Link<T> {
        match a {
            Some(a) => {
                (*a.as_ptr()).next = b;
                Some(a)
            }
            None => b,
        }
    }

    /// Makes `b` the child-list head of `a`; tolerates either side
    /// missing.
    unsafe fn dunk(a: Link<T>, b: Link<T>) -> Link<T> {
        match a {
            Some(a) => {
                (*a.as_ptr()).down = b;
                Some(a)
            }
            None => b,
        }
    }

    /// Destructive single-linked enumeration of a dying tree.
    ///
    /// Pops the tip; if both links are occupied, the sibling chain is
    /// grafted to the end of the child's sibling spine. Amortized O(1)
    /// per popped node. Once started, the chain must be drained to
    /// `None`; it is no longer a heap.
    unsafe fn shred_pop(pref: &mut Link<T>) -> Link<T> {
        let retv = *pref;
        if let Some(node) = retv {
            let np = node.as_ptr();
            match ((*np).down, (*np).next) {
                (down, None) => *pref = down,
                (None, next) => *pref = next,
                (Some(down), Some(next)) => {
                    let mut scan = down;
                    while let Some(after) = (*scan.as_ptr()).next {
                        scan = after;
                    }
                    (*scan.as_ptr()).next = Some(next);
                    *pref = Some(down);
                }
            }
            (*np).down = None;
            (*np).next = None;
        }
        retv
    }

    fn purge(&mut self) {
        let mut hold = self.root.take();
        self.len = 0;
        unsafe {
            while let Some(node) = Self::shred_pop(&mut hold) {
                drop(Self::destroy_node(node));
            }
        }
    }
}

impl<T, C: Compare<T>> PairingHeap<T, C> {
    /// O(1) meld: the root with the not-greater key absorbs the other
    /// as the new head of its child list.
    unsafe fn meld(h1: Link<T>, h2: Link<T>) -> Link<T> {
        let retv = match (h1, h2) {
            (None, _) => h2,
            (_, None) => h1,
            (Some(a), Some(b)) => {
                if !C::lt(&(*b.as_ptr()).value, &(*a.as_ptr()).value) {
                    Self::dunk(h1, Self::cons(h2, (*a.as_ptr()).down))
                } else {
                    Self::dunk(h2, Self::cons(h1, (*b.as_ptr()).down))
                }
            }
        };
        if let Some(root) = retv {
            (*root.as_ptr()).next = None;
        }
        retv
    }

    /// The pairing phase: collapses a sibling list into one heap.
    ///
    /// First pass merges adjacent pairs left to right, stacking the
    /// results through their `next` links. Second pass folds the stack
    /// against the remaining odd element, which reverses the order at
    /// no cost.
    unsafe fn build(mut head: Link<T>) -> Link<T> {
        let mut stack: Link<T> = None;
        while let Some(a) = head {
            let b = match (*a.as_ptr()).next {
                Some(b) => b,
                None => break,
            };
            head = (*b.as_ptr()).next;
            stack = Self::cons(Self::meld(Some(a), Some(b)), stack);
        }
        while let Some(a) = stack {
            stack = (*a.as_ptr()).next;
            head = Self::meld(Some(a), head);
        }
        head
    }
}

impl<T, C: Compare<T>> Heap<T> for PairingHeap<T, C> {
    type Handle = ();

    fn new() -> Self {
        Self::default()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, value: T) {
        let node = Self::new_node(value);
        self.root = unsafe { Self::meld(self.root, Some(node)) };
        self.len += 1;
    }

    fn peek(&self) -> Option<&T> {
        self.root.map(|n| unsafe { &(*n.as_ptr()).value })
    }

    fn pop(&mut self) -> Option<T> {
        let root = self.root?;
        unsafe {
            self.root = Self::build((*root.as_ptr()).down);
            (*root.as_ptr()).down = None;
            self.len -= 1;
            Some(Self::destroy_node(root))
        }
    }

    fn merge(&mut self, other: &mut Self) {
        let donor = other.root.take();
        self.len += other.len;
        other.len = 0;
        self.root = unsafe { Self::meld(self.root, donor) };
    }

    fn clear(&mut self) {
        self.purge();
    }

    fn validate(&self) -> Result<(), HeapError> {
        // The shape below the root can be anything from a flat sibling
        // list to a vertical chain. The stack tip is replaced by the
        // sibling of the processed node instead of pushing both sides,
        // which keeps both extremes at depth one. Each child list is
        // swept against its parent as soon as the parent is processed.
        let mut set = PointerSet::with_capacity(self.len);
        let mut que: Vec<NonNull<Node<T>>> = Vec::new();
        let mut seen = 0usize;

        unsafe {
            if let Some(root) = self.root {
                check!((*root.as_ptr()).next.is_none(), "root has a sibling");
                check!(set.insert(root.as_ptr() as *const ()), "root seen twice");
                que.push(root);
                seen += 1;
            }

            while let Some(&node) = que.last() {
                let mut child = (*node.as_ptr()).down;
                match (*node.as_ptr()).next {
                    Some(sibling) => *que.last_mut().unwrap() = sibling,
                    None => {
                        que.pop();
                    }
                }
                if let Some(head) = child {
                    que.push(head);
                    while let Some(c) = child {
                        check!(
                            set.insert(c.as_ptr() as *const ()),
                            "child reached twice"
                        );
                        check!(
                            !C::lt(&(*c.as_ptr()).value, &(*node.as_ptr()).value),
                            "heap order broken in child list"
                        );
                        seen += 1;
                        child = (*c.as_ptr()).next;
                    }
                }
            }
        }

        check!(seen == self.len, "reachable node count differs from len");
        Ok(())
    }
}

impl<T, C> Default for PairingHeap<T, C> {
    fn default() -> Self {
        PairingHeap {
            root: None,
            len: 0,
            _marker: PhantomData,
        }
    }
}

impl<T, C> Drop for PairingHeap<T, C> {
    fn drop(&mut self) {
        self.purge();
    }
}
