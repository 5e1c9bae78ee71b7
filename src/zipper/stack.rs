//! Internal persistent cons stack.
//!
//! The spine of a [`Zipper`](super::Zipper): each side of the focus is one
//! of these stacks, with the top always being the element nearest to the
//! focus. Nodes are reference-counted, so pushing and popping share all
//! remaining structure with the source stack in O(1).

use super::ReferenceCounter;

/// Internal node structure for the stack.
///
/// Each node contains an element and an optional reference to the node
/// below it. Using a reference counter enables structural sharing between
/// stacks.
#[derive(Debug)]
struct Node<T> {
    /// The element stored in this node.
    element: T,
    /// Reference to the node below (if any).
    below: Option<ReferenceCounter<Self>>,
}

/// A persistent (immutable) cons stack.
///
/// All operations return new stacks without modifying the original.
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `push`          | O(1)       |
/// | `peek`          | O(1)       |
/// | `pop`           | O(1)       |
/// | `len`           | O(1)       |
/// | `from_top_down` | O(n)       |
#[derive(Debug)]
pub(crate) struct Stack<T> {
    /// Reference to the top node (if any).
    top: Option<ReferenceCounter<Node<T>>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            top: None,
            length: 0,
        }
    }

    /// Builds a stack from a Vec whose first element becomes the top.
    ///
    /// Uses `Vec::pop()` to consume elements from the end, which is O(1),
    /// so the whole construction is O(n) with no reverse pass.
    pub(crate) fn from_top_down(mut elements: Vec<T>) -> Self {
        let length = elements.len();

        let mut top: Option<ReferenceCounter<Node<T>>> = None;
        while let Some(element) = elements.pop() {
            top = Some(ReferenceCounter::new(Node {
                element,
                below: top,
            }));
        }

        Self { top, length }
    }

    /// Returns a new stack with `element` on top.
    ///
    /// The new stack shares all existing nodes with the original.
    #[inline]
    pub(crate) fn push(&self, element: T) -> Self {
        Self {
            top: Some(ReferenceCounter::new(Node {
                element,
                below: self.top.clone(),
            })),
            length: self.length + 1,
        }
    }

    /// Returns a reference to the top element, or `None` if the stack is
    /// empty.
    #[inline]
    pub(crate) fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.element)
    }

    /// Decomposes the stack into its top element and the stack below it.
    ///
    /// Returns `None` if the stack is empty. The returned stack shares all
    /// of its nodes with the original.
    #[inline]
    pub(crate) fn pop(&self) -> Option<(&T, Self)> {
        self.top.as_ref().map(|node| {
            let below = Self {
                top: node.below.clone(),
                length: self.length.saturating_sub(1),
            };
            (&node.element, below)
        })
    }

    /// Returns the number of elements in the stack.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Returns an iterator over references to the elements, top first.
    #[inline]
    pub(crate) const fn iter(&self) -> StackIterator<'_, T> {
        StackIterator {
            current: self.top.as_ref(),
            remaining: self.length,
        }
    }
}

impl<T> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            top: self.top.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Stack<T> {}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a stack, top first.
pub(crate) struct StackIterator<'a, T> {
    current: Option<&'a ReferenceCounter<Node<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for StackIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.below.as_ref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for StackIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}
