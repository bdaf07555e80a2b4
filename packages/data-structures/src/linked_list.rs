use std::marker::PhantomData;
use std::ptr;

/// Singly linked list with a tail pointer, so both `push_back` and
/// `pop_front` are O(1).
///
/// Every node is allocated with `Box::into_raw` and owned through raw
/// pointers until `pop_front` or `Drop` turns it back into a `Box`. No `Box`
/// is moved while a pointer into it is alive.
pub struct LinkedList<T> {
    head: *mut Node<T>,
    tail: *mut Node<T>,
    len: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    elem: T,
    next: *mut Node<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList {
            head: ptr::null_mut(),
            tail: ptr::null_mut(),
            len: 0,
            _owns: PhantomData,
        }
    }

    pub fn push_back(&mut self, elem: T) {
        let new_tail = Box::into_raw(Box::new(Node {
            elem,
            next: ptr::null_mut(),
        }));

        if self.tail.is_null() {
            self.head = new_tail;
        } else {
            // SAFETY: `tail` is non-null only while it points at the last live
            // node allocated by this list.
            unsafe {
                (*self.tail).next = new_tail;
            }
        }

        self.tail = new_tail;
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.head.is_null() {
            return None;
        }
        // SAFETY: a non-null `head` came from `Box::into_raw` and has not been
        // freed; ownership moves back into the box here, exactly once.
        let head = unsafe { Box::from_raw(self.head) };
        self.head = head.next;

        if self.head.is_null() {
            self.tail = ptr::null_mut();
        }

        self.len -= 1;
        Some(head.elem)
    }

    pub fn peek(&self) -> Option<&T> {
        // SAFETY: `head` is null or a live node; the borrow is tied to `&self`.
        unsafe { self.head.as_ref().map(|node| &node.elem) }
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `peek`, with exclusive access through `&mut self`.
        unsafe { self.head.as_mut().map(|node| &mut node.elem) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Iterative, so long lists don't recurse.
        while self.pop_front().is_some() {}
    }
}

#[cfg(test)]
mod test {
    use super::LinkedList;

    #[test]
    fn basics() {
        let mut list = LinkedList::new();
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());

        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));

        list.push_back(4);
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), Some(4));
        assert_eq!(list.pop_front(), None);

        // Tail must be reset after draining, or this push would write through
        // a dangling pointer.
        list.push_back(5);
        assert_eq!(list.peek(), Some(&5));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn push_after_peek_mut_keeps_links() {
        let mut list = LinkedList::new();
        list.push_back(String::from("a"));
        if let Some(first) = list.peek_mut() {
            first.push('!');
        }
        list.push_back(String::from("b"));
        list.push_back(String::from("c"));

        let drained: Vec<String> = std::iter::from_fn(|| list.pop_front()).collect();
        assert_eq!(drained, vec!["a!", "b", "c"]);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn drop_frees_remaining_elements() {
        use std::rc::Rc;

        let counter = Rc::new(());
        let mut list = LinkedList::new();
        for _ in 0..3 {
            list.push_back(Rc::clone(&counter));
        }
        drop(list.pop_front());
        assert_eq!(Rc::strong_count(&counter), 3);
        drop(list);
        assert_eq!(Rc::strong_count(&counter), 1);
    }

    #[test]
    fn long_list_drops() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.push_back(i);
        }
        drop(list);
    }
}
