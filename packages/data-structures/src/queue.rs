use crate::linked_list::LinkedList;

/// FIFO queue backed by [`LinkedList`].
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue { list: LinkedList::new() }
    }

    pub fn enqueue(&mut self, elem: T) {
        self.list.push_back(elem);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.peek()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.peek_mut()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        for elem in iter {
            queue.enqueue(elem);
        }
        queue
    }
}
