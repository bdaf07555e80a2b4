pub mod linked_list;
pub mod queue;

pub use linked_list::LinkedList;
pub use queue::Queue;
