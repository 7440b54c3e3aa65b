pub mod outgoing_queue;
