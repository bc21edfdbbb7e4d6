use core::any::Any;

/// Type-erased payload carried by calls, casts and replies.
pub type AnyMessage = Box<dyn Any + Send>;
