//! Type alias for operations that carry on past individual failures, such as
//! loading a batch of packages where one broken package must not stop the rest.

/// The overall result of an operation together with the errors of the parts
/// that were skipped. An empty `Vec<E>` means every part succeeded.
pub type PartialSuccess<T, E> = ( T, Vec<E> );
