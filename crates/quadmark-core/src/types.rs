//! Type aliases for shared state.
//!
//! Shapes, the canvas that owns them and the settings layer all live on
//! the UI thread, so shared mutable state is `Rc<RefCell<T>>` rather than
//! a lock.

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```rust,ignore
/// let style: Shared<ShapeStyle> = shared(ShapeStyle::default());
/// style.borrow_mut().scale = 2.0;
/// ```
pub type Shared<T> = Rc<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
