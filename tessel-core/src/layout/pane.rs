//! Pane lifecycle callbacks
//!
//! The layout engine decides *when* panes are created and destroyed; the
//! application decides *what* a pane is. [`PaneFactory`] is the seam
//! between the two.

use std::fmt;

use super::error::PaneError;
use super::types::PaneId;

/// Creates and destroys the editable surfaces behind pane handles.
///
/// `destroy_pane` is called exactly once for every handle returned by
/// `create_pane`, when its leaf leaves the layout for good.
pub trait PaneFactory {
    /// Creates a new pane and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns a [`PaneError`] if the surface cannot be created. The layout
    /// is left untouched in that case.
    fn create_pane(&mut self) -> Result<PaneId, PaneError>;

    /// Releases the pane behind `pane`.
    fn destroy_pane(&mut self, pane: PaneId);
}

impl<F: PaneFactory + ?Sized> PaneFactory for &mut F {
    fn create_pane(&mut self) -> Result<PaneId, PaneError> {
        (**self).create_pane()
    }

    fn destroy_pane(&mut self, pane: PaneId) {
        (**self).destroy_pane(pane);
    }
}

impl<F: PaneFactory + ?Sized> PaneFactory for Box<F> {
    fn create_pane(&mut self) -> Result<PaneId, PaneError> {
        (**self).create_pane()
    }

    fn destroy_pane(&mut self, pane: PaneId) {
        (**self).destroy_pane(pane);
    }
}

/// A [`PaneFactory`] built from a pair of closures.
///
/// # Example
///
/// ```
/// use tessel_core::layout::{CallbackFactory, PaneFactory, PaneId};
///
/// let mut next = 0;
/// let mut factory = CallbackFactory::new(
///     move || {
///         next += 1;
///         Ok(PaneId::from_raw(next))
///     },
///     |_pane| {},
/// );
///
/// assert_eq!(factory.create_pane().unwrap(), PaneId::from_raw(1));
/// ```
pub struct CallbackFactory<C, D> {
    create: C,
    destroy: D,
}

impl<C, D> CallbackFactory<C, D>
where
    C: FnMut() -> Result<PaneId, PaneError>,
    D: FnMut(PaneId),
{
    /// Wraps a creation callback and a destruction callback.
    pub const fn new(create: C, destroy: D) -> Self {
        Self { create, destroy }
    }
}

impl<C, D> PaneFactory for CallbackFactory<C, D>
where
    C: FnMut() -> Result<PaneId, PaneError>,
    D: FnMut(PaneId),
{
    fn create_pane(&mut self) -> Result<PaneId, PaneError> {
        (self.create)()
    }

    fn destroy_pane(&mut self, pane: PaneId) {
        (self.destroy)(pane);
    }
}

impl<C, D> fmt::Debug for CallbackFactory<C, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn callback_factory_invokes_both_callbacks() {
        let destroyed = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&destroyed);
        let mut next = 10;
        let mut factory = CallbackFactory::new(
            move || {
                next += 1;
                Ok(PaneId::from_raw(next))
            },
            move |pane| sink.borrow_mut().push(pane),
        );

        let pane = factory.create_pane().unwrap();
        assert_eq!(pane, PaneId::from_raw(11));

        factory.destroy_pane(pane);
        assert_eq!(*destroyed.borrow(), vec![PaneId::from_raw(11)]);
    }

    #[test]
    fn callback_factory_propagates_errors() {
        let mut factory =
            CallbackFactory::new(|| Err(PaneError::Backend("tty gone".into())), |_| {});
        assert_eq!(
            factory.create_pane(),
            Err(PaneError::Backend("tty gone".into()))
        );
    }

    #[test]
    fn mutable_reference_is_a_factory() {
        fn create_two(mut factory: impl PaneFactory) -> (PaneId, PaneId) {
            (factory.create_pane().unwrap(), factory.create_pane().unwrap())
        }

        let mut next = 0;
        let mut factory = CallbackFactory::new(
            move || {
                next += 1;
                Ok(PaneId::from_raw(next))
            },
            |_| {},
        );
        let (a, b) = create_two(&mut factory);
        assert_ne!(a, b);
        assert_eq!(factory.create_pane().unwrap(), PaneId::from_raw(3));
    }
}
