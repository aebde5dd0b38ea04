use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Widget state shared between the caller and the handlers a build registers.
///
/// The caller keeps the `State` across builds and hands a reference to the
/// widget builder every time. Clones point at the same value, so a handler
/// holding a clone writes straight back into the caller's state.
///
/// Every write bumps a revision counter. A host that remembers the last
/// [`revision`](Self::revision) it rendered knows when a rebuild is due.
///
/// # Example
///
/// ```ignore
/// let agree = State::new(false);
///
/// let element = Checkbox::new("agree")
///     .label("I agree")
///     .state(&agree)
///     .build(&registry);
///
/// registry.activate("agree");
/// assert!(agree.get());
/// ```
#[derive(Debug)]
pub struct State<T> {
    value: Arc<RwLock<T>>,
    revision: Arc<AtomicU64>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            revision: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A copy of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Borrow the value for the duration of `f`.
    ///
    /// A poisoned lock still yields the last written value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.value.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Modify the value in place. Writes to a poisoned lock are dropped.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        match self.value.write() {
            Ok(mut guard) => {
                f(&mut guard);
                self.revision.fetch_add(1, Ordering::SeqCst);
            }
            Err(_) => log::warn!("state lock poisoned, write dropped"),
        }
    }

    /// Number of writes so far, shared by all clones.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            revision: Arc::clone(&self.revision),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
