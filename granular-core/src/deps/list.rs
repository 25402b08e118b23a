//! Dependency lists.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use smallvec::SmallVec;

use super::value::Dep;

/// A caller-supplied dependency list.
///
/// Most call sites pass a handful of values, so they are kept inline.
pub type DepList = SmallVec<[Dep; 4]>;

/// Build a [`DepList`] from values convertible into [`Dep`].
///
/// ```rust
/// use granular_core::{deps, Dep};
///
/// let list = deps![1, "query", true];
/// assert_eq!(list.len(), 3);
/// assert!(list[1].is(&Dep::from("query")));
///
/// let empty = deps![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! deps {
    () => {
        $crate::DepList::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::DepList::new();
        $( list.push($crate::Dep::from($value)); )+
        list
    }};
}

/// The combined `primary ++ secondary` list handed to a host primitive.
///
/// Cloning is cheap and shares the underlying storage. Two handles are the
/// same list when [`EffectiveDeps::ptr_eq`] holds.
#[derive(Clone)]
pub struct EffectiveDeps {
    deps: Rc<[Dep]>,
    primary_len: usize,
}

impl EffectiveDeps {
    /// Concatenate primary and secondary dependencies into a fresh list.
    pub fn concat(primary: &[Dep], secondary: &[Dep]) -> Self {
        let deps: Rc<[Dep]> = primary.iter().chain(secondary).cloned().collect();
        Self {
            deps,
            primary_len: primary.len(),
        }
    }

    /// Reference identity.
    pub fn ptr_eq(&self, other: &EffectiveDeps) -> bool {
        Rc::ptr_eq(&self.deps, &other.deps)
    }

    /// The primary dependencies captured when this list was built.
    pub fn primary(&self) -> &[Dep] {
        &self.deps[..self.primary_len]
    }

    /// The secondary dependencies captured when this list was built.
    pub fn secondary(&self) -> &[Dep] {
        &self.deps[self.primary_len..]
    }

    /// All dependencies, primary first.
    pub fn as_slice(&self) -> &[Dep] {
        &self.deps
    }
}

impl Deref for EffectiveDeps {
    type Target = [Dep];

    fn deref(&self) -> &[Dep] {
        &self.deps
    }
}

impl fmt::Debug for EffectiveDeps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveDeps")
            .field("primary", &self.primary())
            .field("secondary", &self.secondary())
            .finish()
    }
}
