//! Dependency Values
//!
//! A [`Dep`] is one entry of a dependency list. Dependencies are compared by
//! identity, never by content:
//!
//! - Scalars and strings are identical when they hold the same value.
//! - Floats are compared by bit pattern, except that every NaN is identical
//!   to every other NaN. As a consequence `0.0` and `-0.0` are different.
//! - Shared references are identical only when they point to the same
//!   allocation. Mutating the pointee does not change identity.
//!
//! Values of different kinds are never identical, so `Dep::Int(1)` and
//! `Dep::Uint(1)` differ.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A single dependency value, compared by identity.
#[derive(Clone)]
pub enum Dep {
    /// The unit value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    Uint(u64),
    /// A floating point number.
    Float(f64),
    /// A character.
    Char(char),
    /// An immutable string, compared by content.
    Str(Rc<str>),
    /// A shared reference, compared by pointer.
    Ref(Rc<dyn Any>),
}

impl Dep {
    /// Capture a shared reference by identity.
    ///
    /// The returned dependency keeps the allocation alive.
    pub fn by_ref<T: Any>(value: &Rc<T>) -> Self {
        let erased: Rc<dyn Any> = value.clone();
        Dep::Ref(erased)
    }

    /// Identity comparison.
    pub fn is(&self, other: &Dep) -> bool {
        match (self, other) {
            (Dep::Unit, Dep::Unit) => true,
            (Dep::Bool(a), Dep::Bool(b)) => a == b,
            (Dep::Int(a), Dep::Int(b)) => a == b,
            (Dep::Uint(a), Dep::Uint(b)) => a == b,
            (Dep::Float(a), Dep::Float(b)) => {
                a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
            }
            (Dep::Char(a), Dep::Char(b)) => a == b,
            (Dep::Str(a), Dep::Str(b)) => a == b,
            (Dep::Ref(a), Dep::Ref(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Downcast a reference dependency to its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Dep::Ref(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Short name of the value kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Dep::Unit => "unit",
            Dep::Bool(_) => "bool",
            Dep::Int(_) => "int",
            Dep::Uint(_) => "uint",
            Dep::Float(_) => "float",
            Dep::Char(_) => "char",
            Dep::Str(_) => "str",
            Dep::Ref(_) => "ref",
        }
    }
}

/// Position-wise identity comparison over whole lists.
///
/// Lists of different lengths are never identical.
pub fn same_deps(a: &[Dep], b: &[Dep]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.is(y))
}

impl fmt::Debug for Dep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dep::Unit => f.write_str("()"),
            Dep::Bool(v) => write!(f, "{v:?}"),
            Dep::Int(v) => write!(f, "{v:?}"),
            Dep::Uint(v) => write!(f, "{v:?}u"),
            Dep::Float(v) => write!(f, "{v:?}"),
            Dep::Char(v) => write!(f, "{v:?}"),
            Dep::Str(v) => write!(f, "{v:?}"),
            Dep::Ref(v) => write!(f, "Ref({:p})", Rc::as_ptr(v) as *const ()),
        }
    }
}

impl From<()> for Dep {
    fn from(_: ()) -> Self {
        Dep::Unit
    }
}

impl From<bool> for Dep {
    fn from(value: bool) -> Self {
        Dep::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Dep {
                fn from(value: $source) -> Self {
                    Dep::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64);
impl_from_int!(Uint as u64: u8, u16, u32, u64);

impl From<usize> for Dep {
    fn from(value: usize) -> Self {
        Dep::Uint(value as u64)
    }
}

impl From<isize> for Dep {
    fn from(value: isize) -> Self {
        Dep::Int(value as i64)
    }
}

impl From<f32> for Dep {
    fn from(value: f32) -> Self {
        Dep::Float(f64::from(value))
    }
}

impl From<f64> for Dep {
    fn from(value: f64) -> Self {
        Dep::Float(value)
    }
}

impl From<char> for Dep {
    fn from(value: char) -> Self {
        Dep::Char(value)
    }
}

impl From<&str> for Dep {
    fn from(value: &str) -> Self {
        Dep::Str(Rc::from(value))
    }
}

impl From<String> for Dep {
    fn from(value: String) -> Self {
        Dep::Str(Rc::from(value))
    }
}

impl From<Rc<str>> for Dep {
    fn from(value: Rc<str>) -> Self {
        Dep::Str(value)
    }
}

impl From<&Dep> for Dep {
    fn from(value: &Dep) -> Self {
        value.clone()
    }
}
