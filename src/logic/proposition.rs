use std::{
    fmt::Display,
    num::{NonZeroIsize, NonZeroUsize},
};

/// A proposition produced by an encoding.
///
/// A proposition is represented by a non-null positive integer.
/// It can be obtained through the [From] trait from an integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Proposition(NonZeroUsize);

impl Proposition {
    /// Returns the positive literal built on this proposition.
    pub fn as_literal(self) -> Literal {
        Literal::from(self.0.get() as isize)
    }
}

macro_rules! impl_prop_from {
    ($t: ty) => {
        impl From<$t> for Proposition {
            fn from(p: $t) -> Self {
                Self(NonZeroUsize::try_from(p as usize).unwrap())
            }
        }
    };
}
impl_prop_from!(usize);
impl_prop_from!(u128);
impl_prop_from!(u64);
impl_prop_from!(u32);
impl_prop_from!(u16);
impl_prop_from!(u8);

macro_rules! impl_prop_from_neg {
    ($t: ty) => {
        impl From<$t> for Proposition {
            fn from(p: $t) -> Self {
                if p < 0 {
                    panic!("cannot build a proposition from a negative integer")
                }
                Self(NonZeroUsize::try_from(p as usize).unwrap())
            }
        }
    };
}
impl_prop_from_neg!(isize);
impl_prop_from_neg!(i128);
impl_prop_from_neg!(i64);
impl_prop_from_neg!(i32);
impl_prop_from_neg!(i16);
impl_prop_from_neg!(i8);

impl From<Proposition> for usize {
    fn from(p: Proposition) -> Self {
        p.0.into()
    }
}

impl Display for Proposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A literal of a clause: a proposition or its negation.
///
/// A literal is represented by a non-null integer.
/// It can be obtained through the [From] trait from a signed integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal(NonZeroIsize);

impl Literal {
    /// Returns the negation of this literal.
    pub fn negate(self) -> Self {
        Self::from(-self.0.get())
    }

    /// Returns the proposition this literal is built on.
    pub fn proposition(&self) -> Proposition {
        Proposition(self.0.unsigned_abs())
    }

    /// Returns `true` iff this literal is a negated proposition.
    pub fn is_negative(&self) -> bool {
        self.0.get() < 0
    }
}

macro_rules! impl_lit_from {
    ($t: ty) => {
        impl From<$t> for Literal {
            fn from(l: $t) -> Self {
                Self(NonZeroIsize::try_from(l as isize).unwrap())
            }
        }
    };
}
impl_lit_from!(isize);
impl_lit_from!(i128);
impl_lit_from!(i64);
impl_lit_from!(i32);
impl_lit_from!(i16);
impl_lit_from!(i8);

impl From<Literal> for isize {
    fn from(l: Literal) -> Self {
        l.0.into()
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Builds a clause from a list of integers.
#[macro_export]
macro_rules! clause {
    () => (
        vec![] as Vec<$crate::logic::Literal>
    );
    ($($x:expr),+ $(,)?) => (
        [$($x),+].into_iter().map($crate::logic::Literal::from).collect::<Vec<$crate::logic::Literal>>()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_from_pos() {
        let p = Proposition::from(1);
        assert_eq!(1, usize::from(p))
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_prop_from_null() {
        Proposition::from(0);
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_prop_from_neg() {
        Proposition::from(-1);
    }

    #[test]
    fn test_lit_from_pos() {
        let l = Literal::from(1);
        assert_eq!(1, isize::from(l))
    }

    #[test]
    #[allow(unused_must_use)]
    #[should_panic]
    fn test_lit_from_null() {
        Literal::from(0);
    }

    #[test]
    fn test_negate_lit() {
        assert_eq!(Literal::from(-1), Literal::from(1).negate());
        assert_eq!(Literal::from(1), Literal::from(-1).negate());
    }

    #[test]
    fn test_lit_proposition() {
        assert_eq!(Proposition::from(2), Literal::from(-2).proposition());
        assert!(Literal::from(-2).is_negative());
        assert!(!Literal::from(2).is_negative());
    }

    #[test]
    fn test_prop_as_literal() {
        assert_eq!(Literal::from(3), Proposition::from(3).as_literal());
    }

    #[test]
    fn test_clause_macro() {
        assert_eq!(
            vec![Literal::from(1), Literal::from(-2)],
            clause![1, -2]
        );
    }
}
