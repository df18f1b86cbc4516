use smallvec::SmallVec;
use tych_value::Value;

use super::{Ty, TypeDescriptor};

/// Accepts a value if any member accepts it.
///
/// Members are tried in declaration order and the first match wins. A union
/// always has at least one member: the constructors take the first member
/// separately, and [`UnionTy::from_members`] refuses an empty list.
#[derive(Clone, Debug)]
pub struct UnionTy {
    members: SmallVec<[Ty; 4]>,
}

impl UnionTy {
    /// Build a union from a first member and zero or more further members.
    pub fn new<I>(first: impl Into<Ty>, rest: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ty>,
    {
        let mut members = SmallVec::new();
        members.push(first.into());
        members.extend(rest.into_iter().map(Into::into));
        UnionTy { members }
    }

    /// Build a union from a list of members, or `None` if the list is empty.
    pub fn from_members<I>(members: I) -> Option<Self>
    where
        I: IntoIterator,
        I::Item: Into<Ty>,
    {
        let mut iter = members.into_iter();
        let first = iter.next()?;
        Some(Self::new(first, iter))
    }

    /// Members in declaration order. Never empty.
    pub fn members(&self) -> &[Ty] {
        &self.members
    }
}

impl TypeDescriptor for UnionTy {
    fn conforms(&self, value: &Value) -> bool {
        self.members.iter().any(|ty| ty.conforms(value))
    }

    fn describe(&self) -> String {
        let names: Vec<String> = self.members.iter().map(Ty::describe).collect();
        format!("UnionTy([{}])", names.join(", "))
    }
}
