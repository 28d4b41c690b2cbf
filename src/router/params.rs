use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters captured from the request path, in pattern order.
///
/// Values are positional. Lookup by name pairs the pattern's placeholder names with the
/// values left to right, which stays accurate as long as constraints add no groups of
/// their own.
#[derive(Debug, Clone)]
pub struct Params<'a> {
    names: &'a [Box<str>],
    values: SmallVec<[&'a str; 8]>,
}

impl<'a> Params<'a> {
    pub(super) fn new(names: &'a [Box<str>], values: SmallVec<[&'a str; 8]>) -> Self {
        Self { names, values }
    }

    pub fn get(&self, name: &str) -> Option<&'a str> {
        let i = self.names.iter().position(|n| &**n == name)?;
        self.values.get(i).copied()
    }

    pub fn at(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).copied()
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().map(|n| &**n)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values.iter().map(|&v| v.to_owned()).collect()
    }
}

impl<'a> Deref for Params<'a> {
    type Target = [&'a str];
    fn deref(&self) -> &Self::Target {
        &*self.values
    }
}
