extern crate num_traits;

use std::ops::{AddAssign, Deref};

use num_traits::Unsigned;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.increment_by(T::one());
    }

    #[inline]
    pub fn increment_by(&mut self, count: T) {
        self.0 += count;
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AddAssign for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

/// Non-empty, trimmed lines of a word list; lines starting with `#` are comments.
pub fn parse_list(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use crate::util::{parse_list, Counter};

    #[test]
    fn test_counter_increment() {
        let mut counter = Counter::<usize>::default();
        counter.increment();
        counter.increment_by(2);
        assert_eq!(*counter, 3);
    }

    #[test]
    fn test_counter_add_assign() {
        let mut left = Counter::new(2usize);
        left += Counter::new(5);
        assert_eq!(left.get(), 7);
    }

    #[test]
    fn test_parse_list_skips_comments() {
        let source = "# custom words\n  route \n\n   # indented comment\nhighway\n";
        let words = parse_list(source).collect::<Vec<_>>();
        assert_eq!(words, vec!["route", "highway"]);
    }
}
