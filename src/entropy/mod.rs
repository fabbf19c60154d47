//! Random source used for every password draw.
//!
//! Generation only ever needs "pick one of `len` things uniformly", so that is
//! the whole interface. Any `rand::Rng` qualifies, which lets tests swap in a
//! seeded `StdRng` or a scripted source.

use rand::Rng;
use rand::rngs::ThreadRng;

pub trait RandomSource {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;

    /// Uniformly pick one item, or `None` when there is nothing to pick from.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        match items.len() {
            0 => None,
            len => items.get(self.index(len)),
        }
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Default source: the thread-local CSPRNG, seeded from the operating system.
pub fn system() -> ThreadRng {
    rand::rng()
}

pub fn source_name() -> &'static str {
    "ChaCha12 CSPRNG (OS-seeded)"
}
