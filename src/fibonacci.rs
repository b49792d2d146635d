use std::collections::HashMap;
use std::iter::FusedIterator;
use std::mem;

use num_bigint::BigUint;
use num_traits::{One, Zero};

// Upper bound on the recursion depth of a single memoized descent
const MEMO_SEGMENT: u64 = 256;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("{name} must be a non-negative integer, got {value}")]
    InvalidArgument { name: &'static str, value: i64 },
}

// Rejects negative positions before any work is done
fn position(name: &'static str, value: i64) -> Result<u64, FibonacciError> {
    u64::try_from(value).map_err(|_| FibonacciError::InvalidArgument { name, value })
}

/// Computes F(n) straight from the recurrence.
///
/// Runs in O(2^n) time and only exists as a baseline for the other variants.
///
/// # Example
/// ```
/// use fib_utils::fibonacci;
/// use num_bigint::BigUint;
/// assert_eq!(fibonacci::fibonacci_recursive(10).unwrap(), BigUint::from(55u32));
/// ```
pub fn fibonacci_recursive(n: i64) -> Result<BigUint, FibonacciError> {
    let n = position("n", n)?;
    log::trace!("recursive fibonacci for n = {n}");
    Ok(recursive(n))
}

fn recursive(n: u64) -> BigUint {
    if n <= 1 {
        return BigUint::from(n);
    }
    recursive(n - 1) + recursive(n - 2)
}

/// Computes F(n) recursively, caching every intermediate value.
///
/// Each call starts from an empty cache, so nothing is shared between
/// independent calls. Use [`fibonacci_memoized_with`] to reuse a cache.
///
/// # Example
/// ```
/// use fib_utils::fibonacci;
/// use num_bigint::BigUint;
/// assert_eq!(
///     fibonacci::fibonacci_memoized(50).unwrap(),
///     BigUint::from(12586269025u64)
/// );
/// ```
pub fn fibonacci_memoized(n: i64) -> Result<BigUint, FibonacciError> {
    fibonacci_memoized_with(n, &mut HashMap::new())
}

/// Same as [`fibonacci_memoized`], but reads from and fills a cache owned by the caller.
pub fn fibonacci_memoized_with(
    n: i64,
    memo: &mut HashMap<u64, BigUint>,
) -> Result<BigUint, FibonacciError> {
    let n = position("n", n)?;
    // fill the cache in segments so each descent stops at a cached entry
    for k in (MEMO_SEGMENT..n).step_by(MEMO_SEGMENT as usize) {
        memoized(k, memo);
    }
    let value = memoized(n, memo);
    log::trace!("memoized fibonacci for n = {n}, cache holds {} entries", memo.len());
    Ok(value)
}

fn memoized(n: u64, memo: &mut HashMap<u64, BigUint>) -> BigUint {
    if let Some(value) = memo.get(&n) {
        return value.clone();
    }
    if n <= 1 {
        return BigUint::from(n);
    }

    let value = memoized(n - 1, memo) + memoized(n - 2, memo);
    memo.insert(n, value.clone());
    value
}

/// Computes F(n) bottom-up, keeping only the last two values.
///
/// O(n) time and O(1) extra space. This is the reference implementation.
///
/// # Example
/// ```
/// use fib_utils::fibonacci;
/// use num_bigint::BigUint;
/// let f100 = BigUint::parse_bytes(b"354224848179261915075", 10).unwrap();
/// assert_eq!(fibonacci::fibonacci_iterative(100).unwrap(), f100);
/// ```
pub fn fibonacci_iterative(n: i64) -> Result<BigUint, FibonacciError> {
    let n = position("n", n)?;
    if n <= 1 {
        return Ok(BigUint::from(n));
    }

    let mut prev = BigUint::zero();
    let mut curr = BigUint::one();
    for _ in 2..=n {
        let next = &prev + &curr;
        prev = curr;
        curr = next;
    }

    Ok(curr)
}

/// Lazy sequence over F(0)..=F(max_n), see [`fibonacci_generator`].
///
/// Values are computed one per call to `next`. Once exhausted it keeps
/// returning `None`; build a new one to start over.
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    prev: BigUint,
    curr: BigUint,
    remaining: u64,
}

impl FibonacciSequence {
    fn new(count: u64) -> Self {
        FibonacciSequence {
            prev: BigUint::zero(),
            curr: BigUint::one(),
            remaining: count,
        }
    }
}

impl Iterator for FibonacciSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            return Some(mem::take(&mut self.prev));
        }

        let next = &self.prev + &self.curr;
        let current = mem::replace(&mut self.curr, next);
        Some(mem::replace(&mut self.prev, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for FibonacciSequence {}

/// Returns a lazy iterator over F(0) up to and including F(max_n).
///
/// `max_n` is validated here, before the first value is pulled.
///
/// # Example
/// ```
/// use fib_utils::fibonacci;
/// use num_bigint::BigUint;
/// let values: Vec<BigUint> = fibonacci::fibonacci_generator(5).unwrap().collect();
/// let expected: Vec<BigUint> = [0u32, 1, 1, 2, 3, 5].into_iter().map(BigUint::from).collect();
/// assert_eq!(values, expected);
/// ```
pub fn fibonacci_generator(max_n: i64) -> Result<FibonacciSequence, FibonacciError> {
    let max_n = position("max_n", max_n)?;
    log::debug!("fibonacci sequence up to F({max_n})");
    Ok(FibonacciSequence::new(max_n + 1))
}
