//! # Fibonacci and record utilities
//!
//! Small, independent helpers. Every function is pure and synchronous.
//!
//! ## Fibonacci
//!
//! Four strategies share one contract: a negative position is rejected with
//! [`FibonacciError::InvalidArgument`], `F(0) = 0`, `F(1) = 1`, and every
//! value is an arbitrary-precision [`num_bigint::BigUint`].
//!
//! - `fibonacci_recursive`: the plain recurrence, O(2^n). Baseline only.
//! - `fibonacci_memoized` / `fibonacci_memoized_with`: recursion over a cache,
//!   either fresh per call or owned by the caller.
//! - `fibonacci_iterative`: bottom-up loop over the last two values. The
//!   default choice.
//! - `fibonacci_generator`: a lazy iterator over F(0)..=F(max_n).
//!
//! ## Utils
//!
//! - `calculate_average`: arithmetic mean, with `0.0` for an empty list.
//! - `get_user_name`: upper-cased `"name"` of a JSON user record, or `""`.
//!
//! ## Usage Example
//! ```rust
//! use fib_utils::fibonacci::{fibonacci_generator, fibonacci_iterative};
//! use num_bigint::BigUint;
//! let last = fibonacci_generator(99).unwrap().last().unwrap();
//! assert_eq!(last, BigUint::parse_bytes(b"218922995834555169026", 10).unwrap());
//! assert_eq!(fibonacci_iterative(99).unwrap(), last);
//! ```

pub mod fibonacci;
pub mod utils;

pub use fibonacci::FibonacciError;
