pub mod bigint;
pub mod continued_fraction;
pub mod digits;
pub mod divisors;
pub mod factorial;
pub mod fibonacci;
pub mod number_theory;
pub mod permutation;
pub mod prime;
pub mod sequence;

pub use bigint::BigInt;
pub use continued_fraction::{Convergents, SqrtExpansion, convergents, sqrt_expansion};
pub use digits::{digit_factorial_sum, digit_signature, digit_sum, digits, is_palindrome};
pub use divisors::{proper_divisor_sums, proper_divisors, sum_proper_divisors};
pub use factorial::{big_factorial, binomial, factorial};
pub use fibonacci::{BigFibonacci, Fibonacci, fibonacci, nth_fibonacci};
pub use number_theory::{gcd, is_perfect_square, isqrt, lcm, mod_pow};
pub use permutation::{Combinations, combinations, next_permutation, prev_permutation};
pub use prime::{
    Primes, count_divisors, is_prime, is_prime_u64, nth_prime, primes, primes_below,
    primes_below_parallel_inner, primes_below_parallel_outer, sieve,
};
pub use sequence::{TriangleNumbers, find_chain_length, find_chain_length_cached, polygonal};
