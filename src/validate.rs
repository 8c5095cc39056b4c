//! Post-sort order validation: one forward scan that stops at the first
//! adjacent pair breaking strictly increasing order.

use std::fmt::{Debug, Display};
use thiserror::Error;

/// The first adjacent out-of-order pair found by [`validate_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("elements out of order at index {index}: {prev}, {current}")]
pub struct OrderViolation<T>
where
    T: Display + Debug,
{
    pub index: usize,
    pub prev: T,
    pub current: T,
}

/// Scans `data` once and reports the first pair that is not strictly
/// increasing, halting there. Benchmark sequences are permutations of
/// distinct keys, so an equal neighbor counts as a violation too.
pub fn validate_order<T>(data: &[T]) -> Result<(), OrderViolation<T>>
where
    T: Ord + Copy + Display + Debug,
{
    for (i, pair) in data.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(OrderViolation {
                index: i + 1,
                prev: pair[0],
                current: pair[1],
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_order, OrderViolation};

    #[test]
    pub fn test_empty_and_single_are_ordered() {
        assert!(validate_order::<u64>(&[]).is_ok());
        assert!(validate_order(&[7u64]).is_ok());
    }

    #[test]
    pub fn test_strictly_increasing_passes() {
        let data: Vec<u64> = (0..10_000).collect();
        assert!(validate_order(&data).is_ok());
    }

    #[test]
    pub fn test_reports_first_violation_only() {
        let data = [1u64, 2, 5, 4, 3];

        assert_eq!(
            validate_order(&data),
            Err(OrderViolation {
                index: 3,
                prev: 5,
                current: 4,
            })
        );
    }

    #[test]
    pub fn test_equal_neighbors_are_a_violation() {
        let data = [1u64, 2, 2, 3];

        assert_eq!(
            validate_order(&data),
            Err(OrderViolation {
                index: 2,
                prev: 2,
                current: 2,
            })
        );
    }

    #[test]
    pub fn test_violation_message_names_index_and_pair() {
        let err = validate_order(&[3u64, 1]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "elements out of order at index 1: 3, 1"
        );
    }
}
