// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Advances the counter to its next state.
///
/// A cache miss (`None`) yields the first-write value `0`. From any stored
/// value the counter grows by 3 when even and by 1 when odd, so the
/// sequence is strictly increasing and every lost update shows up as a
/// smaller-than-expected final value.
pub fn next_value(current: Option<u64>) -> u64 {
    match current {
        None => 0,
        Some(v) if v % 2 == 0 => v + 3,
        Some(v) => v + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::next_value;

    #[test]
    fn miss_yields_first_write_value() {
        assert_eq!(next_value(None), 0);
    }

    #[test]
    fn even_values_advance_by_three() {
        assert_eq!(next_value(Some(0)), 3);
        assert_eq!(next_value(Some(8)), 11);
        assert_eq!(next_value(Some(100)), 103);
    }

    #[test]
    fn odd_values_advance_by_one() {
        assert_eq!(next_value(Some(3)), 4);
        assert_eq!(next_value(Some(11)), 12);
        assert_eq!(next_value(Some(101)), 102);
    }

    #[test]
    fn transition_is_strictly_increasing() {
        for v in 0..1_000 {
            assert!(next_value(Some(v)) > v);
        }
    }

    #[test]
    fn reference_sequence_from_miss() {
        let mut value = None;
        let mut sequence = Vec::new();
        for _ in 0..7 {
            let next = next_value(value);
            sequence.push(next);
            value = Some(next);
        }
        assert_eq!(sequence, vec![0, 3, 4, 7, 8, 11, 12]);
    }
}
