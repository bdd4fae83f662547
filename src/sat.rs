//! Satisfying-input queries over truth tables.

use num_bigint::{BigUint, ToBigUint};

use crate::table::TruthTable;

impl TruthTable {
    /// Returns one satisfying input vector, if any exists.
    ///
    /// The vector is the first row (in ascending binary order) on which the
    /// function outputs 1. Returns `None` for constant-false tables and for
    /// the empty table.
    pub fn one_sat(&self) -> Option<Vec<u8>> {
        let row = self.outputs().iter().position(|&bit| bit == 1)?;
        let arity = self.arity();
        let inputs = (0..arity)
            .map(|position| ((row >> (arity - 1 - position)) & 1) as u8)
            .collect();
        Some(inputs)
    }

    /// Counts the satisfying assignments over `num_vars` variables.
    ///
    /// The function only constrains its first `arity` variables; the
    /// remaining `num_vars - arity` are free, so every satisfying row
    /// contributes `2^(num_vars - arity)` assignments. The count can exceed
    /// the machine word for large `num_vars`.
    ///
    /// # Panics
    ///
    /// Panics if `num_vars` is smaller than the arity.
    pub fn sat_count(&self, num_vars: usize) -> BigUint {
        assert!(
            num_vars >= self.arity(),
            "num_vars must be at least the arity"
        );

        let ones = self
            .count_ones()
            .to_biguint()
            .expect("usize converts to BigUint");
        ones << (num_vars - self.arity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ops;

    #[test]
    fn test_one_sat_constants() {
        assert_eq!(ops::BF.one_sat(), None);
        assert_eq!(ops::NF.one_sat(), None);
        assert_eq!(ops::UNDEF.one_sat(), None);
        assert_eq!(ops::NT.one_sat(), Some(vec![]));
    }

    #[test]
    fn test_one_sat_is_first_row() {
        assert_eq!(ops::AND.one_sat(), Some(vec![1, 1]));
        assert_eq!(ops::OR.one_sat(), Some(vec![0, 1]));
        assert_eq!(ops::NOR.one_sat(), Some(vec![0, 0]));
        assert_eq!(ops::NOT.one_sat(), Some(vec![0]));
    }

    #[test]
    fn test_one_sat_satisfies() {
        for table in ops::EVERY.iter() {
            if let Some(inputs) = table.one_sat() {
                assert_eq!(table.apply(&inputs).unwrap(), 1, "table {}", table);
            } else {
                assert_eq!(table.count_ones(), 0);
            }
        }
    }

    #[test]
    fn test_sat_count_terminal() {
        let zero = TruthTable::new([0]).unwrap();
        let one = TruthTable::new([1]).unwrap();

        for num_vars in 1..=3 {
            assert_eq!(zero.sat_count(num_vars), 0u32.to_biguint().unwrap());
            assert_eq!(
                one.sat_count(num_vars),
                (1u32 << num_vars).to_biguint().unwrap()
            );
        }
    }

    #[test]
    fn test_sat_count_projection() {
        // A single variable is true on half the assignments.
        let x = TruthTable::new([0, 1]).unwrap();
        assert_eq!(x.sat_count(1), 1u32.to_biguint().unwrap());
        assert_eq!(x.sat_count(2), 2u32.to_biguint().unwrap());
        assert_eq!(x.sat_count(3), 4u32.to_biguint().unwrap());
    }

    #[test]
    fn test_sat_count_cube_and_clause() {
        assert_eq!(ops::AND.sat_count(2), 1u32.to_biguint().unwrap());
        assert_eq!(ops::AND.sat_count(3), 2u32.to_biguint().unwrap());
        assert_eq!(ops::OR.sat_count(2), 3u32.to_biguint().unwrap());
        assert_eq!(ops::OR.sat_count(3), 6u32.to_biguint().unwrap());
        assert_eq!(ops::OR.sat_count(4), 12u32.to_biguint().unwrap());
    }

    #[test]
    fn test_sat_count_exceeds_machine_word() {
        let one = TruthTable::new([1]).unwrap();
        let count = one.sat_count(200);
        assert_eq!(count, 1u32.to_biguint().unwrap() << 200);
    }

    #[test]
    #[should_panic(expected = "num_vars must be at least the arity")]
    fn test_sat_count_too_few_vars() {
        ops::AND.sat_count(1);
    }
}
