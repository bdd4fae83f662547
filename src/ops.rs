//! The standard small-arity boolean connectives.
//!
//! Every boolean function of arity `n` has `2^n` output rows, so there are
//! `2^(2^n)` functions of that arity: 2 nullary, 4 unary, and 16 binary.
//! All 22 are available here as named statics, together with the sets
//! [`NULLARY`], [`UNARY`], [`BINARY`], and their union [`EVERY`]. The sets
//! are built once, on first access, by exhaustive enumeration.
//!
//! Naming follows the usual boolean-algebra conventions: `IMP` is material
//! implication (`<=` on bits), `NIMP` its negation (`>`), `IF` the converse
//! implication (`>=`), `FST`/`SND` the two projections.

use std::collections::HashSet;

use log::debug;
use once_cell::sync::Lazy;

use crate::table::TruthTable;

/// Conventional short names for the 22 small connectives and the undefined
/// function, keyed by output column.
pub const NAMES: [(&[u8], &str); 23] = [
    (&[], "undef"),
    (&[0], "nf"),
    (&[1], "nt"),
    (&[0, 0], "uf"),
    (&[0, 1], "id"),
    (&[1, 0], "not"),
    (&[1, 1], "ut"),
    (&[0, 0, 0, 0], "bf"),
    (&[0, 0, 0, 1], "and"),
    (&[0, 0, 1, 0], "nimp"),
    (&[0, 0, 1, 1], "fst"),
    (&[0, 1, 0, 0], "nif"),
    (&[0, 1, 0, 1], "snd"),
    (&[0, 1, 1, 0], "xor"),
    (&[0, 1, 1, 1], "or"),
    (&[1, 0, 0, 0], "nor"),
    (&[1, 0, 0, 1], "xnor"),
    (&[1, 0, 1, 0], "nsnd"),
    (&[1, 0, 1, 1], "if"),
    (&[1, 1, 0, 0], "nfst"),
    (&[1, 1, 0, 1], "imp"),
    (&[1, 1, 1, 0], "nand"),
    (&[1, 1, 1, 1], "bt"),
];

fn known(column: &[u8]) -> TruthTable {
    TruthTable::new(column.iter().copied()).expect("known connective columns are valid")
}

/// The undefined function: no inputs, no output.
pub static UNDEF: Lazy<TruthTable> = Lazy::new(|| known(&[]));

/// Nullary FALSE.
pub static NF: Lazy<TruthTable> = Lazy::new(|| known(&[0]));
/// Nullary TRUE.
pub static NT: Lazy<TruthTable> = Lazy::new(|| known(&[1]));

/// Unary FALSE.
pub static UF: Lazy<TruthTable> = Lazy::new(|| known(&[0, 0]));
/// Identity.
pub static ID: Lazy<TruthTable> = Lazy::new(|| known(&[0, 1]));
/// Negation.
pub static NOT: Lazy<TruthTable> = Lazy::new(|| known(&[1, 0]));
/// Unary TRUE.
pub static UT: Lazy<TruthTable> = Lazy::new(|| known(&[1, 1]));

/// Binary FALSE.
pub static BF: Lazy<TruthTable> = Lazy::new(|| known(&[0, 0, 0, 0]));
/// Conjunction.
pub static AND: Lazy<TruthTable> = Lazy::new(|| known(&[0, 0, 0, 1]));
/// Negated implication (`>`).
pub static NIMP: Lazy<TruthTable> = Lazy::new(|| known(&[0, 0, 1, 0]));
/// First projection.
pub static FST: Lazy<TruthTable> = Lazy::new(|| known(&[0, 0, 1, 1]));
/// Negated converse implication (`<`).
pub static NIF: Lazy<TruthTable> = Lazy::new(|| known(&[0, 1, 0, 0]));
/// Second projection.
pub static SND: Lazy<TruthTable> = Lazy::new(|| known(&[0, 1, 0, 1]));
/// Exclusive disjunction (`!=`).
pub static XOR: Lazy<TruthTable> = Lazy::new(|| known(&[0, 1, 1, 0]));
/// Disjunction.
pub static OR: Lazy<TruthTable> = Lazy::new(|| known(&[0, 1, 1, 1]));
/// Negated disjunction.
pub static NOR: Lazy<TruthTable> = Lazy::new(|| known(&[1, 0, 0, 0]));
/// Equivalence (`==`).
pub static XNOR: Lazy<TruthTable> = Lazy::new(|| known(&[1, 0, 0, 1]));
/// Negation of the second input.
pub static NSND: Lazy<TruthTable> = Lazy::new(|| known(&[1, 0, 1, 0]));
/// Converse implication (`>=`).
pub static IF: Lazy<TruthTable> = Lazy::new(|| known(&[1, 0, 1, 1]));
/// Negation of the first input.
pub static NFST: Lazy<TruthTable> = Lazy::new(|| known(&[1, 1, 0, 0]));
/// Material implication (`<=`).
pub static IMP: Lazy<TruthTable> = Lazy::new(|| known(&[1, 1, 0, 1]));
/// Negated conjunction.
pub static NAND: Lazy<TruthTable> = Lazy::new(|| known(&[1, 1, 1, 0]));
/// Binary TRUE.
pub static BT: Lazy<TruthTable> = Lazy::new(|| known(&[1, 1, 1, 1]));

/// All 2 nullary functions.
pub static NULLARY: Lazy<HashSet<TruthTable>> = Lazy::new(|| enumerate(0).into_iter().collect());

/// All 4 unary functions.
pub static UNARY: Lazy<HashSet<TruthTable>> = Lazy::new(|| enumerate(1).into_iter().collect());

/// All 16 binary functions.
pub static BINARY: Lazy<HashSet<TruthTable>> = Lazy::new(|| enumerate(2).into_iter().collect());

/// All 22 functions of arity at most two.
pub static EVERY: Lazy<HashSet<TruthTable>> = Lazy::new(|| {
    let mut every = HashSet::new();
    every.extend(NULLARY.iter().cloned());
    every.extend(UNARY.iter().cloned());
    every.extend(BINARY.iter().cloned());
    every
});

/// Enumerates all `2^(2^arity)` functions of the given arity, in ascending
/// order of their output column read as a binary number (first row most
/// significant).
///
/// # Panics
///
/// Panics for arities above 4, where the enumeration no longer fits in
/// memory comfortably (arity 5 already has `2^32` functions).
pub fn enumerate(arity: usize) -> Vec<TruthTable> {
    assert!(arity <= 4, "can only enumerate functions of arity 0..=4");

    let rows = 1usize << arity;
    let count = 1u64 << rows;
    debug!("enumerate(arity = {}): {} functions", arity, count);

    (0..count)
        .map(|column| {
            let outputs = (0..rows).map(|row| ((column >> (rows - 1 - row)) & 1) as u8);
            TruthTable::new(outputs).expect("2^arity outputs of 0/1 form a valid table")
        })
        .collect()
}

/// Looks a connective up by its conventional short name.
pub fn by_name(name: &str) -> Option<TruthTable> {
    NAMES
        .iter()
        .find(|&&(_, known_name)| known_name == name)
        .map(|&(column, _)| known(column))
}

impl TruthTable {
    /// Returns the conventional short name of this function, if it has one.
    ///
    /// ```rust
    /// use truthtab::table::TruthTable;
    ///
    /// let table = TruthTable::new([1, 0, 0, 1]).unwrap();
    /// assert_eq!(table.name(), Some("xnor"));
    /// ```
    pub fn name(&self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|&&(column, _)| column == self.outputs())
            .map(|&(_, name)| name)
    }
}
