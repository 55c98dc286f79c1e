//! Candidate space enumeration
//!
//! The candidate space is every code of a given length over a palette: the
//! Cartesian power `palette ^ length`, generated once per solver.

use crate::core::{Code, ConfigError, Palette, Rules, check_space};
use rustc_hash::FxHashSet;

/// Unique codes still consistent with every observed feedback
///
/// Order never affects correctness, but it is kept deterministic
/// (enumeration order, preserved by filtering) so solver runs are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// Build a candidate set from arbitrary codes, dropping duplicates
    ///
    /// The first occurrence of each code keeps its position.
    #[must_use]
    pub fn from_codes(codes: impl IntoIterator<Item = Code>) -> Self {
        let mut seen = FxHashSet::default();
        let codes = codes
            .into_iter()
            .filter(|code| seen.insert(code.clone()))
            .collect();
        Self { codes }
    }

    /// Every code allowed by `rules`
    #[must_use]
    pub fn full(rules: &Rules) -> Self {
        cartesian_power(rules.palette(), rules.code_length())
    }

    /// Wrap codes already known to be unique
    pub(crate) const fn from_unique(codes: Vec<Code>) -> Self {
        Self { codes }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Code> {
        self.codes.iter()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.contains(code)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Code> {
        self.codes
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Code;
    type IntoIter = std::slice::Iter<'a, Code>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// Enumerate every code of `length` pegs over `palette`
///
/// Codes come out in lexicographic order of the palette order, so the first
/// code is all first-color and the last is all last-color.
///
/// # Errors
/// Returns `ConfigError` if `length == 0`, the palette is empty, or the space
/// is larger than [`MAX_SPACE_SIZE`](crate::core::MAX_SPACE_SIZE).
///
/// # Examples
/// ```
/// use mastermind_solver::core::Palette;
/// use mastermind_solver::solver::space::enumerate;
///
/// let palette = Palette::from_symbols("RB").unwrap();
/// let space = enumerate(&palette, 2).unwrap();
///
/// let codes: Vec<String> = space.iter().map(ToString::to_string).collect();
/// assert_eq!(codes, ["RR", "RB", "BR", "BB"]);
/// ```
pub fn enumerate(palette: &Palette, length: usize) -> Result<CandidateSet, ConfigError> {
    check_space(palette, length)?;
    Ok(cartesian_power(palette, length))
}

/// Odometer walk over palette indices, last position fastest
fn cartesian_power(palette: &Palette, length: usize) -> CandidateSet {
    let colors = palette.colors();
    let size = colors.len().pow(length as u32);
    let mut codes = Vec::with_capacity(size);
    let mut digits = vec![0usize; length];

    loop {
        codes.push(Code::new(
            digits.iter().map(|&d| colors[d]).collect::<Vec<_>>(),
        ));

        // Advance the odometer; stop once every position has wrapped
        let mut position = length;
        loop {
            if position == 0 {
                return CandidateSet::from_unique(codes);
            }
            position -= 1;
            digits[position] += 1;
            if digits[position] < colors.len() {
                break;
            }
            digits[position] = 0;
        }
    }
}
