//! Exhaustive solver for letter-substitution arithmetic puzzles.
//!
//! A puzzle such as `SEND + MORE = MONEY` asks for an injective mapping
//! of letters to digits under which the addition holds. The solver
//! enumerates candidate assignments in lexicographic order of digit
//! tuples and returns the first satisfying one, which makes the result
//! deterministic even for puzzles with several solutions.
//!
//! Complexity is O(10!/(10-k)!) for k distinct letters. That is
//! intentional: the solver demonstrates exhaustive constraint search and
//! is only meant for small puzzles.

use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, instrument};

/// Digits available for assignment.
const DIGITS: usize = 10;

/// A parsed letter-substitution addition puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Addend words, left to right.
    addends: Vec<String>,
    /// The result word on the right of `=`.
    result: String,
    /// Distinct letters, sorted.
    letters: Vec<char>,
    /// First letter of every word; these may not map to 0.
    leading: BTreeSet<char>,
}

/// A satisfying letter-to-digit assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    assignment: BTreeMap<char, u8>,
}

impl Puzzle {
    /// Parses an equation of the form `WORD1 + WORD2 + ... = RESULT`.
    ///
    /// Whitespace is ignored. Words must consist of uppercase ASCII
    /// letters only.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidInput`] for a malformed equation:
    /// missing or repeated `=`, an empty word, an empty addend list, or
    /// any character outside `A-Z`, `+`, `=`.
    #[instrument]
    pub fn parse(equation: &str) -> Result<Self, SolverError> {
        let compact: String = equation.chars().filter(|c| !c.is_whitespace()).collect();

        if let Some(bad) = compact
            .chars()
            .find(|c| !c.is_ascii_uppercase() && *c != '+' && *c != '=')
        {
            return Err(SolverError::invalid_input(format!(
                "unexpected character '{bad}' in equation"
            )));
        }

        let mut sides = compact.split('=');
        let (lhs, rhs) = match (sides.next(), sides.next(), sides.next()) {
            (Some(lhs), Some(rhs), None) => (lhs, rhs),
            _ => {
                return Err(SolverError::invalid_input(
                    "equation must contain exactly one '='",
                ));
            }
        };

        if rhs.is_empty() || rhs.contains('+') {
            return Err(SolverError::invalid_input(
                "right-hand side must be a single word",
            ));
        }
        if lhs.is_empty() {
            return Err(SolverError::invalid_input(
                "equation must have at least one addend",
            ));
        }

        let addends: Vec<String> = lhs.split('+').map(str::to_owned).collect();
        if addends.iter().any(String::is_empty) {
            return Err(SolverError::invalid_input("empty addend word"));
        }

        let result = rhs.to_owned();
        let words = addends.iter().chain(std::iter::once(&result));

        let letters: Vec<char> = words
            .clone()
            .flat_map(|w| w.chars())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Every word is non-empty at this point.
        let leading: BTreeSet<char> = words.filter_map(|w| w.chars().next()).collect();

        Ok(Self {
            addends,
            result,
            letters,
            leading,
        })
    }

    /// Addend words.
    pub fn addends(&self) -> &[String] {
        &self.addends
    }

    /// The result word.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Distinct letters in sorted order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Letters that start a word and therefore may not map to 0.
    pub fn leading_letters(&self) -> &BTreeSet<char> {
        &self.leading
    }

    /// Searches for a satisfying assignment.
    ///
    /// Digits are assigned to the sorted letter list depth-first in
    /// ascending digit order, which enumerates digit tuples in
    /// lexicographic order; the first satisfying assignment is returned.
    /// Assignments that give a leading letter the digit 0 are skipped
    /// without descending further.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Infeasible`] when the equation has more
    /// distinct letters than there are digits (checked before any
    /// search), or [`SolverError::NoSolution`] when enumeration finishes
    /// without a satisfying assignment.
    #[instrument(skip(self), fields(letters = self.letters.len()))]
    pub fn solve(&self) -> Result<Solution, SolverError> {
        if self.letters.len() > DIGITS {
            return Err(SolverError::Infeasible {
                letters: self.letters.len(),
                digits: DIGITS,
            });
        }

        let mut assignment = vec![0u8; self.letters.len()];
        let mut used = [false; DIGITS];
        if self.search(0, &mut assignment, &mut used) {
            let solution = Solution {
                assignment: self
                    .letters
                    .iter()
                    .copied()
                    .zip(assignment.iter().copied())
                    .collect(),
            };
            debug!(?solution, "Found satisfying assignment");
            Ok(solution)
        } else {
            Err(SolverError::NoSolution)
        }
    }

    /// Assigns a digit to letter `index` and recurses; true on success,
    /// with the satisfying digits left in `assignment`.
    fn search(&self, index: usize, assignment: &mut [u8], used: &mut [bool; DIGITS]) -> bool {
        if index == self.letters.len() {
            return self.satisfied(assignment);
        }
        let letter = self.letters[index];
        for digit in 0..DIGITS as u8 {
            if used[digit as usize] {
                continue;
            }
            if digit == 0 && self.leading.contains(&letter) {
                continue;
            }
            assignment[index] = digit;
            used[digit as usize] = true;
            if self.search(index + 1, assignment, used) {
                return true;
            }
            used[digit as usize] = false;
        }
        false
    }

    /// Checks whether the addends sum to the result under `assignment`.
    ///
    /// A value that does not fit in a `u64` cannot satisfy the equation,
    /// so overflow rejects the candidate instead of wrapping.
    fn satisfied(&self, assignment: &[u8]) -> bool {
        let mut digit_of = [0u8; 26];
        for (letter, digit) in self.letters.iter().zip(assignment) {
            digit_of[(*letter as u8 - b'A') as usize] = *digit;
        }
        let value = |word: &str| -> Option<u64> {
            word.bytes().try_fold(0u64, |acc, b| {
                acc.checked_mul(10)?
                    .checked_add(u64::from(digit_of[(b - b'A') as usize]))
            })
        };
        let sum = self
            .addends
            .iter()
            .try_fold(0u64, |acc, word| acc.checked_add(value(word)?));
        match (sum, value(&self.result)) {
            (Some(sum), Some(result)) => sum == result,
            _ => false,
        }
    }

    /// Formats a solution as the substituted equation plus the letter
    /// assignments, one per line.
    pub fn format_solution(&self, solution: &Solution) -> String {
        let values: Vec<String> = self
            .addends
            .iter()
            .map(|w| solution.value_of(w).unwrap_or(0).to_string())
            .collect();
        let result = solution.value_of(&self.result).unwrap_or(0);

        let mut text = format!("{} = {result}", values.join(" + "));
        for (letter, digit) in solution.assignment() {
            text.push_str(&format!("\n{letter} = {digit}"));
        }
        text
    }
}

impl Solution {
    /// Digit assigned to a letter, if the letter occurs in the puzzle.
    pub fn digit(&self, letter: char) -> Option<u8> {
        self.assignment.get(&letter).copied()
    }

    /// The full letter-to-digit mapping, in letter order.
    pub fn assignment(&self) -> &BTreeMap<char, u8> {
        &self.assignment
    }

    /// Integer value of a word under this assignment, or `None` if the
    /// word contains a letter the assignment does not cover or the
    /// value does not fit in a `u64`.
    pub fn value_of(&self, word: &str) -> Option<u64> {
        word.chars().try_fold(0u64, |acc, letter| {
            let digit = self.digit(letter)?;
            acc.checked_mul(10)?.checked_add(u64::from(digit))
        })
    }
}

/// Parses and solves an equation in one call.
///
/// # Errors
///
/// Propagates parse failures ([`SolverError::InvalidInput`]) and search
/// outcomes ([`SolverError::Infeasible`], [`SolverError::NoSolution`]).
#[instrument]
pub fn solve_cryptarithmetic(equation: &str) -> Result<Solution, SolverError> {
    Puzzle::parse(equation)?.solve()
}
