//! Case number generation
//!
//! Some complaints never state a case number; the templates then synthesize
//! one. The generator is a capability so tests can pin the value.

use rand::Rng;

/// Prefix for synthesized case numbers
pub const CASE_NUMBER_PREFIX: &str = "2024CV";

pub trait CaseNumberGenerator {
    fn next_case_number(&mut self) -> String;
}

/// Production generator: `2024CV` plus a random 4-digit integer
#[derive(Debug, Default)]
pub struct RandomCaseNumbers;

impl CaseNumberGenerator for RandomCaseNumbers {
    fn next_case_number(&mut self) -> String {
        let n: u32 = rand::thread_rng().gen_range(1000..10000);
        format!("{}{}", CASE_NUMBER_PREFIX, n)
    }
}

/// Test generator that always yields the same case number
#[derive(Debug, Clone)]
pub struct FixedCaseNumber(pub String);

impl CaseNumberGenerator for FixedCaseNumber {
    fn next_case_number(&mut self) -> String {
        self.0.clone()
    }
}
