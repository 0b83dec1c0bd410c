//! Jurisdiction rule table and resolver
//!
//! The table is an explicitly constructed, immutable value injected into the
//! engine. Unknown state names resolve to a documented default rule set
//! rather than failing; `ResolvedRules::matched_exactly` records which path
//! was taken so callers and tests can tell them apart.

use std::collections::HashMap;

use shared_types::CaseType;

/// Statute-of-limitations years applied when a case type has no table entry
pub const DEFAULT_SOL_YEARS: u32 = 4;
/// Response deadline applied when a state has no table entry
pub const DEFAULT_RESPONSE_DAYS: i64 = 21;
/// Court-system label applied when a state has no table entry
pub const DEFAULT_COURT_SYSTEM: &str = "Civil Court";

/// Procedural rules for one state
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JurisdictionRules {
    /// Statute-of-limitations periods in years, keyed by case type.
    /// Case types absent from the map fall back to [`DEFAULT_SOL_YEARS`].
    pub statute_of_limitations: HashMap<CaseType, u32>,
    pub response_deadline_days: i64,
    pub court_system: String,
    pub special_rules: Vec<String>,
}

impl JurisdictionRules {
    /// The documented fallback rule set for unmatched states:
    /// 4-year SOL for all case types, 21-day response deadline.
    pub fn default_rules() -> Self {
        Self {
            statute_of_limitations: debt_sol_map(DEFAULT_SOL_YEARS),
            response_deadline_days: DEFAULT_RESPONSE_DAYS,
            court_system: DEFAULT_COURT_SYSTEM.to_string(),
            special_rules: Vec::new(),
        }
    }

    /// Statute-of-limitations years for a case type, with the 4-year default
    pub fn sol_years(&self, case_type: CaseType) -> u32 {
        self.statute_of_limitations
            .get(&case_type)
            .copied()
            .unwrap_or(DEFAULT_SOL_YEARS)
    }
}

/// Outcome of a table lookup. The rules are usable either way; the flag
/// records whether the requested state actually had an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRules {
    pub rules: JurisdictionRules,
    pub matched_exactly: bool,
}

/// Immutable state-name → rules mapping, built once and shared read-only
#[derive(Debug, Clone, Default)]
pub struct JurisdictionTable {
    entries: HashMap<String, JurisdictionRules>,
}

impl JurisdictionTable {
    pub fn new(entries: impl IntoIterator<Item = (String, JurisdictionRules)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The production table. The statute periods map the debt-family case
    /// types only; other case types take the 4-year default at lookup time.
    pub fn standard() -> Self {
        Self::new([
            (
                "California".to_string(),
                JurisdictionRules {
                    statute_of_limitations: debt_sol_map(4),
                    response_deadline_days: 30,
                    court_system: "Superior Court".to_string(),
                    special_rules: vec!["CCP 98".to_string(), "B&P 17200".to_string()],
                },
            ),
            (
                "New York".to_string(),
                JurisdictionRules {
                    statute_of_limitations: debt_sol_map(6),
                    response_deadline_days: 20,
                    court_system: "Civil Court".to_string(),
                    special_rules: vec!["CPLR 3012".to_string(), "CPLR 3211".to_string()],
                },
            ),
            (
                "Texas".to_string(),
                JurisdictionRules {
                    statute_of_limitations: debt_sol_map(4),
                    response_deadline_days: 20,
                    court_system: "Justice Court".to_string(),
                    special_rules: vec!["TRCP 99".to_string(), "TRCP 121".to_string()],
                },
            ),
            (
                "Florida".to_string(),
                JurisdictionRules {
                    statute_of_limitations: debt_sol_map(5),
                    response_deadline_days: 20,
                    court_system: "County Court".to_string(),
                    special_rules: vec![
                        "Fla. R. Civ. P. 1.110".to_string(),
                        "Fla. R. Civ. P. 1.140".to_string(),
                    ],
                },
            ),
        ])
    }

    /// Exact-match lookup; misses fall back to [`JurisdictionRules::default_rules`].
    ///
    /// State names are matched case-sensitively. Callers must not assume the
    /// returned rules reflect the requested state unless `matched_exactly`.
    pub fn resolve(&self, state: &str) -> ResolvedRules {
        match self.entries.get(state) {
            Some(rules) => ResolvedRules {
                rules: rules.clone(),
                matched_exactly: true,
            },
            None => {
                tracing::debug!(state, "no jurisdiction entry; using default rule set");
                ResolvedRules {
                    rules: JurisdictionRules::default_rules(),
                    matched_exactly: false,
                }
            }
        }
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn debt_sol_map(years: u32) -> HashMap<CaseType, u32> {
    HashMap::from([
        (CaseType::CreditCard, years),
        (CaseType::MedicalDebt, years),
        (CaseType::PersonalLoan, years),
        (CaseType::Mortgage, years),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_table_entries() {
        let table = JurisdictionTable::standard();
        assert_eq!(table.len(), 4);

        let ca = table.resolve("California");
        assert!(ca.matched_exactly);
        assert_eq!(ca.rules.response_deadline_days, 30);
        assert_eq!(ca.rules.court_system, "Superior Court");
        assert_eq!(ca.rules.sol_years(CaseType::CreditCard), 4);

        let ny = table.resolve("New York");
        assert_eq!(ny.rules.response_deadline_days, 20);
        assert_eq!(ny.rules.sol_years(CaseType::MedicalDebt), 6);

        let fl = table.resolve("Florida");
        assert_eq!(fl.rules.sol_years(CaseType::Mortgage), 5);
    }

    #[test]
    fn test_unknown_state_falls_back_to_default() {
        let table = JurisdictionTable::standard();
        let resolved = table.resolve("Wyoming");
        assert!(!resolved.matched_exactly);
        assert_eq!(resolved.rules.response_deadline_days, DEFAULT_RESPONSE_DAYS);
        assert_eq!(resolved.rules.sol_years(CaseType::CreditCard), DEFAULT_SOL_YEARS);
        assert!(resolved.rules.special_rules.is_empty());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = JurisdictionTable::standard();
        assert!(!table.resolve("california").matched_exactly);
        assert!(!table.resolve("CALIFORNIA").matched_exactly);
    }

    #[test]
    fn test_unmapped_case_type_takes_default_years() {
        let table = JurisdictionTable::standard();
        // New York maps the debt family at 6 years, but an unmapped case
        // type still takes the 4-year default.
        let ny = table.resolve("New York");
        assert_eq!(ny.rules.sol_years(CaseType::DebtCollection), DEFAULT_SOL_YEARS);
        assert_eq!(ny.rules.sol_years(CaseType::Eviction), DEFAULT_SOL_YEARS);
    }

    #[test]
    fn test_injected_table_overrides() {
        let table = JurisdictionTable::new([(
            "Testland".to_string(),
            JurisdictionRules {
                statute_of_limitations: HashMap::from([(CaseType::CreditCard, 10)]),
                response_deadline_days: 45,
                court_system: "Test Court".to_string(),
                special_rules: vec![],
            },
        )]);
        let resolved = table.resolve("Testland");
        assert!(resolved.matched_exactly);
        assert_eq!(resolved.rules.response_deadline_days, 45);
        assert_eq!(resolved.rules.sol_years(CaseType::CreditCard), 10);
    }

    proptest! {
        /// Resolution is total: any state name yields usable rules
        #[test]
        fn resolve_never_panics(state in "\\PC*") {
            let table = JurisdictionTable::standard();
            let resolved = table.resolve(&state);
            prop_assert!(resolved.rules.response_deadline_days > 0);
        }
    }
}
