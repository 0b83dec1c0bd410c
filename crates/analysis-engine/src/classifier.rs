//! Keyword-based case-type classification
//!
//! Categories are not mutually exclusive, so evaluation order is part of the
//! contract: a complaint mentioning both "credit card" and "debt" must
//! classify as credit-card, not debt-collection.

use shared_types::CaseType;

pub const CREDIT_CARD_KEYWORDS: &[&str] = &["credit card", "visa", "mastercard"];
pub const MEDICAL_DEBT_KEYWORDS: &[&str] = &["medical", "hospital", "doctor"];
pub const MORTGAGE_KEYWORDS: &[&str] = &["mortgage", "home loan"];
pub const PERSONAL_LOAN_KEYWORDS: &[&str] = &["personal loan", "installment"];
pub const DEBT_COLLECTION_KEYWORDS: &[&str] = &["debt", "collection"];
pub const EVICTION_KEYWORDS: &[&str] = &["evict", "rent", "lease"];
pub const CONTRACT_KEYWORDS: &[&str] = &["contract", "breach", "agreement"];

/// Fixed precedence: credit-card > medical-debt > mortgage > personal-loan >
/// debt-collection > eviction > contract-dispute > other.
const PRECEDENCE: &[(CaseType, &[&str])] = &[
    (CaseType::CreditCard, CREDIT_CARD_KEYWORDS),
    (CaseType::MedicalDebt, MEDICAL_DEBT_KEYWORDS),
    (CaseType::Mortgage, MORTGAGE_KEYWORDS),
    (CaseType::PersonalLoan, PERSONAL_LOAN_KEYWORDS),
    (CaseType::DebtCollection, DEBT_COLLECTION_KEYWORDS),
    (CaseType::Eviction, EVICTION_KEYWORDS),
    (CaseType::ContractDispute, CONTRACT_KEYWORDS),
];

/// Classify raw complaint text. Total function: unmatched or empty text
/// classifies as [`CaseType::Other`].
pub fn classify(text: &str) -> CaseType {
    let lower = text.to_lowercase();
    for (case_type, keywords) in PRECEDENCE {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *case_type;
        }
    }
    CaseType::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_credit_card_beats_debt_collection() {
        let text = "Plaintiff seeks to collect a credit card debt owed to the bank";
        assert_eq!(classify(text), CaseType::CreditCard);
    }

    #[test]
    fn test_medical_debt_beats_debt_collection() {
        assert_eq!(
            classify("hospital bill sent to debt collection"),
            CaseType::MedicalDebt
        );
    }

    #[test]
    fn test_mortgage_beats_personal_loan() {
        assert_eq!(
            classify("mortgage refinanced as an installment plan"),
            CaseType::Mortgage
        );
    }

    #[test]
    fn test_plain_debt_collection() {
        assert_eq!(classify("suit to recover a debt"), CaseType::DebtCollection);
    }

    #[test]
    fn test_evict_alone_classifies_as_eviction() {
        assert_eq!(classify("notice to evict"), CaseType::Eviction);
    }

    #[test]
    fn test_contract_dispute() {
        assert_eq!(
            classify("breach of the purchase agreement"),
            CaseType::ContractDispute
        );
    }

    #[test]
    fn test_empty_text_is_other() {
        assert_eq!(classify(""), CaseType::Other);
    }

    #[test]
    fn test_no_keywords_is_other() {
        assert_eq!(classify("unrelated civil filing"), CaseType::Other);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("CREDIT CARD account"), CaseType::CreditCard);
    }

    proptest! {
        /// Classification is total and never panics
        #[test]
        fn classify_never_panics(text in "\\PC*") {
            let _ = classify(&text);
        }

        /// Text containing "credit card" always classifies as credit-card
        /// regardless of what surrounds it
        #[test]
        fn credit_card_keyword_wins(prefix in "[a-z ]{0,50}", suffix in "[a-z ]{0,50}") {
            let text = format!("{} credit card {}", prefix, suffix);
            prop_assert_eq!(classify(&text), CaseType::CreditCard);
        }
    }
}
