use chrono::NaiveDate;

/// Coarse classification of the underlying claim in an uploaded lawsuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseType {
    DebtCollection,
    CreditCard,
    MedicalDebt,
    PersonalLoan,
    Mortgage,
    Eviction,
    ContractDispute,
    Other,
}

impl CaseType {
    /// Kebab-case label used in reports and stored records
    pub fn label(&self) -> &'static str {
        match self {
            CaseType::DebtCollection => "debt-collection",
            CaseType::CreditCard => "credit-card",
            CaseType::MedicalDebt => "medical-debt",
            CaseType::PersonalLoan => "personal-loan",
            CaseType::Mortgage => "mortgage",
            CaseType::Eviction => "eviction",
            CaseType::ContractDispute => "contract-dispute",
            CaseType::Other => "other",
        }
    }

    /// Uppercase, space-separated form used in report headings
    pub fn heading(&self) -> String {
        self.label().replace('-', " ").to_uppercase()
    }

    /// Case types in the debt family that the statute-of-limitations table keys on
    pub fn is_debt_claim(&self) -> bool {
        matches!(
            self,
            CaseType::DebtCollection
                | CaseType::CreditCard
                | CaseType::MedicalDebt
                | CaseType::PersonalLoan
                | CaseType::Mortgage
        )
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Party names, claimed amount, and service date pulled out of raw complaint text.
///
/// Extraction failure is signalled by the sentinel strings below, never by
/// panicking or by `None`. The `*_known` helpers let callers test for
/// failure without comparing strings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExtractedFields {
    pub plaintiff: String,
    pub defendant: String,
    pub amount: String,
    pub service_date: NaiveDate,
}

/// Fallback plaintiff name when no plaintiff line is found
pub const UNKNOWN_PLAINTIFF: &str = "Unknown Plaintiff";
/// Fallback defendant name when no defendant line is found
pub const UNKNOWN_DEFENDANT: &str = "Unknown Defendant";
/// Fallback amount when no dollar figure is found
pub const AMOUNT_NOT_SPECIFIED: &str = "Amount not specified";

impl ExtractedFields {
    pub fn plaintiff_known(&self) -> bool {
        self.plaintiff != UNKNOWN_PLAINTIFF
    }

    pub fn defendant_known(&self) -> bool {
        self.defendant != UNKNOWN_DEFENDANT
    }

    pub fn amount_known(&self) -> bool {
        self.amount != AMOUNT_NOT_SPECIFIED
    }
}
