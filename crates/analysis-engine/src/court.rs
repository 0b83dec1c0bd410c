//! Court contact block and filing checklist
//!
//! Placeholder data synthesized from the jurisdiction pair; a real court
//! directory is an external collaborator, not part of this engine.

use shared_types::{CourtInfo, FilingInstruction};

pub fn court_info(state: &str, county: &str) -> CourtInfo {
    CourtInfo {
        name: format!("{} County Court", county),
        address: format!("123 Court Street, {}, {}", county, state),
        phone: "(555) 123-4567".to_string(),
        website: format!(
            "https://{}court.{}.gov",
            county.to_lowercase(),
            state.to_lowercase()
        ),
        filing_methods: vec![
            "In person".to_string(),
            "Electronic filing".to_string(),
            "Mail".to_string(),
        ],
    }
}

/// Fixed three-step checklist: prepare, file, serve
pub fn filing_instructions(_state: &str, _county: &str) -> Vec<FilingInstruction> {
    vec![
        FilingInstruction {
            step: 1,
            action: "Prepare Answer to Complaint".to_string(),
            deadline: "File within deadline".to_string(),
            form: "Answer form available at court website".to_string(),
            fee: "$50-200 (varies by court)".to_string(),
        },
        FilingInstruction {
            step: 2,
            action: "File Answer with Court".to_string(),
            deadline: "Same as step 1".to_string(),
            form: "File in person or electronically".to_string(),
            fee: "Included in step 1".to_string(),
        },
        FilingInstruction {
            step: 3,
            action: "Serve Answer on Plaintiff".to_string(),
            deadline: "Within 5 days of filing".to_string(),
            form: "Proof of service required".to_string(),
            fee: "$50-100".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_info_shape() {
        let info = court_info("California", "Los Angeles");
        assert_eq!(info.name, "Los Angeles County Court");
        assert_eq!(info.address, "123 Court Street, Los Angeles, California");
        assert_eq!(info.filing_methods.len(), 3);
    }

    #[test]
    fn test_filing_instructions_are_three_ordered_steps() {
        let steps = filing_instructions("Texas", "Harris");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.iter().map(|s| s.step).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(steps[0].action, "Prepare Answer to Complaint");
        assert_eq!(steps[2].action, "Serve Answer on Plaintiff");
    }
}
