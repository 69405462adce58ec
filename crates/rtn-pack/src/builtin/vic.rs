//! Victorian content: building regulations and the "Construction Company
//! in Melbourne" scenario.

use rtn_core::{AustralianState, Scenario, ScenarioId};

use super::*;

const COUNCIL: &str = "City of Melbourne";
const ATO: &str = "Australian Taxation Office";

pub fn regulations() -> Result<Vec<Regulation>, RtnError> {
    Ok(vec![
        regulation(
            "building-permit-vic",
            "Building Permit",
            JurisdictionTag::Local,
            "Permit for construction, renovation or demolition work, issued before building work starts.",
            &[
                "Engage a registered building surveyor",
                "Lodge plans and specifications",
                "Obtain the permit before work begins",
            ],
            Complexity::Medium,
            "$1,000 - $5,000",
            "2-6 weeks",
        )?,
        regulation(
            "domestic-builder-registration",
            "Domestic Builder Registration",
            JurisdictionTag::State,
            "Registration with the Victorian Building Authority for residential construction work valued over $10,000.",
            &[
                "Demonstrate construction experience and qualifications",
                "Pass the VBA assessment",
                "Hold domestic building insurance",
            ],
            Complexity::High,
            "$500 - $1,500",
            "8-12 weeks",
        )?,
    ])
}

/// A residential building and renovation contractor.
pub fn construction_melbourne() -> Result<Scenario, RtnError> {
    use JurisdictionLevel::{Federal, Local, State};

    Ok(Scenario {
        id: ScenarioId::new("construction-melbourne")?,
        title: "Construction Company in Melbourne".to_string(),
        industry: "Construction".to_string(),
        location: "Melbourne, VIC".to_string(),
        state: AustralianState::Vic,
        description: "Residential building and renovation contractor operating across metropolitan Melbourne with a team of eight.".to_string(),
        local_requirements: vec![
            requirement(
                "Building Permit",
                "Permit for each residential construction project.",
                "Permits",
                COUNCIL,
                Local,
                80,
            )?,
            requirement(
                "Planning Permit",
                "Planning approval where works change land use or a heritage overlay applies.",
                "Planning",
                COUNCIL,
                Local,
                50,
            )?,
            requirement(
                "Asset Protection Permit",
                "Protection of council footpaths and nature strips during works.",
                "Permits",
                COUNCIL,
                Local,
                100,
            )?,
        ],
        state_requirements: vec![
            requirement(
                "Domestic Builder Registration",
                "Registration as a domestic builder for contracts over $10,000.",
                "Licensing",
                "Victorian Building Authority",
                State,
                100,
            )?,
            requirement(
                "WorkSafe Victoria Registration",
                "Employer registration and safe work method statements for high-risk construction work.",
                "Safety",
                "WorkSafe Victoria",
                State,
                90,
            )?,
            requirement(
                "Domestic Building Insurance",
                "Insurance for each domestic building contract over $16,000.",
                "Insurance",
                "Victorian Managed Insurance Authority",
                State,
                60,
            )?,
        ],
        federal_requirements: vec![
            requirement(
                "ABN Registration",
                "Australian Business Number for quoting and invoicing.",
                "Tax",
                ATO,
                Federal,
                100,
            )?,
            requirement(
                "Taxable Payments Annual Report",
                "Report payments made to subcontractors each financial year.",
                "Tax",
                ATO,
                Federal,
                0,
            )?,
            requirement(
                "Fair Work Compliance",
                "Pay staff under the Building and Construction General On-site Award.",
                "Employment",
                "Fair Work Ombudsman",
                Federal,
                70,
            )?,
        ],
        steps: vec![
            step(
                1,
                "Register as a domestic builder",
                "Complete the VBA application and assessment.",
                "8-12 weeks",
                StepStatus::Completed,
            ),
            step(
                2,
                "Arrange insurance",
                "Obtain domestic building insurance and public liability cover.",
                "1-2 weeks",
                StepStatus::Completed,
            ),
            step(
                3,
                "Set up safety systems",
                "Register with WorkSafe Victoria and prepare safe work method statements.",
                "2 weeks",
                StepStatus::InProgress,
            ),
            step(
                4,
                "Lodge first building permit",
                "Engage a building surveyor for the first project and obtain the permit.",
                "2-6 weeks",
                StepStatus::Pending,
            ),
        ],
        conflicts: vec![
            conflict(
                "Construction Noise Hours",
                "Council permits allow works from 7am while EPA Victoria residential noise guidelines restrict noisy works before 9am on weekends.",
                &["City of Melbourne", "VIC State"],
                Severity::Medium,
            ),
            conflict(
                "Footpath Occupation",
                "Asset protection permits limit footpath occupation that state site safety rules require for hoarding.",
                &["City of Melbourne", "VIC State"],
                Severity::Low,
            ),
        ],
    })
}
