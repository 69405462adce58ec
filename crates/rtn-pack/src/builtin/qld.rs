//! Queensland content: retail regulations and the "Retail Store in
//! Brisbane" scenario.

use rtn_core::{AustralianState, Scenario, ScenarioId};

use super::*;

const COUNCIL: &str = "Brisbane City Council";
const ATO: &str = "Australian Taxation Office";
const ACCC: &str = "Australian Competition and Consumer Commission";

pub fn regulations() -> Result<Vec<Regulation>, RtnError> {
    Ok(vec![
        regulation(
            "retail-shop-lease",
            "Retail Shop Lease Compliance",
            JurisdictionTag::State,
            "Queensland retail lease disclosure, registration and dispute resolution obligations for tenants and landlords.",
            &[
                "Receive the lessor disclosure statement",
                "Obtain independent legal advice",
                "Register leases longer than three years",
            ],
            Complexity::Medium,
            "$200 - $800",
            "2-4 weeks",
        )?,
        regulation(
            "advertising-signage-approval",
            "Advertising Signage Approval",
            JurisdictionTag::Local,
            "Council approval for shopfront, projecting and illuminated advertising signs.",
            &["Check the signage code", "Submit sign dimensions and placement"],
            Complexity::Low,
            "$150 - $600",
            "1-3 weeks",
        )?,
    ])
}

/// A clothing boutique in the Brisbane CBD with online sales.
pub fn retail_brisbane() -> Result<Scenario, RtnError> {
    use JurisdictionLevel::{Federal, Local, State};

    Ok(Scenario {
        id: ScenarioId::new("retail-brisbane")?,
        title: "Retail Store in Brisbane".to_string(),
        industry: "Retail".to_string(),
        location: "Brisbane, QLD".to_string(),
        state: AustralianState::Qld,
        description: "Clothing and accessories boutique in the Brisbane CBD, with an online store shipping nationally.".to_string(),
        local_requirements: vec![
            requirement(
                "Advertising Signage Approval",
                "Approval for the illuminated shopfront sign.",
                "Permits",
                COUNCIL,
                Local,
                100,
            )?,
            requirement(
                "Shopfront Fit-out Approval",
                "Building approval for internal fit-out and accessible entry.",
                "Permits",
                COUNCIL,
                Local,
                70,
            )?,
        ],
        state_requirements: vec![
            requirement(
                "Retail Shop Lease Registration",
                "Register the five-year lease and keep the disclosure statement.",
                "Leasing",
                "Queensland Small Business Commissioner",
                State,
                100,
            )?,
            requirement(
                "WorkCover Queensland Policy",
                "Workers compensation accident insurance for employees.",
                "Employment",
                "WorkCover Queensland",
                State,
                100,
            )?,
            requirement(
                "Trading Hours Compliance",
                "Follow the trading hours order for non-exempt retail shops.",
                "Operations",
                "Office of Industrial Relations Queensland",
                State,
                80,
            )?,
        ],
        federal_requirements: vec![
            requirement(
                "ABN Registration",
                "Australian Business Number for the trading entity.",
                "Tax",
                ATO,
                Federal,
                100,
            )?,
            requirement(
                "GST Registration",
                "GST registration for in-store and online sales.",
                "Tax",
                ATO,
                Federal,
                100,
            )?,
            requirement(
                "Australian Consumer Law Compliance",
                "Consumer guarantees, refund policy and pricing display.",
                "Consumer Protection",
                ACCC,
                Federal,
                50,
            )?,
            requirement(
                "Product Safety Standards",
                "Mandatory safety standards for children's clothing and nightwear.",
                "Consumer Protection",
                ACCC,
                Federal,
                30,
            )?,
        ],
        steps: vec![
            step(
                1,
                "Secure the lease",
                "Review the disclosure statement and register the lease.",
                "3 weeks",
                StepStatus::Completed,
            ),
            step(
                2,
                "Fit out the shopfront",
                "Obtain fit-out and signage approvals from council.",
                "4 weeks",
                StepStatus::InProgress,
            ),
            step(
                3,
                "Set up consumer policies",
                "Publish refund, warranty and privacy policies for in-store and online sales.",
                "1 week",
                StepStatus::Pending,
            ),
        ],
        conflicts: vec![
            conflict(
                "Public Holiday Trading",
                "Council development conditions limit late trading while the state trading hours order permits extended public holiday hours.",
                &["Brisbane City", "QLD State"],
                Severity::Low,
            ),
            conflict(
                "Online Refund Policies",
                "State fair trading guidance on change-of-mind refunds differs from the Commonwealth consumer guarantee wording used for online orders.",
                &["QLD State", "Commonwealth"],
                Severity::Medium,
            ),
        ],
    })
}
