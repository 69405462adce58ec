//! Australian Capital Territory content and the "Cybersecurity Start-up"
//! scenario.
//!
//! The ACT has no separate local councils; territory agencies administer
//! the local-layer approvals.

use rtn_core::{AustralianState, Scenario, ScenarioId};

use super::*;

const TERRITORY_AND_COMMONWEALTH: &[&str] = &["ACT Territory", "Commonwealth"];
const OAIC: &str = "Office of the Australian Information Commissioner";

pub fn regulations() -> Result<Vec<Regulation>, RtnError> {
    Ok(vec![
        regulation(
            "act-payroll-tax",
            "Payroll Tax Registration (ACT)",
            JurisdictionTag::State,
            "Payroll tax registration with the ACT Revenue Office once Australian wages exceed the monthly threshold.",
            &["Monitor monthly wages", "Register within seven days of exceeding the threshold"],
            Complexity::Medium,
            "Free",
            "1 week",
        )?,
        regulation(
            "act-government-supplier",
            "ACT Government Supplier Registration",
            JurisdictionTag::State,
            "Supplier registration and security obligations for businesses delivering services to ACT Government agencies.",
            &[
                "Register on the territory tenders portal",
                "Meet the ACT protective security policy",
                "Hold professional indemnity insurance",
            ],
            Complexity::Medium,
            "Free",
            "2-3 weeks",
        )?,
    ])
}

/// An early-stage security consultancy serving government clients.
pub fn cybersecurity_canberra() -> Result<Scenario, RtnError> {
    use JurisdictionLevel::{Federal, Local, State};

    Ok(Scenario {
        id: ScenarioId::new("cyber-canberra")?,
        title: "Cybersecurity Start-up".to_string(),
        industry: "Technology".to_string(),
        location: "Canberra, ACT".to_string(),
        state: AustralianState::Act,
        description: "Early-stage cybersecurity consultancy in Canberra providing penetration testing and security assessments to government and enterprise clients.".to_string(),
        local_requirements: vec![
            requirement(
                "Home Business Approval",
                "Approval to operate from a residential address during the start-up phase.",
                "Planning",
                "Access Canberra",
                Local,
                100,
            )?,
            requirement(
                "Commercial Lease Approval",
                "Permitted use check for office premises in a commercial zone.",
                "Planning",
                "ACT Planning and Land Authority",
                Local,
                30,
            )?,
        ],
        state_requirements: vec![
            requirement(
                "ACT Payroll Tax Registration",
                "Register once wages exceed the territory threshold.",
                "Tax",
                "ACT Revenue Office",
                State,
                0,
            )?,
            requirement(
                "Workers Compensation Policy",
                "Compulsory workers compensation insurance for employees.",
                "Employment",
                "WorkSafe ACT",
                State,
                100,
            )?,
            requirement(
                "ACT Government Supplier Registration",
                "Register as a supplier for territory security engagements.",
                "Procurement",
                "Procurement ACT",
                State,
                60,
            )?,
        ],
        federal_requirements: vec![
            requirement(
                "ABN Registration",
                "Australian Business Number for the consultancy.",
                "Tax",
                "Australian Taxation Office",
                Federal,
                100,
            )?,
            requirement(
                "Privacy Act Compliance",
                "Apply the Australian Privacy Principles to client data handled during assessments.",
                "Privacy",
                OAIC,
                Federal,
                40,
            )?,
            requirement(
                "Notifiable Data Breaches Scheme",
                "Assess suspected breaches within 30 days and notify affected individuals.",
                "Privacy",
                OAIC,
                Federal,
                20,
            )?,
            requirement(
                "Defence Industry Security Program Membership",
                "DISP membership for work on Defence projects and facilities.",
                "Security",
                "Department of Defence",
                Federal,
                10,
            )?,
            requirement(
                "Protective Security Policy Framework Alignment",
                "Align internal controls with the PSPF for Commonwealth engagements.",
                "Security",
                "Department of Home Affairs",
                Federal,
                30,
            )?,
            requirement(
                "R&D Tax Incentive Registration",
                "Register eligible research and development activities each income year.",
                "Tax",
                "AusIndustry",
                Federal,
                0,
            )?,
        ],
        steps: vec![
            step(
                1,
                "Incorporate and register",
                "Register the company, ABN and business name.",
                "1 week",
                StepStatus::Completed,
            ),
            step(
                2,
                "Establish privacy and breach procedures",
                "Write the privacy policy and data breach response plan.",
                "3 weeks",
                StepStatus::InProgress,
            ),
            step(
                3,
                "Apply for DISP membership",
                "Nominate a security officer and lodge the DISP application.",
                "2-4 months",
                StepStatus::Pending,
            ),
            step(
                4,
                "Register as a government supplier",
                "Complete ACT and Commonwealth supplier registrations.",
                "3 weeks",
                StepStatus::Pending,
            ),
        ],
        conflicts: vec![
            conflict(
                "Data Breach Notification Timelines",
                "The ACT Information Privacy Act and the Commonwealth Notifiable Data Breaches scheme set different assessment and notification timelines for the same incident.",
                TERRITORY_AND_COMMONWEALTH,
                Severity::High,
            ),
            conflict(
                "Security Clearance Sponsorship",
                "ACT Government engagements accept baseline vetting while Commonwealth clients require AGSVA clearances sponsored through DISP membership.",
                TERRITORY_AND_COMMONWEALTH,
                Severity::Medium,
            ),
            conflict(
                "Data Sovereignty Requirements",
                "Territory contracts require client data to stay in approved ACT facilities while Commonwealth engagements require certified cloud hosting.",
                TERRITORY_AND_COMMONWEALTH,
                Severity::High,
            ),
            conflict(
                "Incident Reporting Obligations",
                "Commonwealth critical infrastructure rules require incident reports within 12 hours while territory contracts route reports through the agency security adviser first.",
                TERRITORY_AND_COMMONWEALTH,
                Severity::Medium,
            ),
        ],
    })
}
