//! Western Australian content: mobile vending regulations and the "Food
//! Truck in Perth" scenario.

use rtn_core::{AustralianState, Scenario, ScenarioId};

use super::*;

const COUNCIL: &str = "City of Perth";

pub fn regulations() -> Result<Vec<Regulation>, RtnError> {
    Ok(vec![regulation(
        "mobile-food-vendor-permit",
        "Mobile Food Vendor Permit",
        JurisdictionTag::Local,
        "Council permit to trade from a food truck or van at approved locations and events.",
        &[
            "Register the vehicle as a food premises",
            "Nominate approved trading locations",
            "Carry the permit while trading",
        ],
        Complexity::Medium,
        "$400 - $1,200 per year",
        "2-4 weeks",
    )?])
}

/// A street food vendor trading at markets and events.
pub fn food_truck_perth() -> Result<Scenario, RtnError> {
    use JurisdictionLevel::{Federal, Local, State};

    Ok(Scenario {
        id: ScenarioId::new("food-truck-perth")?,
        title: "Food Truck in Perth".to_string(),
        industry: "Mobile Food".to_string(),
        location: "Perth, WA".to_string(),
        state: AustralianState::Wa,
        description: "Mobile street food vendor trading at weekend markets and events across Perth.".to_string(),
        local_requirements: vec![
            requirement(
                "Mobile Food Vendor Permit",
                "Annual permit to trade at approved sites in the city.",
                "Permits",
                COUNCIL,
                Local,
                100,
            )?,
            requirement(
                "Event Trading Approval",
                "Per-event approval for markets and festivals.",
                "Permits",
                COUNCIL,
                Local,
                40,
            )?,
        ],
        state_requirements: vec![
            requirement(
                "Food Act Registration",
                "Registration of the vehicle as a food business under the Food Act 2008 (WA).",
                "Food Safety",
                "Department of Health WA",
                State,
                100,
            )?,
            requirement(
                "Gas Installation Compliance Certificate",
                "Certificate for LPG appliances fitted to the vehicle.",
                "Safety",
                "Building and Energy WA",
                State,
                60,
            )?,
        ],
        federal_requirements: vec![
            requirement(
                "ABN Registration",
                "Australian Business Number for the vending business.",
                "Tax",
                "Australian Taxation Office",
                Federal,
                100,
            )?,
            requirement(
                "Food Standards Code Compliance",
                "Allergen and ingredient labelling for packaged items.",
                "Food Safety",
                "Food Standards Australia New Zealand",
                Federal,
                70,
            )?,
        ],
        steps: vec![
            step(
                1,
                "Register the vehicle",
                "Register the truck as a food business and obtain the gas certificate.",
                "3 weeks",
                StepStatus::Completed,
            ),
            step(
                2,
                "Obtain trading permits",
                "Apply for the annual vendor permit and the first event approvals.",
                "2-4 weeks",
                StepStatus::InProgress,
            ),
        ],
        conflicts: vec![conflict(
            "Trading Location Rules",
            "City permits restrict trading near fixed food premises while state event approvals assign vendor sites without that buffer.",
            &["City of Perth", "WA State"],
            Severity::Medium,
        )],
    })
}
