//! New South Wales content: council and state regulations, and the
//! "Café in Sydney" scenario.

use rtn_core::{AustralianState, Scenario, ScenarioId};

use super::*;

const COUNCIL: &str = "City of Sydney Council";
const FOOD_AUTHORITY: &str = "NSW Food Authority";
const ATO: &str = "Australian Taxation Office";

pub fn regulations() -> Result<Vec<Regulation>, RtnError> {
    Ok(vec![
        regulation(
            "food-business-license",
            "Food Business License",
            JurisdictionTag::Local,
            "Council registration and licensing for any business that handles, prepares or sells food to the public.",
            &[
                "Register the food business with the local council",
                "Appoint a certified Food Safety Supervisor",
                "Pass a premises fit-out inspection",
            ],
            Complexity::Medium,
            "$300 - $1,000",
            "2-4 weeks",
        )?,
        regulation(
            "liquor-licence-nsw",
            "Liquor Licence (NSW)",
            JurisdictionTag::State,
            "Licence from Liquor & Gaming NSW to sell or supply alcohol on premises, including responsible service obligations.",
            &[
                "Complete Responsible Service of Alcohol training",
                "Lodge a community impact statement",
                "Display licence conditions",
            ],
            Complexity::High,
            "$500 - $2,500",
            "4-8 weeks",
        )?,
        regulation(
            "outdoor-dining-permit",
            "Outdoor Dining Permit",
            JurisdictionTag::Local,
            "Council approval for footpath seating used by food and beverage businesses.",
            &[
                "Submit a footpath layout plan",
                "Hold public liability insurance",
                "Observe approved trading hours",
            ],
            Complexity::Low,
            "$100 - $500 per year",
            "2-3 weeks",
        )?,
    ])
}

/// A small inner-city café with footpath seating and a planned liquor licence.
pub fn cafe_sydney() -> Result<Scenario, RtnError> {
    use JurisdictionLevel::{Federal, Local, State};

    Ok(Scenario {
        id: ScenarioId::new("cafe-sydney")?,
        title: "Café in Sydney".to_string(),
        industry: "Food & Hospitality".to_string(),
        location: "Sydney, NSW".to_string(),
        state: AustralianState::Nsw,
        description: "Opening a 40-seat café in inner Sydney serving coffee, breakfast and lunch, with footpath seating and a planned liquor licence.".to_string(),
        local_requirements: vec![
            requirement(
                "Food Business Registration",
                "Register the café as a food business with council before trading.",
                "Food Safety",
                COUNCIL,
                Local,
                100,
            )?,
            requirement(
                "Health Inspection",
                "Routine council inspection of food handling, storage and cleanliness.",
                "Food Safety",
                COUNCIL,
                Local,
                60,
            )?,
            requirement(
                "Waste Management Plan",
                "Plan for commercial waste, recycling and grease trap servicing.",
                "Environment",
                COUNCIL,
                Local,
                30,
            )?,
            requirement(
                "Outdoor Dining Approval",
                "Footpath seating approval covering table layout and trading hours.",
                "Permits",
                COUNCIL,
                Local,
                0,
            )?,
        ],
        state_requirements: vec![
            requirement(
                "NSW Food Safety Standards",
                "Meet NSW requirements for retail food businesses, including temperature control and cleaning records.",
                "Food Safety",
                FOOD_AUTHORITY,
                State,
                75,
            )?,
            requirement(
                "Food Safety Supervisor Certificate",
                "Keep at least one certified Food Safety Supervisor available during trading.",
                "Training",
                FOOD_AUTHORITY,
                State,
                100,
            )?,
            requirement(
                "On-Premises Liquor Licence",
                "Licence to serve alcohol with meals in the dining area.",
                "Licensing",
                "Liquor & Gaming NSW",
                State,
                0,
            )?,
            requirement(
                "Workers Compensation Insurance",
                "Mandatory workers compensation policy covering all employees.",
                "Employment",
                "icare NSW",
                State,
                50,
            )?,
        ],
        federal_requirements: vec![
            requirement(
                "ABN Registration",
                "Australian Business Number for invoicing and tax reporting.",
                "Tax",
                ATO,
                Federal,
                100,
            )?,
            requirement(
                "GST Registration",
                "Register for GST once turnover is expected to exceed $75,000.",
                "Tax",
                ATO,
                Federal,
                100,
            )?,
            requirement(
                "Food Standards Code Compliance",
                "Labelling and allergen declarations for menu items under the Food Standards Code.",
                "Food Safety",
                "Food Standards Australia New Zealand",
                Federal,
                40,
            )?,
            requirement(
                "Fair Work Compliance",
                "Pay staff under the Hospitality Industry (General) Award.",
                "Employment",
                "Fair Work Ombudsman",
                Federal,
                20,
            )?,
        ],
        steps: vec![
            step(
                1,
                "Register business structure",
                "Obtain an ABN, register the business name and set up GST.",
                "1 week",
                StepStatus::Completed,
            ),
            step(
                2,
                "Register food business with council",
                "Lodge the food business registration and nominate a Food Safety Supervisor.",
                "2 weeks",
                StepStatus::Completed,
            ),
            step(
                3,
                "Complete fit-out and inspection",
                "Finish kitchen fit-out to the food premises standard and book the council inspection.",
                "4-6 weeks",
                StepStatus::InProgress,
            ),
            step(
                4,
                "Apply for outdoor dining approval",
                "Submit the footpath layout plan and insurance certificate.",
                "3 weeks",
                StepStatus::Pending,
            ),
            step(
                5,
                "Apply for liquor licence",
                "Lodge the on-premises licence application with Liquor & Gaming NSW.",
                "6-8 weeks",
                StepStatus::Pending,
            ),
        ],
        conflicts: vec![
            conflict(
                "Outdoor Trading Hours",
                "Council footpath approval ends outdoor trading at 10pm while the liquor licence permits service until midnight.",
                &["City of Sydney", "NSW State"],
                Severity::Medium,
            ),
            conflict(
                "Waste Collection Windows",
                "Council commercial waste collection times overlap with state noise restrictions in mixed residential zones.",
                &["City of Sydney", "NSW State"],
                Severity::Low,
            ),
        ],
    })
}
