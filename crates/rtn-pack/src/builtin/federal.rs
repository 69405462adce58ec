//! Commonwealth and multi-layer regulations.
//!
//! These apply to businesses in every state and territory.

use super::*;

/// Federal (and multi-layer) regulations in catalogue order.
pub fn regulations() -> Result<Vec<Regulation>, RtnError> {
    Ok(vec![
        regulation(
            "abn-registration",
            "ABN Registration",
            JurisdictionTag::Federal,
            "Australian Business Number registration with the Australian Business Register, required before invoicing or registering for GST.",
            &[
                "Choose a business structure",
                "Apply online through the Australian Business Register",
                "Keep ABN details up to date",
            ],
            Complexity::Low,
            "Free",
            "Same day",
        )?,
        regulation(
            "gst-registration",
            "GST Registration",
            JurisdictionTag::Federal,
            "Goods and Services Tax registration, mandatory once annual turnover reaches $75,000.",
            &[
                "Hold an active ABN",
                "Register for GST with the Australian Taxation Office",
                "Lodge business activity statements",
            ],
            Complexity::Low,
            "Free",
            "1-2 days",
        )?,
        regulation(
            "business-name-registration",
            "Business Name Registration",
            JurisdictionTag::Federal,
            "Registration of a trading name with ASIC when trading under a name other than the legal entity name.",
            &["Check name availability", "Register with ASIC", "Renew every one or three years"],
            Complexity::Low,
            "$42 - $98",
            "1 day",
        )?,
        regulation(
            "privacy-act-compliance",
            "Privacy Act Compliance",
            JurisdictionTag::Federal,
            "Australian Privacy Principles for organisations handling personal information, including data breach notification and cybersecurity safeguards for stored data.",
            &[
                "Publish a privacy policy",
                "Implement reasonable security safeguards",
                "Assess and notify eligible data breaches",
            ],
            Complexity::High,
            "$5,000 - $50,000",
            "3-6 months",
        )?,
        regulation(
            "fair-work-compliance",
            "Fair Work Compliance",
            JurisdictionTag::Federal,
            "National Employment Standards and modern award obligations for every business with employees.",
            &[
                "Identify the applicable modern award",
                "Provide the Fair Work Information Statement",
                "Keep time and wage records for seven years",
            ],
            Complexity::Medium,
            "Varies",
            "Ongoing",
        )?,
        regulation(
            "food-standards-code",
            "Food Standards Code",
            JurisdictionTag::Multi,
            "Australia New Zealand Food Standards Code covering food labelling, composition and safety, set nationally and enforced by state food authorities and local councils.",
            &[
                "Label allergens and ingredients",
                "Follow food safety practices and general requirements",
                "Keep a food safety program where required",
            ],
            Complexity::Medium,
            "$0 - $2,000",
            "Ongoing",
        )?,
        regulation(
            "critical-infrastructure-risk",
            "Critical Infrastructure Risk Management",
            JurisdictionTag::Federal,
            "Security of Critical Infrastructure Act obligations, including risk management programs and mandatory cybersecurity incident reporting.",
            &[
                "Register critical infrastructure assets",
                "Adopt a risk management program",
                "Report significant cyber incidents within 12 hours",
            ],
            Complexity::High,
            "$20,000+",
            "6-12 months",
        )?,
        regulation(
            "environment-protection-licence",
            "Environment Protection Licence",
            JurisdictionTag::Multi,
            "Environmental approvals spanning council conditions, state EPA licences and Commonwealth EPBC Act referrals for activities with environmental impact.",
            &[
                "Screen the activity against state scheduled activities",
                "Refer matters of national significance under the EPBC Act",
                "Meet council development conditions",
            ],
            Complexity::High,
            "$2,000 - $20,000",
            "3-9 months",
        )?,
    ])
}
