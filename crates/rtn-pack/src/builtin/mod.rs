//! # Built-in Catalogue
//!
//! Australian regulatory reference data, organised by jurisdiction:
//!
//! | Module       | Regulations                        | Scenario                          |
//! |--------------|------------------------------------|-----------------------------------|
//! | [`federal`]  | Commonwealth and multi-layer       | none                              |
//! | [`nsw`]      | NSW state and council              | Café in Sydney                    |
//! | [`vic`]      | VIC state and council              | Construction Company in Melbourne |
//! | [`qld`]      | QLD state and council              | Retail Store in Brisbane          |
//! | [`wa`]       | WA state and council               | Food Truck in Perth               |
//! | [`act`]      | ACT territory                      | Cybersecurity Start-up            |
//!
//! Catalogue order is significant: relevance filtering preserves it.

pub mod act;
pub mod federal;
pub mod nsw;
pub mod qld;
pub mod vic;
pub mod wa;

use rtn_core::{
    ComplianceStep, Complexity, Conflict, JurisdictionLevel, JurisdictionTag, Progress,
    Regulation, RegulationId, Requirement, RtnError, Severity, StepStatus,
};

use crate::dataset::Dataset;
use crate::error::PackResult;

/// Assemble the full built-in catalogue.
pub fn catalogue() -> PackResult<Dataset> {
    let mut regulations = federal::regulations()?;
    regulations.extend(nsw::regulations()?);
    regulations.extend(vic::regulations()?);
    regulations.extend(qld::regulations()?);
    regulations.extend(wa::regulations()?);
    regulations.extend(act::regulations()?);

    let scenarios = vec![
        nsw::cafe_sydney()?,
        vic::construction_melbourne()?,
        qld::retail_brisbane()?,
        wa::food_truck_perth()?,
        act::cybersecurity_canberra()?,
    ];

    Ok(Dataset::new(regulations, scenarios))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn regulation(
    id: &str,
    title: &str,
    jurisdiction: JurisdictionTag,
    description: &str,
    requirements: &[&str],
    complexity: Complexity,
    cost: &str,
    timeframe: &str,
) -> Result<Regulation, RtnError> {
    Ok(Regulation {
        id: RegulationId::new(id)?,
        title: title.to_string(),
        jurisdiction,
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        complexity,
        cost: cost.to_string(),
        timeframe: timeframe.to_string(),
    })
}

pub(crate) fn requirement(
    title: &str,
    description: &str,
    category: &str,
    regulator: &str,
    jurisdiction: JurisdictionLevel,
    progress: u8,
) -> Result<Requirement, RtnError> {
    Ok(Requirement {
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        regulator: regulator.to_string(),
        jurisdiction,
        progress: Progress::new(progress)?,
    })
}

pub(crate) fn step(
    step: u32,
    title: &str,
    description: &str,
    timeframe: &str,
    status: StepStatus,
) -> ComplianceStep {
    ComplianceStep {
        step,
        title: title.to_string(),
        description: description.to_string(),
        timeframe: timeframe.to_string(),
        status,
    }
}

pub(crate) fn conflict(
    title: &str,
    description: &str,
    jurisdictions: &[&str],
    severity: Severity,
) -> Conflict {
    Conflict {
        title: title.to_string(),
        description: description.to_string(),
        jurisdictions: jurisdictions.iter().map(|j| j.to_string()).collect(),
        severity,
    }
}
