//! # Dataset Validation
//!
//! Structural checks run whenever a dataset is loaded from outside the
//! crate. Serde has already enforced the closed tag sets and progress
//! bounds; these checks cover cross-record invariants.
//!
//! ## Errors (dataset rejected)
//!
//! - Duplicate regulation or scenario ids.
//! - Empty titles on any record.
//! - A requirement stored in a bucket that disagrees with its jurisdiction.
//! - Step ordinals that are not strictly increasing within a scenario.
//!
//! ## Warnings (dataset accepted)
//!
//! - Conflicts naming fewer than two jurisdictions.
//! - Scenarios without roadmap steps.
//! - Requirements with an empty regulator.

use std::collections::HashSet;

use rtn_core::{JurisdictionLevel, Scenario};

use crate::dataset::Dataset;

/// Outcome of validating a dataset.
#[derive(Debug, Default)]
pub struct DatasetValidation {
    /// Fatal problems.
    pub errors: Vec<String>,
    /// Non-fatal problems.
    pub warnings: Vec<String>,
}

impl DatasetValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate cross-record invariants of a dataset.
pub fn validate_dataset(dataset: &Dataset) -> DatasetValidation {
    let mut report = DatasetValidation::default();

    let mut regulation_ids = HashSet::new();
    for regulation in &dataset.regulations {
        if !regulation_ids.insert(regulation.id.as_str()) {
            report
                .errors
                .push(format!("duplicate regulation id: {}", regulation.id));
        }
        if regulation.title.trim().is_empty() {
            report
                .errors
                .push(format!("regulation {} has an empty title", regulation.id));
        }
    }

    let mut scenario_ids = HashSet::new();
    for scenario in &dataset.scenarios {
        if !scenario_ids.insert(scenario.id.as_str()) {
            report
                .errors
                .push(format!("duplicate scenario id: {}", scenario.id));
        }
        validate_scenario(scenario, &mut report);
    }

    report
}

fn validate_scenario(scenario: &Scenario, report: &mut DatasetValidation) {
    let id = &scenario.id;

    if scenario.title.trim().is_empty() {
        report
            .errors
            .push(format!("scenario {id} has an empty title"));
    }

    for level in JurisdictionLevel::all() {
        for requirement in scenario.bucket(*level) {
            if requirement.title.trim().is_empty() {
                report.errors.push(format!(
                    "scenario {id}: {level} requirement with an empty title"
                ));
            }
            if requirement.jurisdiction != *level {
                report.errors.push(format!(
                    "scenario {id}: requirement {:?} is tagged {} but stored in the {level} bucket",
                    requirement.title, requirement.jurisdiction
                ));
            }
            if requirement.regulator.trim().is_empty() {
                report.warnings.push(format!(
                    "scenario {id}: requirement {:?} has no regulator",
                    requirement.title
                ));
            }
        }
    }

    if scenario.steps.is_empty() {
        report
            .warnings
            .push(format!("scenario {id} has no compliance steps"));
    }
    for pair in scenario.steps.windows(2) {
        if pair[1].step <= pair[0].step {
            report.errors.push(format!(
                "scenario {id}: step ordinals must increase (step {} follows step {})",
                pair[1].step, pair[0].step
            ));
        }
    }
    for step in &scenario.steps {
        if step.title.trim().is_empty() {
            report
                .errors
                .push(format!("scenario {id}: step {} has an empty title", step.step));
        }
    }

    for conflict in &scenario.conflicts {
        if conflict.title.trim().is_empty() {
            report
                .errors
                .push(format!("scenario {id}: conflict with an empty title"));
        }
        if conflict.jurisdictions.len() < 2 {
            report.warnings.push(format!(
                "scenario {id}: conflict {:?} names fewer than two jurisdictions",
                conflict.title
            ));
        }
    }
}
