//! Gripper capability check
//!
//! Compares what a gripper can squeeze with what the object needs:
//! - Friction available at all
//! - Force per contact vs rated force
//! - Rotation about the grip axis
//!
//! and suggests what to change when the grip would slip.

use std::fmt;

use crate::physics::grip::{BindingConstraint, GripRequirementInput, GripRequirementResult};
use crate::types::*;

/// Margin below which a passing grip is flagged (percent)
pub const LOW_MARGIN_PERCENT: f64 = 10.0;

/// Result of grip validation
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub overall_status: ValidationStatus,
    pub checks: Vec<ValidationCheck>,
    pub warnings: Vec<String>,
    pub critical_issues: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationStatus {
    /// All checks passed
    Approved,

    /// Passed with warnings
    ApprovedWithWarnings,

    /// Failed critical checks
    Rejected,
}

#[derive(Debug, Clone)]
pub struct ValidationCheck {
    pub name: String,
    pub status: CheckStatus,
    pub details: String,
    pub margin: Option<f64>, // Percentage margin (if applicable)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            overall_status: ValidationStatus::Approved,
            checks: Vec::new(),
            warnings: Vec::new(),
            critical_issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    pub fn add_check(&mut self, check: ValidationCheck) {
        match check.status {
            CheckStatus::Fail => {
                self.overall_status = ValidationStatus::Rejected;
                self.critical_issues.push(format!("{}: {}", check.name, check.details));
            }
            CheckStatus::Warning => {
                if self.overall_status == ValidationStatus::Approved {
                    self.overall_status = ValidationStatus::ApprovedWithWarnings;
                }
                self.warnings.push(format!("{}: {}", check.name, check.details));
            }
            CheckStatus::Pass => {}
        }
        self.checks.push(check);
    }

    pub fn add_recommendation(&mut self, rec: String) {
        self.recommendations.push(rec);
    }

    pub fn is_approved(&self) -> bool {
        self.overall_status != ValidationStatus::Rejected
    }

    /// Find a check by name
    pub fn check(&self, name: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔════════════════════════════════════════════╗")?;
        writeln!(f, "║          GRIP VALIDATION REPORT            ║")?;
        writeln!(f, "╚════════════════════════════════════════════╝")?;

        let status_symbol = match self.overall_status {
            ValidationStatus::Approved => "✅",
            ValidationStatus::ApprovedWithWarnings => "⚠️",
            ValidationStatus::Rejected => "❌",
        };
        writeln!(f, "{} Overall Status: {:?}\n", status_symbol, self.overall_status)?;

        writeln!(f, "Validation Checks:")?;
        writeln!(f, "{}", "─".repeat(50))?;
        for check in &self.checks {
            let symbol = match check.status {
                CheckStatus::Pass => "✅",
                CheckStatus::Warning => "⚠️",
                CheckStatus::Fail => "❌",
            };

            match check.margin {
                Some(margin) => writeln!(f, "{} {} ({:.1}% margin)", symbol, check.name, margin)?,
                None => writeln!(f, "{} {}", symbol, check.name)?,
            }
            writeln!(f, "   {}", check.details)?;
        }

        let sections = [
            ("❌ CRITICAL ISSUES:", &self.critical_issues),
            ("⚠️  WARNINGS:", &self.warnings),
            ("💡 RECOMMENDATIONS:", &self.recommendations),
        ];
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            writeln!(f, "\n{}", title)?;
            writeln!(f, "{}", "─".repeat(50))?;
            for item in items {
                writeln!(f, "  • {}", item)?;
            }
        }

        write!(f, "\n{}", "═".repeat(50))
    }
}

/// Validate a computed requirement against the force a gripper can apply per contact
pub fn validate_grip(
    input: &GripRequirementInput,
    result: &GripRequirementResult,
    available_force_per_contact: Force,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    // 1. Friction
    validate_friction(result, &mut report);

    // 2. Grip force
    if result.is_satisfiable() {
        validate_grip_force(result, available_force_per_contact, &mut report);
    }

    // 3. Rotation
    validate_rotation(input, result, &mut report);

    report
}

fn validate_friction(result: &GripRequirementResult, report: &mut ValidationReport) {
    if result.is_satisfiable() {
        report.add_check(ValidationCheck {
            name: "Friction".into(),
            status: CheckStatus::Pass,
            details: format!("μ = {:.2}", result.friction_coefficient),
            margin: None,
        });
        return;
    }

    report.add_check(ValidationCheck {
        name: "Friction".into(),
        status: CheckStatus::Fail,
        details: format!(
            "μ = {:.2}: no finite grip force can hold the object",
            result.friction_coefficient
        ),
        margin: None,
    });
    report.add_recommendation(
        "Use pads with real friction: rubber 0.7-0.9, polyurethane 0.4-0.6, smooth steel 0.15-0.25".into(),
    );
}

fn validate_grip_force(
    result: &GripRequirementResult,
    available: Force,
    report: &mut ValidationReport,
) {
    let required_n = result.required_force_per_contact.get::<newton>();
    let available_n = available.get::<newton>();

    let margin = if available_n > 0.0 {
        Some(((available_n - required_n) / available_n) * 100.0)
    } else {
        None
    };

    let status = if required_n > available_n {
        CheckStatus::Fail
    } else if margin.is_some_and(|m| m < LOW_MARGIN_PERCENT) {
        CheckStatus::Warning
    } else {
        CheckStatus::Pass
    };

    report.add_check(ValidationCheck {
        name: "Grip Force".into(),
        status,
        details: format!(
            "Required: {} per contact, Available: {} per contact, {} contacts",
            DisplayForce(result.required_force_per_contact),
            DisplayForce(available),
            result.contact_count,
        ),
        margin,
    });

    if status != CheckStatus::Fail || available_n <= 0.0 {
        return;
    }

    // Both requirements scale with 1/μ and 1/n
    let ratio = required_n / available_n;
    report.add_recommendation(format!(
        "Increase gripper force to at least {} per contact",
        DisplayForce(result.required_force_per_contact)
    ));
    report.add_recommendation(format!(
        "Or raise friction to μ ≥ {:.2} with a higher-grip pad material",
        result.friction_coefficient * ratio
    ));
    report.add_recommendation(format!(
        "Or grip with at least {} contacts",
        (result.contact_count as f64 * ratio).ceil() as u64
    ));
}

fn validate_rotation(
    input: &GripRequirementInput,
    result: &GripRequirementResult,
    report: &mut ValidationReport,
) {
    if !input.consider_moment {
        report.add_check(ValidationCheck {
            name: "Rotation".into(),
            status: CheckStatus::Pass,
            details: "Off-axis center of mass not considered".into(),
            margin: None,
        });
        return;
    }

    let status = match result.binding {
        BindingConstraint::Rotational if result.is_satisfiable() => CheckStatus::Warning,
        _ => CheckStatus::Pass,
    };

    report.add_check(ValidationCheck {
        name: "Rotation".into(),
        status,
        details: format!(
            "Offset e = {}, r_eff = {}, rotation needs {} vs sliding {}",
            DisplayLength(input.com_offset),
            DisplayLength(input.friction_arm),
            DisplayForce(result.rotational_force_per_contact),
            DisplayForce(result.translational_force_per_contact),
        ),
        margin: None,
    });

    if status == CheckStatus::Warning {
        report.add_recommendation(
            "Rotation governs: grip closer to the center of mass or use wider, more compliant pads for a larger r_eff".into(),
        );
    }
}
