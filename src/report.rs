//! Plain-text result summary with the formula breakdown

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::physics::grip::{GripRequirementInput, GripRequirementResult};
use crate::physics::moment::gravity_moment;
use crate::types::*;

/// Newtons with one decimal, `∞` when no finite force exists
pub fn format_newtons(force: Force) -> String {
    let n = force.get::<newton>();
    if n.is_infinite() && n > 0.0 {
        "∞".to_string()
    } else {
        format!("{:.1}", n)
    }
}

/// A computed grip requirement together with the input it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GripReport {
    pub input: GripRequirementInput,
    pub result: GripRequirementResult,
}

impl GripReport {
    pub fn new(input: GripRequirementInput, result: GripRequirementResult) -> Self {
        Self { input, result }
    }

    /// Result as pretty JSON for front ends; infinite forces are `"inf"`
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for GripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.result;

        writeln!(f, "Effective load W [N]:   {:.1}", r.effective_load.get::<newton>())?;
        writeln!(f, "Friction μ:             {:.2}", r.friction_coefficient)?;
        writeln!(f, "Contacts:               {}", r.contact_count)?;
        writeln!(f, "Per contact Fᵢ [N]:     {}", format_newtons(r.required_force_per_contact))?;
        writeln!(f, "Total gripper ΣF [N]:   {}", format_newtons(r.total_required_force))?;
        writeln!(f)?;

        writeln!(f, "Translation: n·μ·Nᵢ ≥ SF·W  ⇒  Nᵢ ≥ SF·W / (n·μ)")?;
        writeln!(f, "  → Nᵢ,transl = {} N", format_newtons(r.translational_force_per_contact))?;

        if self.input.consider_moment {
            writeln!(
                f,
                "Rotation (considered): M_g = W·e = {} with e = {}",
                DisplayTorque(gravity_moment(r.effective_load, self.input.com_offset)),
                DisplayLength(self.input.com_offset),
            )?;
        } else {
            writeln!(f, "Rotation (not considered): M_g = W·e")?;
        }
        writeln!(f, "  M_max ≈ n·μ·Nᵢ·r_eff  ⇒  Nᵢ ≥ SF·W·e / (n·μ·r_eff)")?;
        writeln!(f, "  → Nᵢ,rot = {} N", format_newtons(r.rotational_force_per_contact))?;

        write!(f, "Requirement: Nᵢ = max(Nᵢ,transl, Nᵢ,rot), ΣN = n·Nᵢ ({:?} governs)", r.binding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::grip::compute;

    fn report(input: GripRequirementInput) -> GripReport {
        let result = compute(&input).unwrap();
        GripReport::new(input, result)
    }

    #[test]
    fn test_summary_lines() {
        let text = report(GripRequirementInput::default()).to_string();

        assert!(text.contains("Effective load W [N]:   19.6"));
        assert!(text.contains("Per contact Fᵢ [N]:     130.8"));
        assert!(text.contains("Total gripper ΣF [N]:   261.6"));
        assert!(text.contains("Rotation (not considered)"));
        assert!(text.contains("Nᵢ,rot = 0.0 N"));
    }

    #[test]
    fn test_infinite_rendered_as_symbol() {
        let text = report(GripRequirementInput::default().with_friction_coefficient(0.0)).to_string();

        assert!(text.contains("Per contact Fᵢ [N]:     ∞"));
        assert!(text.contains("Nᵢ,transl = ∞ N"));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn test_moment_details() {
        let input = GripRequirementInput::default()
            .with_moment(Length::new::<millimeter>(20.0), Length::new::<millimeter>(10.0));
        let text = report(input).to_string();

        assert!(text.contains("Rotation (considered)"));
        assert!(text.contains("0.392 N·m"));
        assert!(text.contains("Rotational governs"));
    }

    #[test]
    fn test_json_export() {
        let json = report(GripRequirementInput::default()).to_json().unwrap();
        assert!(json.contains("\"required_force_per_contact\""));
        assert!(json.contains("\"binding\": \"Translational\""));
    }

    #[test]
    fn test_json_keeps_unsatisfiable_requirement() {
        let original = report(GripRequirementInput::default().with_friction_coefficient(0.0));
        let json = original.to_json().unwrap();

        assert!(json.contains("\"required_force_per_contact\": \"inf\""));
        assert!(!json.contains("null"));

        let restored = GripReport::from_json(&json).unwrap();
        assert_eq!(restored, original);
        assert!(!restored.result.is_satisfiable());
    }
}
