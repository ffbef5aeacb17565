use gripper_core::capacity::{sweep, validate_grip, write_csv_file, SweepParameter};
use gripper_core::report::GripReport;
use gripper_core::types::*;
use gripper_core::{ForceRequirementCalculator, FrictionSelection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = ForceRequirementCalculator::standard();

    println!("Friction presets:");
    for preset in calculator.presets().iter() {
        println!("  {:<28} μ = {:.2}", preset.name, preset.coefficient);
    }

    // 2 kg part, lifted at 2 m/s², held 20 mm off the grip axis
    let input = calculator
        .default_input()
        .with_vertical_acceleration(Acceleration::new::<meter_per_second_squared>(2.0))
        .with_moment(Length::new::<millimeter>(20.0), Length::new::<millimeter>(10.0));

    let selection = FrictionSelection::preset("Polyurethane on steel");
    let result = calculator.compute_with(&input, &selection)?;
    let input = input.with_friction_coefficient(result.friction_coefficient);

    println!("\n{}\n", GripReport::new(input.clone(), result));

    // Gripper rated 150 N per finger
    let report = validate_grip(&input, &result, Force::new::<newton>(150.0));
    println!("{}", report);

    let rows = sweep(&input, SweepParameter::FrictionCoefficient, 0.1, 1.0, 10)?;
    write_csv_file(SweepParameter::FrictionCoefficient, &rows, "friction_sweep.csv")?;
    println!("\nWrote {} rows to friction_sweep.csv", rows.len());

    Ok(())
}
