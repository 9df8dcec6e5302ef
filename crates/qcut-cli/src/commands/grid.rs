//! Grid command implementation.

use anyhow::Result;
use console::style;

use qcut_core::AngleGrid;

use super::common::print_result;

/// Execute the grid command.
pub fn execute(rounds: usize, steps: usize, sample_range_scale: f64) -> Result<()> {
    if sample_range_scale.is_nan() || sample_range_scale <= 0.0 {
        anyhow::bail!("Sample range scale must be positive, got {sample_range_scale}");
    }

    let grid = AngleGrid::new(rounds, steps).with_range_scale(sample_range_scale);

    println!(
        "{} QAOA angle grid ({} rounds, {} steps)",
        style("→").cyan().bold(),
        rounds,
        steps
    );
    print_result("beta", format_angles(&grid.beta_values()));
    print_result("gamma", format_angles(&grid.gamma_values()));

    match grid.num_configurations() {
        Some(n) => print_result("configurations", n),
        None => print_result("configurations", style("more than usize::MAX").red()),
    }

    Ok(())
}

fn format_angles(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.4}")).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_angles() {
        assert_eq!(format_angles(&[0.5, 1.0]), "[0.5000, 1.0000]");
        assert_eq!(format_angles(&[]), "[]");
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        assert!(execute(1, 3, 0.0).is_err());
        assert!(execute(1, 3, f64::NAN).is_err());
        assert!(execute(1, 3, 0.5).is_ok());
    }
}
