use super::config::PolicyConstants;

/// Validate policy thresholds at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_policy(policy: &PolicyConstants) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !policy.max_overtime.is_finite() {
        errors.push(format!(
            "policy.max_overtime: must be a finite number, got {}",
            policy.max_overtime
        ));
    }

    if !policy.min_wage.is_finite() {
        errors.push(format!(
            "policy.min_wage: must be a finite number, got {}",
            policy.min_wage
        ));
    } else if policy.min_wage < 0.0 {
        errors.push("policy.min_wage: must be non-negative".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
