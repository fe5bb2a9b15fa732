//! Config validation: unknown-key detection with Levenshtein suggestions
//! and range checks on slider bounds.
//!
//! Two-pass parse approach: first deserialize raw TOML into `toml::Value`,
//! walk the key tree, compare against known field names, and emit warnings
//! with "did you mean?" suggestions. Then proceed with normal serde
//! deserialization. Warnings never break existing configs.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " — did you mean '{s}'?")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Returns the complete set of valid dotted key paths for WorkbenchConfig.
///
/// Maintained manually to match the struct hierarchy in workbench_config.rs.
/// Any new field added there must be added here too.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [prospect]
        "prospect",
        "prospect.name",
        "prospect.field",
        "prospect.operator",
        // [sliders]
        "sliders",
        "sliders.min",
        "sliders.max",
        "sliders.step",
        "sliders.initial",
        // [sliders.presence]
        "sliders.presence",
        "sliders.presence.min",
        "sliders.presence.max",
        "sliders.presence.step",
        "sliders.presence.initial",
        // [sliders.permeability]
        "sliders.permeability",
        "sliders.permeability.min",
        "sliders.permeability.max",
        "sliders.permeability.step",
        "sliders.permeability.initial",
        // [sliders.fluid]
        "sliders.fluid",
        "sliders.fluid.min",
        "sliders.fluid.max",
        "sliders.fluid.step",
        "sliders.fluid.initial",
        // [sliders.temperature]
        "sliders.temperature",
        "sliders.temperature.min",
        "sliders.temperature.max",
        "sliders.temperature.step",
        "sliders.temperature.initial",
        // [sliders.connectivity]
        "sliders.connectivity",
        "sliders.connectivity.min",
        "sliders.connectivity.max",
        "sliders.connectivity.step",
        "sliders.connectivity.initial",
        // [toggles]
        "toggles",
        "toggles.checked_means_included",
        // [display]
        "display",
        "display.percent_decimals",
        // [server]
        "server",
        "server.addr",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively walks a `toml::Value` tree and collects all dotted key paths.
///
/// For example, a table `{ a = { b = 1, c = 2 } }` yields:
/// `["a", "a.b", "a.c"]`
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

/// Compute the Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a_len = a.len();
    let b_len = b.len();
    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key for an unknown key, if within edit distance 3.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for &k in known {
        let dist = levenshtein(unknown, k);
        if dist <= 3 {
            if let Some((_, best_dist)) = best {
                if dist < best_dist {
                    best = Some((k, dist));
                }
            } else {
                best = Some((k, dist));
            }
        }
    }
    best.map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Parse a raw TOML string and return warnings for any unknown config keys.
///
/// This does NOT fail on unknown keys — it only warns. Existing configs
/// always continue to work.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(), // parse errors are handled by serde later
    };

    let known = known_config_keys();
    let found = walk_toml_keys(&value, "");
    let mut warnings = Vec::new();

    for key in &found {
        if !known.contains(key.as_str()) {
            let suggestion = suggest_correction(key, &known);
            let message = format!("Unknown config key '{key}'");
            warnings.push(ValidationWarning {
                field: key.clone(),
                message,
                suggestion,
            });
        }
    }

    warnings
}

// ============================================================================
// Slider Range Validation
// ============================================================================

/// Validate slider bounds on a parsed WorkbenchConfig.
///
/// Returns (errors, warnings) — errors are impossible values that must
/// prevent startup; warnings are unusual but workable.
pub fn validate_slider_ranges(
    config: &super::WorkbenchConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for (parameter, slider) in config.sliders.all_effective() {
        let name = parameter.label().to_lowercase();

        if slider.max != 100 {
            errors.push(format!(
                "sliders.{name}.max = {} — probability sliders always end at 100 %",
                slider.max
            ));
        }
        if slider.min > 1 {
            errors.push(format!(
                "sliders.{name}.min = {} — observed deployments use 0 or 1",
                slider.min
            ));
        }
        if slider.step != 1 && slider.step != 10 {
            errors.push(format!(
                "sliders.{name}.step = {} — step must be 1 or 10",
                slider.step
            ));
        }
        if !slider.accepts(slider.initial) {
            errors.push(format!(
                "sliders.{name}.initial = {} is outside [{}, {}]",
                slider.initial, slider.min, slider.max
            ));
        } else if slider.step == 10 && slider.initial % 10 != 0 {
            warnings.push(ValidationWarning {
                field: format!("sliders.{name}.initial"),
                message: format!(
                    "sliders.{name}.initial = {} is not reachable with step 10",
                    slider.initial
                ),
                suggestion: None,
            });
        }
    }

    if config.display.percent_decimals > 4 {
        warnings.push(ValidationWarning {
            field: "display.percent_decimals".to_string(),
            message: format!(
                "display.percent_decimals = {} — more than 4 decimals suggests false precision",
                config.display.percent_decimals
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkbenchConfig;

    #[test]
    fn default_config_passes_range_validation() {
        let (errors, warnings) = validate_slider_ranges(&WorkbenchConfig::default());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert!(warnings.is_empty());
    }

    #[test]
    fn bad_step_is_an_error() {
        let mut config = WorkbenchConfig::default();
        config.sliders.base.step = 5;
        let (errors, _) = validate_slider_ranges(&config);
        assert_eq!(errors.len(), 5, "one error per parameter");
    }

    #[test]
    fn unreachable_initial_with_step_ten_warns() {
        let mut config = WorkbenchConfig::default();
        config.sliders.base.step = 10;
        config.sliders.base.initial = 55;
        let (_, warnings) = validate_slider_ranges(&config);
        assert!(!warnings.is_empty());
    }
}
