//! Prompt assembly for assessment requests.
//!
//! Pure template substitution: caller-supplied context is embedded
//! verbatim, malformed values included. The embedded rule set is the
//! contract the response validator checks the model's reply against, so
//! the two must stay in sync.

/// Fixed instruction preamble sent with every assessment request.
pub const SYSTEM_PROMPT: &str = "\
You are an infrastructure damage assessment AI used by municipal authorities.

Rules:
- You MUST return a valid JSON object and nothing else
- No markdown
- No explanation outside JSON
- Be conservative and safety-focused
- If damage is unclear, use \"unknown\"
";

/// Render the per-report section of the prompt.
pub fn render_report_section(infra_type: &str, zone_type: &str, lat: f64, lng: f64) -> String {
    format!(
        r#"Analyze the provided public infrastructure report.

User provided infrastructure type: {infra_type}
Zone type: {zone_type}
Location: {lat}, {lng}

Tasks:
1. Identify damage_class from:
   pothole, broken_street_light, water_leak, bridge_crack, unknown

2. Infer infrastructure type from image:
   road, street_light, water, bridge

3. Assign severity: low, medium, severe
4. Assign severity_score between 0 and 1
5. Health score calculation MUST follow this rule:

Start with 100.

Subtract damage penalty:
- low severity: subtract 20
- medium severity: subtract 40
- severe severity: subtract 60

Subtract zone penalty:
- school_zone or hospital_zone: subtract 20
- main_road: subtract 15
- residential or industrial: subtract 10
- low_traffic: subtract 5

Final health_score = max(0, remaining value)

Do NOT invent your own formula.

6. Determine risk_level using:
   - health < 30: Critical
   - health 30-60: Warning
   - health > 60: Safe

7. Generate a short safety-focused ai_suggestion.

If inferred infrastructure type differs from user provided type,
set infra_type_mismatch = true.

Return ONLY JSON with this schema:
{{
  "damage_class": "...",
  "severity": "...",
  "severity_score": 0.0,
  "health_score": 0,
  "risk_level": "...",
  "ai_suggestion": "...",
  "inferred_infra_type": "...",
  "infra_type_mismatch": false
}}"#
    )
}

/// Full prompt: system preamble plus the rendered report section.
pub fn build(infra_type: &str, zone_type: &str, lat: f64, lng: f64) -> String {
    format!(
        "{SYSTEM_PROMPT}\n{}",
        render_report_section(infra_type, zone_type, lat, lng)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_embedded_verbatim() {
        let prompt = build("road", "school_zone", 12.9716, 77.5946);
        assert!(prompt.contains("User provided infrastructure type: road"));
        assert!(prompt.contains("Zone type: school_zone"));
        assert!(prompt.contains("Location: 12.9716, 77.5946"));
    }

    #[test]
    fn test_rule_set_present() {
        let prompt = build("road", "main_road", 0.0, 0.0);
        assert!(prompt.contains("pothole, broken_street_light, water_leak, bridge_crack, unknown"));
        assert!(prompt.contains("road, street_light, water, bridge"));
        assert!(prompt.contains("severity: low, medium, severe"));
        assert!(prompt.contains("Start with 100."));
        assert!(prompt.contains("health < 30: Critical"));
        assert!(prompt.contains("Return ONLY JSON"));
    }

    #[test]
    fn test_no_input_sanitization() {
        // Malformed values flow through into the prompt text unchanged.
        let prompt = build("<script>", "", f64::NAN, -200.0);
        assert!(prompt.contains("User provided infrastructure type: <script>"));
        assert!(prompt.contains("-200"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            build("bridge", "low_traffic", 1.5, 2.5),
            build("bridge", "low_traffic", 1.5, 2.5)
        );
    }
}
