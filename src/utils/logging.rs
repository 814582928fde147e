// Logging utilities
// Structured logging with JSON and human-readable formats

use log::Level;
use serde_json::json;

/// Mask an email address for logs: keep the first character of the local part and the domain.
pub fn mask_email(input: &str) -> String {
    let s = input.trim();
    if s.is_empty() {
        return String::new();
    }

    match s.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

/// Parse phase and step from log message
/// Extracts [PHASE: ...] and [STEP: ...] patterns
pub fn parse_log_metadata(message: &str) -> (Option<String>, Option<String>, String) {
    let (phase, rest) = take_marker(message, "[PHASE:");
    let (step, cleaned) = take_marker(&rest, "[STEP:");
    (phase, step, cleaned)
}

fn take_marker(message: &str, open: &str) -> (Option<String>, String) {
    let Some(start) = message.find(open) else {
        return (None, message.to_string());
    };
    let Some(len) = message[start..].find(']') else {
        return (None, message.to_string());
    };
    let value = message[start + open.len()..start + len].trim().to_string();
    let cleaned = format!("{} {}", &message[..start], &message[start + len + 1..])
        .trim()
        .to_string();
    (Some(value), cleaned)
}

/// Format log entry as JSON for structured logging
pub fn format_json_log(
    timestamp: &str,
    level: Level,
    target: &str,
    message: &str,
    phase: Option<&str>,
    step: Option<&str>,
) -> String {
    let mut log_entry = json!({
        "timestamp": timestamp,
        "level": level.as_str(),
        "target": target,
        "message": message,
    });

    if let Some(phase) = phase {
        log_entry["phase"] = json!(phase);
    }

    if let Some(step) = step {
        log_entry["step"] = json!(step);
    }

    serde_json::to_string(&log_entry).unwrap_or_else(|_| "{}".to_string())
}

/// Format log entry as human-readable text
pub fn format_human_readable_log(
    timestamp: &str,
    level: Level,
    target: &str,
    message: &str,
    phase: Option<&str>,
    step: Option<&str>,
) -> String {
    let mut log_line = format!("[{}] [{}]", timestamp, level.as_str());

    if let Some(phase) = phase {
        log_line.push_str(&format!(" [PHASE: {}]", phase));
    }

    if let Some(step) = step {
        log_line.push_str(&format!(" [STEP: {}]", step));
    }

    log_line.push_str(&format!(" [{}] {}", target, message));
    log_line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_email_keeps_domain_only() {
        let masked = mask_email("jane.auditor@firm.example");
        assert_eq!(masked, "j***@firm.example");
        assert!(
            !masked.contains("jane.auditor"),
            "Local part leaked: {}",
            masked
        );
    }

    #[test]
    fn mask_email_handles_blank_and_malformed() {
        assert_eq!(mask_email(""), "");
        assert_eq!(mask_email("   "), "");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email("@firm.example"), "***");
        assert_eq!(mask_email("someone@"), "***");
    }

    #[test]
    fn parse_log_metadata_extracts_phase_and_step() {
        let (phase, step, msg) =
            parse_log_metadata("[PHASE: wizard] [STEP: navigate] Discover -> Explore");
        assert_eq!(phase.as_deref(), Some("wizard"));
        assert_eq!(step.as_deref(), Some("navigate"));
        assert_eq!(msg, "Discover -> Explore");
    }

    #[test]
    fn parse_log_metadata_without_markers_is_passthrough() {
        let (phase, step, msg) = parse_log_metadata("plain message");
        assert!(phase.is_none());
        assert!(step.is_none());
        assert_eq!(msg, "plain message");
    }

    #[test]
    fn parse_log_metadata_unclosed_marker_left_alone() {
        let (phase, _, msg) = parse_log_metadata("[PHASE: broken message");
        assert!(phase.is_none(), "Unclosed marker should not parse");
        assert_eq!(msg, "[PHASE: broken message");
    }

    #[test]
    fn json_log_includes_optional_fields_only_when_present() {
        let line = format_json_log(
            "2024-01-01T00:00:00Z",
            Level::Info,
            "feedback",
            "submitted",
            Some("feedback"),
            None,
        );
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["level"], "INFO");
        assert_eq!(v["phase"], "feedback");
        assert!(v.get("step").is_none(), "step should be omitted: {}", line);
    }

    #[test]
    fn human_log_renders_markers_back() {
        let line = format_human_readable_log(
            "2024-01-01 00:00:00.000",
            Level::Warn,
            "digitization_wizard",
            "hello",
            Some("tui"),
            Some("smoke"),
        );
        assert_eq!(
            line,
            "[2024-01-01 00:00:00.000] [WARN] [PHASE: tui] [STEP: smoke] [digitization_wizard] hello"
        );
    }
}
