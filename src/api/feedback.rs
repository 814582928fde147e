// Feedback / bug report submission
//
// Submissions are not sent anywhere yet: the record is handed to a DiagnosticSink, which in
// production writes it to the `feedback` log target.

use crate::models::feedback::{
    FeedbackCategory, FeedbackContext, FeedbackRecord, ReportType, Severity,
};
use crate::utils::validation::{require_text, ValidationError};
use crate::wizard::Notification;

use log::info;
use uuid::Uuid;

/// Receives accepted feedback records.
pub trait DiagnosticSink {
    fn record(&mut self, record: &FeedbackRecord);
}

/// Writes records as JSON on the `feedback` log target.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&mut self, record: &FeedbackRecord) {
        let payload = serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string());
        info!(
            target: "feedback",
            "[PHASE: feedback] [STEP: submit] {}",
            payload
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub is_open: bool,
    pub report_type: ReportType,
    pub category: Option<FeedbackCategory>,
    pub description: String,
    pub severity: Severity,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close without submitting. Field values are kept for the next open.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_report_type(&mut self, report_type: ReportType) {
        self.report_type = report_type;
        if let Some(cat) = self.category {
            if !FeedbackCategory::for_report_type(report_type).contains(&cat) {
                self.category = None;
            }
        }
    }

    /// Pick the next category valid for the current report type, wrapping to the first.
    pub fn cycle_category(&mut self) {
        let options = FeedbackCategory::for_report_type(self.report_type);
        let next = match self
            .category
            .and_then(|c| options.iter().position(|o| *o == c))
        {
            Some(i) => options[(i + 1) % options.len()],
            None => options[0],
        };
        self.category = Some(next);
    }

    pub fn cycle_severity(&mut self) {
        self.severity = self.severity.next();
    }

    /// Validate, hand the record to `sink`, then reset and close.
    ///
    /// On error the form is left exactly as it was so the user can fix it and retry.
    pub fn submit(
        &mut self,
        context: &FeedbackContext,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Notification, ValidationError> {
        let description = require_text("Description", &self.description)?;

        let record = FeedbackRecord {
            id: Uuid::new_v4().to_string(),
            report_type: self.report_type,
            category: self.category,
            description: description.to_string(),
            severity: match self.report_type {
                ReportType::Bug => Some(self.severity),
                ReportType::Feedback => None,
            },
            current_screen: context.current_screen.clone(),
            current_feature: context.current_feature.clone(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        sink.record(&record);

        let description = match self.report_type {
            ReportType::Bug => "Your bug report has been submitted.",
            ReportType::Feedback => "Your feedback has been submitted.",
        };

        self.description.clear();
        self.category = None;
        self.severity = Severity::default();
        self.is_open = false;

        Ok(Notification::success("Thank you!", description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemorySink {
        records: Vec<FeedbackRecord>,
    }

    impl DiagnosticSink for MemorySink {
        fn record(&mut self, record: &FeedbackRecord) {
            self.records.push(record.clone());
        }
    }

    fn ctx() -> FeedbackContext {
        FeedbackContext {
            current_screen: Some("Validate".to_string()),
            current_feature: Some("Preview Lab".to_string()),
        }
    }

    #[test]
    fn blank_description_blocks_and_leaves_form_untouched() {
        let mut form = FeedbackForm::new();
        form.open();
        form.category = Some(FeedbackCategory::Pipeline);
        form.severity = Severity::High;
        form.description = "   \n ".to_string();
        let before = form.clone();

        let mut sink = MemorySink::default();
        let err = form.submit(&ctx(), &mut sink).unwrap_err();

        assert_eq!(
            err,
            ValidationError::Required {
                field: "Description"
            }
        );
        assert_eq!(form, before, "failed submit must not change the form");
        assert!(sink.records.is_empty(), "nothing should reach the sink");
    }

    #[test]
    fn valid_bug_report_resets_and_closes() {
        let mut form = FeedbackForm::new();
        form.open();
        form.category = Some(FeedbackCategory::Extraction);
        form.severity = Severity::High;
        form.description = "  Totals column misread  ".to_string();

        let mut sink = MemorySink::default();
        let note = form.submit(&ctx(), &mut sink).unwrap();

        assert_eq!(note.title, "Thank you!");
        assert_eq!(note.description, "Your bug report has been submitted.");
        assert!(!form.is_open);
        assert!(form.description.is_empty());
        assert_eq!(form.category, None);
        assert_eq!(form.severity, Severity::Medium);

        assert_eq!(sink.records.len(), 1);
        let rec = &sink.records[0];
        assert_eq!(rec.description, "Totals column misread");
        assert_eq!(rec.severity, Some(Severity::High));
        assert_eq!(rec.current_screen.as_deref(), Some("Validate"));
        assert!(
            chrono::DateTime::parse_from_rfc3339(&rec.timestamp).is_ok(),
            "timestamp should be RFC 3339: {}",
            rec.timestamp
        );
    }

    #[test]
    fn feedback_records_carry_no_severity() {
        let mut form = FeedbackForm::new();
        form.open();
        form.set_report_type(ReportType::Feedback);
        form.description = "Please add a dark theme".to_string();

        let mut sink = MemorySink::default();
        let note = form.submit(&FeedbackContext::default(), &mut sink).unwrap();
        assert_eq!(note.description, "Your feedback has been submitted.");

        let json = serde_json::to_value(&sink.records[0]).unwrap();
        assert_eq!(json["type"], "feedback");
        assert!(json.get("severity").is_none(), "severity is bug-only: {}", json);
    }

    #[test]
    fn switching_type_drops_incompatible_category() {
        let mut form = FeedbackForm::new();
        form.category = Some(FeedbackCategory::Pipeline);
        form.set_report_type(ReportType::Feedback);
        assert_eq!(form.category, None);

        form.category = Some(FeedbackCategory::Other);
        form.set_report_type(ReportType::Bug);
        assert_eq!(
            form.category,
            Some(FeedbackCategory::Other),
            "'other' is valid for both types"
        );
    }

    #[test]
    fn category_cycle_wraps_within_type() {
        let mut form = FeedbackForm::new();
        form.set_report_type(ReportType::Feedback);
        let seen: Vec<FeedbackCategory> = (0..5)
            .map(|_| {
                form.cycle_category();
                form.category.unwrap()
            })
            .collect();
        assert_eq!(
            seen,
            vec![
                FeedbackCategory::Feature,
                FeedbackCategory::Improvement,
                FeedbackCategory::Documentation,
                FeedbackCategory::Other,
                FeedbackCategory::Feature,
            ]
        );
    }

    #[test]
    fn ids_are_unique_per_submission() {
        let mut form = FeedbackForm::new();
        let mut sink = MemorySink::default();
        for _ in 0..2 {
            form.description = "x".to_string();
            form.submit(&FeedbackContext::default(), &mut sink).unwrap();
        }
        assert_ne!(sink.records[0].id, sink.records[1].id);
    }
}
