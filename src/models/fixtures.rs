// Static fixture data shown by the wizard and the admin dashboard.
// Nothing here is fetched or computed from real processing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub const TEAM_MEMBERS: [TeamMember; 4] = [
    TeamMember {
        id: "1",
        name: "Sarah Johnson",
        role: "Legal Analyst",
        avatar: "SJ",
    },
    TeamMember {
        id: "2",
        name: "Michael Chen",
        role: "Contract Manager",
        avatar: "MC",
    },
    TeamMember {
        id: "3",
        name: "Emily Davis",
        role: "Compliance Officer",
        avatar: "ED",
    },
    TeamMember {
        id: "4",
        name: "Robert Wilson",
        role: "Finance Lead",
        avatar: "RW",
    },
];

pub fn team_member(id: &str) -> Option<&'static TeamMember> {
    TEAM_MEMBERS.iter().find(|m| m.id == id)
}

/// Lines of business available for access assignment.
pub const LINES_OF_BUSINESS: [&str; 5] = ["Legal", "Procurement", "Compliance", "Risk", "Finance"];

pub const EXPORT_FORMATS: [(&str, &str); 3] = [
    ("JSON", "Structured data"),
    ("SQL", "Database export"),
    ("PowerBI", "Analytics ready"),
];

// =========================
// Validate step (preview lab)
// =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    Validated,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleDocument {
    pub name: &'static str,
    pub status: SampleStatus,
    pub confidence: u8,
}

pub const SAMPLE_DOCUMENTS: [SampleDocument; 3] = [
    SampleDocument {
        name: "Master_Agreement_2024.pdf",
        status: SampleStatus::Validated,
        confidence: 98,
    },
    SampleDocument {
        name: "Amendment_01_Pricing.pdf",
        status: SampleStatus::Review,
        confidence: 85,
    },
    SampleDocument {
        name: "SLA_Appendix_A.docx",
        status: SampleStatus::Validated,
        confidence: 96,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedTerm {
    pub label: &'static str,
    pub value: &'static str,
    pub confidence: u8,
}

pub const EXTRACTED_TERMS: [ExtractedTerm; 5] = [
    ExtractedTerm {
        label: "Effective Date",
        value: "January 15, 2024",
        confidence: 99,
    },
    ExtractedTerm {
        label: "Termination Date",
        value: "January 14, 2027",
        confidence: 98,
    },
    ExtractedTerm {
        label: "Contract Value",
        value: "$2,450,000",
        confidence: 95,
    },
    ExtractedTerm {
        label: "Payment Terms",
        value: "Net 30",
        confidence: 92,
    },
    ExtractedTerm {
        label: "Auto-Renewal",
        value: "Yes - 12 months",
        confidence: 88,
    },
];

// =========================
// Admin dashboard
// =========================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformMetrics {
    pub total_projects: u32,
    pub active_projects: u32,
    pub average_accuracy: f64,
    pub total_clients: u32,
    pub total_documents: u64,
}

pub const PLATFORM_METRICS: PlatformMetrics = PlatformMetrics {
    total_projects: 47,
    active_projects: 32,
    average_accuracy: 94.2,
    total_clients: 12,
    total_documents: 125_000,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingRow {
    pub client: &'static str,
    pub department: &'static str,
    pub doc_intelligence_calls: u64,
    pub llm_tokens: u64,
    pub cost_usd: u64,
}

pub const BILLING: [BillingRow; 4] = [
    BillingRow {
        client: "Healthcare Provider A",
        department: "Legal",
        doc_intelligence_calls: 45_000,
        llm_tokens: 2_300_000,
        cost_usd: 1_250,
    },
    BillingRow {
        client: "IT Vendor B",
        department: "Procurement",
        doc_intelligence_calls: 32_000,
        llm_tokens: 1_800_000,
        cost_usd: 890,
    },
    BillingRow {
        client: "PBM C",
        department: "Compliance",
        doc_intelligence_calls: 28_000,
        llm_tokens: 1_500_000,
        cost_usd: 720,
    },
    BillingRow {
        client: "Financial Services D",
        department: "Risk",
        doc_intelligence_calls: 52_000,
        llm_tokens: 3_100_000,
        cost_usd: 1_680,
    },
];

pub fn total_billing_cost() -> u64 {
    BILLING.iter().map(|r| r.cost_usd).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceHealth {
    Healthy,
    Degraded,
}

impl ServiceHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceHealth::Healthy => "healthy",
            ServiceHealth::Degraded => "degraded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub status: ServiceHealth,
    pub uptime: f64,
    pub latency_ms: u32,
}

pub const INFRASTRUCTURE: [ServiceStatus; 6] = [
    ServiceStatus {
        service: "Document Ingestion Pipeline",
        status: ServiceHealth::Healthy,
        uptime: 99.9,
        latency_ms: 120,
    },
    ServiceStatus {
        service: "Table Extraction Microservice",
        status: ServiceHealth::Healthy,
        uptime: 99.7,
        latency_ms: 450,
    },
    ServiceStatus {
        service: "Paragraph Extraction Service",
        status: ServiceHealth::Healthy,
        uptime: 99.8,
        latency_ms: 280,
    },
    ServiceStatus {
        service: "Contract Search API",
        status: ServiceHealth::Degraded,
        uptime: 98.5,
        latency_ms: 850,
    },
    ServiceStatus {
        service: "Dashboard Analytics Engine",
        status: ServiceHealth::Healthy,
        uptime: 99.6,
        latency_ms: 320,
    },
    ServiceStatus {
        service: "Notification Service",
        status: ServiceHealth::Healthy,
        uptime: 99.9,
        latency_ms: 50,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientSummary {
    pub name: &'static str,
    pub projects: u32,
    pub accuracy: f64,
    pub documents: u64,
    pub active: bool,
}

pub const CLIENTS: [ClientSummary; 5] = [
    ClientSummary {
        name: "Healthcare Provider A",
        projects: 8,
        accuracy: 96.2,
        documents: 45_000,
        active: true,
    },
    ClientSummary {
        name: "IT Vendor B",
        projects: 5,
        accuracy: 93.8,
        documents: 32_000,
        active: true,
    },
    ClientSummary {
        name: "PBM C",
        projects: 6,
        accuracy: 94.5,
        documents: 28_000,
        active: true,
    },
    ClientSummary {
        name: "Financial Services D",
        projects: 12,
        accuracy: 95.1,
        documents: 52_000,
        active: true,
    },
    ClientSummary {
        name: "Legal & Compliance E",
        projects: 3,
        accuracy: 92.3,
        documents: 15_000,
        active: false,
    },
];

// =========================
// Testing & monitoring
// =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Pending,
    Processing,
    Complete,
    Error,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Pending => "pending",
            StageStatus::Processing => "processing",
            StageStatus::Complete => "complete",
            StageStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStage {
    pub name: &'static str,
    pub status: StageStatus,
    pub progress: u8,
    pub documents_processed: u64,
    pub total_documents: u64,
}

pub const PIPELINE_STAGES: [PipelineStage; 5] = [
    PipelineStage {
        name: "Document Ingestion",
        status: StageStatus::Complete,
        progress: 100,
        documents_processed: 10_000,
        total_documents: 10_000,
    },
    PipelineStage {
        name: "Table Extraction",
        status: StageStatus::Processing,
        progress: 60,
        documents_processed: 6_000,
        total_documents: 10_000,
    },
    PipelineStage {
        name: "Paragraph Extraction",
        status: StageStatus::Pending,
        progress: 0,
        documents_processed: 0,
        total_documents: 10_000,
    },
    PipelineStage {
        name: "Contract Search Indexing",
        status: StageStatus::Pending,
        progress: 0,
        documents_processed: 0,
        total_documents: 10_000,
    },
    PipelineStage {
        name: "Dashboard Analytics",
        status: StageStatus::Pending,
        progress: 0,
        documents_processed: 0,
        total_documents: 10_000,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionLog {
    pub id: &'static str,
    pub document: &'static str,
    pub attribute: &'static str,
    pub extracted_value: &'static str,
    pub confidence: u8,
    pub manual_change: bool,
    pub timestamp: &'static str,
    pub changed_by: Option<&'static str>,
}

pub const EXTRACTION_AUDIT: [ExtractionLog; 3] = [
    ExtractionLog {
        id: "1",
        document: "Master_Agreement_2024.pdf",
        attribute: "Termination Notice Period",
        extracted_value: "90 days",
        confidence: 98,
        manual_change: false,
        timestamp: "2024-01-15 10:23:45",
        changed_by: None,
    },
    ExtractionLog {
        id: "2",
        document: "Master_Agreement_2024.pdf",
        attribute: "Annual Fee",
        extracted_value: "$2,450,000",
        confidence: 95,
        manual_change: true,
        timestamp: "2024-01-15 10:25:12",
        changed_by: Some("Sarah Johnson"),
    },
    ExtractionLog {
        id: "3",
        document: "Amendment_01_Pricing.pdf",
        attribute: "Effective Date",
        extracted_value: "January 15, 2024",
        confidence: 99,
        manual_change: false,
        timestamp: "2024-01-15 10:27:33",
        changed_by: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictType {
    VisualArtifact,
    AmendmentMismatch,
    DataInconsistency,
}

impl ConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictType::VisualArtifact => "visual artifact",
            ConflictType::AmendmentMismatch => "amendment mismatch",
            ConflictType::DataInconsistency => "data inconsistency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictLog {
    pub id: &'static str,
    pub document: &'static str,
    pub conflict_type: ConflictType,
    pub description: &'static str,
    pub detected_at: &'static str,
    pub resolved: bool,
}

pub const CONFLICTS: [ConflictLog; 2] = [
    ConflictLog {
        id: "1",
        document: "Master_Agreement_2024.pdf",
        conflict_type: ConflictType::VisualArtifact,
        description: "Rate Table detected in image format on page 12",
        detected_at: "2024-01-15 10:20:00",
        resolved: false,
    },
    ConflictLog {
        id: "2",
        document: "Amendment_01_Pricing.pdf",
        conflict_type: ConflictType::AmendmentMismatch,
        description: "Pricing terms conflict with base agreement",
        detected_at: "2024-01-15 10:22:15",
        resolved: true,
    },
];

// =========================
// Display helpers
// =========================

/// 45_000 -> "45K"
pub fn format_thousands(n: u64) -> String {
    format!("{:.0}K", n as f64 / 1000.0)
}

/// 2_300_000 -> "2.30M"
pub fn format_millions(n: u64) -> String {
    format!("{:.2}M", n as f64 / 1_000_000.0)
}

/// 1250 -> "$1,250"
pub fn format_usd(n: u64) -> String {
    format!("${}", group_digits(n))
}

/// 125000 -> "125,000"
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
