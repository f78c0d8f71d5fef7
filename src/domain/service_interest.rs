/// Service the prospect is interested in
///
/// Codes the form and the label table do not agree on are kept verbatim in
/// `Unknown`, so that `label()` is total and falls back to the raw code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceInterest {
    WebDesign,
    IosApp,
    AiAutomation,
    Multiple,
    Other,
    Unknown(String),
}

impl ServiceInterest {
    /// Map a form code to a service, never failing
    pub fn from_code(code: String) -> Self {
        match code.as_str() {
            "web-design" => Self::WebDesign,
            "ios-app" => Self::IosApp,
            "ai-automation" => Self::AiAutomation,
            "multiple" => Self::Multiple,
            "other" => Self::Other,
            _ => Self::Unknown(code),
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            Self::WebDesign => "Web Design",
            Self::IosApp => "iOS App Development",
            Self::AiAutomation => "AI & Automation",
            Self::Multiple => "Multiple Services",
            Self::Other => "Other / Not Sure",
            Self::Unknown(code) => code,
        }
    }
}
