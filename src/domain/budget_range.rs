/// Budget range selected on the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetRange {
    Under2k,
    From2kTo5k,
    From5kTo10k,
    From10kTo20k,
    Over20k,
    NotSure,
    Unknown(String),
}

impl BudgetRange {
    pub fn from_code(code: String) -> Self {
        match code.as_str() {
            "under-2k" => Self::Under2k,
            "2k-5k" => Self::From2kTo5k,
            "5k-10k" => Self::From5kTo10k,
            "10k-20k" => Self::From10kTo20k,
            "over-20k" => Self::Over20k,
            "not-sure" => Self::NotSure,
            _ => Self::Unknown(code),
        }
    }

    /// Human-readable label, or the raw code if it is not a known range
    pub fn label(&self) -> &str {
        match self {
            Self::Under2k => "Under £2,000",
            Self::From2kTo5k => "£2,000 - £5,000",
            Self::From5kTo10k => "£5,000 - £10,000",
            Self::From10kTo20k => "£10,000 - £20,000",
            Self::Over20k => "£20,000+",
            Self::NotSure => "Not sure yet",
            Self::Unknown(code) => code,
        }
    }
}
