/// Where the prospect is based
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectLocation {
    SouthLondon,
    Kent,
    OtherUk,
    Remote,
    Unknown(String),
}

impl ProjectLocation {
    pub fn from_code(code: String) -> Self {
        match code.as_str() {
            "south-london" => Self::SouthLondon,
            "kent" => Self::Kent,
            "other-uk" => Self::OtherUk,
            "remote" => Self::Remote,
            _ => Self::Unknown(code),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::SouthLondon => "South London",
            Self::Kent => "Kent",
            Self::OtherUk => "Other UK Location",
            Self::Remote => "Remote / International",
            Self::Unknown(code) => code,
        }
    }
}
