#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallType {
    Outgoing,  // 1
    Incoming,  // 2
    Missed,    // 3
    Voicemail, // 4
    Rejected,  // 5
    Blocked,   // 6
}

impl CallType {
    /// Convert the provider's `type` column code → enum.
    /// Codes outside "1".."6" have no variant; callers pass the raw code
    /// through unchanged.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(CallType::Outgoing),
            "2" => Some(CallType::Incoming),
            "3" => Some(CallType::Missed),
            "4" => Some(CallType::Voicemail),
            "5" => Some(CallType::Rejected),
            "6" => Some(CallType::Blocked),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CallType::Outgoing => "1",
            CallType::Incoming => "2",
            CallType::Missed => "3",
            CallType::Voicemail => "4",
            CallType::Rejected => "5",
            CallType::Blocked => "6",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CallType::Outgoing => "Outgoing",
            CallType::Incoming => "Incoming",
            CallType::Missed => "Missed",
            CallType::Voicemail => "Voicemail",
            CallType::Rejected => "Rejected",
            CallType::Blocked => "Blocked",
        }
    }
}
