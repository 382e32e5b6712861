use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient user-visible message about a background-removal request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    RemovalPending,
    RemovalSucceeded,
    RemovalFailed,
    /// A request was rejected because another one is still in flight.
    RemovalBusy,
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Self::RemovalPending => NoticeLevel::Info,
            Self::RemovalSucceeded => NoticeLevel::Success,
            Self::RemovalFailed => NoticeLevel::Error,
            Self::RemovalBusy => NoticeLevel::Warning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::RemovalPending => "Removing background...",
            Self::RemovalSucceeded => "Background removed.",
            Self::RemovalFailed => "Could not remove the background from your image.",
            Self::RemovalBusy => "Please wait for the previous background removal to finish.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
