//! Errors raised at the payload boundary.
//!
//! Normalization itself never fails; every irregular field degrades to a
//! documented default. The only failure a caller can see is that there was no
//! payload to normalize at all.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Nothing was delivered (empty body, JSON `null`, missing value).
    #[error("NO_REPORT/ABSENT: no detection payload was delivered")]
    PayloadAbsent,

    /// Something was delivered but it is not a JSON object.
    #[error("NO_REPORT/UNPARSEABLE: {0}")]
    PayloadUnparseable(String),
}

impl ReportError {
    /// Stable machine-readable code, the prefix of the display string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PayloadAbsent => "NO_REPORT/ABSENT",
            Self::PayloadUnparseable(_) => "NO_REPORT/UNPARSEABLE",
        }
    }
}
