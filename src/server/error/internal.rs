use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A year/month/day combination that does not exist in the calendar.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Invalid calendar date {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year
        year: i32,
        /// Month of the year (1-12)
        month: u32,
        /// Day of the month
        day: u32,
    },

    /// A stored phone has a state outside `approved`, `draft` and `deleted`.
    #[error("Unknown phone state '{0}'")]
    UnknownPhoneState(String),
}
