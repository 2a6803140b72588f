/// Structural problems with a submitted form. One per violated field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    ClassNameRequired,
    InvalidStartDate,
    InvalidEndDate,
    CapacityRequired,
    NameRequired,
    InvalidDate,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            FormError::ClassNameRequired => "class name is required",
            FormError::InvalidStartDate => "invalid start date format (expected YYYY-MM-DD)",
            FormError::InvalidEndDate => "invalid end date format (expected YYYY-MM-DD)",
            FormError::CapacityRequired => "capacity is required",
            FormError::NameRequired => "name is required",
            FormError::InvalidDate => "invalid date format (expected YYYY-MM-DD)",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for FormError {}

/// Domain-rule and storage failures raised while creating a class or booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    InvalidDateRange,
    ClassConflict,
    NoClassOnDate,
    LimitExceeded(&'static str),
    Storage(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidDateRange => write!(f, "start and end dates are invalid"),
            ScheduleError::ClassConflict => {
                write!(f, "another class already exists in that date range")
            }
            ScheduleError::NoClassOnDate => write!(f, "no class exists on this date"),
            ScheduleError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
            ScheduleError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for ScheduleError {}

impl ScheduleError {
    /// Short label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleError::InvalidDateRange => "invalid_date_range",
            ScheduleError::ClassConflict => "class_conflict",
            ScheduleError::NoClassOnDate => "no_class_on_date",
            ScheduleError::LimitExceeded(_) => "limit_exceeded",
            ScheduleError::Storage(_) => "storage",
        }
    }
}
