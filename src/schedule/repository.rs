use async_trait::async_trait;

use crate::model::*;

use super::ScheduleError;

/// Storage seam for classes.
///
/// Implementations must make `add` check-and-append atomic: no other `add`
/// may interleave between the conflict scan and the insertion.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    /// True if any stored class conflicts with `[start, end]`.
    async fn exists(&self, start: Day, end: Day) -> bool;

    /// Store `class` unless it conflicts with a stored one.
    async fn add(&self, class: Class) -> Result<Class, ScheduleError>;
}

/// Storage seam for bookings.
///
/// `add` stores unconditionally; callers are responsible for checking
/// `exists_class_on_date` first.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// True if some stored class's inclusive range contains `date`.
    async fn exists_class_on_date(&self, date: Day) -> bool;

    async fn add(&self, booking: Booking) -> Result<Booking, ScheduleError>;
}
