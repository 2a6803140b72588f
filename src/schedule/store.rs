use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::limits::*;
use crate::model::*;

use super::conflict::{point_in_range, ranges_conflict};
use super::repository::{BookingRepository, ClassRepository};
use super::ScheduleError;

/// Process-lifetime class collection, kept in insertion order.
pub struct InMemoryClassStore {
    classes: RwLock<Vec<Class>>,
    max_classes: usize,
}

impl Default for InMemoryClassStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryClassStore {
    pub fn new() -> Self {
        Self::with_limit(MAX_CLASSES)
    }

    pub fn with_limit(max_classes: usize) -> Self {
        Self {
            classes: RwLock::new(Vec::new()),
            max_classes,
        }
    }

    pub async fn len(&self) -> usize {
        self.classes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.classes.read().await.is_empty()
    }

    /// Copy of the stored classes, in insertion order.
    pub async fn snapshot(&self) -> Vec<Class> {
        self.classes.read().await.clone()
    }

    /// True if any stored class covers `date`.
    pub async fn covers(&self, date: Day) -> bool {
        self.classes
            .read()
            .await
            .iter()
            .any(|c| point_in_range(date, c.start, c.end))
    }
}

#[async_trait]
impl ClassRepository for InMemoryClassStore {
    async fn exists(&self, start: Day, end: Day) -> bool {
        self.classes
            .read()
            .await
            .iter()
            .any(|c| ranges_conflict(start, end, c.start, c.end))
    }

    async fn add(&self, class: Class) -> Result<Class, ScheduleError> {
        // Scan and append under one write guard.
        let mut guard = self.classes.write().await;
        if guard
            .iter()
            .any(|existing| ranges_conflict(class.start, class.end, existing.start, existing.end))
        {
            return Err(ScheduleError::ClassConflict);
        }
        if class.name.len() > MAX_NAME_LEN {
            return Err(ScheduleError::LimitExceeded("class name too long"));
        }
        if guard.len() >= self.max_classes {
            return Err(ScheduleError::LimitExceeded("too many classes"));
        }
        guard.push(class.clone());
        Ok(class)
    }
}

/// Process-lifetime booking collection. Reads class ranges from the shared
/// class store but never writes to it.
pub struct InMemoryBookingStore {
    classes: Arc<InMemoryClassStore>,
    bookings: RwLock<Vec<Booking>>,
    max_bookings: usize,
}

impl InMemoryBookingStore {
    pub fn new(classes: Arc<InMemoryClassStore>) -> Self {
        Self::with_limit(classes, MAX_BOOKINGS)
    }

    pub fn with_limit(classes: Arc<InMemoryClassStore>, max_bookings: usize) -> Self {
        Self {
            classes,
            bookings: RwLock::new(Vec::new()),
            max_bookings,
        }
    }

    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }

    pub async fn snapshot(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
    async fn exists_class_on_date(&self, date: Day) -> bool {
        self.classes.covers(date).await
    }

    async fn add(&self, booking: Booking) -> Result<Booking, ScheduleError> {
        if booking.name.len() > MAX_NAME_LEN {
            return Err(ScheduleError::LimitExceeded("booking name too long"));
        }
        let mut guard = self.bookings.write().await;
        if guard.len() >= self.max_bookings {
            return Err(ScheduleError::LimitExceeded("too many bookings"));
        }
        guard.push(booking.clone());
        Ok(booking)
    }
}
