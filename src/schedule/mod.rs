mod conflict;
mod error;
mod repository;
mod services;
mod store;

pub use conflict::{point_in_range, ranges_conflict};
pub use error::{FormError, ScheduleError};
pub use repository::{BookingRepository, ClassRepository};
pub use services::{BookingService, ClassService};
pub use store::{InMemoryBookingStore, InMemoryClassStore};

use std::sync::Arc;

/// Both services wired to a fresh pair of in-memory stores.
#[derive(Clone)]
pub struct Schedule {
    pub classes: ClassService,
    pub bookings: BookingService,
    pub class_store: Arc<InMemoryClassStore>,
    pub booking_store: Arc<InMemoryBookingStore>,
}

impl Schedule {
    pub fn in_memory(max_classes: usize, max_bookings: usize) -> Self {
        let class_store = Arc::new(InMemoryClassStore::with_limit(max_classes));
        let booking_store = Arc::new(InMemoryBookingStore::with_limit(
            class_store.clone(),
            max_bookings,
        ));
        Self {
            classes: ClassService::new(class_store.clone()),
            bookings: BookingService::new(booking_store.clone()),
            class_store,
            booking_store,
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::in_memory(crate::limits::MAX_CLASSES, crate::limits::MAX_BOOKINGS)
    }
}
