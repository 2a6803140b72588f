use std::sync::Arc;

use tracing::debug;

use crate::model::*;

use super::repository::{BookingRepository, ClassRepository};
use super::{FormError, ScheduleError};

/// Validates and admits new classes.
#[derive(Clone)]
pub struct ClassService {
    repo: Arc<dyn ClassRepository>,
}

impl ClassService {
    pub fn new(repo: Arc<dyn ClassRepository>) -> Self {
        Self { repo }
    }

    pub fn build_form(&self) -> ClassForm {
        ClassForm::default()
    }

    /// Every structural problem with `form`, in field order. Empty means valid.
    pub fn validate(&self, form: &ClassForm) -> Vec<FormError> {
        let mut errs = Vec::new();
        if form.class_name.is_empty() {
            errs.push(FormError::ClassNameRequired);
        }
        if form.start_date.is_none_or(is_zero_day) {
            errs.push(FormError::InvalidStartDate);
        }
        if form.end_date.is_none_or(is_zero_day) {
            errs.push(FormError::InvalidEndDate);
        }
        if form.capacity <= 0 {
            errs.push(FormError::CapacityRequired);
        }
        errs
    }

    /// Validate `form` and turn it into a `Class`.
    pub fn parse(&self, form: ClassForm) -> Result<Class, Vec<FormError>> {
        let errs = self.validate(&form);
        match (form.start_date, form.end_date, u32::try_from(form.capacity)) {
            (Some(start), Some(end), Ok(capacity)) if errs.is_empty() => {
                Ok(Class::new(form.class_name, start, end, capacity))
            }
            _ => Err(errs),
        }
    }

    pub async fn create(&self, class: Class) -> Result<Class, ScheduleError> {
        if class.start > class.end {
            debug!(start = %class.start, end = %class.end, "rejecting inverted class range");
            return Err(ScheduleError::InvalidDateRange);
        }
        self.repo.add(class).await
    }
}

/// Validates and admits new bookings.
#[derive(Clone)]
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    pub fn build_form(&self) -> BookingForm {
        BookingForm::default()
    }

    pub fn validate(&self, form: &BookingForm) -> Vec<FormError> {
        let mut errs = Vec::new();
        if form.name.is_empty() {
            errs.push(FormError::NameRequired);
        }
        if form.date.is_none_or(is_zero_day) {
            errs.push(FormError::InvalidDate);
        }
        errs
    }

    pub fn parse(&self, form: BookingForm) -> Result<Booking, Vec<FormError>> {
        let errs = self.validate(&form);
        match form.date {
            Some(date) if errs.is_empty() => Ok(Booking::new(form.name, date)),
            _ => Err(errs),
        }
    }

    pub async fn create(&self, booking: Booking) -> Result<Booking, ScheduleError> {
        if !self.repo.exists_class_on_date(booking.date).await {
            debug!(date = %booking.date, "no class covers booking date");
            return Err(ScheduleError::NoClassOnDate);
        }
        self.repo.add(booking).await
    }
}
