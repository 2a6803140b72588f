/// Longest accepted class or booking name, in bytes.
pub const MAX_NAME_LEN: usize = 256;

/// Default cap on stored classes per process.
pub const MAX_CLASSES: usize = 10_000;

/// Default cap on stored bookings per process.
pub const MAX_BOOKINGS: usize = 1_000_000;

/// Largest request body the HTTP layer will buffer.
pub const MAX_BODY_BYTES: usize = 64 * 1024;
