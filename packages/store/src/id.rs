//! Record id generation.
//!
//! Ids are opaque strings. The default generator derives them from the wall
//! clock in milliseconds, which keeps them sortable by creation time, but it
//! never hands out the same token twice within a process: when two creates
//! land on the same millisecond the second one is bumped past the first.
//! Uniqueness against an already-hydrated collection is enforced separately
//! by [`crate::Registry::create`], which re-draws on collision.

/// Source of fresh record ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Millisecond-epoch tokens with a monotonic bump for same-instant calls.
#[derive(Clone, Debug, Default)]
pub struct ClockIds {
    last: i64,
}

impl ClockIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> String {
        let now = current_timestamp_ms();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last.to_string()
    }
}

/// Deterministic counter ids (`"1"`, `"2"`, ...) for tests.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}

fn current_timestamp_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}
