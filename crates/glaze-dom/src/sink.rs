//! The external write boundary.

/// A host object that accepts a single attribute's string form.
///
/// This is the only interface the adapter layer has to the external
/// object world; the core containers never call it themselves. Pushing
/// is always explicit and synchronous, with no retries.
pub trait AttributeSink {
    /// Write `value` as the string form of the attribute `name`.
    fn write_attribute(&mut self, name: &str, value: &str);
}
