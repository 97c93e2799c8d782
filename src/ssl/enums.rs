//! Enumerations for certificate handling.

/// Errors raised while generating, decoding, loading or registering certificates.
pub mod certificate_error;

/// Origin of a registered certificate (generated, decoded from PEM or loaded from files).
pub mod certificate_source;

/// Ordering of the append and parse steps during registration.
///
/// - `atomic` - Parse first, append only on success
/// - `append_first` - Append, then parse (a failed parse leaves the record in the list)
pub mod registration_order;
