mod contact_id;
mod field_name;
mod postal_code_format;
mod sanitize_profile;

pub use contact_id::ContactId;
pub use field_name::FieldName;
pub use postal_code_format::PostalCodeFormat;
pub use sanitize_profile::SanitizeProfile;
