use rand::distr::{Alphanumeric, SampleString};

/// Length of generated location join codes.
const CODE_LEN: usize = 6;

/// Generates a random uppercase alphanumeric location code.
///
/// Codes are checked for uniqueness against the database by the caller and
/// regenerated on collision.
pub fn generate_location_code() -> String {
    Alphanumeric
        .sample_string(&mut rand::rng(), CODE_LEN)
        .to_uppercase()
}
