/// Signing secret used by every test setup.
pub static TEST_JWT_SECRET: &str = "fraudwatch-test-signing-secret";

/// Placeholder hash for fixture drivers. Tests that exercise password
/// verification must register through the auth service instead of inserting
/// a fixture row.
pub static TEST_PASSWORD_HASH: &str = "$argon2id$test-placeholder-hash";
