//! Domain-level constants.
//!
//! These constants define business rules and the fixed texts shown to users.

// =============================================================================
// Registration
// =============================================================================

/// Usernames treated as already taken until a real backend checks uniqueness
pub const DEFAULT_RESERVED_USERNAMES: &[&str] = &["user1", "user2", "user3"];

/// Pattern a registration email must match
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$";

/// Alert shown after a successful registration
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration Successful";

// =============================================================================
// Credential storage
// =============================================================================

/// Key under which the single user record is stored
pub const USER_RECORD_KEY: &str = "user";

// =============================================================================
// Exercise listing
// =============================================================================

/// Number of exercises rendered on the home screen
pub const EXERCISE_DISPLAY_LIMIT: usize = 10;

/// Category shown when an exercise has no body part
pub const UNKNOWN_CATEGORY: &str = "Unknown Category";

/// Description shown when an exercise has no target muscle
pub const NO_DESCRIPTION: &str = "No description available.";

/// Image shown when an exercise has no GIF
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Message shown when the exercise list could not be fetched
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch exercises. Please try again.";
