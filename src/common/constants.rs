//! Centralized constants for payload construction.

// ============================================================================
// Priority
// ============================================================================

/// Lowest priority the gateway accepts.
pub const MIN_PRIORITY: i32 = 0;

/// Highest priority the gateway accepts.
pub const MAX_PRIORITY: i32 = 10;

/// Default priority for background pushes.
pub const BACKGROUND_PRIORITY: i32 = 5;

/// Default priority for every other push type.
pub const IMMEDIATE_PRIORITY: i32 = 10;

// ============================================================================
// Field defaults
// ============================================================================

/// Sound played when none is named explicitly.
pub const DEFAULT_SOUND: &str = "default";

/// Container identifier signalling "the whole file-provider tree changed".
pub const ROOT_CONTAINER_IDENTIFIER: &str = "NSFileProviderRootContainerItemIdentifier";

// ============================================================================
// Gateway
// ============================================================================

/// Production APNs endpoint.
pub const PRODUCTION_ENDPOINT: &str = "https://api.push.apple.com";

/// Sandbox APNs endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://api.sandbox.push.apple.com";

/// Default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
