//! Centralized constants for the Platform.sh configuration reader.
//!
//! Logical variable names are stored without the prefix; the prefix is
//! applied at lookup time so callers can namespace the environment.

// =============================================================================
// Prefixing
// =============================================================================

/// Default prefix applied to every platform variable name.
pub const DEFAULT_ENV_PREFIX: &str = "PLATFORM_";

// =============================================================================
// Scalar Variables (prefixed)
// =============================================================================

pub const APPLICATION_NAME: &str = "APPLICATION_NAME";
pub const ENVIRONMENT: &str = "ENVIRONMENT";
pub const MODE: &str = "MODE";
pub const BRANCH: &str = "BRANCH";
pub const APP_DIR: &str = "APP_DIR";
pub const PROJECT: &str = "PROJECT";
pub const TREE_ID: &str = "TREE_ID";
pub const PROJECT_ENTROPY: &str = "PROJECT_ENTROPY";
pub const DOCUMENT_ROOT: &str = "DOCUMENT_ROOT";
pub const SMTP_HOST: &str = "SMTP_HOST";

// =============================================================================
// Structural Variables (prefixed, base64-encoded JSON)
// =============================================================================

pub const ROUTES: &str = "ROUTES";
pub const RELATIONSHIPS: &str = "RELATIONSHIPS";
pub const VARIABLES: &str = "VARIABLES";
pub const APPLICATION: &str = "APPLICATION";

// =============================================================================
// Process Host Variables (never prefixed)
// =============================================================================

/// Port the application must listen on. Set by the process host, not the platform layer.
pub const PORT: &str = "PORT";

/// Unix socket the application must listen on. Set by the process host, not the platform layer.
pub const SOCKET: &str = "SOCKET";

// =============================================================================
// Deployment Modes & Branches
// =============================================================================

/// Value of `MODE` on Dedicated (formerly Enterprise) clusters.
pub const MODE_ENTERPRISE: &str = "enterprise";

/// Production branch name on Dedicated clusters.
pub const PRODUCTION_BRANCH_DEDICATED: &str = "production";

/// Production branch name on standard (grid) projects.
pub const PRODUCTION_BRANCH_STANDARD: &str = "master";

/// Suffix some deployment flavors append to an upstream application name.
pub const UPSTREAM_HTTP_SUFFIX: &str = ":http";

// =============================================================================
// Built-in Credential Formatters
// =============================================================================

pub const FORMATTER_SOLR_NODE: &str = "solr-node";
pub const FORMATTER_PUPPETEER: &str = "puppeteer";

// =============================================================================
// Loader
// =============================================================================

/// Variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";
