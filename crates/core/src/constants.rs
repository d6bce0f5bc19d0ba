/// Constants used throughout the argus codebase
// Reserved control flag present on every task; never resolved interactively
pub const NON_INTERACTIVE_PARAM: &str = "nonInteractive";

// Fallback prompt hint: first clause of the description, capped in chars
pub const DESCRIPTION_HINT_MAX_CHARS: usize = 150;
pub const DESCRIPTION_CLAUSE_SEPARATOR: char = '.';

// Raw prompt message prefix
pub const RAW_PROMPT_PREFIX: &str = "Enter";

// Environment variable names
pub const ARGUS_LOG_VAR: &str = "ARGUS_LOG";
pub const ARGUS_NON_INTERACTIVE_VAR: &str = "ARGUS_NON_INTERACTIVE";

// Default log filter when ARGUS_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Tracing target for resolution debug events
pub const UI_TARGET: &str = "argus::ui";
