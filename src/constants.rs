/// Constants module to avoid magic strings and numbers in the codebase

// Persona
pub const GREETING: &str = "Protocol initiated. I am the Nexus Architect. Describe your manual bottlenecks for a custom strategy.";
pub const SYSTEM_INSTRUCTION: &str = "You are the Nexus Automation Architect. Provide concise, professional technical briefs. Focused on AI ROI.";

// Transcript role labels. The backend sees a plain-text transcript, so these
// labels are the only role signal it gets.
pub const USER_LABEL: &str = "Client";
pub const ASSISTANT_LABEL: &str = "Architect";

// Fixed user-visible strings for backend faults
pub const FAILURE_MESSAGE: &str = "Systems offline. Please retry.";
pub const EMPTY_REPLY_FALLBACK: &str = "Connection error.";

// Gemini API
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

// Timeouts
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;

// Default Generation Parameters
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
