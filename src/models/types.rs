/// Request sent to a generative-text backend.
///
/// The backend is stateless: the whole conversation travels as a single
/// plain-text transcript, and the persona policy travels separately so it
/// can never be confused with user-controlled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub transcript: String,
    pub system_instruction: String,
}

/// Response from a generative-text backend.
///
/// `text` may be empty; deciding what an empty reply means is the
/// session's concern, not the client's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
    pub text: String,
}
