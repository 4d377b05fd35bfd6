// =============================================================================
// Connect-U Web - Reactions API
// =============================================================================

use serde::{Deserialize, Serialize};

use super::{decode, ApiClient, ApiError, HttpTransport};

pub const REACTIONS_ENDPOINT: &str = "/api/v1/reactions/";

/// Like or dislike on another user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Like,
    Dislike,
}

#[derive(Debug, Serialize)]
pub struct ReactionRequest {
    pub to_user_id: u64,
    pub reaction: Reaction,
}

/// What the server echoed back. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReactionReceipt {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub reaction: Option<Reaction>,
    /// Set when the other user had already liked back.
    #[serde(default)]
    pub is_match: bool,
}

impl<T: HttpTransport> ApiClient<T> {
    /// Send a like or dislike.
    pub async fn send_reaction(
        &self,
        to_user_id: u64,
        reaction: Reaction,
    ) -> Result<ReactionReceipt, ApiError> {
        let request = ReactionRequest {
            to_user_id,
            reaction,
        };
        let response = self.post(REACTIONS_ENDPOINT, &request, true).await?;

        if !response.is_success() {
            return Err(ApiError::fetch(response.status, "Failed to send reaction"));
        }

        // Some deployments answer 201/204 with an empty body.
        if response.body.trim().is_empty() {
            return Ok(ReactionReceipt::default());
        }

        decode(&response)
    }
}
