//! Review record and its not-yet-persisted draft.

use crate::domain::foundation::{ContactId, ReviewId, Timestamp, ValidationError};

/// A candidate review assembled before the repository assigns identity.
///
/// All text fields are trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    contact_number: ContactId,
    user_name: String,
    product_name: String,
    review_text: String,
}

impl ReviewDraft {
    /// Builds a draft, rejecting blank fields.
    pub fn new(
        contact_number: ContactId,
        user_name: impl Into<String>,
        product_name: impl Into<String>,
        review_text: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            contact_number,
            user_name: required("user_name", user_name.into())?,
            product_name: required("product_name", product_name.into())?,
            review_text: required("review_text", review_text.into())?,
        })
    }

    pub fn contact_number(&self) -> &ContactId {
        &self.contact_number
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }
}

fn required(field: &str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

/// A persisted, immutable review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    id: ReviewId,
    contact_number: ContactId,
    user_name: String,
    product_name: String,
    review_text: String,
    created_at: Timestamp,
}

impl Review {
    /// Materialises a stored review from a draft and the identity the store assigned.
    pub fn from_draft(id: ReviewId, draft: ReviewDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            contact_number: draft.contact_number,
            user_name: draft.user_name,
            product_name: draft.product_name,
            review_text: draft.review_text,
            created_at,
        }
    }

    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn contact_number(&self) -> &ContactId {
        &self.contact_number
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn review_text(&self) -> &str {
        &self.review_text
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
