//! # Domain Models
//!
//! Record types shared by the domain stores. Ids are timestamp-prefixed
//! strings with a process-wide sequence suffix so records created in the same
//! second stay distinct.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh record id like `deck-20260826-143015-4`.
pub fn generate_id(prefix: &str) -> String {
    let now = Utc::now();
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", prefix, now.format("%Y%m%d-%H%M%S"), seq)
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    /// The signed-in founder.
    Me,
    /// The matched counterpart.
    Them,
}

/// One message inside a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// A matchmaking conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    /// Display name of the matched co-founder candidate.
    pub counterpart_name: String,
    /// Their headline role, e.g. "Technical co-founder".
    #[serde(default)]
    pub counterpart_role: Option<String>,
    /// Last message body, shown on the conversation list.
    #[serde(default)]
    pub preview: String,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Conversation {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// One slide of a pitch deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

/// A pitch deck under construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchDeck {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub slides: Vec<Slide>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for PitchDeck {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// One named section of a business plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSection {
    pub name: String,
    #[serde(default)]
    pub body: String,
}

/// A business plan document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessPlan {
    pub id: String,
    pub title: String,
    pub sections: Vec<PlanSection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for BusinessPlan {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// A startup milestone. Completion lives in the milestone store's persisted
/// progress set, not on the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub target_date: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Milestone {
    fn id(&self) -> &str {
        &self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// One actionable item on the fundraising checklist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A themed group of checklist items. The category is the fetched record;
/// completion state is tracked separately by item id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<ChecklistItem>,
}

impl Record for ChecklistCategory {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Typical check size / stage an investor writes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStage {
    PreSeed,
    Seed,
    SeriesA,
    Growth,
}

/// An investor directory entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investor {
    pub id: String,
    pub name: String,
    pub firm: String,
    pub stage: InvestmentStage,
    /// Sectors they lead in, e.g. "fintech".
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Record for Investor {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A legal document template from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalTemplate {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub summary: String,
}

impl Record for LegalTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A founder circle (peer group).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub topic: String,
    pub member_count: u32,
    /// Whether the current founder has joined. Flipped optimistically with no
    /// rollback path.
    #[serde(default)]
    pub joined: bool,
}

impl Record for Circle {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A scored AI assessment of a startup idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaValidation {
    pub id: String,
    /// The idea text as submitted.
    pub idea: String,
    /// 0-100 viability score.
    pub score: u8,
    pub verdict: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub risks: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for IdeaValidation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Subscription tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Free,
    Pro,
    Premium,
}

/// The founder's subscription record; persisted whole.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Subscription {
    pub tier: PlanTier,
    #[serde(default)]
    pub renews_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn is_premium(&self) -> bool {
        !matches!(self.tier, PlanTier::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_carry_prefix_and_stay_unique() {
        let a = generate_id("deck");
        let b = generate_id("deck");
        assert!(a.starts_with("deck-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_sender_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Sender::Them).unwrap(), "\"them\"");
    }

    #[test]
    fn test_subscription_defaults_to_free() {
        let sub = Subscription::default();
        assert_eq!(sub.tier, PlanTier::Free);
        assert!(!sub.is_premium());
    }
}
