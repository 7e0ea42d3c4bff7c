//! # Mock Sources
//!
//! Static seed catalogs served behind a simulated network delay. This layer
//! ships without a backend; directory-style data (investors, templates,
//! checklist definitions) comes from these catalogs until real endpoints
//! exist.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use tokio::time::sleep;

use crate::models::{
    ChatMessage, ChecklistCategory, ChecklistItem, Circle, Conversation, InvestmentStage,
    Investor, LegalTemplate, Milestone, Sender,
};
use crate::store::FetchSource;

/// Simulated round-trip latency for catalog fetches.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(450);

/// Fetch source that sleeps, then serves a fixed catalog.
pub struct MockSource<T> {
    latency: Duration,
    items: Vec<T>,
}

impl<T: Clone + Send + Sync> MockSource<T> {
    pub fn new(items: Vec<T>, latency: Duration) -> Self {
        Self { latency, items }
    }

    /// Empty catalog, no delay. Used by stores whose records are only ever
    /// created locally (validation history).
    pub fn empty() -> Self {
        Self {
            latency: Duration::ZERO,
            items: Vec::new(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + Sync> FetchSource<T> for MockSource<T> {
    async fn fetch_all(&self) -> anyhow::Result<Vec<T>> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        Ok(self.items.clone())
    }
}

pub fn seed_conversations() -> Vec<Conversation> {
    let now = Utc::now();
    vec![
        Conversation {
            id: "conv-1".into(),
            counterpart_name: "Priya Raman".into(),
            counterpart_role: Some("Technical co-founder".into()),
            preview: "I shipped the prototype - want to review it tomorrow?".into(),
            messages: vec![
                ChatMessage {
                    id: "msg-1".into(),
                    sender: Sender::Them,
                    body: "Loved your deck. What stack are you thinking for the MVP?".into(),
                    sent_at: now - ChronoDuration::hours(20),
                },
                ChatMessage {
                    id: "msg-2".into(),
                    sender: Sender::Me,
                    body: "Leaning towards something boring and reliable.".into(),
                    sent_at: now - ChronoDuration::hours(19),
                },
                ChatMessage {
                    id: "msg-3".into(),
                    sender: Sender::Them,
                    body: "I shipped the prototype - want to review it tomorrow?".into(),
                    sent_at: now - ChronoDuration::hours(2),
                },
            ],
            created_at: now - ChronoDuration::days(6),
            updated_at: now - ChronoDuration::hours(2),
        },
        Conversation {
            id: "conv-2".into(),
            counterpart_name: "Marcus Webb".into(),
            counterpart_role: Some("Growth lead".into()),
            preview: "Happy to intro you to my old CFO.".into(),
            messages: vec![ChatMessage {
                id: "msg-4".into(),
                sender: Sender::Them,
                body: "Happy to intro you to my old CFO.".into(),
                sent_at: now - ChronoDuration::days(1),
            }],
            created_at: now - ChronoDuration::days(3),
            updated_at: now - ChronoDuration::days(1),
        },
    ]
}

pub fn seed_milestones() -> Vec<Milestone> {
    let now = Utc::now();
    vec![
        Milestone {
            id: "ms-incorporate".into(),
            title: "Incorporate the company".into(),
            target_date: now + ChronoDuration::days(14),
            notes: Some("Delaware C-corp via standard docs".into()),
            created_at: now,
            updated_at: now,
        },
        Milestone {
            id: "ms-mvp".into(),
            title: "Ship MVP to first 10 users".into(),
            target_date: now + ChronoDuration::days(45),
            notes: None,
            created_at: now,
            updated_at: now,
        },
        Milestone {
            id: "ms-revenue".into(),
            title: "First paying customer".into(),
            target_date: now + ChronoDuration::days(90),
            notes: None,
            created_at: now,
            updated_at: now,
        },
    ]
}

/// The fundraising checklist: 4 categories, 11 items total.
pub fn seed_checklist() -> Vec<ChecklistCategory> {
    fn item(id: &str, label: &str) -> ChecklistItem {
        ChecklistItem {
            id: id.into(),
            label: label.into(),
            detail: None,
        }
    }

    vec![
        ChecklistCategory {
            id: "cl-formation".into(),
            name: "Company Formation".into(),
            items: vec![
                item("cl-1", "Incorporate as a C-corp"),
                item("cl-2", "Issue founder stock with vesting"),
                item("cl-3", "File 83(b) elections"),
            ],
        },
        ChecklistCategory {
            id: "cl-financials".into(),
            name: "Financial Documents".into(),
            items: vec![
                item("cl-4", "Build an 18-month financial model"),
                item("cl-5", "Open a business bank account"),
                item("cl-6", "Set up bookkeeping"),
            ],
        },
        ChecklistCategory {
            id: "cl-legal".into(),
            name: "Legal & Compliance".into(),
            items: vec![
                item("cl-7", "Assign all IP to the company"),
                item("cl-8", "Put contractor agreements in place"),
                item("cl-9", "Draft a privacy policy"),
            ],
        },
        ChecklistCategory {
            id: "cl-materials".into(),
            name: "Investor Materials".into(),
            items: vec![
                item("cl-10", "Finalize the pitch deck"),
                item("cl-11", "Prepare a data room"),
            ],
        },
    ]
}

pub fn seed_investors() -> Vec<Investor> {
    vec![
        Investor {
            id: "inv-1".into(),
            name: "Dana Okafor".into(),
            firm: "Meridian Ventures".into(),
            stage: InvestmentStage::PreSeed,
            focus: vec!["marketplaces".into(), "fintech".into()],
            location: Some("New York".into()),
        },
        Investor {
            id: "inv-2".into(),
            name: "Tom Eriksson".into(),
            firm: "Northlight Capital".into(),
            stage: InvestmentStage::Seed,
            focus: vec!["devtools".into()],
            location: Some("Stockholm".into()),
        },
        Investor {
            id: "inv-3".into(),
            name: "Grace Lin".into(),
            firm: "Harbor Row".into(),
            stage: InvestmentStage::Seed,
            focus: vec!["health".into(), "consumer".into()],
            location: Some("San Francisco".into()),
        },
        Investor {
            id: "inv-4".into(),
            name: "Ravi Shah".into(),
            firm: "Elmwood Growth".into(),
            stage: InvestmentStage::SeriesA,
            focus: vec!["b2b saas".into()],
            location: Some("London".into()),
        },
    ]
}

pub fn seed_legal_templates() -> Vec<LegalTemplate> {
    vec![
        LegalTemplate {
            id: "legal-1".into(),
            name: "Founder Agreement".into(),
            category: "Formation".into(),
            summary: "Equity split, vesting, and roles between co-founders.".into(),
        },
        LegalTemplate {
            id: "legal-2".into(),
            name: "Mutual NDA".into(),
            category: "Confidentiality".into(),
            summary: "Two-way non-disclosure for partner discussions.".into(),
        },
        LegalTemplate {
            id: "legal-3".into(),
            name: "SAFE (post-money)".into(),
            category: "Fundraising".into(),
            summary: "Standard simple agreement for future equity.".into(),
        },
        LegalTemplate {
            id: "legal-4".into(),
            name: "Advisor Agreement".into(),
            category: "Team".into(),
            summary: "Advisory shares with standard FAST terms.".into(),
        },
    ]
}

pub fn seed_circles() -> Vec<Circle> {
    vec![
        Circle {
            id: "circle-1".into(),
            name: "First-Time Founders".into(),
            topic: "Navigating the 0-to-1 phase together".into(),
            member_count: 128,
            joined: false,
        },
        Circle {
            id: "circle-2".into(),
            name: "Fundraising This Quarter".into(),
            topic: "Live deal talk and warm intros".into(),
            member_count: 54,
            joined: false,
        },
        Circle {
            id: "circle-3".into(),
            name: "Technical Founders".into(),
            topic: "Build fast without burning out".into(),
            member_count: 203,
            joined: true,
        },
    ]
}
