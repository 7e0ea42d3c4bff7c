//! # Domain Stores
//!
//! One store per screen-facing collection, each an instantiation of the
//! generic resource-store pattern. Directory-style stores serve seeded
//! catalogs behind simulated latency; the drafting and validation stores call
//! the completion client; checklist, milestone, and subscription state is
//! selectively persisted.

pub mod business_plans;
pub mod checklist;
pub mod circles;
pub mod conversations;
pub mod investors;
pub mod legal;
pub mod milestones;
pub mod mock;
pub mod pitch_decks;
pub mod subscription;
pub mod validation;

pub use business_plans::BusinessPlanStore;
pub use checklist::ChecklistStore;
pub use circles::CircleStore;
pub use conversations::ConversationStore;
pub use investors::InvestorStore;
pub use legal::LegalTemplateStore;
pub use milestones::{MilestoneStore, MilestoneUpdate};
pub use mock::{MockSource, DEFAULT_LATENCY};
pub use pitch_decks::{DeckUpdate, PitchDeckStore};
pub use subscription::SubscriptionStore;
pub use validation::ValidationStore;
