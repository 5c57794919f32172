//! Victory counters, diminishing rewards and campaign stage gating.

mod campaign;
mod tracker;

pub use campaign::{derive_state, AnnotatedStage, CampaignStage, LockReason, UnmetRequirement};
pub use tracker::{scale_amount, scale_rewards, ProgressionTracker};
