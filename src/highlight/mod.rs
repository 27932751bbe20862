//! Scroll-linked emphasis for the "How It Works" timeline.
//!
//! [`engine::StepHighlighter`] turns visibility batches from a
//! [`observer::VisibilityObserver`] into an [`state::ObservationState`]:
//! a sticky active step plus a short-lived highlight cleared by a
//! [`scheduler::Scheduler`] task. Styling is derived from that state by
//! [`style::step_classes`].

pub mod engine;
pub mod observer;
pub mod scheduler;
pub mod state;
pub mod style;

pub use engine::StepHighlighter;
pub use observer::{IntersectionVisibilityObserver, ObserverError, VisibilityObserver};
pub use scheduler::{Scheduler, TimeoutScheduler};
pub use state::{ObservationState, VisibilityEntry};
