use crate::highlight::state::ObservationState;

/// CSS classes for one timeline step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepClasses {
    pub item: &'static str,
    pub badge: &'static str,
    pub badge_number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const EMPHASIZED: StepClasses = StepClasses {
    item: "step-item emphasized",
    badge: "step-badge badge-accent",
    badge_number: "badge-number number-accent",
    title: "step-title title-accent",
    description: "step-description description-accent",
};

const NEUTRAL: StepClasses = StepClasses {
    item: "step-item",
    badge: "step-badge badge-neutral",
    badge_number: "badge-number number-neutral",
    title: "step-title title-neutral",
    description: "step-description description-neutral",
};

pub fn step_classes(index: usize, state: &ObservationState) -> StepClasses {
    if state.is_emphasized(index) {
        EMPHASIZED
    } else {
        NEUTRAL
    }
}

pub const TIMELINE_CSS: &str = r#"
    .how-it-works {
        display: flex;
        align-items: center;
        justify-content: center;
        min-height: 100vh;
        background: #000;
        border-radius: 8rem;
        padding: 1rem;
    }
    .how-it-works-inner {
        width: 100%;
        max-width: 72rem;
        padding: 4rem;
    }
    .how-it-works h1 {
        color: #fff;
        font-size: 3rem;
        font-weight: 700;
        margin-bottom: 0.5rem;
    }
    .how-it-works .subtitle {
        color: #9ca3af;
        margin-bottom: 2rem;
    }
    .how-it-works-body {
        display: flex;
        gap: 4rem;
    }
    .phone-frame {
        width: 28rem;
        height: 88vh;
        padding: 0.25rem;
        border: 2px solid #a3e635;
        border-radius: 2.5rem;
    }
    .phone-screen {
        display: flex;
        align-items: center;
        justify-content: center;
        height: 100%;
        background: #e5e7eb;
        border-radius: 2.5rem;
    }
    .phone-screen img {
        width: 20rem;
        height: 70vh;
        border-radius: 2rem;
    }
    .timeline {
        position: relative;
        border-left: 1px solid #374151;
        margin-bottom: 3rem;
        list-style: none;
    }
    .step-item {
        margin-left: 2.5rem;
        opacity: 0.8;
        transition: all 0.3s ease-in-out;
    }
    .step-item.emphasized {
        opacity: 1;
    }
    .step-badge {
        position: absolute;
        left: -1.5rem;
        margin-left: 5px;
        display: flex;
        align-items: center;
        justify-content: center;
        width: 2rem;
        height: 2rem;
        border-radius: 50%;
        box-shadow: 0 0 0 4px #111827;
        transition: all 0.3s ease-in-out;
    }
    .badge-accent { background: #a3e635; }
    .badge-neutral { background: #6b7280; }
    .badge-number { transition: color 0.3s; }
    .number-accent { color: #000; }
    .number-neutral { color: #f3f4f6; z-index: 10; }
    .step-caption {
        color: #6b7280;
        font-size: 1rem;
        margin-top: 2rem;
    }
    .step-title {
        font-size: 1.25rem;
        font-weight: 500;
        margin-top: 1.25rem;
        transition: color 0.3s;
    }
    .title-accent { color: #bef264; }
    .title-neutral { color: #fff; }
    .step-description {
        font-size: 0.875rem;
        margin-bottom: 1rem;
        transition: color 0.3s;
    }
    .description-accent { color: #d1d5db; }
    .description-neutral { color: #9ca3af; }
    @media (max-width: 1024px) {
        .how-it-works-body {
            flex-direction: column;
            gap: 2rem;
        }
        .phone-frame {
            width: 100%;
        }
    }
"#;
