use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::config::{self, HighlightConfig};
use crate::content::Step;
use crate::highlight::engine::{self, ChangeListener};
use crate::highlight::style::{step_classes, TIMELINE_CSS};
use crate::highlight::{
    IntersectionVisibilityObserver, ObservationState, StepHighlighter, TimeoutScheduler,
};

type BrowserHighlighter = StepHighlighter<IntersectionVisibilityObserver, TimeoutScheduler>;

#[derive(Properties, PartialEq, Clone)]
pub struct HowItWorksProps {
    pub steps: Rc<Vec<Step>>,
}

/// Wires the timeline elements to an `IntersectionObserver`. Returns `None`
/// when the timeline stays static.
fn start_highlighter(
    step_refs: &[NodeRef],
    state: UseStateHandle<ObservationState>,
) -> Option<BrowserHighlighter> {
    let targets: Vec<Element> = step_refs.iter().filter_map(|r| r.cast::<Element>()).collect();
    let config = HighlightConfig::default();
    let on_change: ChangeListener = Rc::new(move |snapshot: ObservationState| state.set(snapshot));

    engine::start(
        step_refs.len(),
        targets,
        |handler| IntersectionVisibilityObserver::new(&config, handler),
        TimeoutScheduler,
        config.clear_delay_ms,
        on_change,
    )
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    let state = use_state(ObservationState::default);
    let step_refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        props.steps.len(),
    );

    // Re-registers whenever the step list changes.
    {
        let state = state.clone();
        let step_refs = step_refs.clone();
        use_effect_with_deps(
            move |_| {
                let highlighter = start_highlighter(&step_refs, state);
                move || {
                    if let Some(highlighter) = highlighter {
                        highlighter.teardown();
                    }
                }
            },
            props.steps.clone(),
        );
    }

    let steps = props.steps.iter().enumerate().map(|(index, step)| {
        let classes = step_classes(index, &state);
        let node_ref = step_refs.get(index).cloned().unwrap_or_default();
        html! {
            <li key={index.to_string()} ref={node_ref} class={classes.item}>
                <span class={classes.badge}>
                    <span class={classes.badge_number}>{(index + 1).to_string()}</span>
                </span>
                <h3 class="step-caption">{format!("Step {}", index + 1)}</h3>
                <h3 class={classes.title}>{&step.title}</h3>
                <p class={classes.description}>{&step.description}</p>
            </li>
        }
    });

    html! {
        <section class="how-it-works">
            <style>{TIMELINE_CSS}</style>
            <div class="how-it-works-inner">
                <h1>{"How It Works"}</h1>
                <p class="subtitle">{"A Quick Guide to Navigating Waynaa"}</p>
                <div class="how-it-works-body">
                    <div class="phone-frame">
                        <div class="phone-screen">
                            <img
                                src={config::asset_url("/Howitworks/border.svg")}
                                alt="Waynaa app login screen"
                            />
                        </div>
                    </div>
                    <ol class="timeline">
                        { for steps }
                    </ol>
                </div>
            </div>
        </section>
    }
}
