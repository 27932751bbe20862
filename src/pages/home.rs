use std::rc::Rc;

use yew::prelude::*;

use crate::content;
use crate::pages::discover::Discover;
use crate::pages::how_it_works::HowItWorks;

#[function_component(Home)]
pub fn home() -> Html {
    let steps = use_memo(|_| Rc::new(content::how_it_works_steps()), ());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="home-page">
            <Discover />
            <HowItWorks steps={(*steps).clone()} />
        </main>
    }
}
