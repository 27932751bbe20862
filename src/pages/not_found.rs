use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found" style="min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem;">
            <h1>{"Page not found"}</h1>
            <p style="color: #6b7280;">{"The page you were looking for does not exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to Waynaa"}</Link<Route>>
        </div>
    }
}
