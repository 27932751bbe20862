use yew::prelude::*;

use crate::config;
use crate::content::Venue;

#[derive(Properties, PartialEq, Clone)]
pub struct VenueRowProps {
    pub venue: Venue,
}

#[function_component(VenueRow)]
pub fn venue_row(props: &VenueRowProps) -> Html {
    let venue = &props.venue;
    html! {
        <div class="venue-row">
            <div class="venue-info">
                <img
                    src={config::asset_url(&venue.icon)}
                    alt={venue.title.clone()}
                    class="venue-icon"
                    width="32"
                    height="32"
                />
                <div>
                    <h3 class="venue-title">{&venue.title}</h3>
                    <p class="venue-meta">{&venue.description}</p>
                    <p class="venue-meta">{&venue.distance}</p>
                </div>
            </div>
            <button class="offer-live">{"Offer Live"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NearbyListProps {
    pub venues: Vec<Venue>,
}

/// The "Near by you" card listing mock venues.
#[function_component(NearbyList)]
pub fn nearby_list(props: &NearbyListProps) -> Html {
    html! {
        <div class="nearby-card">
            <h4 class="nearby-heading">{"Near by you"}</h4>
            <div class="nearby-list">
                { for props.venues.iter().enumerate().map(|(index, venue)| html! {
                    <VenueRow key={index.to_string()} venue={venue.clone()} />
                }) }
            </div>
        </div>
    }
}
