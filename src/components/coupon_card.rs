use yew::prelude::*;

use crate::config;
use crate::content::CouponCard;

#[derive(Properties, PartialEq, Clone)]
pub struct CouponCardProps {
    pub coupon: CouponCard,
}

#[function_component(CouponCardView)]
pub fn coupon_card_view(props: &CouponCardProps) -> Html {
    let coupon = &props.coupon;
    let (status_class, status_text) = if coupon.open {
        ("coupon-status open", "Open")
    } else {
        ("coupon-status closed", "Closed")
    };

    html! {
        <div class="coupon-card">
            <div class="coupon-image">
                <img src={config::asset_url(&coupon.image)} alt={coupon.name.clone()} />
            </div>
            <div class="coupon-body">
                <div class="coupon-row">
                    <h4 class="coupon-name">{&coupon.name}</h4>
                    <div class="coupon-badges">
                        <div class="coupon-redemptions">
                            <img src={config::asset_url("/coupon.svg")} width="12" height="20" alt="Coupon icon" />
                            <img src={config::asset_url("/group.svg")} width="10" height="10" alt="Group of people" />
                            <p class="tiny">{coupon.redemptions.to_string()}</p>
                        </div>
                        <div class={status_class}>{status_text}</div>
                        <div class="coupon-hours">{&coupon.hours}</div>
                    </div>
                </div>
                <div class="coupon-row">
                    <p class="small">{format!("{} • {}", coupon.address, coupon.category)}</p>
                    <div class="coupon-walk">
                        <img src={config::asset_url("/walking.svg")} width="13" height="13" alt="Walking man" />
                        <p class="tiny">{&coupon.walking_time}</p>
                    </div>
                </div>
                <div class="coupon-row">
                    <p class="small coupon-blurb">{&coupon.blurb}</p>
                    <div class="coupon-arrow">
                        <img src={config::asset_url("/up-right-line.svg")} alt="Right arrow" />
                    </div>
                </div>
            </div>
        </div>
    }
}
