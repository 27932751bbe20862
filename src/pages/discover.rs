use yew::prelude::*;

use crate::components::coupon_card::CouponCardView;
use crate::components::venue_card::NearbyList;
use crate::config;
use crate::content;

#[function_component(Discover)]
pub fn discover() -> Html {
    let content = use_memo(|_| content::discover_content(), ());

    let discover_css = r#"
        .discover {
            max-width: 1280px;
            margin: 0 auto;
            padding: 40px 1rem 0;
        }
        .discover-intro h2 {
            font-size: 3.75rem;
            font-weight: 700;
            line-height: 74px;
            max-width: 28rem;
            margin-bottom: 1.5rem;
        }
        .discover-intro p {
            font-size: 1.5rem;
            color: #4b5563;
            max-width: 36rem;
        }
        .discover-intro .brand {
            font-weight: 500;
            color: #000;
        }
        .discover-grid {
            display: grid;
            grid-template-columns: 356px 1fr 356px;
            gap: 2rem;
            max-width: 1100px;
            margin: 3.5rem auto 0;
        }
        .column-heading h4 {
            font-size: 1.5rem;
            font-weight: 700;
        }
        .column-heading p {
            font-size: 1rem;
            margin-bottom: 1.75rem;
        }
        .nearby-card {
            position: relative;
            max-width: 24rem;
            padding: 1rem;
            border-radius: 0.5rem;
            background: rgba(255, 255, 255, 0.85);
            box-shadow: 4px 4px 0 #B7FF2A;
        }
        .nearby-heading {
            font-size: 0.875rem;
            color: #1f2937;
            margin-bottom: 1rem;
        }
        .venue-row {
            display: flex;
            align-items: flex-start;
            justify-content: space-between;
            padding: 0.5rem 0;
            border-bottom: 1px solid #DFFBA3;
        }
        .venue-info {
            display: flex;
            align-items: center;
            gap: 1rem;
        }
        .venue-icon {
            border-radius: 50%;
        }
        .venue-title {
            font-size: 0.875rem;
            font-weight: 600;
            color: #111827;
        }
        .venue-meta {
            font-size: 0.75rem;
            color: #6b7280;
        }
        .offer-live {
            height: 20px;
            border: 0;
            border-radius: 9999px;
            background: #000;
            color: #B7FF2A;
            font-size: 10px;
        }
        .discover-screen {
            position: relative;
            height: 645px;
            width: 100%;
        }
        .discover-screen img {
            width: 100%;
            height: 100%;
            object-fit: contain;
        }
        .coupon-card {
            border: 1px solid #E6E6E6;
            border-radius: 30px;
            padding: 3px;
        }
        .coupon-image img {
            width: 100%;
            aspect-ratio: 16/9;
            border-radius: 27px;
        }
        .coupon-body {
            padding: 1rem 0.25rem;
        }
        .coupon-row {
            display: flex;
            align-items: center;
            justify-content: space-between;
            margin-bottom: 0.5rem;
        }
        .coupon-name {
            font-weight: 600;
        }
        .coupon-badges, .coupon-redemptions, .coupon-walk {
            display: flex;
            align-items: center;
            gap: 0.25rem;
        }
        .coupon-status, .coupon-hours {
            font-size: 9px;
            padding: 2px;
            border-radius: 2px;
        }
        .coupon-status.open {
            border: 1px solid #080705;
            background: #B7FF2A;
        }
        .coupon-status.closed {
            background: #fee2e2;
        }
        .coupon-hours {
            background: #F0F0F0;
        }
        .coupon-arrow {
            width: 30px;
            height: 30px;
            border: 1px solid #080705;
            border-radius: 50%;
            background: #B7FF2A;
        }
        .coupon-arrow img {
            width: 100%;
            height: 100%;
        }
        .coupon-blurb {
            max-width: 280px;
        }
        .small { font-size: 0.75rem; }
        .tiny { font-size: 10px; }
        @media (max-width: 1024px) {
            .discover-grid {
                display: flex;
                flex-direction: column;
            }
            .discover-intro h2 {
                font-size: 2.25rem;
                line-height: 40px;
            }
            .discover-intro p {
                font-size: 1.25rem;
            }
        }
    "#;

    let column_heading = html! {
        <div class="column-heading">
            <h4>{"Exclusive Coupons"}</h4>
            <p>{"Explore the restaurant by the search"}</p>
        </div>
    };

    html! {
        <section class="discover">
            <style>{discover_css}</style>
            <div class="discover-intro">
                <h2>{"Discover the City Like Never Before"}</h2>
                <p>
                    {"An expedition with "}
                    <span class="brand">{"Waynaa"}</span>
                    {"- Your ultimate guide to finding exclusive "}
                    <span class="brand">{"New & Trending"}</span>
                    {" hotspots nearby."}
                </p>
            </div>
            <div class="discover-grid">
                <div>
                    { column_heading.clone() }
                    <NearbyList venues={content.venues.clone()} />
                </div>
                <div class="discover-screen">
                    <img src={config::asset_url("/discover-screen.svg")} alt="Waynaa's usage example" />
                </div>
                <div>
                    { column_heading }
                    {
                        if let Some(coupon) = &content.coupon {
                            html! { <CouponCardView coupon={coupon.clone()} /> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </section>
    }
}
