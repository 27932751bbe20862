pub mod coupon_card;
pub mod venue_card;
