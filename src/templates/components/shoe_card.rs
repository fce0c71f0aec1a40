use chrono::{DateTime, Utc};
use maud::{html, Markup};

use crate::domain::{compute_variant, Listing, Variant};
use crate::formatting::{format_price, pluralize};

/// Everything the card shows, already derived from a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoeCardVm {
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub price: String,
    pub colors: String,
    pub variant: Variant,
}

impl ShoeCardVm {
    pub fn new(listing: &Listing, now: DateTime<Utc>) -> Self {
        Self {
            href: listing.href(),
            name: listing.name.clone(),
            image_src: listing.image_src.clone(),
            price: format_price(listing.price),
            colors: pluralize("Color", listing.num_of_colors),
            variant: compute_variant(listing, now),
        }
    }
}

pub fn shoe_card(vm: &ShoeCardVm) -> Markup {
    html! {
        a class="shoe-card" href=(vm.href) {
            article {
                div class="shoe-card__image" {
                    img alt="" src=(vm.image_src);
                    @match vm.variant {
                        Variant::OnSale { .. } => div class="shoe-card__badge shoe-card__badge--sale" { "Sale" },
                        Variant::NewRelease => div class="shoe-card__badge shoe-card__badge--new" { "Just released!" },
                        Variant::Default => {},
                    }
                }
                div class="shoe-card__row" {
                    h3 class="shoe-card__name" { (vm.name) }
                    span class="shoe-card__prices" {
                        @match vm.variant {
                            Variant::OnSale { sale_price } => {
                                div class="shoe-card__price shoe-card__price--struck" { (vm.price) }
                                span class="shoe-card__sale-price" { (format_price(sale_price)) }
                            },
                            Variant::NewRelease | Variant::Default => {
                                div class="shoe-card__price" { (vm.price) }
                            },
                        }
                    }
                }
                div class="shoe-card__row" {
                    p class="shoe-card__colors" { (vm.colors) }
                }
            }
        }
    }
}
