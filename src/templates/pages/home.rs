// templates/pages/home.rs

use crate::templates::{
    components::{shoe_card, ShoeCardVm},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(cards: &[ShoeCardVm]) -> Markup {
    desktop_layout(
        "Shoes",
        html! {
            main class="container" {
                h1 { "All Shoes" }

                @if cards.is_empty() {
                    p { "No shoes in the catalog yet." }
                } @else {
                    ul class="shoe-grid" {
                        @for card in cards {
                            li { (shoe_card(card)) }
                        }
                    }
                }
            }
        },
    )
}
