use crate::templates::styles::CARD_CSS;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CARD_CSS)) }
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    h3 { "Shoes" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
