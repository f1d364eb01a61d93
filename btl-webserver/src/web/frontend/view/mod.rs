use btl_core::entities::Category;
use maud::{html, Markup};

mod page;

use page::*;

pub fn categories(categories: &[Category]) -> Markup {
    page(
        "Categories",
        html! {
            div class="categories" {
                h1 { "Categories" }
                @if categories.is_empty() {
                    p class="empty" { "There are no categories yet." }
                } @else {
                    ul {
                        @for c in categories {
                            li id=(format!("category-{}", c.id)) { (c.name) }
                        }
                    }
                }
            }
        },
    )
}
