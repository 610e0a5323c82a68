//! Marquee Component
//!
//! Horizontally auto-scrolling strip of repeated labels. The CSS animation
//! translates the row; hovering pauses it.

use leptos::prelude::*;

/// Concatenate the item list three times so the translating row loops
/// without running out of content. Order is preserved within each copy.
pub fn looped_items(items: &[&'static str]) -> Vec<&'static str> {
    items.iter().chain(items).chain(items).copied().collect()
}

/// Scrolling label strip
#[component]
pub fn Marquee(
    items: &'static [&'static str],
    /// Run the strip right-to-left instead
    #[prop(optional)]
    reverse: bool,
) -> impl IntoView {
    let row_class = if reverse { "marquee-row reverse" } else { "marquee-row" };

    view! {
        <div class="marquee reveal">
            <div class=row_class>
                {looped_items(items)
                    .into_iter()
                    .map(|item| view! { <span class="marquee-item">{item}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_tripled() {
        let items = ["Alpha", "Beta", "Gamma"];
        let looped = looped_items(&items);
        assert_eq!(looped.len(), items.len() * 3);
    }

    #[test]
    fn test_order_is_preserved_in_each_copy() {
        let items = ["Alpha", "Beta"];
        let looped = looped_items(&items);
        assert_eq!(looped, vec!["Alpha", "Beta", "Alpha", "Beta", "Alpha", "Beta"]);
    }

    #[test]
    fn test_empty_list_stays_empty() {
        assert!(looped_items(&[]).is_empty());
    }
}
