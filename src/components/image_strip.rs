//! Image Strip Component
//!
//! Row of thumbnails with an overflow counter.

use leptos::prelude::*;

use crate::models::PortfolioImage;

/// Thumbnails shown per row before the `+N` counter
pub const THUMBNAIL_LIMIT: usize = 3;

const PLACEHOLDER: &str = "/placeholder.svg";

/// Split images into the shown thumbnails and the hidden count.
pub fn thumbnails(images: &[PortfolioImage]) -> (&[PortfolioImage], Option<usize>) {
    if images.len() > THUMBNAIL_LIMIT {
        (&images[..THUMBNAIL_LIMIT], Some(images.len() - THUMBNAIL_LIMIT))
    } else {
        (images, None)
    }
}

#[component]
pub fn ImageStrip(images: Vec<PortfolioImage>, #[prop(into)] alt_prefix: String) -> impl IntoView {
    let (shown, overflow) = thumbnails(&images);

    let thumbs = shown
        .iter()
        .enumerate()
        .map(|(index, image)| {
            let src = if image.url.is_empty() { PLACEHOLDER.to_string() } else { image.url.clone() };
            let alt = format!("{} {}", alt_prefix, index + 1);
            view! { <img class="thumb" src=src alt=alt width="48" height="48" /> }
        })
        .collect_view();

    view! {
        <div class="image-strip">
            {thumbs}
            {overflow.map(|hidden| view! { <div class="thumb overflow">{format!("+{}", hidden)}</div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<PortfolioImage> {
        (0..n).map(|i| PortfolioImage { url: format!("{}.jpg", i), id: i.to_string() }).collect()
    }

    #[test]
    fn test_three_or_fewer_have_no_counter() {
        for n in 0..=3 {
            let list = images(n);
            let (shown, overflow) = thumbnails(&list);
            assert_eq!(shown.len(), n);
            assert_eq!(overflow, None);
        }
    }

    #[test]
    fn test_overflow_counter() {
        let list = images(5);
        let (shown, overflow) = thumbnails(&list);
        assert_eq!(shown.len(), 3);
        assert_eq!(shown[2].id, "2");
        assert_eq!(overflow, Some(2));
    }
}
