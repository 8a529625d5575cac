use leptos::*;

use crate::models::review::PaginationMeta;

/// One slot in the pager: a concrete page or a collapsed gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page numbers for the pager control: always page 1 and the last page,
/// up to two neighbours on each side of the current page, and an ellipsis
/// wherever that leaves a gap. A single page needs no pager at all.
pub fn page_numbers(current: u32, last: u32) -> Vec<PageItem> {
    if last <= 1 {
        return Vec::new();
    }
    let mut items = vec![PageItem::Page(1)];
    let start = current.saturating_sub(2).max(2);
    let end = (current + 2).min(last - 1);
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    for page in start..=end {
        items.push(PageItem::Page(page));
    }
    if end < last - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(last));
    items
}

#[component]
pub fn Pagination(
    #[prop(into)] meta: Signal<Option<PaginationMeta>>,
    #[prop(into)] on_select: Callback<u32>,
) -> impl IntoView {
    view! {
        {move || meta.get().map(|meta| {
            let items = page_numbers(meta.current_page, meta.last_page);
            if items.is_empty() {
                return ().into_view();
            }
            let current = meta.current_page;
            view! {
                <nav class="pagination">
                    <button
                        class="page-button"
                        disabled=move || current <= 1
                        on:click=move |_| on_select.call(current.saturating_sub(1))
                    >
                        {"Previous"}
                    </button>
                    {items.into_iter().map(|item| match item {
                        PageItem::Page(page) => view! {
                            <button
                                class="page-button"
                                class:active=move || page == current
                                on:click=move |_| on_select.call(page)
                            >
                                {page}
                            </button>
                        }.into_view(),
                        PageItem::Ellipsis => view! {
                            <span class="page-ellipsis">{"..."}</span>
                        }.into_view(),
                    }).collect::<Vec<_>>()}
                    <button
                        class="page-button"
                        disabled=move || current >= meta.last_page
                        on:click=move |_| on_select.call(current + 1)
                    >
                        {"Next"}
                    </button>
                </nav>
            }.into_view()
        })}
    }
}
