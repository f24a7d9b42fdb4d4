use yew::prelude::*;

pub const PAGE_SIZE: usize = 25;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Zero-based page index.
    pub page: usize,
    pub total_rows: usize,
    pub on_page: Callback<usize>,
}

/// Client-side pager for long tables. The whole collection is already in
/// memory; this only windows what gets rendered.
#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let page_count = props.total_rows.div_ceil(PAGE_SIZE).max(1);
    let page = props.page.min(page_count - 1);

    let on_previous = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if page > 0 {
                on_page.emit(page - 1);
            }
        })
    };

    let on_next = {
        let on_page = props.on_page.clone();
        Callback::from(move |_| {
            if page + 1 < page_count {
                on_page.emit(page + 1);
            }
        })
    };

    if page_count <= 1 {
        return html! {};
    }

    html! {
        <div class="flex items-center justify-between pt-4">
            <button
                onclick={on_previous}
                disabled={page == 0}
                class="px-3 py-1.5 text-sm font-medium rounded-md border
                       border-neutral-300 dark:border-neutral-600
                       text-neutral-700 dark:text-neutral-300
                       hover:bg-neutral-50 dark:hover:bg-neutral-700
                       disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {"Previous"}
            </button>
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Page {} of {}", page + 1, page_count)}
            </span>
            <button
                onclick={on_next}
                disabled={page + 1 >= page_count}
                class="px-3 py-1.5 text-sm font-medium rounded-md border
                       border-neutral-300 dark:border-neutral-600
                       text-neutral-700 dark:text-neutral-300
                       hover:bg-neutral-50 dark:hover:bg-neutral-700
                       disabled:opacity-50 disabled:cursor-not-allowed"
            >
                {"Next"}
            </button>
        </div>
    }
}

/// The slice of rows visible on the given page.
pub fn page_slice<T>(rows: &[T], page: usize) -> &[T] {
    let start = (page * PAGE_SIZE).min(rows.len());
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_slice_windows_the_rows() {
        let rows: Vec<usize> = (0..60).collect();
        assert_eq!(page_slice(&rows, 0).len(), PAGE_SIZE);
        assert_eq!(page_slice(&rows, 2).len(), 10);
        assert_eq!(page_slice(&rows, 3).len(), 0);
        assert_eq!(page_slice(&rows, 1)[0], PAGE_SIZE);
    }
}
