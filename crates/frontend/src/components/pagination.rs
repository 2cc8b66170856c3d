//! Pager for paginated listings

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    let on_prev = {
        let on_page_change = props.on_page_change.clone();
        let page = props.page;
        Callback::from(move |_| {
            if page > 1 {
                on_page_change.emit(page - 1);
            }
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        let page = props.page;
        let total_pages = props.total_pages;
        Callback::from(move |_| {
            if page < total_pages {
                on_page_change.emit(page + 1);
            }
        })
    };

    let button_class = "px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 \
                        bg-white dark:bg-gray-800 border border-gray-300 dark:border-gray-600 \
                        rounded-md hover:bg-gray-50 dark:hover:bg-gray-700 \
                        disabled:opacity-50 disabled:cursor-not-allowed";

    html! {
        <div class="flex items-center justify-center gap-4 mt-6">
            <button class={button_class} disabled={props.page <= 1} onclick={on_prev}>
                {"Previous"}
            </button>
            <span class="text-sm text-gray-600 dark:text-gray-400">
                {format!("Page {} of {}", props.page, props.total_pages)}
            </span>
            <button class={button_class} disabled={props.page >= props.total_pages} onclick={on_next}>
                {"Next"}
            </button>
        </div>
    }
}
