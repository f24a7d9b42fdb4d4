use payloads::PropertyStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub status: PropertyStatus,
}

#[function_component]
pub fn StatusBadge(props: &Props) -> Html {
    let color = match props.status {
        PropertyStatus::InReview => {
            "bg-amber-100 text-amber-800 dark:bg-amber-900/30 dark:text-amber-400"
        }
        PropertyStatus::Published => {
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400"
        }
        PropertyStatus::Rejected => {
            "bg-red-100 text-red-800 dark:bg-red-900/30 dark:text-red-400"
        }
        PropertyStatus::Sold => {
            "bg-neutral-200 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-300"
        }
    };

    html! {
        <span class={classes!(
            "inline-flex", "px-2", "py-0.5", "rounded-full",
            "text-xs", "font-medium", color
        )}>
            {props.status.label()}
        </span>
    }
}
