use yew::prelude::*;

use crate::village_form::Section;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: Section,
    /// Sections with user-entered data, marked with a dot. Advisory only;
    /// every tab stays clickable.
    pub completed: Vec<Section>,
    pub on_select: Callback<Section>,
}

#[function_component]
pub fn VillageTabHeader(props: &Props) -> Html {
    html! {
        <div class="space-y-2">
            // Progress reflects position in the wizard, not completion.
            <p class="text-sm text-neutral-500 dark:text-neutral-400">
                {format!(
                    "Step {} of {}",
                    props.active.position() + 1,
                    Section::ORDER.len()
                )}
            </p>
            <div class="border-b border-neutral-200 dark:border-neutral-700">
                <nav class="-mb-px flex flex-wrap gap-x-6">
                    {for Section::ORDER.iter().map(|section| {
                        let is_active = *section == props.active;
                        let is_complete = props.completed.contains(section);
                        let on_click = {
                            let on_select = props.on_select.clone();
                            let section = *section;
                            Callback::from(move |_| on_select.emit(section))
                        };
                        html! {
                            <button
                                type="button"
                                onclick={on_click}
                                class={classes!(
                                    "py-2", "px-1", "border-b-2",
                                    "font-medium", "text-sm",
                                    "inline-flex", "items-center", "gap-1.5",
                                    if is_active {
                                        "border-neutral-500 text-neutral-600 dark:text-neutral-400"
                                    } else {
                                        "border-transparent text-neutral-500 hover:text-neutral-700 hover:border-neutral-300 dark:text-neutral-400 dark:hover:text-neutral-300"
                                    }
                                )}
                            >
                                {section.label()}
                                {if is_complete {
                                    html! {
                                        <span class="w-1.5 h-1.5 rounded-full bg-green-500"></span>
                                    }
                                } else {
                                    html! {}
                                }}
                            </button>
                        }
                    })}
                </nav>
            </div>
        </div>
    }
}
