use yew::prelude::*;

use super::{Header, Sidebar};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component]
pub fn MainLayout(props: &Props) -> Html {
    html! {
        <div class="flex min-h-screen">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <Header />
                <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
