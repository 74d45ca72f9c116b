use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Centered spinner with optional caption, shown until the first dataset arrives
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BusyIndicatorProps {
    pub visible: bool,
}

/// Small inline spinner; hidden rather than removed so layout does not jump
#[function_component(BusyIndicator)]
pub fn busy_indicator(props: &BusyIndicatorProps) -> Html {
    html! {
        <span
            class={classes!("loading", "loading-spinner", "loading-sm", (!props.visible).then_some("hidden"))}
            aria-hidden={(!props.visible).to_string()}
        ></span>
    }
}
