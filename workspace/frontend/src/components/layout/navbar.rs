use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: String,
    #[prop_or_default]
    pub status: Option<String>,
    #[prop_or_default]
    pub on_refresh: Option<Callback<()>>,
    #[prop_or_default]
    pub refreshing: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4 gap-3">
                <i class="fas fa-plane-departure text-primary text-xl"></i>
                <h1 class="text-xl font-bold" id="page-title">{ &props.title }</h1>
            </div>
            <div class="flex-none gap-2 px-4">
                {if let Some(status) = &props.status {
                    html! { <span class="text-sm text-gray-500 hidden md:inline">{status}</span> }
                } else {
                    html! {}
                }}
                {if let Some(on_refresh) = &props.on_refresh {
                    let on_refresh = on_refresh.clone();
                    html! {
                        <button
                            class="btn btn-sm btn-ghost"
                            disabled={props.refreshing}
                            onclick={Callback::from(move |_| {
                                log::debug!("User clicked refresh button");
                                on_refresh.emit(());
                            })}
                        >
                            <i class={classes!("fas", "fa-sync-alt", props.refreshing.then_some("fa-spin"))}></i>
                            {" Refresh data"}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
