use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::settings;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Success => "alert-success",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "fas fa-check-circle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

pub enum ToastAction {
    Add(Toast),
    Remove(usize),
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone)]
pub struct ToastContext {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<usize>>,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl ToastContext {
    fn show(&self, message: String, toast_type: ToastType) {
        log::debug!("Showing {:?} toast: {}", toast_type, message);
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.dispatcher.dispatch(ToastAction::Add(Toast {
            id,
            message,
            toast_type,
        }));

        // Auto-dismiss after the configured duration
        let dispatcher = self.dispatcher.clone();
        let duration = settings::get_settings().toast_duration_ms;
        gloo_timers::callback::Timeout::new(duration, move || {
            dispatcher.dispatch(ToastAction::Remove(id));
        })
        .forget();
    }

    pub fn show_success(&self, message: String) {
        self.show(message, ToastType::Success);
    }

    pub fn show_error(&self, message: String) {
        self.show(message, ToastType::Error);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0usize));

    let context = ToastContext {
        dispatcher: toasts.dispatcher(),
        next_id,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = toasts.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Remove(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: usize, message: &str) -> Toast {
        Toast {
            id,
            message: message.to_string(),
            toast_type: ToastType::Error,
        }
    }

    #[test]
    fn test_add_and_remove_toasts() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Add(toast(0, "Failed to load data")))
            .reduce(ToastAction::Add(toast(1, "HTTP error! status: 500")));
        assert_eq!(list.toasts.len(), 2);

        let list = list.reduce(ToastAction::Remove(0));
        assert_eq!(list.toasts, vec![toast(1, "HTTP error! status: 500")]);
    }

    #[test]
    fn test_remove_unknown_toast_is_noop() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Add(toast(3, "kept")))
            .reduce(ToastAction::Remove(42));
        assert_eq!(list.toasts.len(), 1);
    }
}
