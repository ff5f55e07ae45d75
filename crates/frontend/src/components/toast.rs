//! Toast notifications
//!
//! Session notifications are queued in a reducer and rendered in the top
//! right corner. Each toast removes itself after
//! [`AuthConfig::NOTIFICATION_TIMEOUT_MS`].

use gloo::timers::callback::Timeout;
use linkup_session::{AuthConfig, Notification, NotificationKind, Notifier};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notification: Notification,
}

/// Visible toasts, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Notification),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Push(notification) => {
                let mut toasts = self.toasts.clone();
                toasts.push(Toast {
                    id: self.next_id,
                    notification,
                });
                Rc::new(Self {
                    next_id: self.next_id.wrapping_add(1),
                    toasts,
                })
            }
            ToastAction::Dismiss(id) => {
                if !self.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(Self {
                    next_id: self.next_id,
                    toasts: self.toasts.iter().filter(|t| t.id != id).cloned().collect(),
                })
            }
        }
    }
}

/// Dispatcher handed to components that raise toasts
pub type ToastDispatcher = UseReducerDispatcher<ToastQueue>;

/// [`Notifier`] that shows session notifications as toasts
pub struct ToastNotifier {
    dispatcher: ToastDispatcher,
}

impl ToastNotifier {
    pub fn new(dispatcher: ToastDispatcher) -> Self {
        Self { dispatcher }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(kind = %notification.kind, title = %notification.title, "Notification");
        self.dispatcher.dispatch(ToastAction::Push(notification));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let dispatcher = queue.dispatcher();

    html! {
        <ContextProvider<ToastDispatcher> context={dispatcher.clone()}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 flex flex-col gap-2">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} dispatcher={dispatcher.clone()} />
                }) }
            </div>
        </ContextProvider<ToastDispatcher>>
    }
}

/// Hook to get the toast dispatcher
#[hook]
pub fn use_toasts() -> ToastDispatcher {
    use_context::<ToastDispatcher>()
        .expect("ToastDispatcher not found. Make sure to wrap your component with ToastProvider")
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    dispatcher: ToastDispatcher,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with(props.toast.id, move |id| {
            let id = *id;
            let timeout = Timeout::new(AuthConfig::NOTIFICATION_TIMEOUT_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
            move || drop(timeout)
        });
    }

    let colors = match props.toast.notification.kind {
        NotificationKind::Success => "bg-green-600",
        NotificationKind::Error => "bg-red-600",
        NotificationKind::Info => "bg-blue-600",
    };

    html! {
        <div class={classes!("px-4", "py-3", "rounded-lg", "shadow-lg", "text-white", "text-sm", colors)}>
            {props.toast.notification.title.clone()}
        </div>
    }
}
