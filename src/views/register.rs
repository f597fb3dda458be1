//! Registration view. Only the worker code is collected; the secondary
//! password the server expects is fixed (inherited server contract).

use leptos::*;

use crate::api::auth;
use crate::models::{is_valid_worker_code, Route};
use crate::AppContext;

const REGISTER_PASSWORD: &str = "52500219";

#[component]
pub fn RegisterView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_route = ctx.set_route;
    let set_registered_banner = ctx.set_registered_banner;

    let (worker_code, set_worker_code) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |_| {
        let code = worker_code.get();
        if !is_valid_worker_code(&code) {
            set_error.set(Some("קוד עובד חייב להתחיל ב-52500".to_string()));
            return;
        }
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            let outcome = auth::register(&code, REGISTER_PASSWORD).await;
            if outcome.success {
                set_registered_banner.set(true);
                set_route.set(Route::Login);
            } else {
                set_error.set(Some(outcome.message));
                set_loading.set(false);
            }
        });
    };

    view! {
        <div class="auth-view" dir="rtl">
            <div class="auth-box">
                <h2>"הרשמה למערכת המחסן של נייקי פ\"ת"</h2>
                <p class="auth-subtitle">"צור חשבון חדש עם פרטי העובד שלך"</p>

                {move || error.get().map(|msg| view! {
                    <div class="status error">{msg}</div>
                })}

                <div class="auth-fields">
                    <input type="tel" inputmode="numeric" pattern="[0-9]*"
                        placeholder="קוד עובד (חייב להתחיל ב-52500)"
                        prop:value=move || worker_code.get()
                        on:input=move |ev| set_worker_code.set(event_target_value(&ev)) />
                </div>

                <button class="primary full-width" on:click=on_submit
                    disabled=move || loading.get()>
                    {move || if loading.get() { "מבצע רישום..." } else { "הירשם" }}
                </button>

                <button class="link" on:click=move |_| set_route.set(Route::Login)>
                    "אם זו לא הפעם הראשונה שאתה מבקר באתר - לחץ כאן"
                </button>
            </div>
        </div>
    }
}
