//! Login view. Auto-login with a stored token happens at app start (see
//! `main.rs`); by the time this renders there is no valid session.

use leptos::*;

use crate::api::auth;
use crate::models::Route;
use crate::AppContext;

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_route = ctx.set_route;
    let set_token = ctx.set_token;
    let registered_banner = ctx.registered_banner;
    let set_registered_banner = ctx.set_registered_banner;

    let (worker_code, set_worker_code) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    // The registration banner clears itself after a few seconds.
    if registered_banner.get_untracked() {
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(5_000).await;
            set_registered_banner.set(false);
        });
    }

    let on_submit = move |_| {
        let code = worker_code.get();
        let pass = password.get();
        if code.is_empty() || pass.is_empty() {
            return;
        }
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match auth::login(&code, &pass).await {
                Ok(auth) => {
                    set_token.set(Some(auth.token));
                    set_route.set(Route::Inventory);
                }
                Err(_) => {
                    set_error.set(Some("קוד עובד או סיסמה לא תקינים".to_string()));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-view" dir="rtl">
            <div class="auth-box">
                <h2>"המחסן של נייקי פ\"ת"</h2>
                <p class="auth-subtitle">"אנא התחבר עם פרטי העובד שלך"</p>

                {move || registered_banner.get().then(|| view! {
                    <div class="status success">
                        "הרשמה בוצעה בהצלחה! אנא התחבר למערכת"
                    </div>
                })}

                {move || error.get().map(|msg| view! {
                    <div class="status error">{msg}</div>
                })}

                <div class="auth-fields">
                    <input type="text" placeholder="קוד עובד"
                        prop:value=move || worker_code.get()
                        on:input=move |ev| set_worker_code.set(event_target_value(&ev)) />
                    <input type="password" placeholder="מספר עובד של האחמש האהוב עליך"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev)) />
                </div>

                <button class="primary full-width" on:click=on_submit
                    disabled=move || loading.get()>
                    {move || if loading.get() { "מתחבר..." } else { "התחבר" }}
                </button>

                <button class="link" on:click=move |_| set_route.set(Route::Register)>
                    "במידה וזאת פעם ראשונה שאתם נכנסים לאתר - נא להירשם כאן"
                </button>
            </div>
        </div>
    }
}
