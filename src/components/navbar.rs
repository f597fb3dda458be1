//! Top navigation bar, shown on every protected view.

use leptos::*;

use crate::api::auth;
use crate::models::Route;
use crate::AppContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_route = ctx.set_route;
    let set_token = ctx.set_token;

    let on_logout = move |_| {
        auth::logout();
        set_token.set(None);
        set_route.set(Route::Login);
    };

    view! {
        <nav class="navbar" dir="rtl">
            <div class="navbar-brand" on:click=move |_| set_route.set(Route::Inventory)>
                "המחסן של נייקי פ\"ת"
            </div>
            <div class="navbar-links">
                <button on:click=move |_| set_route.set(Route::Inventory)>"כל הנעליים"</button>
                <button on:click=move |_| set_route.set(Route::Add)>"הוספת נעל חדשה"</button>
                <button on:click=move |_| set_route.set(Route::Closing)>"התחל סגירת נעליים"</button>
                <button class="logout-button" on:click=on_logout>"התנתק"</button>
            </div>
        </nav>
    }
}
