//! App entry: auth context, signal-driven view switching, auto-login.

mod api;
mod closing;
mod components;
mod models;
mod utils;
mod views;

use leptos::*;

use components::navbar::Navbar;
use models::Route;
use utils::trace;
use views::add_shoe::AddShoeView;
use views::close_shoes::CloseShoesView;
use views::edit_shoe::EditShoeView;
use views::login::LoginView;
use views::register::RegisterView;
use views::shoe_list::ShoeListView;

/// Shared app state handed to every view through the Leptos context.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub route: ReadSignal<Route>,
    pub set_route: WriteSignal<Route>,
    pub token: ReadSignal<Option<String>>,
    pub set_token: WriteSignal<Option<String>>,
    /// One-shot flag: the login view shows a success banner right after registration.
    pub registered_banner: ReadSignal<bool>,
    pub set_registered_banner: WriteSignal<bool>,
}

/// Navbar plus content, wrapped around every protected view.
#[component]
fn Shell(children: Children) -> impl IntoView {
    view! {
        <Navbar />
        <main class="container">{children()}</main>
    }
}

#[component]
fn App() -> impl IntoView {
    let (route, set_route) = create_signal(Route::Login);
    let (token, set_token) = create_signal(None::<String>);
    let (registered_banner, set_registered_banner) = create_signal(false);
    let (booting, set_booting) = create_signal(true);

    provide_context(AppContext {
        route,
        set_route,
        token,
        set_token,
        registered_banner,
        set_registered_banner,
    });

    // Auto-login: a stored token is only trusted once a protected endpoint
    // has accepted it.
    spawn_local(async move {
        if let Some(stored) = api::auth::stored_token() {
            if api::auth::verify_token(&stored).await {
                trace::info("auth", "auto-login with stored token");
                set_token.set(Some(stored));
                set_route.set(Route::Inventory);
            } else {
                api::auth::logout();
            }
        }
        set_booting.set(false);
    });

    // Guard: protected views bounce back to login without a token.
    create_effect(move |_| {
        if !booting.get() && token.get().is_none() && route.get().is_protected() {
            set_route.set(Route::Login);
        }
    });

    view! {
        <div class="app">
            {move || if booting.get() {
                view! {
                    <div class="boot-screen">
                        <div class="spinner"></div>
                    </div>
                }.into_view()
            } else {
                match route.get() {
                    Route::Login => view! { <LoginView /> }.into_view(),
                    Route::Register => view! { <RegisterView /> }.into_view(),
                    Route::Inventory => view! {
                        <Shell><ShoeListView /></Shell>
                    }.into_view(),
                    Route::Add => view! {
                        <Shell><AddShoeView /></Shell>
                    }.into_view(),
                    Route::Edit { code } => view! {
                        <Shell><EditShoeView code=code /></Shell>
                    }.into_view(),
                    Route::Closing => view! {
                        <Shell><CloseShoesView /></Shell>
                    }.into_view(),
                }
            }}
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
