//! Edit/delete view for a single shoe, fetched by merchant code.

use leptos::*;

use crate::api::shoes as shoe_api;
use crate::components::loading::ErrorBanner;
use crate::models::{Route, Shoe};
use crate::utils::{image_data_url, trace};
use crate::AppContext;

#[component]
pub fn EditShoeView(code: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_route = ctx.set_route;

    let (shoe, set_shoe) = create_signal(None::<Shoe>);
    let (name, set_name) = create_signal(String::new());
    let (loc, set_loc) = create_signal(String::new());
    let (loading, set_loading) = create_signal(true);
    let (saving, set_saving) = create_signal(false);
    let (deleting, set_deleting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);
    let (confirm_delete, set_confirm_delete) = create_signal(false);

    // Fetch once; the server answers with an array, first match wins.
    {
        let code = code.clone();
        spawn_local(async move {
            match shoe_api::get_by_code(&code).await {
                Ok(mut found) if !found.is_empty() => {
                    let first = found.remove(0);
                    set_name.set(first.name.clone().unwrap_or_default());
                    set_loc.set(first.loc.map(|l| l.to_string()).unwrap_or_default());
                    set_shoe.set(Some(first));
                }
                Ok(_) => set_error.set(Some("הנעל לא נמצאה".to_string())),
                Err(e) => {
                    trace::error("api", &format!("loading shoe failed: {}", e));
                    set_error.set(Some("נכשל בטעינת הנעל".to_string()));
                }
            }
            set_loading.set(false);
        });
    }

    let on_save = move |_| {
        let shoe = match shoe.get() {
            Some(shoe) => shoe,
            None => return,
        };
        let loc: i32 = match loc.get().trim().parse() {
            Ok(loc) => loc,
            Err(_) => {
                set_error.set(Some("מספר מיקום לא תקין".to_string()));
                return;
            }
        };
        let name = name.get();

        spawn_local(async move {
            set_saving.set(true);
            set_error.set(None);
            match shoe_api::update(&shoe.code, &name, loc).await {
                Ok(()) => set_route.set(Route::Inventory),
                Err(e) => {
                    trace::error("api", &format!("update shoe failed: {}", e));
                    set_error.set(Some("נכשל בעדכון הנעל".to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    let on_delete = move |_| {
        let shoe = match shoe.get() {
            Some(shoe) => shoe,
            None => return,
        };

        spawn_local(async move {
            set_deleting.set(true);
            set_error.set(None);
            match shoe_api::delete(&shoe.code).await {
                Ok(()) => set_route.set(Route::Inventory),
                Err(e) => {
                    trace::error("api", &format!("delete shoe failed: {}", e));
                    set_error.set(Some("נכשל במחיקת הנעל".to_string()));
                    set_deleting.set(false);
                    set_confirm_delete.set(false);
                }
            }
        });
    };

    view! {
        <div class="form-view" dir="rtl">
            {move || if loading.get() {
                view! {
                    <div class="form-loading">
                        <p>"טוען..."</p>
                    </div>
                }.into_view()
            } else if shoe.get().is_none() {
                view! {
                    <ErrorBanner message=error.get().unwrap_or_else(|| "הנעל לא נמצאה".to_string()) />
                }.into_view()
            } else {
                let current = shoe.get().unwrap();
                view! {
                    <h2>"עריכת נעל"</h2>

                    {current.image.as_ref().map(|payload| view! {
                        <div class="image-preview large">
                            <img src=image_data_url(payload) alt=current.display_name() />
                        </div>
                    })}

                    {move || error.get().map(|msg| view! { <ErrorBanner message=msg /> })}

                    <div class="form-field">
                        <label>"קוד"</label>
                        <input type="text" disabled=true prop:value=current.code.clone() />
                    </div>

                    <div class="form-field">
                        <label>"שם"</label>
                        <input type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev)) />
                    </div>

                    <div class="form-field">
                        <label>"מיקום"</label>
                        <input type="number" min="0"
                            prop:value=move || loc.get()
                            on:input=move |ev| set_loc.set(event_target_value(&ev)) />
                    </div>

                    <div class="form-actions">
                        <button class="primary" on:click=on_save
                            disabled=move || saving.get() || deleting.get()>
                            {move || if saving.get() { "מעדכן..." } else { "עדכן נעל" }}
                        </button>
                        <button class="danger" on:click=move |_| set_confirm_delete.set(true)
                            disabled=move || saving.get() || deleting.get() || confirm_delete.get()>
                            {move || if deleting.get() { "מוחק..." } else { "מחק" }}
                        </button>
                    </div>

                    {move || confirm_delete.get().then(|| view! {
                        <div class="modal-backdrop">
                            <div class="modal" dir="rtl">
                                <h3>"אישור מחיקה"</h3>
                                <p>"האם אתה בטוח שברצונך למחוק נעל זו? פעולה זו אינה ניתנת לביטול."</p>
                                <div class="form-actions">
                                    <button on:click=move |_| set_confirm_delete.set(false)>
                                        "ביטול"
                                    </button>
                                    <button class="danger" on:click=on_delete>
                                        {move || if deleting.get() { "מוחק..." } else { "מחק לצמיתות" }}
                                    </button>
                                </div>
                            </div>
                        </div>
                    })}

                    <button class="back-link" on:click=move |_| set_route.set(Route::Inventory)>
                        "חזרה לרשימת הנעליים"
                    </button>
                }.into_view()
            }}
        </div>
    }
}
