//! Inventory browse/search view.
//!
//! Code, location and category searches go to the server; name search is a
//! local filter over whatever is currently on screen. Search state lives in
//! signals only and is gone after navigating away.

use leptos::*;

use crate::api::shoes as shoe_api;
use crate::components::loading::{ErrorBanner, Loading};
use crate::components::shoe_card::ShoeCard;
use crate::models::{filter_by_name, Route, Shoe, ShoeType};
use crate::utils::trace;
use crate::AppContext;

#[component]
pub fn ShoeListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_route = ctx.set_route;

    let (shoes, set_shoes) = create_signal(Vec::<Shoe>::new());
    let (search_code, set_search_code) = create_signal(String::new());
    let (search_name, set_search_name) = create_signal(String::new());
    let (search_location, set_search_location) = create_signal(String::new());
    let (selected_type, set_selected_type) = create_signal(None::<ShoeType>);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    let load_all = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match shoe_api::get_all().await {
                Ok(all) => set_shoes.set(all),
                Err(e) => {
                    trace::error("api", &format!("loading shoes failed: {}", e));
                    set_error.set(Some("נכשל בטעינת נעליים".to_string()));
                    set_shoes.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };

    // Initial snapshot
    load_all();

    let search_by_code = move |_| {
        let code = search_code.get();
        if code.is_empty() {
            return;
        }
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match shoe_api::get_by_code(&code).await {
                Ok(found) if !found.is_empty() => set_shoes.set(found),
                Ok(_) => {
                    set_shoes.set(Vec::new());
                    set_error.set(Some("לא נמצאו נעליים עם המקט המבוקש".to_string()));
                }
                Err(e) => {
                    trace::error("api", &format!("code search failed: {}", e));
                    set_shoes.set(Vec::new());
                    set_error.set(Some(
                        "הנעל לא נמצאה - נא לפנות למיקי עם דמעות בעיניים".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    // Local filter, no server round trip
    let search_by_name = move |_| {
        let query = search_name.get();
        if query.is_empty() {
            return;
        }
        set_error.set(None);
        let filtered = filter_by_name(&shoes.get(), &query);
        if filtered.is_empty() {
            set_error.set(Some("לא נמצאו נעליים עם השם המבוקש".to_string()));
        }
        set_shoes.set(filtered);
    };

    let search_by_location = move |_| {
        let raw = search_location.get();
        if raw.is_empty() {
            return;
        }
        let loc: i32 = match raw.trim().parse() {
            Ok(loc) => loc,
            Err(_) => {
                set_error.set(Some("מספר מיקום לא תקין".to_string()));
                return;
            }
        };
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match shoe_api::get_by_location(loc).await {
                Ok(found) if !found.is_empty() => set_shoes.set(found),
                Ok(_) => {
                    set_shoes.set(Vec::new());
                    set_error.set(Some("לא נמצאו נעליים במיקום המבוקש".to_string()));
                }
                Err(e) => {
                    trace::error("api", &format!("location search failed: {}", e));
                    set_shoes.set(Vec::new());
                    set_error.set(Some("שגיאה בחיפוש לפי מיקום".to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let reset_all = move || {
        set_search_code.set(String::new());
        set_search_name.set(String::new());
        set_search_location.set(String::new());
        set_selected_type.set(None);
        load_all();
    };

    let on_type_change = move |ev: web_sys::Event| {
        match ShoeType::from_str(&event_target_value(&ev)) {
            Some(shoe_type) => {
                set_selected_type.set(Some(shoe_type));
                spawn_local(async move {
                    set_loading.set(true);
                    set_error.set(None);
                    match shoe_api::get_by_type(shoe_type).await {
                        Ok(found) => set_shoes.set(found),
                        Err(e) => {
                            trace::error("api", &format!("type filter failed: {}", e));
                            set_shoes.set(Vec::new());
                            set_error.set(Some(format!(
                                "נכשל בטעינת נעלי {}",
                                shoe_type.label()
                            )));
                        }
                    }
                    set_loading.set(false);
                });
            }
            // "All types" selected
            None => reset_all(),
        }
    };

    view! {
        <div class="shoe-list-view" dir="rtl">
            <h1>"מלאי נעליים"</h1>

            <div class="search-panel">
                <h2>"חיפוש וסינון"</h2>

                <div class="search-grid">
                    <div class="search-field">
                        <label>"סינון לפי סוג"</label>
                        <select
                            on:change=on_type_change
                            prop:value=move || selected_type.get()
                                .map(|t| t.as_str().to_string())
                                .unwrap_or_default()
                            disabled=move || loading.get()
                        >
                            <option value="">"כל הסוגים"</option>
                            {ShoeType::ALL.into_iter().map(|t| view! {
                                <option value=t.as_str()>{t.label()}</option>
                            }).collect_view()}
                        </select>
                    </div>

                    <div class="search-field">
                        <label>"חיפוש לפי מקט"</label>
                        <div class="input-group">
                            <input type="text" placeholder="הכנס מקט נעל..."
                                prop:value=move || search_code.get()
                                on:input=move |ev| set_search_code.set(event_target_value(&ev))
                                disabled=move || loading.get() />
                            <button on:click=search_by_code
                                disabled=move || loading.get() || search_code.get().is_empty()>
                                "חיפוש"
                            </button>
                        </div>
                    </div>

                    <div class="search-field">
                        <label>"חיפוש לפי שם"</label>
                        <div class="input-group">
                            <input type="text" placeholder="הכנס שם נעל..."
                                prop:value=move || search_name.get()
                                on:input=move |ev| set_search_name.set(event_target_value(&ev))
                                disabled=move || loading.get() />
                            <button on:click=search_by_name
                                disabled=move || loading.get() || search_name.get().is_empty()>
                                "חיפוש"
                            </button>
                        </div>
                    </div>

                    <div class="search-field">
                        <label>"חיפוש לפי מיקום"</label>
                        <div class="input-group">
                            <input type="number" min="0" placeholder="הכנס מספר מיקום..."
                                prop:value=move || search_location.get()
                                on:input=move |ev| set_search_location.set(event_target_value(&ev))
                                disabled=move || loading.get() />
                            <button on:click=search_by_location
                                disabled=move || loading.get() || search_location.get().is_empty()>
                                "חיפוש"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="filter-row">
                    <div class="active-filters">
                        {move || selected_type.get().map(|t| view! {
                            <span class="filter-chip">
                                "סוג: " {t.label()}
                                <button on:click=move |_| set_selected_type.set(None)>"×"</button>
                            </span>
                        })}
                        {move || {
                            let code = search_code.get();
                            (!code.is_empty()).then(|| view! {
                                <span class="filter-chip">
                                    "מקט: " {code.clone()}
                                    <button on:click=move |_| set_search_code.set(String::new())>"×"</button>
                                </span>
                            })
                        }}
                        {move || {
                            let name = search_name.get();
                            (!name.is_empty()).then(|| view! {
                                <span class="filter-chip">
                                    "שם: " {name.clone()}
                                    <button on:click=move |_| set_search_name.set(String::new())>"×"</button>
                                </span>
                            })
                        }}
                        {move || {
                            let loc = search_location.get();
                            (!loc.is_empty()).then(|| view! {
                                <span class="filter-chip">
                                    "מיקום: " {loc.clone()}
                                    <button on:click=move |_| set_search_location.set(String::new())>"×"</button>
                                </span>
                            })
                        }}
                    </div>
                    <button class="reset-btn" on:click=move |_| reset_all()
                        disabled=move || loading.get()>
                        "איפוס הכל"
                    </button>
                </div>
            </div>

            <div class="results-header">
                <h2>
                    "תוצאות"
                    {move || {
                        let count = shoes.get().len();
                        (count > 0).then(|| format!(" ({})", count))
                    }}
                </h2>
            </div>

            {move || if loading.get() {
                view! { <Loading /> }.into_view()
            } else if let Some(msg) = error.get() {
                view! { <ErrorBanner message=msg /> }.into_view()
            } else if shoes.get().is_empty() {
                view! {
                    <p class="status empty">"לא נמצאו נעליים התואמות את החיפוש"</p>
                }.into_view()
            } else {
                view! {
                    <div class="shoe-grid">
                        {shoes.get().into_iter().map(|shoe| {
                            let code = shoe.code.clone();
                            view! {
                                <ShoeCard shoe=shoe>
                                    <button class="edit-btn"
                                        on:click=move |_| set_route.set(Route::Edit { code: code.clone() })>
                                        "עריכה"
                                    </button>
                                </ShoeCard>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
