//! Stock-take ("closing") view: pick a category, walk every shoe of it,
//! mark each one present or missing, then review the missing list. All the
//! state transitions live in [`crate::closing`]; this file only renders them.

use leptos::*;

use crate::api::shoes as shoe_api;
use crate::closing::{ClosingPhase, ClosingSession};
use crate::components::loading::{ErrorBanner, Loading};
use crate::components::shoe_card::ShoeCard;
use crate::models::{Shoe, ShoeType};
use crate::utils::trace;

#[component]
pub fn CloseShoesView() -> impl IntoView {
    let (snapshot, set_snapshot) = create_signal(Vec::<Shoe>::new());
    let (session, set_session) = create_signal(ClosingSession::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    // One snapshot for the whole pass, fetched on entry. No retry.
    spawn_local(async move {
        match shoe_api::get_all().await {
            Ok(all) => set_snapshot.set(all),
            Err(e) => {
                trace::error("api", &format!("loading snapshot failed: {}", e));
                set_error.set(Some("נכשל בטעינת נעליים".to_string()));
            }
        }
        set_loading.set(false);
    });

    let select_type = move |shoe_type: ShoeType| {
        set_session.update(|s| s.start(shoe_type, &snapshot.get()));
        trace::info("closing", &format!("closing pass started: {}", shoe_type.as_str()));
    };

    let type_label = move || {
        session
            .get()
            .selected
            .map(|t| t.label())
            .unwrap_or_default()
    };

    view! {
        <div class="closing-view" dir="rtl">
            <h1>"סגירת מלאי"</h1>

            {move || error.get().map(|msg| view! { <ErrorBanner message=msg /> })}

            {move || if loading.get() {
                view! { <Loading /> }.into_view()
            } else {
                match session.get().phase {
                    ClosingPhase::SelectType => view! {
                        <div class="type-selection">
                            <h2>"בחר קטגוריה לסגירה"</h2>
                            <div class="type-grid">
                                {ShoeType::ALL.into_iter().map(|t| view! {
                                    <button class=format!("type-btn type-{}", t.as_str().to_lowercase())
                                        on:click=move |_| select_type(t)>
                                        <h3>{t.label()}</h3>
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                    }.into_view(),

                    ClosingPhase::Triage => {
                        let current = session.get();
                        view! {
                            <div class="triage">
                                <div class="triage-header">
                                    <div>
                                        <h2>"בדיקת נעלי " {type_label()}</h2>
                                        <p class="counters">
                                            "מספר נעליים לבדיקה: " {current.remaining.len()}
                                            " | נעליים חסרות: " {current.missing.len()}
                                        </p>
                                    </div>
                                    <div class="triage-actions">
                                        <button on:click=move |_| set_session.update(|s| s.reset())>
                                            "חזרה לבחירת קטגוריה"
                                        </button>
                                        <button class="warning"
                                            on:click=move |_| set_session.update(|s| s.view_missing())
                                            disabled=current.missing.is_empty()>
                                            "צפה בנעליים חסרות (" {current.missing.len()} ")"
                                        </button>
                                    </div>
                                </div>

                                {if current.is_complete() {
                                    view! {
                                        <div class="completion-banner">
                                            <h3>"הושלם!"</h3>
                                            <p>
                                                "כל הנעליים בקטגוריה זו נבדקו. נעליים חסרות: "
                                                {current.missing.len()}
                                            </p>
                                            {(!current.missing.is_empty()).then(|| view! {
                                                <button class="warning"
                                                    on:click=move |_| set_session.update(|s| s.view_missing())>
                                                    "צפה בנעליים חסרות"
                                                </button>
                                            })}
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {
                                        <div class="shoe-grid">
                                            {current.remaining.into_iter().map(|shoe| {
                                                let missing_code = shoe.code.clone();
                                                let present_code = shoe.code.clone();
                                                view! {
                                                    <ShoeCard shoe=shoe>
                                                        <button class="danger"
                                                            on:click=move |_| set_session.update(|s| {
                                                                s.mark_missing(&missing_code);
                                                            })>
                                                            "חסר"
                                                        </button>
                                                        <button class="success"
                                                            on:click=move |_| set_session.update(|s| {
                                                                s.mark_present(&present_code);
                                                            })>
                                                            "קיים"
                                                        </button>
                                                    </ShoeCard>
                                                }
                                            }).collect_view()}
                                        </div>
                                    }.into_view()
                                }}
                            </div>
                        }.into_view()
                    }

                    ClosingPhase::MissingReview => {
                        let current = session.get();
                        view! {
                            <div class="missing-review">
                                <div class="triage-header">
                                    <h2>"נעליים חסרות - " {type_label()}</h2>
                                    <button on:click=move |_| set_session.update(|s| s.back_to_triage())>
                                        "חזרה לרשימת הנעליים"
                                    </button>
                                </div>

                                {if current.missing.is_empty() {
                                    view! {
                                        <div class="completion-banner">
                                            <h3>"אין נעליים חסרות!"</h3>
                                            <p>"כל הנעליים נמצאות במלאי"</p>
                                            <button on:click=move |_| set_session.update(|s| s.reset())>
                                                "חזרה לבחירת קטגוריה"
                                            </button>
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {
                                        <p class="counters">
                                            "סך הכל נעליים חסרות: " {current.missing.len()}
                                        </p>
                                        <div class="shoe-grid">
                                            {current.missing.into_iter().map(|shoe| {
                                                let code = shoe.code.clone();
                                                view! {
                                                    <ShoeCard shoe=shoe>
                                                        <button
                                                            on:click=move |_| set_session.update(|s| {
                                                                s.remove_from_missing(&code);
                                                            })>
                                                            "הסר מהרשימה"
                                                        </button>
                                                    </ShoeCard>
                                                }
                                            }).collect_view()}
                                        </div>
                                    }.into_view()
                                }}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}
