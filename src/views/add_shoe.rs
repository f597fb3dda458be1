//! New shoe form. The photo is read client-side with FileReader and shipped
//! to the server as base64.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FileReader, HtmlInputElement};

use crate::api::shoes as shoe_api;
use crate::components::loading::ErrorBanner;
use crate::models::{NewShoe, Route, ShoeType};
use crate::utils::{encode_image, image_data_url, trace};
use crate::AppContext;

#[component]
pub fn AddShoeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let set_route = ctx.set_route;

    let (code, set_code) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (loc, set_loc) = create_signal(String::new());
    let (shoe_type, set_shoe_type) = create_signal(ShoeType::Man);
    let (image, set_image) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let on_image_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                let reader = FileReader::new().unwrap();
                let reader_clone = reader.clone();

                let onload = Closure::wrap(Box::new(move |_: web_sys::Event| {
                    if let Ok(result) = reader_clone.result() {
                        let bytes = js_sys::Uint8Array::new(&result).to_vec();
                        set_image.set(Some(encode_image(&bytes)));
                        set_error.set(None);
                    }
                }) as Box<dyn FnMut(_)>);

                reader.set_onload(Some(onload.as_ref().unchecked_ref()));
                onload.forget();
                let _ = reader.read_as_array_buffer(&file);
            }
        }
    };

    let on_type_change = move |ev: web_sys::Event| {
        if let Some(t) = ShoeType::from_str(&event_target_value(&ev)) {
            set_shoe_type.set(t);
        }
    };

    let on_submit = move |_| {
        let image = match image.get() {
            Some(image) => image,
            None => {
                set_error.set(Some("יש לבחור תמונה".to_string()));
                return;
            }
        };
        if code.get().is_empty() || name.get().is_empty() {
            set_error.set(Some("יש למלא את כל השדות".to_string()));
            return;
        }
        let loc: i32 = match loc.get().trim().parse() {
            Ok(loc) => loc,
            Err(_) => {
                set_error.set(Some("מספר מיקום לא תקין".to_string()));
                return;
            }
        };

        let shoe = NewShoe {
            code: code.get(),
            name: name.get(),
            loc,
            shoe_type: shoe_type.get(),
            image,
        };

        spawn_local(async move {
            set_saving.set(true);
            set_error.set(None);
            match shoe_api::add(&shoe).await {
                Ok(()) => set_route.set(Route::Inventory),
                Err(e) => {
                    trace::error("api", &format!("add shoe failed: {}", e));
                    set_error.set(Some("נכשל בהוספת הנעל".to_string()));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="form-view" dir="rtl">
            <h2>"הוספת נעל חדשה"</h2>

            {move || error.get().map(|msg| view! { <ErrorBanner message=msg /> })}

            <div class="form-field">
                <label>"מקט"</label>
                <input type="text"
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.set(event_target_value(&ev)) />
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

            <div class="form-field">
                <label>"סוג"</label>
                <select on:change=on_type_change
                    prop:value=move || shoe_type.get().as_str().to_string()>
                    {ShoeType::ALL.into_iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-field">
                <label>"תמונה"</label>
                <input type="file" accept="image/*" capture="environment"
                    on:change=on_image_change />
                {move || image.get().map(|payload| view! {
                    <div class="image-preview">
                        <img src=image_data_url(&payload) alt="תצוגה מקדימה" />
                    </div>
                })}
            </div>

            <div class="form-actions">
                <button type="button" on:click=move |_| set_route.set(Route::Inventory)>
                    "ביטול"
                </button>
                <button class="primary" on:click=on_submit disabled=move || saving.get()>
                    {move || if saving.get() { "מוסיף..." } else { "הוסף נעל" }}
                </button>
            </div>
        </div>
    }
}
