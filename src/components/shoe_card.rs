//! Catalog card: photo, name, code, location, plus a caller-supplied action
//! row (edit link, triage verdicts, undo — depends on the view).

use leptos::*;

use crate::models::Shoe;
use crate::utils::image_data_url;

#[component]
pub fn ShoeCard(shoe: Shoe, children: Children) -> impl IntoView {
    let name = shoe.display_name();
    let alt = name.clone();

    view! {
        <div class="shoe-card">
            <div class="shoe-photo">
                {shoe.image.as_ref().map(|payload| view! {
                    <img src=image_data_url(payload) alt=alt.clone() />
                })}
            </div>
            <div class="shoe-info">
                <h3>{name}</h3>
                <p>
                    <span class="field-label">"מקט:"</span>
                    <span class="shoe-code">{shoe.code.clone()}</span>
                </p>
                <p>
                    <span class="field-label">"מיקום:"</span>
                    <span>{shoe.loc_text()}</span>
                </p>
                <div class="shoe-actions">{children()}</div>
            </div>
        </div>
    }
}
