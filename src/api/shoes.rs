//! Shoe catalog endpoints. Bearer token required on all of them.

use serde_json::json;

use super::{auth, decode_json, expect_ok, main_url, send};
use crate::models::{NewShoe, Shoe, ShoeType};
use crate::utils::trace;

fn bearer() -> Result<String, String> {
    auth::token().ok_or_else(|| "no authentication token available".to_string())
}

async fn get_shoes(path: &str) -> Result<Vec<Shoe>, String> {
    let token = bearer()?;
    let resp = send("GET", &main_url(path), None, Some(&token)).await?;
    let resp = expect_ok(resp).await?;
    decode_json(resp).await
}

pub async fn get_all() -> Result<Vec<Shoe>, String> {
    get_shoes("getAllShoes").await
}

/// The server answers with an array even for a single-code lookup.
pub async fn get_by_code(code: &str) -> Result<Vec<Shoe>, String> {
    let encoded = String::from(js_sys::encode_uri_component(code));
    get_shoes(&format!("getShoe/code/{}", encoded)).await
}

pub async fn get_by_type(shoe_type: ShoeType) -> Result<Vec<Shoe>, String> {
    get_shoes(&format!("getShoe/type/{}", shoe_type.as_str())).await
}

pub async fn get_by_location(loc: i32) -> Result<Vec<Shoe>, String> {
    get_shoes(&format!("getShoe/location/{}", loc)).await
}

pub async fn add(shoe: &NewShoe) -> Result<(), String> {
    let token = bearer()?;
    let body = serde_json::to_string(shoe).map_err(|e| format!("encoding shoe failed: {}", e))?;
    let resp = send("POST", &main_url("updateShoe/addShoe"), Some(body), Some(&token)).await?;
    expect_ok(resp).await?;
    trace::info("api", &format!("added shoe {}", shoe.code));
    Ok(())
}

pub async fn delete(code: &str) -> Result<(), String> {
    let token = bearer()?;
    let encoded = String::from(js_sys::encode_uri_component(code));
    let url = main_url(&format!("deleteShoe/{}", encoded));
    let resp = send("DELETE", &url, None, Some(&token)).await?;
    expect_ok(resp).await?;
    trace::info("api", &format!("deleted shoe {}", code));
    Ok(())
}

pub async fn update_name(code: &str, name: &str) -> Result<(), String> {
    let token = bearer()?;
    let body = json!({ "code": code, "name": name });
    let url = main_url("updateShoe/updateName");
    let resp = send("POST", &url, Some(body.to_string()), Some(&token)).await?;
    expect_ok(resp).await?;
    Ok(())
}

pub async fn update_location(code: &str, loc: i32) -> Result<(), String> {
    let token = bearer()?;
    let body = json!({ "code": code, "loc": loc });
    let url = main_url("updateShoe/updateLoc");
    let resp = send("POST", &url, Some(body.to_string()), Some(&token)).await?;
    expect_ok(resp).await?;
    Ok(())
}

/// Name and location are separate endpoints server-side; the edit form sends
/// both, sequentially. No rollback on a partial failure (last write wins).
pub async fn update(code: &str, name: &str, loc: i32) -> Result<(), String> {
    update_name(code, name).await?;
    update_location(code, loc).await?;
    trace::info("api", &format!("updated shoe {}", code));
    Ok(())
}
