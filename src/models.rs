//! Data structures shared across the app.

use serde::{Deserialize, Serialize};

// ============================================
// Catalog records
// ============================================

/// Shoe category as the server spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShoeType {
    Man,
    Woman,
    Children,
}

impl ShoeType {
    pub const ALL: [ShoeType; 3] = [ShoeType::Man, ShoeType::Woman, ShoeType::Children];

    /// Wire string, also used in endpoint paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShoeType::Man => "Man",
            ShoeType::Woman => "Woman",
            ShoeType::Children => "Children",
        }
    }

    /// Hebrew display label.
    pub fn label(&self) -> &'static str {
        match self {
            ShoeType::Man => "גברים",
            ShoeType::Woman => "נשים",
            ShoeType::Children => "ילדים",
        }
    }

    pub fn from_str(s: &str) -> Option<ShoeType> {
        match s {
            "Man" => Some(ShoeType::Man),
            "Woman" => Some(ShoeType::Woman),
            "Children" => Some(ShoeType::Children),
            _ => None,
        }
    }
}

/// Catalog record as returned by the server. The merchant code is the key;
/// everything else is nullable server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub loc: Option<i32>,
    #[serde(rename = "type", default)]
    pub shoe_type: Option<ShoeType>,
    /// Base64 payload, no data-URL prefix.
    #[serde(default)]
    pub image: Option<String>,
}

impl Shoe {
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "נעל ללא שם".to_string())
    }

    pub fn loc_text(&self) -> String {
        self.loc
            .map(|l| l.to_string())
            .unwrap_or_else(|| "לא מוגדר".to_string())
    }
}

/// Payload for `updateShoe/addShoe`.
#[derive(Debug, Clone, Serialize)]
pub struct NewShoe {
    pub code: String,
    pub name: String,
    pub loc: i32,
    #[serde(rename = "type")]
    pub shoe_type: ShoeType,
    pub image: String,
}

// ============================================
// Auth payloads
// ============================================

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    /// Carried on the wire, unused client-side (validity is probed instead).
    #[allow(dead_code)]
    #[serde(rename = "expirationTime", default)]
    pub expiration_time: Option<i64>,
}

/// Server (or client-side validation) outcome for a registration attempt.
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    pub success: bool,
    pub message: String,
}

// ============================================
// View routing
// ============================================

/// Which view is on screen. Switched through a signal, no router.
#[derive(Clone, PartialEq)]
pub enum Route {
    Login,
    Register,
    Inventory,
    Add,
    Edit { code: String },
    Closing,
}

impl Route {
    /// Views that require a bearer token.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

// ============================================
// Pure helpers
// ============================================

/// Case-insensitive substring filter over the list currently on screen.
pub fn filter_by_name(shoes: &[Shoe], query: &str) -> Vec<Shoe> {
    let needle = query.to_lowercase();
    shoes
        .iter()
        .filter(|s| {
            s.name
                .as_ref()
                .map(|n| n.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Worker codes are issued with a fixed 52500 prefix plus a personal suffix.
pub fn is_valid_worker_code(code: &str) -> bool {
    code.starts_with("52500") && code.len() > 5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shoe(code: &str, name: Option<&str>) -> Shoe {
        Shoe {
            code: code.to_string(),
            name: name.map(|n| n.to_string()),
            loc: Some(1),
            shoe_type: Some(ShoeType::Man),
            image: None,
        }
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let shoes = vec![
            make_shoe("100", Some("Air Max 90")),
            make_shoe("101", Some("Pegasus")),
            make_shoe("102", Some("air force 1")),
            make_shoe("103", None),
        ];

        let hits = filter_by_name(&shoes, "AIR");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].code, "100");
        assert_eq!(hits[1].code, "102");

        // Unnamed shoes never match
        assert!(filter_by_name(&shoes, "").iter().all(|s| s.name.is_some()));
    }

    #[test]
    fn worker_code_needs_prefix_and_suffix() {
        assert!(is_valid_worker_code("52500219"));
        assert!(!is_valid_worker_code("52500")); // prefix alone
        assert!(!is_valid_worker_code("12345678"));
        assert!(!is_valid_worker_code(""));
    }

    #[test]
    fn shoe_deserializes_from_server_shape() {
        let json = r#"{"code":"4711","loc":12,"name":"Pegasus","type":"Woman","image":null}"#;
        let shoe: Shoe = serde_json::from_str(json).unwrap();
        assert_eq!(shoe.code, "4711");
        assert_eq!(shoe.shoe_type, Some(ShoeType::Woman));
        assert_eq!(shoe.loc_text(), "12");

        // Missing optional fields are tolerated
        let bare: Shoe = serde_json::from_str(r#"{"code":"1"}"#).unwrap();
        assert_eq!(bare.display_name(), "נעל ללא שם");
        assert_eq!(bare.loc_text(), "לא מוגדר");
    }

    #[test]
    fn shoe_type_round_trips_wire_strings() {
        for t in ShoeType::ALL {
            assert_eq!(ShoeType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(ShoeType::from_str("Unisex"), None);
    }
}
