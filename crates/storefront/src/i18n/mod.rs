//! Static translation tables.
//!
//! Keys are the camelCase identifiers used throughout the UI (`"addToCart"`,
//! `"invalidCredentials"`). A key missing from a table falls back to the key
//! itself in [`translate_or_key`].

mod en;
mod ru;

use std::collections::HashMap;
use std::sync::LazyLock;

use hearthwood_core::Locale;

/// Translation keys referenced from code.
pub mod keys {
    pub const INVALID_CREDENTIALS: &str = "invalidCredentials";
    pub const EMAIL_IN_USE: &str = "emailInUse";
    pub const PASSWORDS_NOT_MATCH: &str = "passwordsNotMatch";
    pub const PLEASE_ENTER_EMAIL: &str = "pleaseEnterEmail";
    pub const PLEASE_ENTER_PASSWORD: &str = "pleaseEnterPassword";
    pub const PLEASE_ENTER_NAME: &str = "pleaseEnterName";
    pub const LOGGED_OUT: &str = "loggedOut";
    pub const PLEASE_LOGIN: &str = "pleaseLogin";
    pub const ORDER_PLACED_SUCCESS: &str = "orderPlacedSuccess";
    pub const YOUR_CART_IS_EMPTY: &str = "yourCartIsEmpty";
    pub const ADDED_TO_CART: &str = "addedToCart";
    pub const SOMETHING_WENT_WRONG: &str = "somethingWentWrong";
}

static TABLES: LazyLock<HashMap<Locale, HashMap<&'static str, &'static str>>> =
    LazyLock::new(|| {
        Locale::ALL
            .into_iter()
            .map(|locale| (locale, strings(locale).iter().copied().collect()))
            .collect()
    });

const fn strings(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => en::STRINGS,
        Locale::Ru => ru::STRINGS,
    }
}

/// Look up `key` in the `locale` table.
#[must_use]
pub fn translate(locale: Locale, key: &str) -> Option<&'static str> {
    TABLES.get(&locale)?.get(key).copied()
}

/// Look up `key`, falling back to the key itself.
#[must_use]
pub fn translate_or_key(locale: Locale, key: &str) -> &str {
    translate(locale, key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_share_the_same_keys() {
        let en: Vec<_> = en::STRINGS.iter().map(|(key, _)| *key).collect();
        let ru: Vec<_> = ru::STRINGS.iter().map(|(key, _)| *key).collect();
        assert_eq!(en, ru);
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate(Locale::En, "cart"), Some("Cart"));
        assert_eq!(translate(Locale::Ru, "cart"), Some("Корзина"));
        assert_eq!(translate(Locale::En, "noSuchKey"), None);
    }

    #[test]
    fn test_fallback_to_key() {
        assert_eq!(translate_or_key(Locale::Ru, "noSuchKey"), "noSuchKey");
    }

    #[test]
    fn test_keys_used_in_code_exist() {
        for key in [
            keys::INVALID_CREDENTIALS,
            keys::EMAIL_IN_USE,
            keys::PASSWORDS_NOT_MATCH,
            keys::PLEASE_ENTER_EMAIL,
            keys::PLEASE_ENTER_PASSWORD,
            keys::PLEASE_ENTER_NAME,
            keys::LOGGED_OUT,
            keys::PLEASE_LOGIN,
            keys::ORDER_PLACED_SUCCESS,
            keys::YOUR_CART_IS_EMPTY,
            keys::ADDED_TO_CART,
            keys::SOMETHING_WENT_WRONG,
        ] {
            for locale in Locale::ALL {
                assert!(translate(locale, key).is_some(), "{locale}: {key}");
            }
        }
    }
}
